//! Subscriptions resource client

use async_trait::async_trait;

use shared::models::{Subscription, SubscriptionCreate, SubscriptionFilter, SubscriptionUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/subscriptions";
const KEYS: EntityKeys = EntityKeys::new("subscriptions");

/// Subscriptions resource client
#[derive(Debug, Clone)]
pub struct SubscriptionsClient {
    http: HttpClient,
}

impl SubscriptionsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for SubscriptionsClient {
    type Entity = Subscription;
    type Filter = SubscriptionFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Subscription>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &SubscriptionFilter) -> ClientResult<Page<Subscription>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Subscription> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for SubscriptionsClient {
    type Create = SubscriptionCreate;
    type Update = SubscriptionUpdate;

    async fn create(&self, dto: &SubscriptionCreate) -> ClientResult<Subscription> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &SubscriptionUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
