//! Tags resource client

use async_trait::async_trait;

use shared::models::{Tag, TagCreate, TagFilter, TagUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/tags";
const KEYS: EntityKeys = EntityKeys::new("tags");

/// Tags resource client
#[derive(Debug, Clone)]
pub struct TagsClient {
    http: HttpClient,
}

impl TagsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for TagsClient {
    type Entity = Tag;
    type Filter = TagFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Tag>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &TagFilter) -> ClientResult<Page<Tag>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Tag> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for TagsClient {
    type Create = TagCreate;
    type Update = TagUpdate;

    async fn create(&self, dto: &TagCreate) -> ClientResult<Tag> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &TagUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
