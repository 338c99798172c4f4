//! Employees resource client

use async_trait::async_trait;

use shared::models::{Employee, EmployeeCreate, EmployeeFilter, EmployeeUpdate};
use shared::response::Page;

use super::{ReadResource, WriteResource};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::key::EntityKeys;

const PATH: &str = "api/employees";
const KEYS: EntityKeys = EntityKeys::new("employees");

/// Employees resource client
#[derive(Debug, Clone)]
pub struct EmployeesClient {
    http: HttpClient,
}

impl EmployeesClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReadResource for EmployeesClient {
    type Entity = Employee;
    type Filter = EmployeeFilter;

    fn keys(&self) -> EntityKeys {
        KEYS
    }

    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Employee>> {
        match company_id {
            Some(id) => self.http.get_with_query(PATH, &[("company_id", id)]).await,
            None => self.http.get(PATH).await,
        }
    }

    async fn get_paged(&self, filter: &EmployeeFilter) -> ClientResult<Page<Employee>> {
        self.http
            .get_with_query(&format!("{PATH}/paged"), filter)
            .await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Employee> {
        self.http.get(&format!("{PATH}/{id}")).await
    }
}

#[async_trait]
impl WriteResource for EmployeesClient {
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;

    async fn create(&self, dto: &EmployeeCreate) -> ClientResult<Employee> {
        self.http.post(PATH, dto).await
    }

    async fn update(&self, id: &str, dto: &EmployeeUpdate) -> ClientResult<()> {
        self.http.put(&format!("{PATH}/{id}"), dto).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{PATH}/{id}")).await
    }
}
