//! Per-entity resource clients
//!
//! Each client translates one typed method call into exactly one REST
//! request against the shared [`HttpClient`](crate::http::HttpClient)
//! and returns the deserialized response. Clients perform no caching
//! and no retries; errors propagate unchanged.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::response::Page;

use crate::error::ClientResult;
use crate::query::key::EntityKeys;

mod audit;
mod companies;
mod credit_notes;
mod documents;
mod employees;
mod loans;
mod products;
mod subscriptions;
mod tags;
mod tax_declarations;

pub use audit::AuditClient;
pub use companies::CompaniesClient;
pub use credit_notes::CreditNotesClient;
pub use documents::DocumentsClient;
pub use employees::EmployeesClient;
pub use loans::LoansClient;
pub use products::ProductsClient;
pub use subscriptions::SubscriptionsClient;
pub use tags::TagsClient;
pub use tax_declarations::TaxDeclarationsClient;

/// Uniform read surface every resource client exposes
#[async_trait]
pub trait ReadResource: Send + Sync {
    type Entity: DeserializeOwned + Send + Sync + 'static;
    type Filter: Serialize + Default + Send + Sync;

    /// Query-key factory for this resource
    fn keys(&self) -> EntityKeys;

    /// GET the full, optionally company-scoped list
    async fn get_all(&self, company_id: Option<&str>) -> ClientResult<Vec<Self::Entity>>;

    /// GET one page matching the filter
    async fn get_paged(&self, filter: &Self::Filter) -> ClientResult<Page<Self::Entity>>;

    /// GET a single entity by id
    async fn get_by_id(&self, id: &str) -> ClientResult<Self::Entity>;
}

/// Write surface for resources supporting create/update/delete
#[async_trait]
pub trait WriteResource: ReadResource {
    type Create: Serialize + Sync;
    type Update: Serialize + Sync;

    /// POST a new entity; returns it with server-assigned fields set
    async fn create(&self, dto: &Self::Create) -> ClientResult<Self::Entity>;

    /// PUT a partial update; returns nothing on success
    async fn update(&self, id: &str, dto: &Self::Update) -> ClientResult<()>;

    /// DELETE an entity; returns nothing on success
    async fn delete(&self, id: &str) -> ClientResult<()>;
}
