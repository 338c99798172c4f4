//! Aggregate suite client
//!
//! One [`AtriumClient`] per process: a shared HTTP transport, a shared
//! query cache, the session scope and one cached binding per resource.
//! The client holds no mutable state beyond the cache and the session
//! scope, so it is constructed once and shared by reference.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::context::SessionContext;
use crate::http::HttpClient;
use crate::query::cache::{Freshness, QueryCache};
use crate::query::cached::Cached;
use crate::resources::{
    AuditClient, CompaniesClient, CreditNotesClient, DocumentsClient, EmployeesClient, LoansClient,
    ProductsClient, SubscriptionsClient, TagsClient, TaxDeclarationsClient,
};

/// Typed client for the whole Atrium API surface
pub struct AtriumClient {
    http: HttpClient,
    cache: Arc<QueryCache>,
    pub session: SessionContext,
    pub companies: Cached<CompaniesClient>,
    pub employees: Cached<EmployeesClient>,
    pub tags: Cached<TagsClient>,
    pub products: Cached<ProductsClient>,
    pub credit_notes: Cached<CreditNotesClient>,
    pub audit: Cached<AuditClient>,
    pub loans: Cached<LoansClient>,
    pub subscriptions: Cached<SubscriptionsClient>,
    pub tax_declarations: Cached<TaxDeclarationsClient>,
    pub documents: Cached<DocumentsClient>,
}

impl AtriumClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let http = HttpClient::new(config);
        let cache = Arc::new(QueryCache::new());

        Self {
            companies: Cached::new(
                CompaniesClient::new(http.clone()),
                cache.clone(),
                Freshness::MASTER,
            ),
            employees: Cached::new(
                EmployeesClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            tags: Cached::new(
                TagsClient::new(http.clone()),
                cache.clone(),
                Freshness::MASTER,
            ),
            products: Cached::new(
                ProductsClient::new(http.clone()),
                cache.clone(),
                Freshness::MASTER,
            ),
            credit_notes: Cached::new(
                CreditNotesClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            audit: Cached::new(
                AuditClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            loans: Cached::new(
                LoansClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            subscriptions: Cached::new(
                SubscriptionsClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            tax_declarations: Cached::new(
                TaxDeclarationsClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            documents: Cached::new(
                DocumentsClient::new(http.clone()),
                cache.clone(),
                Freshness::VOLATILE,
            ),
            session: SessionContext::new(),
            http,
            cache,
        }
    }

    /// Shared HTTP transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Shared query cache
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }
}
