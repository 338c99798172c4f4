//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::AppError;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the Atrium backend
///
/// Attaches the bearer token, joins paths onto the base URL, encodes
/// query strings and maps non-success statuses to [`ClientError`].
/// Performs no caching and no retries.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn apply_auth(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query-string-encoded parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_auth(self.client.post(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body; no response body is expected
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.apply_auth(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::expect_success(response).await
    }

    /// Make a DELETE request; no response body is expected
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.apply_auth(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::expect_success(response).await
    }

    /// Download a binary response body (CSV exports, document contents)
    pub async fn download(&self, path: &str) -> ClientResult<Vec<u8>> {
        let request = self.apply_auth(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::collect_bytes(response).await
    }

    /// Download a binary response body with query parameters
    pub async fn download_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<Vec<u8>> {
        let request = self.apply_auth(self.client.get(self.url(path)).query(query));
        let response = request.send().await?;
        Self::collect_bytes(response).await
    }

    /// Handle a JSON response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a bodyless response
    async fn expect_success(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }

        Ok(())
    }

    /// Handle a binary response
    async fn collect_bytes(response: reqwest::Response) -> ClientResult<Vec<u8>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Map a non-success status to a client error, preferring the
    /// structured error body's message when one parses
    fn error_for(status: StatusCode, body: String) -> ClientError {
        let message = serde_json::from_str::<AppError>(&body)
            .map(|e| e.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            _ => ClientError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn error_for_prefers_structured_message() {
        let body = serde_json::to_string(&AppError::new(ErrorCode::EmployeeNotFound)).unwrap();
        let err = HttpClient::error_for(StatusCode::NOT_FOUND, body);
        assert!(matches!(err, ClientError::NotFound(m) if m == "Employee not found"));
    }

    #[test]
    fn error_for_falls_back_to_raw_body() {
        let err = HttpClient::error_for(StatusCode::BAD_GATEWAY, "upstream died".to_string());
        assert!(matches!(err, ClientError::Internal(m) if m == "upstream died"));
    }

    #[test]
    fn url_joining_handles_slashes() {
        let http = HttpClient::new(&ClientConfig::new("http://localhost:8080/"));
        assert_eq!(http.url("/api/tags"), "http://localhost:8080/api/tags");
        assert_eq!(http.url("api/tags"), "http://localhost:8080/api/tags");
    }
}
