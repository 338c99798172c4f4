//! Client configuration

/// Client configuration for connecting to the Atrium backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "https://api.atrium.example")
    pub base_url: String,

    /// Bearer token, read from persisted credentials
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create the aggregate suite client from this configuration
    pub fn build_client(&self) -> crate::AtriumClient {
        crate::AtriumClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
