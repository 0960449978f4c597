//! Client configuration.

/// Where the form sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Data Processor service.
    pub api_url: String,
}

impl ClientConfig {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8080";

    /// Build the configuration from environment variables.
    ///
    /// | Variable           | Default                 |
    /// |--------------------|-------------------------|
    /// | `DATAPROC_API_URL` | `http://localhost:8080` |
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("DATAPROC_API_URL").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let api_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}
