use crate::statement::Statement;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

const XAPI_VERSION: &str = "1.0.3";

/// Static connection parameters for the learning record store.
#[derive(Debug, Clone)]
pub struct LrsConfig {
    /// Base URL of the xAPI endpoint, trailing slash included
    /// (e.g., `https://lrs.adlnet.gov/xapi/`).
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

impl Default for LrsConfig {
    /// The public ADL demo LRS with its well-known demo credentials.
    fn default() -> Self {
        Self {
            endpoint: "https://lrs.adlnet.gov/xapi/".to_string(),
            username: "xapi-tools".to_string(),
            password: "xapi-tools".to_string(),
        }
    }
}

/// What the record store said about a submission.
#[derive(Debug, Clone)]
pub struct LrsResponse {
    pub status: u16,
    pub body: String,
}

/// A client capable of delivering xAPI statements to a record store.
///
/// This abstraction keeps transport concerns out of the dialogue logic and
/// lets tests substitute a mock for the remote store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LrsClient: Send + Sync {
    /// Sends a single statement, resolving once the store has responded.
    ///
    /// A non-success status code is not an error at this level; it is
    /// reported through `LrsResponse` for the caller to log.
    async fn send_statement(&self, statement: &Statement) -> Result<LrsResponse>;
}

/// An implementation of `LrsClient` that posts to an xAPI endpoint over HTTP.
pub struct HttpLrsClient {
    client: reqwest::Client,
    config: LrsConfig,
}

impl HttpLrsClient {
    /// Creates a new client for the configured record store.
    pub fn new(config: LrsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl LrsClient for HttpLrsClient {
    async fn send_statement(&self, statement: &Statement) -> Result<LrsResponse> {
        let url = format!("{}statements", self.config.endpoint);
        debug!(%url, "Posting statement to LRS");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("X-Experience-API-Version", XAPI_VERSION)
            .json(statement)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(LrsResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_adl_demo_lrs() {
        let config = LrsConfig::default();
        assert_eq!(config.endpoint, "https://lrs.adlnet.gov/xapi/");
        assert_eq!(config.username, "xapi-tools");
        assert_eq!(config.password, "xapi-tools");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error_not_a_panic() {
        // Port 1 on loopback refuses connections immediately.
        let client = HttpLrsClient::new(LrsConfig {
            endpoint: "http://127.0.0.1:1/xapi/".to_string(),
            ..LrsConfig::default()
        });
        let statement = Statement::from_session(&crate::session::QuizSession::new());
        assert!(client.send_statement(&statement).await.is_err());
    }
}
