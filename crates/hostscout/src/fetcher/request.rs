//! HTTP peer fetching implementation.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::trace;

use super::response::FetchResult;
use super::status::check_status;
use super::PeerFetcher;
use crate::{DiscoveryConfig, Result};

pub const USER_AGENT: &str = concat!("hostscout/", env!("CARGO_PKG_VERSION"));

/// Body of a successful `/peers` response
#[derive(Debug, Deserialize)]
struct PeersBody {
    peers: Vec<String>,
}

/// `Accept` header value announcing the minimum supported protocol version
pub fn accept_header(min_version: &str) -> String {
    format!("application/codius-v{min_version}+json")
}

/// Fetches peer lists over HTTP
#[derive(Debug, Clone)]
pub struct HttpPeerFetcher {
    client: reqwest::Client,
    accept: String,
}

impl HttpPeerFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(min_version: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, accept: accept_header(min_version) })
    }

    pub fn from_config(config: &DiscoveryConfig) -> Result<Self> {
        Self::new(&config.min_version, config.timeout)
    }
}

#[async_trait::async_trait]
impl PeerFetcher for HttpPeerFetcher {
    async fn fetch_peers(&self, host: &str) -> FetchResult {
        let url = format!("{host}/peers");
        trace!("GET {url}");

        // An invalid Accept value or URL surfaces from send() as a builder error
        let response =
            match self.client.get(&url).header(ACCEPT, self.accept.as_str()).send().await {
                Ok(response) => response,
                Err(error) => return FetchResult::fault(host, error),
            };

        let status = response.status();
        if !check_status(status) {
            let text = response.text().await.unwrap_or_default();
            return FetchResult::rejected(host, status, text);
        }

        match response.json::<PeersBody>().await {
            Ok(body) => FetchResult::success(host, body.peers),
            Err(error) => FetchResult::fault(host, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_header() {
        assert_eq!(accept_header("1.0.0"), "application/codius-v1.0.0+json");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_fault() {
        let fetcher = HttpPeerFetcher::new("1.0.0", Duration::from_secs(2)).unwrap();

        let result = fetcher.fetch_peers("http://127.0.0.1:1").await;

        match result {
            FetchResult::Failure { host, error, text, status } => {
                assert_eq!(host, "http://127.0.0.1:1");
                assert!(!error.is_empty());
                assert_eq!(text, None);
                assert_eq!(status, None);
            },
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_host_is_a_fault() {
        let fetcher = HttpPeerFetcher::new("1.0.0", Duration::from_secs(2)).unwrap();

        let result = fetcher.fetch_peers("not a url").await;

        assert!(result.is_error());
        assert_eq!(result.host(), "not a url");
    }
}
