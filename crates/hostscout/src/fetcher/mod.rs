//! Peer fetching for hostscout.
//!
//! A fetcher asks one host for the peers it knows about. Every outcome,
//! including transport faults, comes back as a [`FetchResult`] value so a
//! round of concurrent fetches can always be joined.

mod request;
mod response;
mod status;

use std::sync::Arc;

pub use request::{accept_header, HttpPeerFetcher, USER_AGENT};
pub use response::{FetchResult, UNKNOWN_ERROR};
pub use status::check_status;

/// Source of peer lists for the discovery loop
#[async_trait::async_trait]
pub trait PeerFetcher: Send + Sync {
    /// Query `host` for its known peers
    async fn fetch_peers(&self, host: &str) -> FetchResult;
}

#[async_trait::async_trait]
impl<F: PeerFetcher + ?Sized> PeerFetcher for Arc<F> {
    async fn fetch_peers(&self, host: &str) -> FetchResult {
        self.as_ref().fetch_peers(host).await
    }
}
