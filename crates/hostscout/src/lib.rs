//! hostscout - peer discovery for Codius host networks
//!
//! Starting from a seed list of host endpoints, the discovery loop asks
//! sampled hosts for their `/peers` and grows the known host set until it
//! stops growing, reaches a target size, or runs out of rounds.

pub mod config;
pub mod discovery;
pub mod error;
pub mod fetcher;

// Re-export main types
pub use config::{DiscoveryConfig, DiscoveryConfigBuilder};
pub use discovery::{DiscoveryOutcome, DiscoveryReport, HostDiscovery, RoundSummary};
pub use error::{Error, Result};
pub use fetcher::{FetchResult, HttpPeerFetcher, PeerFetcher};

/// Number of hosts sampled per discovery round
pub const HOSTS_PER_DISCOVERY: usize = 4;

/// Maximum number of discovery rounds in a single run
pub const DISCOVERY_ATTEMPTS: usize = 15;

/// Minimum Codius protocol version advertised when none is configured
pub const DEFAULT_MIN_VERSION: &str = "1.0.0";
