//! Discovery configuration types for hostscout.
//!
//! This module defines the configuration data structures for discovery runs.

use std::time::Duration;

use crate::{DEFAULT_MIN_VERSION, DISCOVERY_ATTEMPTS, HOSTS_PER_DISCOVERY};

/// Per-request timeout applied by the HTTP fetcher
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration options for a discovery run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Seed host endpoints the host set starts from
    pub peers: Vec<String>,

    /// Minimum Codius protocol version sent in the `Accept` header
    pub min_version: String,

    /// Timeout for a single `/peers` request
    pub timeout: Duration,

    /// How many hosts are sampled each round
    pub hosts_per_round: usize,

    /// Upper bound on the number of rounds
    pub max_rounds: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            peers: Vec::new(),
            min_version: DEFAULT_MIN_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            hosts_per_round: HOSTS_PER_DISCOVERY,
            max_rounds: DISCOVERY_ATTEMPTS,
        }
    }
}

impl DiscoveryConfig {
    /// Create a new configuration builder
    pub fn builder() -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder::default()
    }
}

/// Builder for DiscoveryConfig
#[derive(Default)]
pub struct DiscoveryConfigBuilder {
    pub(crate) config: DiscoveryConfig,
}
