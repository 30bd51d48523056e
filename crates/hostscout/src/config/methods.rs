//! Discovery configuration methods for hostscout.

use std::time::Duration;

use super::types::{DiscoveryConfig, DiscoveryConfigBuilder};
use crate::{Error, Result};

impl DiscoveryConfig {
    /// Set the seed peers
    pub fn with_peers(mut self, peers: Vec<String>) -> Self {
        self.peers = peers;
        self
    }

    /// Set the minimum protocol version
    pub fn with_min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = version.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the run can make progress at all
    pub fn validate(&self) -> Result<()> {
        if self.hosts_per_round == 0 {
            return Err(Error::InvalidConfig("hosts_per_round must be at least 1".to_string()));
        }

        if self.max_rounds == 0 {
            return Err(Error::InvalidConfig("max_rounds must be at least 1".to_string()));
        }

        if self.min_version.trim().is_empty() {
            return Err(Error::InvalidConfig("min_version must not be empty".to_string()));
        }

        Ok(())
    }
}

impl DiscoveryConfigBuilder {
    /// Build the configuration
    pub fn build(self) -> DiscoveryConfig {
        self.config
    }

    /// Add a seed peer
    pub fn seed_peer(mut self, peer: impl Into<String>) -> Self {
        self.config.peers.push(peer.into());
        self
    }

    /// Add several seed peers
    pub fn seed_peers<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.peers.extend(peers.into_iter().map(Into::into));
        self
    }

    /// Set the minimum protocol version
    pub fn min_version(mut self, version: impl Into<String>) -> Self {
        self.config.min_version = version.into();
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the sample size per round
    pub fn hosts_per_round(mut self, hosts: usize) -> Self {
        self.config.hosts_per_round = hosts;
        self
    }

    /// Set the round budget
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.config.max_rounds = rounds;
        self
    }
}
