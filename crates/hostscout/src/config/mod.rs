//! Discovery configuration for hostscout.
//!
//! This module defines the configuration options for a discovery run.

mod methods;
mod types;

pub use types::{DiscoveryConfig, DiscoveryConfigBuilder, DEFAULT_TIMEOUT};
