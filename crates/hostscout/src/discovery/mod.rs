//! Host discovery for hostscout.
//!
//! Each round samples known hosts, fetches their peers concurrently, and
//! merges what comes back:
//! - successful peer lists grow the host set
//! - failing hosts join the bad-host set and are never sampled again

mod aggregate;
mod hosts;
mod report;
mod run;
mod sample;

pub use aggregate::{aggregate, RoundAggregate};
pub use hosts::HostSet;
pub use report::{DiscoveryOutcome, DiscoveryReport, RoundSummary};
pub use run::HostDiscovery;
pub use sample::sample_hosts;
