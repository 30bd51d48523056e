//! Discovery run results.

use std::fmt;

use serde::Serialize;

/// Why a discovery run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryOutcome {
    /// A round finished without learning a new host
    Stabilized,
    /// The host set reached the requested target count
    TargetReached,
    /// The round budget ran out while the host set was still growing
    BudgetExhausted,
}

impl fmt::Display for DiscoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryOutcome::Stabilized => write!(f, "stabilized"),
            DiscoveryOutcome::TargetReached => write!(f, "target reached"),
            DiscoveryOutcome::BudgetExhausted => write!(f, "budget exhausted"),
        }
    }
}

/// What happened in a single round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// 1-based round number
    pub attempt: usize,

    /// Hosts queried this round, after bad-host filtering
    pub sampled: Vec<String>,

    /// Hosts added to the host set this round
    pub discovered: Vec<String>,

    /// Hosts that failed this round
    pub failed: Vec<String>,

    /// Host set size after the merge
    pub host_count: usize,

    /// Bad-host set size after the merge
    pub bad_host_count: usize,
}

/// Result of a full discovery run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryReport {
    /// Every known host, seeds included, in first-seen order
    pub hosts: Vec<String>,

    /// Hosts quarantined during the run
    pub bad_hosts: Vec<String>,

    /// Per-round history, one entry per executed round
    pub rounds: Vec<RoundSummary>,

    pub outcome: DiscoveryOutcome,
}

impl DiscoveryReport {
    /// Number of rounds that were executed
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}
