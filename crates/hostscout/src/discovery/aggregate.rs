//! Round result aggregation.

use serde::Serialize;

use crate::fetcher::FetchResult;

/// Peers learned and hosts lost in one round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundAggregate {
    /// Flattened peer lists of every successful fetch, duplicates included
    pub success: Vec<String>,

    /// Hosts whose fetch failed
    pub failed: Vec<String>,
}

/// Partition a round's fetch results into learned peers and failed hosts
pub fn aggregate(results: impl IntoIterator<Item = FetchResult>) -> RoundAggregate {
    results.into_iter().fold(RoundAggregate::default(), |mut acc, result| {
        match result {
            FetchResult::Success { peers, .. } => acc.success.extend(peers),
            FetchResult::Failure { host, .. } => acc.failed.push(host),
        }
        acc
    })
}
