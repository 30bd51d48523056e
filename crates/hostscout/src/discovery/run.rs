//! Discovery loop implementation.

use futures::future::join_all;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::aggregate::aggregate;
use super::hosts::HostSet;
use super::report::{DiscoveryOutcome, DiscoveryReport, RoundSummary};
use super::sample::sample_hosts;
use crate::config::DiscoveryConfig;
use crate::fetcher::{HttpPeerFetcher, PeerFetcher};
use crate::Result;

/// Drives discovery rounds against a [`PeerFetcher`]
pub struct HostDiscovery<F = HttpPeerFetcher> {
    config: DiscoveryConfig,
    fetcher: F,
}

impl HostDiscovery<HttpPeerFetcher> {
    /// Create a discovery driver that talks HTTP to the configured hosts
    pub fn new(config: DiscoveryConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpPeerFetcher::from_config(&config)?;

        Ok(Self { config, fetcher })
    }
}

impl<F: PeerFetcher> HostDiscovery<F> {
    /// Create a discovery driver with a custom fetcher
    pub fn with_fetcher(config: DiscoveryConfig, fetcher: F) -> Result<Self> {
        config.validate()?;

        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Discover hosts, stopping early once `target_count` hosts are known.
    ///
    /// `None` or `Some(0)` means no target. Never fails: unreachable hosts
    /// only shrink the result.
    pub async fn discover_hosts(&self, target_count: Option<usize>) -> Vec<String> {
        self.discover(target_count).await.hosts
    }

    /// Like [`discover_hosts`](Self::discover_hosts), with the full run history
    pub async fn discover(&self, target_count: Option<usize>) -> DiscoveryReport {
        self.discover_with_rng(target_count, &mut rand::rngs::StdRng::from_entropy()).await
    }

    /// Run discovery drawing samples from `rng`
    pub async fn discover_with_rng<R: Rng + Send>(
        &self,
        target_count: Option<usize>,
        rng: &mut R,
    ) -> DiscoveryReport {
        let target = target_count.filter(|&count| count > 0);
        let mut host_list: HostSet = self.config.peers.iter().cloned().collect();
        if host_list.is_empty() {
            warn!("No seed peers configured, nothing to discover");
        }
        let mut bad_hosts = HostSet::new();
        let mut host_count = 0;
        let mut rounds = Vec::new();

        for attempt in 1..=self.config.max_rounds {
            let sample = sample_hosts(&host_list, &bad_hosts, self.config.hosts_per_round, rng);
            debug!("Sending peer requests to hosts: {sample:?}");

            let results = join_all(sample.iter().map(|host| self.fetcher.fetch_peers(host))).await;
            let round = aggregate(results);
            debug!(
                "Host discovery attempt #{attempt}: success={:?} failed={:?}",
                round.success, round.failed
            );

            let discovered: Vec<String> =
                round.success.into_iter().filter(|host| host_list.insert(host.clone())).collect();
            bad_hosts.extend(round.failed.iter().cloned());

            rounds.push(RoundSummary {
                attempt,
                sampled: sample,
                discovered,
                failed: round.failed,
                host_count: host_list.len(),
                bad_host_count: bad_hosts.len(),
            });

            let outcome = if host_count == host_list.len() {
                Some(DiscoveryOutcome::Stabilized)
            } else if target.is_some_and(|target| host_list.len() >= target) {
                Some(DiscoveryOutcome::TargetReached)
            } else {
                None
            };

            if let Some(outcome) = outcome {
                return finish(host_list, bad_hosts, rounds, outcome);
            }
            host_count = host_list.len();
        }

        finish(host_list, bad_hosts, rounds, DiscoveryOutcome::BudgetExhausted)
    }
}

fn finish(
    host_list: HostSet,
    bad_hosts: HostSet,
    rounds: Vec<RoundSummary>,
    outcome: DiscoveryOutcome,
) -> DiscoveryReport {
    info!(
        "Host discovery complete ({outcome}) after {} round(s), found {} hosts",
        rounds.len(),
        host_list.len()
    );
    debug!("Discovered host list: {:?}", host_list.as_slice());

    DiscoveryReport {
        hosts: host_list.into_vec(),
        bad_hosts: bad_hosts.into_vec(),
        rounds,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::fetcher::FetchResult;

    /// Answers from a fixed table; hosts missing from it fail
    struct TableFetcher(HashMap<&'static str, Vec<&'static str>>);

    #[async_trait::async_trait]
    impl PeerFetcher for TableFetcher {
        async fn fetch_peers(&self, host: &str) -> FetchResult {
            match self.0.get(host) {
                Some(peers) => {
                    FetchResult::success(host, peers.iter().map(|peer| peer.to_string()).collect())
                },
                None => FetchResult::fault(host, "connection refused"),
            }
        }
    }

    fn discovery(
        seeds: &[&str],
        table: Vec<(&'static str, Vec<&'static str>)>,
    ) -> HostDiscovery<TableFetcher> {
        let config = DiscoveryConfig::builder().seed_peers(seeds.iter().copied()).build();
        let fetcher = TableFetcher(table.into_iter().collect());

        HostDiscovery::with_fetcher(config, fetcher).unwrap()
    }

    fn sorted(mut hosts: Vec<String>) -> Vec<String> {
        hosts.sort();
        hosts
    }

    #[tokio::test]
    async fn test_one_failing_seed_is_quarantined() {
        let discovery = discovery(
            &["A", "B", "C", "D"],
            vec![("A", vec!["E"]), ("B", vec!["E"]), ("C", vec!["E"]), ("E", vec![])],
        );

        let report = discovery.discover_with_rng(None, &mut StdRng::seed_from_u64(0)).await;

        assert_eq!(sorted(report.hosts.clone()), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(report.bad_hosts, vec!["D"]);
        assert_eq!(report.round_count(), 2);
        assert_eq!(report.outcome, DiscoveryOutcome::Stabilized);
        assert!(!report.rounds[1].sampled.contains(&"D".to_string()));
    }

    #[tokio::test]
    async fn test_seed_alone_meets_target() {
        let discovery = discovery(&["A"], vec![]);

        let report = discovery.discover(Some(1)).await;

        assert_eq!(report.hosts, vec!["A"]);
        assert_eq!(report.bad_hosts, vec!["A"]);
        assert_eq!(report.round_count(), 1);
        assert_eq!(report.outcome, DiscoveryOutcome::TargetReached);
    }

    #[tokio::test]
    async fn test_empty_seed_list_stops_immediately() {
        let discovery = discovery(&[], vec![]);

        let report = discovery.discover(None).await;

        assert!(report.hosts.is_empty());
        assert_eq!(report.round_count(), 1);
        assert!(report.rounds[0].sampled.is_empty());
        assert_eq!(report.outcome, DiscoveryOutcome::Stabilized);
    }

    #[tokio::test]
    async fn test_zero_target_means_no_target() {
        let discovery = discovery(&["A"], vec![("A", vec!["B"]), ("B", vec![])]);

        let hosts = discovery.discover_hosts(Some(0)).await;

        assert_eq!(sorted(hosts), vec!["A", "B"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DiscoveryConfig::builder().max_rounds(0).build();

        assert!(HostDiscovery::with_fetcher(config, TableFetcher(HashMap::new())).is_err());
    }
}
