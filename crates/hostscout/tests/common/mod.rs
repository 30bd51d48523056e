//! Shared test fixtures: an in-memory host graph standing in for the network.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use hostscout::{FetchResult, PeerFetcher};

/// Static peer graph. Hosts listed as failing, or absent from the graph,
/// answer with a fault.
#[derive(Default)]
pub struct GraphFetcher {
    graph: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl GraphFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: &str, peers: &[&str]) -> Self {
        self.graph.insert(host.to_string(), peers.iter().map(|peer| peer.to_string()).collect());
        self
    }

    pub fn failing(mut self, host: &str) -> Self {
        self.failing.insert(host.to_string());
        self
    }

    /// Every host queried so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Transitive closure of `seeds` under the peers relation
    pub fn closure(&self, seeds: &[&str]) -> HashSet<String> {
        let mut seen: HashSet<String> = seeds.iter().map(|seed| seed.to_string()).collect();
        let mut queue: Vec<String> = seen.iter().cloned().collect();

        while let Some(host) = queue.pop() {
            if self.failing.contains(&host) {
                continue;
            }
            for peer in self.graph.get(&host).into_iter().flatten() {
                if seen.insert(peer.clone()) {
                    queue.push(peer.clone());
                }
            }
        }

        seen
    }
}

#[async_trait::async_trait]
impl PeerFetcher for GraphFetcher {
    async fn fetch_peers(&self, host: &str) -> FetchResult {
        self.calls.lock().unwrap().push(host.to_string());

        if self.failing.contains(host) {
            return FetchResult::fault(host, "connection refused");
        }

        match self.graph.get(host) {
            Some(peers) => FetchResult::success(host, peers.clone()),
            None => FetchResult::fault(host, "dns error: no such host"),
        }
    }
}

pub fn hosts(hosts: &[&str]) -> HashSet<String> {
    hosts.iter().map(|host| host.to_string()).collect()
}
