//! Per-round host sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use super::hosts::HostSet;

/// Draw up to `amount` distinct hosts, then drop the ones already marked bad.
///
/// Bad hosts are filtered after the draw, so a round can end up querying
/// fewer than `amount` hosts even when enough good ones exist.
pub fn sample_hosts<R: Rng + ?Sized>(
    hosts: &HostSet,
    bad_hosts: &HostSet,
    amount: usize,
    rng: &mut R,
) -> Vec<String> {
    hosts
        .as_slice()
        .choose_multiple(rng, amount)
        .filter(|host| !bad_hosts.contains(host))
        .cloned()
        .collect()
}
