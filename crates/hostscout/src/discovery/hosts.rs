//! Insertion-ordered set of host endpoints.

use std::collections::HashSet;

/// Set of host endpoints keyed by exact string match.
///
/// Hosts can only be added. Iteration follows first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl HostSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host, returning `false` if it was already known
    pub fn insert(&mut self, host: String) -> bool {
        if self.index.contains(&host) {
            return false;
        }
        self.index.insert(host.clone());
        self.order.push(host);
        true
    }

    pub fn contains(&self, host: &str) -> bool {
        self.index.contains(host)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl Extend<String> for HostSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for host in iter {
            self.insert(host);
        }
    }
}

impl FromIterator<String> for HostSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut hosts = HostSet::new();
        assert!(hosts.is_empty());

        assert!(hosts.insert("a".to_string()));
        assert!(!hosts.insert("a".to_string()));
        assert!(hosts.insert("b".to_string()));

        assert_eq!(hosts.len(), 2);
        assert!(!hosts.is_empty());
        assert_eq!(hosts.as_slice(), ["a", "b"]);
    }

    #[test]
    fn test_exact_string_equality() {
        let hosts: HostSet =
            ["https://a.example", "https://a.example/", "HTTPS://A.EXAMPLE"].map(String::from).into_iter().collect();

        assert_eq!(hosts.len(), 3);
        assert!(hosts.contains("https://a.example/"));
        assert!(!hosts.contains("https://b.example"));
    }
}
