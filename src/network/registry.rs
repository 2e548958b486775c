use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("cannot parse peer address {0:?}")]
pub struct InvalidPeerAddress(pub String);

/// Known peer endpoints, stored as normalized `host:port` strings.
///
/// Pure bookkeeping for the consensus resolver: the registry never talks to
/// the network itself. Set-backed, so `list` hands peers out in arbitrary
/// order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: HashSet<String>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `address` (scheme optional) to `host:port` and record it.
    /// Re-registering a known endpoint is a no-op.
    pub fn add(&mut self, address: &str) -> Result<(), InvalidPeerAddress> {
        let endpoint =
            normalize(address).ok_or_else(|| InvalidPeerAddress(address.to_string()))?;
        self.nodes.insert(endpoint);
        Ok(())
    }

    pub fn list(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

fn normalize(address: &str) -> Option<String> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    let with_scheme = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    };
    let url = reqwest::Url::parse(&with_scheme).ok()?;
    let host = url.host_str()?;
    let port = url.port_or_known_default()?;
    Some(format!("{host}:{port}"))
}

#[cfg(test)]
mod tests {
    use super::NodeRegistry;

    #[test]
    fn strips_scheme_and_path() {
        let mut registry = NodeRegistry::new();
        registry.add("http://192.168.0.5:5000/").unwrap();
        assert_eq!(registry.list(), vec!["192.168.0.5:5000".to_string()]);
    }

    #[test]
    fn accepts_bare_host_port() {
        let mut registry = NodeRegistry::new();
        registry.add("node-a:8080").unwrap();
        assert_eq!(registry.list(), vec!["node-a:8080".to_string()]);
    }

    #[test]
    fn defaults_the_port_for_http() {
        let mut registry = NodeRegistry::new();
        registry.add("http://node-a").unwrap();
        assert_eq!(registry.list(), vec!["node-a:80".to_string()]);
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = NodeRegistry::new();
        registry.add("http://node-a:8080").unwrap();
        registry.add("node-a:8080").unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_unparseable_addresses() {
        let mut registry = NodeRegistry::new();
        assert!(registry.add("").is_err());
        assert!(registry.add("http://").is_err());
        assert_eq!(registry.len(), 0);
    }
}
