use std::env;
use std::time::Duration;

use crate::endpoints::EndpointRegistry;

pub const DEFAULT_BASE_URL: &str = "http://api.geonames.org/";
pub const DEFAULT_USER_AGENT: &str = "geonames-client-rs/0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix every endpoint path is appended to
    pub base_uri: String,
    pub registry: EndpointRegistry,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URL.to_string(),
            registry: EndpointRegistry::geonames(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from environment variables
    ///
    /// - `GEONAMES_BASE_URL`: service root (default `http://api.geonames.org/`)
    /// - `GEONAMES_USERNAME`: account name sent as `username` with every request
    /// - `GEONAMES_LANG`: default result language (default `en`)
    /// - `GEONAMES_TIMEOUT_SECS`: request timeout (default 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_uri) = lookup("GEONAMES_BASE_URL") {
            config.base_uri = base_uri;
        }

        if let Some(username) = lookup("GEONAMES_USERNAME").filter(|u| !u.is_empty()) {
            config = config.with_username(&username);
        }

        if let Some(lang) = lookup("GEONAMES_LANG").filter(|l| !l.is_empty()) {
            config = config.with_language(&lang);
        }

        if let Some(secs) = lookup("GEONAMES_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Send `username` with every request
    pub fn with_username(mut self, username: &str) -> Self {
        self.registry = self.registry.with_default_param("username", username);
        self
    }

    /// Default result language for every request
    pub fn with_language(mut self, lang: &str) -> Self {
        self.registry = self.registry.with_default_param("lang", lang);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Operation;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_uri, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        let endpoint = config.registry.get(Operation::SearchByQuery).unwrap();
        assert!(endpoint.defaults.get("username").is_none());
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GEONAMES_BASE_URL", "http://localhost:8080/"),
            ("GEONAMES_USERNAME", "demo"),
            ("GEONAMES_LANG", "nl"),
            ("GEONAMES_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.base_uri, "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        for operation in Operation::ALL {
            let defaults = &config.registry.get(operation).unwrap().defaults;
            assert_eq!(defaults.get("username"), Some("demo"));
            assert_eq!(defaults.get("lang"), Some("nl"));
        }
    }

    #[test]
    fn test_config_ignores_unparseable_timeout_and_blank_username() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("GEONAMES_TIMEOUT_SECS", "soon"),
            ("GEONAMES_USERNAME", ""),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(30));
        let endpoint = config.registry.get(Operation::FindNearBy).unwrap();
        assert!(endpoint.defaults.get("username").is_none());
    }
}
