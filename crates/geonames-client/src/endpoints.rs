//! Static mapping from logical operations to service endpoints

use std::collections::HashMap;
use std::fmt;

use crate::request::RequestOptions;

/// Response schema family an operation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Place,
    Wiki,
}

/// The four caller-facing lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SearchByQuery,
    FindNearBy,
    WikiSearchByQuery,
    WikiFindNearBy,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::SearchByQuery,
        Self::FindNearBy,
        Self::WikiSearchByQuery,
        Self::WikiFindNearBy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SearchByQuery => "searchByQuery",
            Self::FindNearBy => "findNearBy",
            Self::WikiSearchByQuery => "wikiSearchByQuery",
            Self::WikiFindNearBy => "wikiFindNearBy",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::SearchByQuery | Self::FindNearBy => Family::Place,
            Self::WikiSearchByQuery | Self::WikiFindNearBy => Family::Wiki,
        }
    }

    /// Whether the operation takes a coordinate pair rather than text
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::FindNearBy | Self::WikiFindNearBy)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative path plus the parameters sent unless the caller overrides them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub defaults: RequestOptions,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            defaults: RequestOptions::new(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.set(key, value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    endpoints: HashMap<Operation, Endpoint>,
}

impl EndpointRegistry {
    /// Registry with no mappings
    pub fn empty() -> Self {
        Self::default()
    }

    /// The GeoNames JSON web services
    pub fn geonames() -> Self {
        Self::empty()
            .register(
                Operation::SearchByQuery,
                Endpoint::new("searchJSON")
                    .with_default("isNameRequired", "true")
                    .with_default("style", "FULL")
                    .with_default("maxRows", "10"),
            )
            .register(
                Operation::FindNearBy,
                Endpoint::new("findNearbyJSON").with_default("style", "FULL"),
            )
            .register(
                Operation::WikiSearchByQuery,
                Endpoint::new("wikipediaSearchJSON").with_default("maxRows", "10"),
            )
            .register(
                Operation::WikiFindNearBy,
                Endpoint::new("findNearbyWikipediaJSON"),
            )
            .with_default_param("lang", "en")
    }

    pub fn register(mut self, operation: Operation, endpoint: Endpoint) -> Self {
        self.endpoints.insert(operation, endpoint);
        self
    }

    /// Set a default parameter on every registered endpoint
    pub fn with_default_param(mut self, key: &str, value: &str) -> Self {
        for endpoint in self.endpoints.values_mut() {
            endpoint.defaults.set(key, value);
        }
        self
    }

    pub fn get(&self, operation: Operation) -> Option<&Endpoint> {
        self.endpoints.get(&operation)
    }
}
