//! Request construction from an operation, coerced input and caller options

use std::collections::BTreeMap;

use crate::endpoints::{EndpointRegistry, Operation};
use crate::error::{GeonamesError, Result};

/// Wire parameters, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions(BTreeMap<String, String>);

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language of returned names, e.g. `"en"`
    pub fn language(lang: impl Into<String>) -> Self {
        Self::new().with("lang", lang)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Shallow merge; keys from `other` win
    pub fn merge(&mut self, other: &RequestOptions) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Coerced caller input for one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum QueryInput {
    Text(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// Fully resolved request, ready for a [`Transport`](crate::Transport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub uri: String,
    pub params: RequestOptions,
}

/// Composes [`BuiltRequest`]s against a base URI and endpoint table
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    base_uri: &'a str,
    registry: &'a EndpointRegistry,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(base_uri: &'a str, registry: &'a EndpointRegistry) -> Self {
        Self { base_uri, registry }
    }

    /// Build the request for `operation`
    ///
    /// Parameters are the endpoint defaults, then `options`, then the
    /// positional `q` or `lat`/`lng`, so caller options never replace the
    /// coerced input.
    pub fn build(
        &self,
        operation: Operation,
        input: &QueryInput,
        options: Option<&RequestOptions>,
    ) -> Result<BuiltRequest> {
        if self.base_uri.trim().is_empty() {
            return Err(GeonamesError::Configuration("Uri is not valid.".to_string()));
        }

        let endpoint = self
            .registry
            .get(operation)
            .filter(|endpoint| !endpoint.path.is_empty())
            .ok_or_else(|| {
                GeonamesError::Configuration(format!(
                    "Method mapping for internal method '{}' is incorrect.",
                    operation.name()
                ))
            })?;

        let mut params = endpoint.defaults.clone();
        if let Some(options) = options {
            params.merge(options);
        }

        match (input, operation.is_reverse()) {
            (QueryInput::Text(text), false) => params.set("q", text.as_str()),
            (
                QueryInput::Coordinates {
                    latitude,
                    longitude,
                },
                true,
            ) => {
                params.set("lat", latitude.to_string());
                params.set("lng", longitude.to_string());
            }
            _ => {
                return Err(GeonamesError::Configuration(format!(
                    "Operation '{}' does not accept this kind of input",
                    operation.name()
                )))
            }
        }

        Ok(BuiltRequest {
            uri: format!("{}{}", self.base_uri, endpoint.path),
            params,
        })
    }
}
