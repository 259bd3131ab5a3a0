use std::fmt;

use tracing::debug;

use crate::classify::classify;
use crate::coerce::{
    coerce_coordinate, coerce_text, is_empty_address, is_empty_coordinate, CoordinateInput,
};
use crate::config::ClientConfig;
use crate::endpoints::Operation;
use crate::error::{GeonamesError, Result};
use crate::normalize::{normalize_articles, normalize_places};
use crate::request::{QueryInput, RequestBuilder, RequestOptions};
use crate::transport::{HttpTransport, Transport};
use crate::types::{ArticleRecord, PlaceRecord};

/// GeoNames place and Wikipedia lookup client
///
/// Every call is independent: input is coerced and validated, a request is
/// built and sent once, and the response is classified and normalised.
/// Invalid input fails before anything is sent.
pub struct GeonamesClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl GeonamesClient<HttpTransport> {
    /// Create a client with the `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
        Self::with_transport(config, transport)
    }

    /// Create a client configured from `GEONAMES_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> GeonamesClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        validate_base_uri(&config.base_uri)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search places by free text (`searchJSON`)
    pub async fn search_by_query(
        &self,
        query: impl fmt::Display,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<PlaceRecord>> {
        let input = text_input(query)?;
        let raw = self.dispatch(Operation::SearchByQuery, input, options).await?;
        Ok(normalize_places(&raw))
    }

    /// Reverse lookup of places near a coordinate (`findNearbyJSON`)
    pub async fn find_near_by(
        &self,
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<PlaceRecord>> {
        let input = coordinate_input(latitude, longitude)?;
        let raw = self.dispatch(Operation::FindNearBy, input, options).await?;
        Ok(normalize_places(&raw))
    }

    /// Search Wikipedia articles by free text (`wikipediaSearchJSON`)
    pub async fn wiki_search_by_query(
        &self,
        query: impl fmt::Display,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<ArticleRecord>> {
        let input = text_input(query)?;
        let raw = self
            .dispatch(Operation::WikiSearchByQuery, input, options)
            .await?;
        Ok(normalize_articles(&raw))
    }

    /// Reverse lookup of Wikipedia articles near a coordinate (`findNearbyWikipediaJSON`)
    pub async fn wiki_find_near_by(
        &self,
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<ArticleRecord>> {
        let input = coordinate_input(latitude, longitude)?;
        let raw = self
            .dispatch(Operation::WikiFindNearBy, input, options)
            .await?;
        Ok(normalize_articles(&raw))
    }

    async fn dispatch(
        &self,
        operation: Operation,
        input: QueryInput,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<serde_json::Value>> {
        let request = RequestBuilder::new(&self.config.base_uri, &self.config.registry)
            .build(operation, &input, options)?;

        debug!(operation = %operation, uri = %request.uri, "Dispatching lookup");

        let response = self.transport.send(&request).await;
        classify(operation.family(), response)
    }
}

fn validate_base_uri(base_uri: &str) -> Result<()> {
    if base_uri.trim().is_empty() {
        return Err(GeonamesError::Configuration("Uri is not valid.".to_string()));
    }
    let parsed = url::Url::parse(base_uri)?;
    if parsed.cannot_be_a_base() {
        return Err(GeonamesError::Configuration("Uri is not valid.".to_string()));
    }
    Ok(())
}

fn text_input(query: impl fmt::Display) -> Result<QueryInput> {
    let text = coerce_text(query);
    if is_empty_address(&text) {
        return Err(GeonamesError::Validation(
            "Query parameter is mandatory.".to_string(),
        ));
    }
    Ok(QueryInput::Text(text))
}

fn coordinate_input(
    latitude: impl Into<CoordinateInput>,
    longitude: impl Into<CoordinateInput>,
) -> Result<QueryInput> {
    let latitude = coerce_coordinate(latitude);
    let longitude = coerce_coordinate(longitude);
    if is_empty_coordinate(latitude) || is_empty_coordinate(longitude) {
        return Err(GeonamesError::Validation(
            "Geographical coordinates are mandatory.".to_string(),
        ));
    }
    Ok(QueryInput::Coordinates {
        latitude,
        longitude,
    })
}
