//! GeoNames Lookup Client
//!
//! A Rust client for the [GeoNames](http://www.geonames.org/export/web-services.html)
//! place search and Wikipedia web services. Responses from the four lookups
//! are classified (transport failure, HTTP status, embedded service status)
//! and normalised into [`PlaceRecord`] and [`ArticleRecord`] lists.
//!
//! # Example
//!
//! ```no_run
//! use geonames_client::{ClientConfig, GeonamesClient, RequestOptions};
//!
//! # async fn example() -> Result<(), geonames_client::GeonamesError> {
//! let client = GeonamesClient::new(ClientConfig::default().with_username("demo"))?;
//! let options = RequestOptions::language("en");
//!
//! for place in client.search_by_query("Belgium, Antwerp", Some(&options)).await? {
//!     println!("{:?} {:?}", place.city, place.admin);
//! }
//!
//! let articles = client.wiki_find_near_by("51.216667", "4.4", None).await?;
//! println!("{} articles nearby", articles.len());
//! # Ok(())
//! # }
//! ```

mod classify;
mod client;
mod coerce;
mod config;
mod endpoints;
mod error;
mod normalize;
mod request;
mod status;
mod transport;
mod types;

pub use classify::{classify, CONNECTION_REFUSED};
pub use client::GeonamesClient;
pub use coerce::{
    coerce_coordinate, coerce_text, is_empty_address, is_empty_coordinate, CoordinateInput,
    EMPTY_ADDRESS, EMPTY_COORDINATE,
};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use endpoints::{Endpoint, EndpointRegistry, Family, Operation};
pub use error::{ErrorKind, GeonamesError, Result, TransportFailure};
pub use normalize::{normalize_articles, normalize_places};
pub use request::{BuiltRequest, QueryInput, RequestBuilder, RequestOptions};
pub use status::{StatusCode, StatusError};
pub use transport::{HttpTransport, RemoteResponse, Transport};
pub use types::{
    AlternateName, ArticleRecord, Corner, FeatureClass, PlaceRecord, Viewport, WikiFeature,
};
