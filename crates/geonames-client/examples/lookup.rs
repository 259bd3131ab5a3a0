//! Run the four lookups against the live service
//!
//! ```sh
//! GEONAMES_USERNAME=demo cargo run -p geonames-client --example lookup
//! ```

use geonames_client::{GeonamesClient, GeonamesError, RequestOptions};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const ADDRESS: &str = "Belgium, Antwerp";
const LATITUDE: &str = "51.216667";
const LONGITUDE: &str = "4.4";
const LANGUAGE: &str = "en";

#[tokio::main]
async fn main() -> Result<(), GeonamesError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lookup=info,geonames_client=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = GeonamesClient::from_env()?;
    let options = RequestOptions::language(LANGUAGE);

    match client.search_by_query(ADDRESS, Some(&options)).await {
        Ok(places) => info!(count = places.len(), "searchByQuery: {:#?}", places),
        Err(e) => error!(error = %e, "searchByQuery failed"),
    }

    match client.find_near_by(LATITUDE, LONGITUDE, Some(&options)).await {
        Ok(places) => info!(count = places.len(), "findNearBy: {:#?}", places),
        Err(e) => error!(error = %e, "findNearBy failed"),
    }

    match client.wiki_search_by_query(ADDRESS, Some(&options)).await {
        Ok(articles) => info!(count = articles.len(), "wikiSearchByQuery: {:#?}", articles),
        Err(e) => error!(error = %e, "wikiSearchByQuery failed"),
    }

    match client.wiki_find_near_by(LATITUDE, LONGITUDE, Some(&options)).await {
        Ok(articles) => info!(count = articles.len(), "wikiFindNearBy: {:#?}", articles),
        Err(e) => error!(error = %e, "wikiFindNearBy failed"),
    }

    Ok(())
}
