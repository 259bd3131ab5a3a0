//! Conversion of raw service records into [`PlaceRecord`](crate::PlaceRecord)
//! and [`ArticleRecord`](crate::ArticleRecord)

pub(crate) mod lenient;
mod place;
mod wiki;

pub use place::normalize_places;
pub use wiki::normalize_articles;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

/// Decode every element of `raw` into `T`, skipping those that do not decode
fn decode_each<'a, T>(
    raw: &'a [serde_json::Value],
    family: &'static str,
) -> impl Iterator<Item = T> + 'a
where
    T: DeserializeOwned + 'a,
{
    raw.iter().enumerate().filter_map(move |(index, value)| {
        if !value.is_object() {
            return None;
        }
        match <T as Deserialize>::deserialize(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(family, index, error = %e, "Skipping undecodable record");
                None
            }
        }
    })
}
