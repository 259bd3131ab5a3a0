//! Normalised records returned to callers

use serde::Serialize;

/// GeoNames feature class, see <http://www.geonames.org/export/codes.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureClass {
    /// Country, state, region
    AdministrativeBoundary,
    /// Stream, lake
    Hydrographic,
    /// Parks, area
    Area,
    /// City, village
    PopulatedPlace,
    /// Road, railroad
    RoadRailroad,
    /// Spot, building, farm
    Spot,
    /// Mountain, hill, rock
    Hypsographic,
    Undersea,
    /// Forest, heath
    Vegetation,
    Unknown,
}

impl FeatureClass {
    /// Parse an `fcl` tag, ignoring case
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "A" => Self::AdministrativeBoundary,
            "H" => Self::Hydrographic,
            "L" => Self::Area,
            "P" => Self::PopulatedPlace,
            "R" => Self::RoadRailroad,
            "S" => Self::Spot,
            "T" => Self::Hypsographic,
            "U" => Self::Undersea,
            "V" => Self::Vegetation,
            _ => Self::Unknown,
        }
    }
}

/// Wikipedia article feature, see <http://www.geonames.org/wikipedia/wikipedia_features.html>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WikiFeature {
    Country,
    City,
    Isle,
    Airport,
    /// First to fifth order administrative division (`adm1st`..`adm5th`)
    Admin(u8),
    Other(String),
}

impl WikiFeature {
    /// Parse a `feature` tag, ignoring case
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "country" => Self::Country,
            "city" => Self::City,
            "isle" => Self::Isle,
            "airport" => Self::Airport,
            "adm1st" => Self::Admin(1),
            "adm2nd" => Self::Admin(2),
            "adm3rd" => Self::Admin(3),
            "adm4th" => Self::Admin(4),
            "adm5th" => Self::Admin(5),
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternateName {
    /// Language (or other) tag of the name
    pub key: String,
    pub value: String,
}

/// Viewport corner, serialized as `{lat, lng}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Corner {
    #[serde(rename = "lat", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "lng", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Bounding box of a place
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub left_top: Corner,
    pub bottom_right: Corner,
}

/// A place from the search or reverse lookup endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Administrative hierarchy, broadest first
    pub admin: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub alternate_names: Vec<AlternateName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u64>,
}

/// A Wikipedia article from the wiki search or reverse lookup endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_name_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
