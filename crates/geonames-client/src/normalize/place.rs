use serde::Deserialize;
use tracing::debug;

use super::{decode_each, lenient};
use crate::types::{AlternateName, Corner, FeatureClass, PlaceRecord, Viewport};

/// Raw `geonames[]` element (internal)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGeoname {
    #[serde(default, deserialize_with = "lenient::text")]
    fcl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    country_name: Option<String>,
    #[serde(default, rename = "adminName1", deserialize_with = "lenient::text")]
    admin_name1: Option<String>,
    #[serde(default, rename = "adminName2", deserialize_with = "lenient::text")]
    admin_name2: Option<String>,
    #[serde(default, rename = "adminName3", deserialize_with = "lenient::text")]
    admin_name3: Option<String>,
    #[serde(default, rename = "adminName4", deserialize_with = "lenient::text")]
    admin_name4: Option<String>,
    #[serde(default, rename = "adminName5", deserialize_with = "lenient::text")]
    admin_name5: Option<String>,
    /// Shape varies by `style`; only the list-of-objects form is mapped
    #[serde(default)]
    alternate_names: serde_json::Value,
    #[serde(default, deserialize_with = "lenient::number")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient::identifier")]
    geoname_id: Option<u64>,
    /// Decoded on its own so a malformed box never drops the element
    #[serde(default)]
    bbox: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RawBbox {
    #[serde(default, deserialize_with = "lenient::number")]
    west: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    north: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    east: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    south: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAlternateName {
    #[serde(default, deserialize_with = "lenient::text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    lang: Option<String>,
}

/// Convert `geonames[]` elements into place records
///
/// Elements without a feature class are dropped.
pub fn normalize_places(raw: &[serde_json::Value]) -> Vec<PlaceRecord> {
    let records: Vec<PlaceRecord> = decode_each::<RawGeoname>(raw, "place")
        .filter_map(convert)
        .collect();

    debug!(raw = raw.len(), normalized = records.len(), "Normalized place records");
    records
}

fn convert(external: RawGeoname) -> Option<PlaceRecord> {
    let fcl = external.fcl?;

    let mut record = PlaceRecord {
        country_iso: external.country_code,
        country: external.country_name,
        admin: [
            external.admin_name1,
            external.admin_name2,
            external.admin_name3,
            external.admin_name4,
            external.admin_name5,
        ]
        .into_iter()
        .map_while(|level| level)
        .collect(),
        latitude: external.lat,
        longitude: external.lng,
        geoname_id: external.geoname_id,
        viewport: RawBbox::deserialize(&external.bbox).ok().map(|bbox| Viewport {
            left_top: Corner {
                latitude: bbox.north,
                longitude: bbox.west,
            },
            bottom_right: Corner {
                latitude: bbox.south,
                longitude: bbox.east,
            },
        }),
        ..Default::default()
    };

    match FeatureClass::from_tag(&fcl) {
        // Hierarchy already carries the name
        FeatureClass::AdministrativeBoundary => {}
        FeatureClass::PopulatedPlace => record.city = external.name,
        _ => record.place = external.name,
    }

    if let Some(entries) = external.alternate_names.as_array() {
        for entry in entries {
            let Ok(RawAlternateName {
                name: Some(name),
                lang: Some(lang),
            }) = RawAlternateName::deserialize(entry)
            else {
                continue;
            };

            match lang.to_ascii_lowercase().as_str() {
                "iata" => record.iata = Some(name),
                "icao" => record.icao = Some(name),
                "link" => record.link = Some(name),
                _ => record.alternate_names.push(AlternateName {
                    key: lang,
                    value: name,
                }),
            }
        }
    }

    Some(record)
}
