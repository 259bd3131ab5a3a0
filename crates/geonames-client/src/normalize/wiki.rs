use serde::Deserialize;
use tracing::debug;

use super::{decode_each, lenient};
use crate::types::{ArticleRecord, WikiFeature};

/// Raw Wikipedia article (internal)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    #[serde(default, deserialize_with = "lenient::text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    feature: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    wikipedia_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    thumbnail_img: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::identifier")]
    geo_name_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::number")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    lng: Option<f64>,
}

/// Convert Wikipedia article elements into article records
///
/// Elements without a title are dropped. An article without a feature is
/// treated as a city.
pub fn normalize_articles(raw: &[serde_json::Value]) -> Vec<ArticleRecord> {
    let records: Vec<ArticleRecord> = decode_each::<RawArticle>(raw, "wiki")
        .filter_map(convert)
        .collect();

    debug!(raw = raw.len(), normalized = records.len(), "Normalized article records");
    records
}

fn convert(external: RawArticle) -> Option<ArticleRecord> {
    let title = external.title?;

    let mut record = ArticleRecord {
        country_iso: external.country_code,
        link: external.wikipedia_url,
        picture: external.thumbnail_img,
        description: external.summary,
        geo_name_id: external.geo_name_id,
        latitude: external.lat,
        longitude: external.lng,
        ..Default::default()
    };

    let feature = external
        .feature
        .as_deref()
        .map_or(WikiFeature::City, WikiFeature::from_tag);

    match feature {
        WikiFeature::Country => record.country = Some(title),
        WikiFeature::City => record.city = Some(title),
        WikiFeature::Isle | WikiFeature::Airport | WikiFeature::Admin(_) => {
            record.admin = Some(title)
        }
        WikiFeature::Other(_) => record.place = Some(title),
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one(value: serde_json::Value) -> ArticleRecord {
        let mut records = normalize_articles(&[value]);
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn test_article_fields_are_copied() {
        let record = one(json!({
            "title": "Antwerp",
            "feature": "city",
            "countryCode": "BE",
            "summary": "Antwerp is a city in Belgium...",
            "wikipediaUrl": "en.wikipedia.org/wiki/Antwerp",
            "thumbnailImg": "http://www.geonames.org/img/wikipedia/1000/thumb-999-100.jpg",
            "geoNameId": 2803138,
            "lat": 51.2166666666667,
            "lng": 4.4,
            "rank": 100,
            "lang": "en"
        }));

        assert_eq!(record.city.as_deref(), Some("Antwerp"));
        assert_eq!(record.country_iso.as_deref(), Some("BE"));
        assert_eq!(record.link.as_deref(), Some("en.wikipedia.org/wiki/Antwerp"));
        assert!(record.picture.as_deref().unwrap().ends_with("thumb-999-100.jpg"));
        assert_eq!(record.description.as_deref(), Some("Antwerp is a city in Belgium..."));
        assert_eq!(record.geo_name_id, Some(2803138));
        assert_eq!(record.latitude, Some(51.2166666666667));
        assert_eq!(record.longitude, Some(4.4));
    }

    #[test]
    fn test_feature_classification() {
        assert_eq!(one(json!({"title": "Belgium", "feature": "COUNTRY"})).country.as_deref(), Some("Belgium"));
        assert_eq!(one(json!({"title": "Scheldt", "feature": "river"})).place.as_deref(), Some("Scheldt"));

        for feature in ["isle", "airport", "adm1st", "adm2nd", "adm3rd", "adm4th", "adm5th"] {
            let record = one(json!({"title": "T", "feature": feature}));
            assert_eq!(record.admin.as_deref(), Some("T"), "feature {feature}");
            assert!(record.city.is_none() && record.place.is_none());
        }
    }

    #[test]
    fn test_missing_feature_defaults_to_city() {
        assert_eq!(one(json!({"title": "Mechelen"})).city.as_deref(), Some("Mechelen"));
        assert_eq!(one(json!({"title": "Lier", "feature": null})).city.as_deref(), Some("Lier"));
    }

    #[test]
    fn test_untitled_articles_are_skipped() {
        let records = normalize_articles(&[
            json!({"summary": "no title"}),
            json!({"title": ""}),
            json!({"title": "Ghent", "feature": "city"}),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city.as_deref(), Some("Ghent"));
    }

    #[test]
    fn test_untouched_fields_stay_unset() {
        let record = one(json!({"title": "Zoo", "feature": "landmark", "lat": 0}));
        assert_eq!(
            record,
            ArticleRecord {
                place: Some("Zoo".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_normalizing_twice_is_identical() {
        let raw = vec![
            json!({"title": "Antwerp", "feature": "city", "countryCode": "BE", "lat": 51.2166}),
            json!({"title": "Schelde", "feature": "river", "geoNameId": "2747303"}),
            json!({"summary": "no title"}),
        ];
        let first = normalize_articles(&raw);
        assert_eq!(first.len(), 2);
        assert_eq!(first, normalize_articles(&raw));
    }
}
