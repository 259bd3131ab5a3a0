//! Interpretation of transport outcomes
//!
//! The service signals failure two ways: at the transport level (no response,
//! non-200 status) and inside a 200 body via a `status` object. Both become a
//! [`GeonamesError`]; otherwise the result list is extracted for normalisation.

use serde_json::Value;
use tracing::warn;

use crate::endpoints::Family;
use crate::error::{GeonamesError, Result};
use crate::status::StatusError;
use crate::transport::RemoteResponse;

/// Message reported when the service host cannot be resolved
pub const CONNECTION_REFUSED: &str = "Connection refused";

/// Classify `response`, returning the raw result records of `family`
///
/// Only an object-valued `status` is an application error. A body with
/// neither a `status` object nor a result list yields no records.
pub fn classify(family: Family, response: RemoteResponse) -> Result<Vec<Value>> {
    match response {
        RemoteResponse::Transport(failure) => {
            warn!(error = %failure, "GeoNames transport failure");
            if failure.is_name_resolution() {
                Err(GeonamesError::Connection(CONNECTION_REFUSED.to_string()))
            } else {
                Err(GeonamesError::Transport(failure))
            }
        }
        RemoteResponse::Http { status } => {
            warn!(status, "GeoNames returned non-200 status");
            Err(GeonamesError::Http(status))
        }
        RemoteResponse::Body(json) => classify_body(family, json),
    }
}

fn classify_body(family: Family, json: Value) -> Result<Vec<Value>> {
    if let Some(status) = json.get("status").filter(|s| s.is_object()) {
        let status = StatusError::from_value(status);
        warn!(code = %status.code, message = %status.message, "GeoNames returned status");
        return Err(GeonamesError::Application(status));
    }

    Ok(match (family, json) {
        (Family::Wiki, Value::Array(records)) => records,
        (_, Value::Object(mut body)) => match body.remove("geonames") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TransportFailure};
    use crate::status::StatusCode;
    use serde_json::json;

    #[test]
    fn test_status_body_is_application_error() {
        let body = json!({"status": {"value": "15", "message": "no result found"}});
        let err = classify(Family::Place, RemoteResponse::Body(body)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Application);
        let status = err.status().unwrap();
        assert_eq!(status.code, StatusCode::NoResultFound);
        assert_eq!(status.code.as_str(), "15");
        assert_eq!(status.message, "no result found");
    }

    #[test]
    fn test_status_wins_over_results() {
        let body = json!({"status": {"value": 18, "message": "daily limit"}, "geonames": [{"fcl": "P"}]});
        let err = classify(Family::Place, RemoteResponse::Body(body)).unwrap_err();
        assert!(err.status().unwrap().code.is_rate_limit());
    }

    #[test]
    fn test_non_object_status_is_ignored() {
        for status in [json!(false), json!(0), json!(""), json!("15"), json!([15])] {
            let body = json!({"status": status, "geonames": [{"fcl": "P", "name": "Gent"}]});
            let records = classify(Family::Place, RemoteResponse::Body(body)).unwrap();
            assert_eq!(records.len(), 1);
        }

        let body = json!({"status": false});
        assert!(classify(Family::Wiki, RemoteResponse::Body(body)).unwrap().is_empty());
    }

    #[test]
    fn test_place_results_container() {
        let body = json!({"totalResultsCount": 1, "geonames": [{"fcl": "P", "name": "Gent"}]});
        let records = classify(Family::Place, RemoteResponse::Body(body)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Gent");
    }

    #[test]
    fn test_wiki_accepts_array_and_geonames_container() {
        let array = json!([{"title": "Antwerp"}, {"title": "Ghent"}]);
        assert_eq!(classify(Family::Wiki, RemoteResponse::Body(array)).unwrap().len(), 2);

        let object = json!({"geonames": [{"title": "Antwerp"}]});
        assert_eq!(classify(Family::Wiki, RemoteResponse::Body(object)).unwrap().len(), 1);
    }

    #[test]
    fn test_body_without_status_or_results_is_empty() {
        for body in [json!({}), json!({"geonames": null}), json!({"geonames": "x"}), json!(42), json!({"status": null})] {
            let records = classify(Family::Place, RemoteResponse::Body(body)).unwrap();
            assert!(records.is_empty());
        }
        assert!(classify(Family::Place, RemoteResponse::Body(json!([{"fcl": "P"}])))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_name_resolution_failure_is_connection_refused() {
        let response = RemoteResponse::Transport(TransportFailure::Dns("dns error".to_string()));
        let err = classify(Family::Place, response).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Connection);
        assert_eq!(err.to_string(), "Connection refused");
    }

    #[test]
    fn test_other_transport_failures_pass_through() {
        let failure = TransportFailure::Malformed("expected value at line 1 column 1".to_string());
        let err = classify(Family::Wiki, RemoteResponse::Transport(failure.clone())).unwrap_err();
        match err {
            GeonamesError::Transport(inner) => assert_eq!(inner, failure),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_200_is_http_error() {
        let err = classify(Family::Place, RemoteResponse::Http { status: 503 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.to_string(), "Response status code is '503'");
    }
}
