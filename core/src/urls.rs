//! Request URL composition.

use url::Url;

use crate::error::ApiError;
use crate::query::Param;

/// Merge a base resource path with encoded parameters into a request URL.
///
/// An empty parameter sequence returns the base unmodified (no trailing
/// `?`). Values are percent-encoded per standard query escaping. Duplicate
/// keys collapse map-like: the last value wins, at the position of the first
/// occurrence. Collisions are not rejected — callers combining a filter with
/// override pairs are responsible for avoiding unintended ones.
pub fn compose(base: &str, params: &[Param]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    if params.is_empty() {
        return Ok(url);
    }

    let mut ordered: Vec<(&'static str, &str)> = Vec::with_capacity(params.len());
    for param in params {
        match ordered.iter_mut().find(|(key, _)| *key == param.key) {
            Some(entry) => entry.1 = param.value.as_str(),
            None => ordered.push((param.key, param.value.as_str())),
        }
    }
    url.query_pairs_mut().extend_pairs(ordered);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode;
    use crate::types::MeetingFilter;
    use chrono::{TimeZone, Utc};

    const BASE: &str = "https://api.openf1.org/v1/laps";

    #[test]
    fn no_params_returns_base_unchanged() {
        let url = compose(BASE, &[]).unwrap();
        assert_eq!(url.as_str(), BASE);
    }

    #[test]
    fn params_join_with_ampersand() {
        let params = vec![
            Param::new("driver_number", "44"),
            Param::new("session_key", "9165"),
        ];
        let url = compose(BASE, &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/laps?driver_number=44&session_key=9165"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = vec![Param::new("team_name", "Red Bull Racing")];
        let url = compose("https://api.openf1.org/v1/drivers", &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/drivers?team_name=Red+Bull+Racing"
        );
    }

    #[test]
    fn duplicate_key_last_write_wins_in_place() {
        let params = vec![
            Param::new("session_key", "9165"),
            Param::new("driver_number", "44"),
            Param::new("session_key", "latest"),
        ];
        let url = compose(BASE, &params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/laps?session_key=latest&driver_number=44"
        );
    }

    #[test]
    fn composed_query_parses_back_to_encoded_pairs() {
        let filter = MeetingFilter {
            location: "Marina Bay".to_string(),
            meeting_key: 1219,
            date_start: Some(Utc.with_ymd_and_hms(2023, 9, 15, 9, 30, 0).unwrap()),
            year: 2023,
            ..MeetingFilter::default()
        };
        let params = encode(&filter);
        let url = compose("https://api.openf1.org/v1/meetings", &params).unwrap();

        // Parsing the composed query recovers every encoded pair, with
        // percent-encoding undone.
        let recovered: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let expected: Vec<(String, String)> = params
            .iter()
            .map(|p| (p.key.to_string(), p.value.clone()))
            .collect();
        assert_eq!(recovered, expected);
        // The space survived an encode/decode cycle rather than never being
        // escaped at all.
        assert!(url.as_str().contains("location=Marina+Bay"));
        assert!(recovered.contains(&("location".to_string(), "Marina Bay".to_string())));
        assert!(recovered.contains(&(
            "date_start".to_string(),
            "2023-09-15T09:30:00Z".to_string()
        )));
    }

    #[test]
    fn malformed_base_is_invalid_url() {
        let err = compose("://not-a-url", &[]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
