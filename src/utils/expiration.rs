//! Expiration time normalization
//!
//! Clients may express expiration as an integer number of hours from now
//! (any negative value is the "never expires" sentinel, `-1` by convention)
//! or as an absolute RFC3339 timestamp. Both are normalized exactly once,
//! at creation time, to an absolute UTC timestamp or `None`.
//!
//! Expiration is advisory metadata: nothing purges expired resources and
//! reads still serve them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PastelinkError, Result};

/// Raw expiration value as it arrives on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpirationInput {
    /// Hours from now; negative means "never expires".
    Hours(i64),
    /// Absolute timestamp, passed through unchanged.
    Timestamp(DateTime<Utc>),
}

/// Convert the wire-level expiration into the persisted form.
pub fn normalize_expiration(input: Option<ExpirationInput>) -> Result<Option<DateTime<Utc>>> {
    match input {
        None => Ok(None),
        Some(ExpirationInput::Hours(h)) if h < 0 => Ok(None),
        Some(ExpirationInput::Hours(h)) => Duration::try_hours(h)
            .and_then(|d| Utc::now().checked_add_signed(d))
            .map(Some)
            .ok_or_else(|| {
                PastelinkError::date_parse(format!("expiration of {} hours is out of range", h))
            }),
        Some(ExpirationInput::Timestamp(ts)) => Ok(Some(ts)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_means_never() {
        assert_eq!(normalize_expiration(None).unwrap(), None);
    }

    #[test]
    fn test_negative_sentinel_means_never() {
        assert_eq!(
            normalize_expiration(Some(ExpirationInput::Hours(-1))).unwrap(),
            None
        );
        assert_eq!(
            normalize_expiration(Some(ExpirationInput::Hours(-100))).unwrap(),
            None
        );
    }

    #[test]
    fn test_relative_hours() {
        let before = Utc::now();
        let result = normalize_expiration(Some(ExpirationInput::Hours(24)))
            .unwrap()
            .unwrap();
        let after = Utc::now();

        assert!(result >= before + Duration::hours(24));
        assert!(result <= after + Duration::hours(24));
    }

    #[test]
    fn test_zero_hours_is_now() {
        let before = Utc::now();
        let result = normalize_expiration(Some(ExpirationInput::Hours(0)))
            .unwrap()
            .unwrap();
        assert!(result >= before);
        assert!(result <= Utc::now());
    }

    #[test]
    fn test_absolute_timestamp_passes_through() {
        let ts = "2030-06-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            normalize_expiration(Some(ExpirationInput::Timestamp(ts))).unwrap(),
            Some(ts)
        );
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = normalize_expiration(Some(ExpirationInput::Hours(i64::MAX)));
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_formats_deserialize() {
        let hours: ExpirationInput = serde_json::from_str("-1").unwrap();
        assert_eq!(hours, ExpirationInput::Hours(-1));

        let ts: ExpirationInput = serde_json::from_str("\"2030-06-01T12:00:00Z\"").unwrap();
        assert!(matches!(ts, ExpirationInput::Timestamp(_)));
    }
}
