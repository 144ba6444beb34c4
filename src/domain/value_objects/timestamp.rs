//! # Timestamp Value Object
//!
//! UTC instant recorded on snapshots and outbound quote requests.
//!
//! # Examples
//!
//! ```
//! use quote_configurator::domain::value_objects::timestamp::Timestamp;
//!
//! let saved = Timestamp::from_millis(1_700_000_000_000).unwrap();
//! assert_eq!(saved.timestamp_millis(), 1_700_000_000_000);
//! assert!(Timestamp::now().is_after(&saved));
//! ```

use chrono::{DateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A UTC timestamp with millisecond precision.
///
/// Sub-millisecond digits are truncated on construction and on parse, and
/// the value serializes as an RFC 3339 string with exactly three
/// fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema)]
#[schemars(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns Unix milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns true if this timestamp is strictly after `other`.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns the RFC 3339 representation with millisecond precision.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Returns the inner `DateTime`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Self::from(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn millis_roundtrip() {
        let ts = Timestamp::from_millis(1_704_067_200_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_704_067_200_123);
    }

    #[test]
    fn display_is_rfc3339_millis() {
        let ts = Timestamp::from_millis(1_704_067_200_123).unwrap();
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00.123Z");
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_millis(1_000).unwrap();
        let later = Timestamp::from_millis(2_000).unwrap();
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(earlier < later);
    }

    #[test]
    fn serializes_with_millisecond_precision() {
        let ts = Timestamp::from_millis(0).unwrap();
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"1970-01-01T00:00:00.000Z\""
        );

        let now = Timestamp::now();
        let json = serde_json::to_value(now).unwrap();
        let fraction = json.as_str().unwrap().rsplit('.').next().unwrap();
        assert_eq!(fraction.len(), "123Z".len());
        let back: Timestamp = serde_json::from_value(json).unwrap();
        assert_eq!(back, now);
    }

    #[test]
    fn parsing_truncates_to_milliseconds() {
        let parsed: Timestamp =
            serde_json::from_str("\"2024-01-01T02:00:00.123456789+02:00\"").unwrap();
        assert_eq!(parsed, Timestamp::from_millis(1_704_067_200_123).unwrap());
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }
}
