// File: crates/chart-core/src/time.rs
// Summary: Opaque date value used on both axes; parsing from cells, ordering and subtraction.

use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Epoch values above this are read as milliseconds.
const EPOCH_MS_THRESHOLD: f64 = 1e12;

/// A point in time. Comparable, and `a - b` yields the distance in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment(NaiveDateTime);

impl Moment {
    /// Parse a text cell. Accepts RFC 3339, `YYYY-MM-DD[ HH:MM[:SS]]` and numeric epochs.
    pub fn parse_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.naive_utc()));
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(dt));
            }
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return d.and_hms_opt(0, 0, 0).map(Self);
        }
        s.parse::<f64>().ok().and_then(Self::from_epoch)
    }

    /// Interpret a number as an epoch timestamp (seconds, or milliseconds past 1e12).
    pub fn from_epoch(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        let millis = if n.abs() > EPOCH_MS_THRESHOLD { n } else { n * 1000.0 };
        let millis = millis.round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis as i64).map(|dt| Self(dt.naive_utc()))
    }

    /// Seconds elapsed since `earlier` (negative if `earlier` is later).
    pub fn seconds_since(&self, earlier: Moment) -> f64 {
        self.0.signed_duration_since(earlier.0).num_milliseconds() as f64 / 1000.0
    }
}

impl Sub for Moment {
    type Output = f64;

    fn sub(self, rhs: Moment) -> f64 { self.seconds_since(rhs) }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let d = Moment::parse_str("2024-01-02").unwrap();
        let dt = Moment::parse_str("2024-01-02 12:00").unwrap();
        assert_eq!(dt - d, 12.0 * 3600.0);
        let rfc = Moment::parse_str("2024-01-02T13:00:00+01:00").unwrap();
        assert_eq!(rfc, dt);
    }

    #[test]
    fn numeric_text_is_an_epoch() {
        let a = Moment::parse_str("10").unwrap();
        let b = Moment::parse_str("20").unwrap();
        assert_eq!(b - a, 10.0);
        // milliseconds when large
        let ms = Moment::parse_str("1700000000000").unwrap();
        let s = Moment::from_epoch(1_700_000_000.0).unwrap();
        assert_eq!(ms, s);
    }

    #[test]
    fn rejects_words_and_non_finite() {
        assert!(Moment::parse_str("n/a").is_none());
        assert!(Moment::parse_str("   ").is_none());
        assert!(Moment::from_epoch(f64::NAN).is_none());
        assert!(Moment::from_epoch(f64::INFINITY).is_none());
    }
}
