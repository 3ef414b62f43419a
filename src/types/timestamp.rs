use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Conversion into the naive wall-clock timestamp stored on a record.
///
/// Values carrying an offset keep their local wall-clock time, so the
/// derived season reflects the date as it was recorded.
pub trait IntoTimestamp {
    fn into_timestamp(self) -> Option<NaiveDateTime>;
}

impl IntoTimestamp for NaiveDateTime {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        Some(self)
    }
}

impl IntoTimestamp for NaiveDate {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl IntoTimestamp for DateTime<Utc> {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        Some(self.naive_utc())
    }
}

impl IntoTimestamp for DateTime<FixedOffset> {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        Some(self.naive_local())
    }
}

impl IntoTimestamp for &str {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        let value = self.trim();
        // RFC 3339 / ISO 8601 with offset (e.g. +02:00 or Z)
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return dt.into_timestamp();
        }
        for format in DATETIME_FORMATS {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(value, format) {
                return Some(naive_dt);
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(IntoTimestamp::into_timestamp)
    }
}

impl IntoTimestamp for String {
    fn into_timestamp(self) -> Option<NaiveDateTime> {
        self.as_str().into_timestamp()
    }
}
