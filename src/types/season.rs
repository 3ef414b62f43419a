//! Calendar seasons and the month → season classification used throughout the crate.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed, calendar-derived seasons.
///
/// Seasons follow the meteorological convention for the northern hemisphere:
/// December–February is winter, March–May spring, June–August summer and
/// September–November autumn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// All seasons, in the order they occur within a calendar year.
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];

    /// Maps a 1-indexed calendar month to its season.
    pub(crate) fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    /// The lowercase label stored in the `season` column.
    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

/// Allows formatting a `Season` using its lowercase label.
///
/// # Examples
///
/// ```
/// use seasonal_temps::Season;
///
/// assert_eq!(Season::Autumn.to_string(), "autumn");
/// ```
impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the four season labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown season label '{0}'")]
pub struct ParseSeasonError(pub String);

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            _ => Err(ParseSeasonError(s.to_string())),
        }
    }
}

/// Classifies any calendar date (or date-time) into its [`Season`].
///
/// The mapping only looks at the month and is total: every valid date
/// yields exactly one season.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seasonal_temps::{classify_season, Season};
///
/// let date = NaiveDate::from_ymd_opt(2023, 7, 20).unwrap();
/// assert_eq!(classify_season(date), Season::Summer);
/// ```
pub fn classify_season(date: impl Datelike) -> Season {
    Season::from_month(date.month())
}

/// The season of today's date in the local time zone.
pub fn current_season() -> Season {
    classify_season(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_classify_reference_dates() {
        assert_eq!(classify_season(date(2023, 1, 15)), Season::Winter);
        assert_eq!(classify_season(date(2023, 4, 1)), Season::Spring);
        assert_eq!(classify_season(date(2023, 7, 20)), Season::Summer);
        assert_eq!(classify_season(date(2023, 10, 5)), Season::Autumn);
    }

    #[test]
    fn test_every_month_maps_to_expected_season() {
        let expected = [
            Season::Winter, // Jan
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter, // Dec
        ];
        for (idx, season) in expected.iter().enumerate() {
            let month = idx as u32 + 1;
            assert_eq!(
                classify_season(date(2021, month, 1)),
                *season,
                "month {}",
                month
            );
        }
    }

    #[test]
    fn test_classify_datetime_and_month_boundaries() {
        let late_feb = NaiveDateTime::parse_from_str("2024-02-29 23:59:59", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(classify_season(late_feb), Season::Winter);
        assert_eq!(classify_season(date(2024, 3, 1)), Season::Spring);
        assert_eq!(classify_season(date(2024, 11, 30)), Season::Autumn);
        assert_eq!(classify_season(date(2024, 12, 1)), Season::Winter);
    }

    #[test]
    fn test_label_round_trip_and_parse_errors() {
        for season in Season::ALL {
            assert_eq!(season.label().parse::<Season>(), Ok(season));
        }
        assert_eq!(" Summer ".parse::<Season>(), Ok(Season::Summer));
        assert_eq!(
            "monsoon".parse::<Season>(),
            Err(ParseSeasonError("monsoon".to_string()))
        );
    }

    #[test]
    fn test_current_season_is_one_of_all() {
        assert!(Season::ALL.contains(&current_season()));
    }
}
