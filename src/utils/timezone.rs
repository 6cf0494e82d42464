use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::DATETIME_FORMAT;
use crate::error::AppError;

/// Timezone used to place completions on calendar days
#[derive(Debug, Clone, Copy, Default)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value.map(str::trim) else {
            return Ok(Timezone::Local);
        };
        if raw.is_empty() || raw.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(raw)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: raw.to_string(),
            })
    }

    pub fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        let offset = match self {
            Timezone::Local => utc.with_timezone(&Local).offset().fix(),
            Timezone::Named(tz) => utc.with_timezone(&tz).offset().fix(),
        };
        utc.with_timezone(&offset)
    }

    /// Calendar day of a completion in this timezone
    pub fn local_date(self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_fixed_offset(utc).date_naive()
    }

    pub fn format(self, utc: DateTime<Utc>) -> String {
        self.to_fixed_offset(utc).format(DATETIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn parse_missing_or_blank_is_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
        assert!(matches!(Timezone::parse(Some("  ")).unwrap(), Timezone::Local));
        assert!(matches!(Timezone::parse(Some("LOCAL")).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_utc_aliases() {
        for alias in ["utc", "UTC", "z", " Z "] {
            assert!(matches!(
                Timezone::parse(Some(alias)).unwrap(),
                Timezone::Named(chrono_tz::UTC)
            ));
        }
    }

    #[test]
    fn parse_iana_name() {
        let tz = Timezone::parse(Some("Europe/Berlin")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Europe::Berlin)));
    }

    #[test]
    fn parse_unknown_name_is_error() {
        let err = Timezone::parse(Some("Gym/Basement")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timezone: Gym/Basement");
    }

    #[test]
    fn local_date_crosses_midnight_west_of_utc() {
        let tz = Timezone::parse(Some("America/Los_Angeles")).unwrap();
        let date = tz.local_date(utc("2020-05-04T03:00:00Z"));
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 5, 3).unwrap());
    }

    #[test]
    fn format_in_named_zone() {
        let tz = Timezone::parse(Some("Asia/Tokyo")).unwrap();
        assert_eq!(tz.format(utc("2020-05-04T03:00:00Z")), "2020-05-04 12:00");
    }
}
