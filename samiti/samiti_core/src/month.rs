use chrono::{Datelike, NaiveDate};

use crate::date::Datetime;

const MIN_YEAR: i32 = 1970;
const MAX_YEAR: i32 = 9999;

/// Calendar month a fine is tagged with and a ledger is computed for.
/// Month boundaries are always evaluated in UTC; the window is half-open,
/// `[first day 00:00:00, first day of the next month 00:00:00)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::MonthOutOfRange(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }

        Ok(Self { year, month })
    }

    pub fn of(at: Datetime) -> Self {
        // Any chrono date carries a valid month and a year inside our range.
        Self {
            year: at.year(),
            month: at.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn window(&self) -> (Datetime, Datetime) {
        (month_start(self.year, self.month), month_start(self.next().year, self.next().month))
    }

    pub fn contains(&self, at: Datetime) -> bool {
        let (start, end) = self.window();
        start <= at && at < end
    }

    fn next(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            m => Self {
                year: self.year,
                month: m + 1,
            },
        }
    }
}

fn month_start(year: i32, month: u32) -> Datetime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("validated month starts on a valid date")
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
        .and_utc()
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("month {0} is not in 1..=12")]
    MonthOutOfRange(u32),
    #[error("year {0} is not in {MIN_YEAR}..={MAX_YEAR}")]
    YearOutOfRange(i32),
    #[error("expected YYYY-MM")]
    Malformed,
}

impl std::str::FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or(Error::Malformed)?;
        let year = year.parse().map_err(|_| Error::Malformed)?;
        let month = month.parse().map_err(|_| Error::Malformed)?;

        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn month(s: &str) -> MonthKey {
        s.parse().expect("month literal")
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!(month("2024-03").to_string(), "2024-03");
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("2024".parse::<MonthKey>().is_err());
        assert!("03-2024".parse::<MonthKey>().is_err());
    }

    #[test]
    fn window_is_half_open_utc() {
        let march = month("2024-03");

        let first_instant = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let last_instant = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
        let next_month = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();

        assert!(march.contains(first_instant));
        assert!(march.contains(last_instant));
        assert!(!march.contains(next_month));
    }

    #[test]
    fn december_rolls_into_january() {
        let december = month("2023-12");
        let (_, end) = december.window();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }
}
