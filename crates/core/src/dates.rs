//! Target date selection for a sync run.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use harvestmine_domain::{Result, SyncError};

/// Which calendar days a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelection {
    Today,
    Yesterday,
    /// Monday to Friday of the previous week
    LastWeek,
    Day(NaiveDate),
    /// Every day of a calendar month
    Month { year: i32, month: u32 },
}

impl DateSelection {
    /// Parse an explicit `--date` argument.
    ///
    /// Accepts `YYYY-MM-DD`, `DD-MM-YYYY` or `MM/YYYY` (whole month).
    ///
    /// # Errors
    /// `SyncError::InvalidInput` for any other shape or an impossible date.
    pub fn parse_date(raw: &str) -> Result<Self> {
        let raw = raw.trim();

        if let Some((month, year)) = raw.split_once('/') {
            let month: u32 = month.trim().parse().map_err(|_| invalid_date(raw))?;
            let year: i32 = year.trim().parse().map_err(|_| invalid_date(raw))?;
            if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                return Err(invalid_date(raw));
            }
            return Ok(Self::Month { year, month });
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%d-%m-%Y"))
            .map(Self::Day)
            .map_err(|_| invalid_date(raw))
    }

    /// Expand the selection relative to `today`
    #[must_use]
    pub fn resolve(&self, today: NaiveDate) -> BTreeSet<NaiveDate> {
        match *self {
            Self::Today => BTreeSet::from([today]),
            Self::Yesterday => today.pred_opt().into_iter().collect(),
            Self::LastWeek => previous_work_week(today),
            Self::Day(date) => BTreeSet::from([date]),
            Self::Month { year, month } => month_days(year, month),
        }
    }
}

fn previous_work_week(today: NaiveDate) -> BTreeSet<NaiveDate> {
    let this_monday = today.week(Weekday::Mon).first_day();
    let Some(last_monday) = this_monday.checked_sub_days(Days::new(7)) else {
        return BTreeSet::new();
    };
    last_monday.iter_days().take(5).collect()
}

fn month_days(year: i32, month: u32) -> BTreeSet<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return BTreeSet::new();
    };
    first.iter_days().take_while(|day| day.month() == month).collect()
}

fn invalid_date(raw: &str) -> SyncError {
    SyncError::InvalidInput(format!(
        "Unrecognised date '{raw}'; expected YYYY-MM-DD, DD-MM-YYYY or MM/YYYY"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_and_yesterday() {
        let today = date(2024, 3, 1);
        assert_eq!(DateSelection::Today.resolve(today), BTreeSet::from([today]));
        assert_eq!(DateSelection::Yesterday.resolve(today), BTreeSet::from([date(2024, 2, 29)]));
    }

    #[test]
    fn last_week_is_previous_monday_to_friday() {
        // Wednesday
        let days = DateSelection::LastWeek.resolve(date(2024, 3, 13));
        let expected: BTreeSet<_> = (4..=8).map(|d| date(2024, 3, d)).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn last_week_from_a_monday() {
        let days = DateSelection::LastWeek.resolve(date(2024, 3, 11));
        assert_eq!(days.first(), Some(&date(2024, 3, 4)));
        assert_eq!(days.last(), Some(&date(2024, 3, 8)));
    }

    #[test]
    fn last_week_from_a_sunday() {
        let days = DateSelection::LastWeek.resolve(date(2024, 3, 17));
        assert_eq!(days.first(), Some(&date(2024, 3, 4)));
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn parses_iso_and_european_dates() {
        assert_eq!(
            DateSelection::parse_date("2024-03-04").unwrap(),
            DateSelection::Day(date(2024, 3, 4))
        );
        assert_eq!(
            DateSelection::parse_date("04-03-2024").unwrap(),
            DateSelection::Day(date(2024, 3, 4))
        );
    }

    #[test]
    fn month_selection_covers_valid_days_only() {
        let selection = DateSelection::parse_date("02/2024").unwrap();
        assert_eq!(selection, DateSelection::Month { year: 2024, month: 2 });

        let days = selection.resolve(date(2030, 1, 1));
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["", "tomorrow", "13/2024", "2024-02-30", "aa/bb"] {
            let err = DateSelection::parse_date(raw).expect_err(raw);
            assert!(matches!(err, SyncError::InvalidInput(_)));
        }
    }
}
