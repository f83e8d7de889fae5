//! Relative sales periods.
//!
//! A period token such as `"last week"` resolves to the earliest `created_at`
//! that still counts as "sold within the period". Resolution is pure: callers
//! pass `now` in, nothing here reads the wall clock.
//!
//! | token             | start                                       |
//! |-------------------|---------------------------------------------|
//! | `last day`        | `now - 1 day`, time of day kept             |
//! | `last week`       | `now - 7 days`, time of day kept            |
//! | `last month`      | first day of the previous month, 00:00      |
//! | `last two months` | first day of the month two months back, 00:00 |
//! | `last year`       | January 1st of the previous year, 00:00     |
//!
//! All calendar arithmetic is UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use crate::order_actor::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    LastDay,
    LastWeek,
    LastMonth,
    LastTwoMonths,
    LastYear,
}

impl Period {
    /// Every period, from the most recent start to the furthest back.
    pub const ALL: [Period; 5] = [
        Period::LastDay,
        Period::LastWeek,
        Period::LastMonth,
        Period::LastTwoMonths,
        Period::LastYear,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Period::LastDay => "last day",
            Period::LastWeek => "last week",
            Period::LastMonth => "last month",
            Period::LastTwoMonths => "last two months",
            Period::LastYear => "last year",
        }
    }

    /// Inclusive lower bound on `created_at` for orders sold within this period.
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Period::LastDay => now - Duration::days(1),
            Period::LastWeek => now - Duration::days(7),
            Period::LastMonth => months_back_start(now, 1),
            Period::LastTwoMonths => months_back_start(now, 2),
            Period::LastYear => midnight(NaiveDate::from_ymd_opt(now.year() - 1, 1, 1)),
        }
    }
}

/// First instant of the month `months` calendar months before `now`'s month.
fn months_back_start(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let first_of_month = now.date_naive().with_day(1);
    midnight(first_of_month.and_then(|date| date.checked_sub_months(Months::new(months))))
}

// Dates out of chrono's range clamp to the earliest representable instant,
// which still admits every stored order.
fn midnight(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Period {
    type Err = OrderError;

    /// Tokens match exactly: no trimming, no case folding, no default.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.token() == token)
            .ok_or_else(|| OrderError::InvalidPeriod(token.to_string()))
    }
}

/// Resolve a period token against `now`.
pub fn resolve(token: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, OrderError> {
    Ok(token.parse::<Period>()?.start(now))
}
