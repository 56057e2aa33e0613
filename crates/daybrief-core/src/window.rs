//! Time-window construction.
//!
//! This module turns the user's window flags plus a reference date into a
//! [`QueryDescriptor`] that the provider boundary can translate into
//! provider arguments.
//!
//! Week-start conventions differ between record kinds and are carried by
//! [`WeekConvention`] rather than hardcoded: the events pipeline counts
//! weeks from Monday with a fixed upper bound, the messages pipeline from
//! Sunday with a progressive upper bound.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A provider query window.
///
/// Either a half-open calendar-date interval `[from, to)` or an opaque
/// provider token such as `newer_than:1d`. Exactly one is active per
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryDescriptor {
    /// A half-open date interval: `from` inclusive, `to` exclusive.
    Range { from: NaiveDate, to: NaiveDate },
    /// An opaque relative-time token understood by the provider.
    Token(String),
}

impl QueryDescriptor {
    /// Creates the single-day window `[day, day+1)`.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::Range {
            from: day,
            to: day.succ_opt().expect("valid successor date"),
        }
    }
}

/// The requested time window, after flag-priority resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// A single explicit calendar day.
    Date(NaiveDate),
    /// The 7 days before the most recent week-start boundary.
    LastWeek,
    /// The 7 days from the next week-start strictly after today.
    NextWeek,
    /// The week containing today.
    ThisWeek,
    /// The single day before today.
    Yesterday,
    /// The single day after today.
    Tomorrow,
    /// Today (the default).
    Today,
}

/// Raw window flags as given on the command line.
///
/// Multiple flags may be set at once; [`WindowFlags::resolve`] applies the
/// fixed priority: explicit date, then last/next week, then this week, then
/// yesterday/tomorrow, then today.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowFlags {
    pub date: Option<NaiveDate>,
    pub last_week: bool,
    pub next_week: bool,
    pub this_week: bool,
    pub yesterday: bool,
    pub tomorrow: bool,
    pub today: bool,
}

impl WindowFlags {
    /// Resolves the flags into a single window mode.
    pub fn resolve(&self) -> WindowMode {
        if let Some(day) = self.date {
            WindowMode::Date(day)
        } else if self.last_week {
            WindowMode::LastWeek
        } else if self.next_week {
            WindowMode::NextWeek
        } else if self.this_week {
            WindowMode::ThisWeek
        } else if self.yesterday {
            WindowMode::Yesterday
        } else if self.tomorrow {
            WindowMode::Tomorrow
        } else {
            WindowMode::Today
        }
    }
}

/// Week-start and bounding conventions for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekConvention {
    /// First day of the week.
    pub week_start: Weekday,
    /// When true, "this week" ends after today instead of at the end of
    /// the calendar week.
    pub progressive_this_week: bool,
    /// Relative token used for the default "today" window, for providers
    /// that prefer tokens over explicit bounds.
    pub today_token: Option<&'static str>,
}

impl WeekConvention {
    fn days_since_start(&self, day: NaiveDate) -> u64 {
        u64::from(day.weekday().days_since(self.week_start))
    }

    /// The most recent occurrence of the week-start day, counting today.
    pub fn current_week_start(&self, today: NaiveDate) -> NaiveDate {
        today - Days::new(self.days_since_start(today))
    }

    /// The next occurrence of the week-start day strictly after today.
    pub fn next_week_start(&self, today: NaiveDate) -> NaiveDate {
        today + Days::new(7 - self.days_since_start(today))
    }
}

/// Builds the query descriptor for a window mode.
///
/// All interval math is calendar-day math on `today`, the reference date in
/// local time; day boundaries are calendar-day boundaries, not 24h offsets
/// from the current moment.
pub fn build_query(mode: WindowMode, today: NaiveDate, convention: WeekConvention) -> QueryDescriptor {
    match mode {
        WindowMode::Date(day) => QueryDescriptor::single_day(day),
        WindowMode::LastWeek => {
            let current_start = convention.current_week_start(today);
            QueryDescriptor::Range {
                from: current_start - Days::new(7),
                to: current_start,
            }
        }
        WindowMode::NextWeek => {
            let start = convention.next_week_start(today);
            QueryDescriptor::Range {
                from: start,
                to: start + Days::new(7),
            }
        }
        WindowMode::ThisWeek => {
            let start = convention.current_week_start(today);
            let to = if convention.progressive_this_week {
                today.succ_opt().expect("valid successor date")
            } else {
                start + Days::new(7)
            };
            QueryDescriptor::Range { from: start, to }
        }
        WindowMode::Yesterday => {
            QueryDescriptor::single_day(today.pred_opt().expect("valid predecessor date"))
        }
        WindowMode::Tomorrow => {
            QueryDescriptor::single_day(today.succ_opt().expect("valid successor date"))
        }
        WindowMode::Today => match convention.today_token {
            Some(token) => QueryDescriptor::Token(token.to_string()),
            None => QueryDescriptor::single_day(today),
        },
    }
}
