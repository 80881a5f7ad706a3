use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A single day on the shared time axis, identified by its Julian Day
/// Number. Every calendar system converts to and from this axis, so
/// two `Date` values are equal exactly when they name the same day, no
/// matter which calendar produced them.
///
/// Ordering follows the Julian day: earlier days compare less.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
    Into,
)]
#[serde(transparent)]
#[display(fmt = "JD {_0}")]
pub struct Date(i64);

impl Date {
    /// Wraps a Julian Day Number.
    #[inline]
    pub const fn from_julian_day(julian_day: i64) -> Self {
        Self(julian_day)
    }

    /// Returns the Julian Day Number of this day.
    #[inline]
    pub const fn julian_day(self) -> i64 {
        self.0
    }

    /// Shifts by a number of days on the Julian day axis, without any
    /// range check. Validated day arithmetic lives on `CalendarSystem`.
    #[inline]
    pub(crate) const fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

/// Error type for calendar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The year/month/day triple does not name a day of the calendar.
    #[error("invalid date {year}-{month}-{day} in the {calendar} calendar")]
    InvalidDate {
        calendar: &'static str,
        year: i32,
        month: i32,
        day: i32,
    },

    /// The Julian day falls outside the calendar's supported range.
    #[error("Julian day {julian_day} is outside the supported range of the {calendar} calendar")]
    InvalidJulianDay {
        calendar: &'static str,
        julian_day: i64,
    },
}

/// Width selection for numeric date component strings.
///
/// `Long` zero-pads (4 digits for years, 2 for months and days);
/// `Short` is unpadded, with years reduced to their last two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    Short,
    Long,
}

/// Month name variants. The possessive forms are used in phrases like
/// "10th of Tamuz".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthNameFormat {
    LongName,
    ShortName,
    LongNamePossessive,
    ShortNamePossessive,
}

/// Weekday name variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekDayNameFormat {
    LongDayName,
    ShortDayName,
}
