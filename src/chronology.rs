//! The arithmetic core shared by all calendar systems.

use crate::types::MonthNameFormat;

/// A calendar's conversion rules and constant facts.
///
/// Implementations provide the raw Julian-day conversions and the
/// closed-form year/month structure of one calendar. Everything built
/// on top of those primitives (validation, date arithmetic, week
/// numbers, display strings) lives in `CalendarSystem`, which works
/// identically for every implementor.
///
/// The conversion primitives are pure formulas: they assume their
/// input is valid for the calendar and perform no range checks of
/// their own. `CalendarSystem` validates before calling them.
pub trait Chronology {
    /// Machine name of the calendar, e.g. `"gregorian"`.
    fn calendar_type(&self) -> &'static str;

    /// Julian day of the first supported day of the calendar.
    fn epoch(&self) -> i64;

    /// Earliest year the calendar supports (inclusive).
    fn earliest_valid_year(&self) -> i32;

    /// Latest year the calendar supports (inclusive).
    fn latest_valid_year(&self) -> i32;

    /// Whether the year sequence includes a year 0. When `false`,
    /// year -1 is immediately followed by year 1.
    fn has_year_zero(&self) -> bool {
        false
    }

    /// Whether leap years insert an extra month (rather than an extra
    /// day). Month counting across years must then walk year by year.
    fn has_leap_months(&self) -> bool {
        false
    }

    /// Converts a valid calendar date to its Julian day.
    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64;

    /// Converts a Julian day within the supported range back to a
    /// calendar date.
    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32);

    /// Whether the given year is a leap year under this calendar's rule.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Number of months in the given year.
    fn months_in_year(&self, _year: i32) -> i32 {
        12
    }

    /// Number of days in the given month.
    fn days_in_month(&self, year: i32, month: i32) -> i32;

    /// Number of days in the given year: first day of the following
    /// year minus first day of this one.
    #[allow(clippy::cast_possible_truncation)]
    fn days_in_year(&self, year: i32) -> i32 {
        let next = self.add_to_year(year, 1);
        (self.to_julian_day(next, 1, 1) - self.to_julian_day(year, 1, 1)) as i32
    }

    /// Adds years to a year number, skipping year 0 when the calendar
    /// has none.
    fn add_to_year(&self, year: i32, years: i32) -> i32 {
        let mut new_year = year + years;
        if !self.has_year_zero() {
            if year > 0 && new_year <= 0 {
                new_year -= 1;
            } else if year < 0 && new_year >= 0 {
                new_year += 1;
            }
        }
        new_year
    }

    /// Number of year steps from `from_year` to `to_year`, accounting
    /// for a missing year 0.
    fn year_difference(&self, from_year: i32, to_year: i32) -> i32 {
        let mut diff = to_year - from_year;
        if !self.has_year_zero() {
            if to_year > 0 && from_year < 0 {
                diff -= 1;
            } else if to_year < 0 && from_year > 0 {
                diff += 1;
            }
        }
        diff
    }

    /// Whether the calendar follows the lunar cycle.
    fn is_lunar(&self) -> bool {
        false
    }

    /// Whether the calendar follows the lunar cycle with solar-year
    /// corrections.
    fn is_lunisolar(&self) -> bool {
        false
    }

    /// Whether the calendar follows the solar year.
    fn is_solar(&self) -> bool {
        false
    }

    /// Whether the calendar extends backwards before its epoch.
    fn is_proleptic(&self) -> bool {
        false
    }

    /// Weekday of religious observance, 1 = Monday .. 7 = Sunday.
    fn week_day_of_pray(&self) -> i32;

    /// Untranslated name key for a month of a year, or `None` when the
    /// month number is out of range for that year.
    fn month_name(&self, month: i32, year: i32, format: MonthNameFormat) -> Option<&'static str>;
}
