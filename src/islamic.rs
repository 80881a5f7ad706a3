//! The civil (tabular) Islamic calendar.
//!
//! This is the arithmetic Hijri calendar used for civil record
//! keeping: a 30-year cycle of 10631 days with leap years at fixed
//! positions, not the observational calendar, so dates may differ by a
//! day or two from those announced by lunar sighting.

use crate::chronology::Chronology;
use crate::consts::{ISLAMIC_CIVIL_EPOCH, MAX_YEAR};
use crate::types::MonthNameFormat;

/// Days in a 30-year cycle (19 common years of 354 days and 11 leap
/// years of 355).
const DAYS_IN_CYCLE: i64 = 10_631;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi` al-Awwal",
    "Rabi` al-Thaani",
    "Jumaada al-Awwal",
    "Jumaada al-Thaani",
    "Rajab",
    "Sha`ban",
    "Ramadan",
    "Shawwal",
    "Thu al-Qi`dah",
    "Thu al-Hijjah",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Muh", "Saf", "R.A", "R.T", "J.A", "J.T", "Raj", "Sha", "Ram", "Shw", "Qid", "Hij",
];

const MONTH_NAMES_POSSESSIVE: [&str; 12] = [
    "of Muharram",
    "of Safar",
    "of Rabi` al-Awwal",
    "of Rabi` al-Thaani",
    "of Jumaada al-Awwal",
    "of Jumaada al-Thaani",
    "of Rajab",
    "of Sha`ban",
    "of Ramadan",
    "of Shawwal",
    "of Thu al-Qi`dah",
    "of Thu al-Hijjah",
];

const MONTH_NAMES_SHORT_POSSESSIVE: [&str; 12] = [
    "of Muh", "of Saf", "of R.A", "of R.T", "of J.A", "of J.T", "of Raj", "of Sha", "of Ram",
    "of Shw", "of Qid", "of Hij",
];

/// Days before the start of a month: months alternate 30/29.
const fn days_preceding_month(month: i64) -> i64 {
    29 * (month - 1) + month / 2
}

/// The civil Islamic (Hijri) calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IslamicCivil;

impl Chronology for IslamicCivil {
    fn calendar_type(&self) -> &'static str {
        "hijri"
    }

    fn epoch(&self) -> i64 {
        ISLAMIC_CIVIL_EPOCH
    }

    fn earliest_valid_year(&self) -> i32 {
        1
    }

    fn latest_valid_year(&self) -> i32 {
        MAX_YEAR
    }

    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64 {
        let year = i64::from(year);
        ISLAMIC_CIVIL_EPOCH - 1
            + 354 * (year - 1)
            + (3 + 11 * year) / 30
            + days_preceding_month(i64::from(month))
            + i64::from(day)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32) {
        let mut year =
            ((30 * (julian_day - ISLAMIC_CIVIL_EPOCH) + DAYS_IN_CYCLE + 15) / DAYS_IN_CYCLE) as i32;
        while self.to_julian_day(year, 1, 1) > julian_day {
            year -= 1;
        }
        while self.to_julian_day(year + 1, 1, 1) <= julian_day {
            year += 1;
        }

        let day_in_year = julian_day - self.to_julian_day(year, 1, 1) + 1;
        let mut month = (((day_in_year - 1) / 29 + 1).min(12)) as i32;
        while month > 1 && days_preceding_month(i64::from(month)) >= day_in_year {
            month -= 1;
        }
        while month < 12 && days_preceding_month(i64::from(month) + 1) < day_in_year {
            month += 1;
        }

        let day = (day_in_year - days_preceding_month(i64::from(month))) as i32;
        (year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (11 * year + 14) % 30 < 11
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month == 12 {
            if self.is_leap_year(year) { 30 } else { 29 }
        } else if month % 2 == 1 {
            30
        } else {
            29
        }
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) { 355 } else { 354 }
    }

    fn is_lunar(&self) -> bool {
        true
    }

    fn week_day_of_pray(&self) -> i32 {
        5 // Friday
    }

    fn month_name(&self, month: i32, year: i32, format: MonthNameFormat) -> Option<&'static str> {
        let _ = year;
        if !(1..=12).contains(&month) {
            return None;
        }
        let index = (month - 1) as usize;
        let name = match format {
            MonthNameFormat::LongName => MONTH_NAMES[index],
            MonthNameFormat::ShortName => MONTH_NAMES_SHORT[index],
            MonthNameFormat::LongNamePossessive => MONTH_NAMES_POSSESSIVE[index],
            MonthNameFormat::ShortNamePossessive => MONTH_NAMES_SHORT_POSSESSIVE[index],
        };
        Some(name)
    }
}
