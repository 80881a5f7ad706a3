//! The proleptic Gregorian calendar.
//!
//! Conversions use the Fliegel–Van Flandern integer formulas, which
//! are exact over the supported range (years -4712 to 9999). There is
//! no year 0: year -1 is immediately followed by year 1, so formulas
//! work on the astronomical year number internally.

use crate::chronology::Chronology;
use crate::consts::{GREGORIAN_EPOCH, GREGORIAN_MIN_YEAR, MAX_YEAR, SUNDAY};
use crate::types::MonthNameFormat;

/// Days in each month of a non-leap year (index 0 unused, months are
/// 1-indexed). February is adjusted by the leap year check.
const DAYS_IN_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES_POSSESSIVE: [&str; 12] = [
    "of January",
    "of February",
    "of March",
    "of April",
    "of May",
    "of June",
    "of July",
    "of August",
    "of September",
    "of October",
    "of November",
    "of December",
];

const MONTH_NAMES_SHORT_POSSESSIVE: [&str; 12] = [
    "of Jan", "of Feb", "of Mar", "of Apr", "of May", "of Jun", "of Jul", "of Aug", "of Sep",
    "of Oct", "of Nov", "of Dec",
];

/// Maps a calendar year to the astronomical year number used by the
/// conversion formulas (BCE years shift up by one, there is no year 0).
const fn astronomical_year(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// The Gregorian calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Chronology for Gregorian {
    fn calendar_type(&self) -> &'static str {
        "gregorian"
    }

    fn epoch(&self) -> i64 {
        GREGORIAN_EPOCH
    }

    fn earliest_valid_year(&self) -> i32 {
        GREGORIAN_MIN_YEAR
    }

    fn latest_valid_year(&self) -> i32 {
        MAX_YEAR
    }

    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64 {
        let a = i64::from((14 - month) / 12);
        let y = i64::from(astronomical_year(year)) + 4800 - a;
        let m = i64::from(month) + 12 * a - 3;

        i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32) {
        let a = julian_day + 32044;
        let b = (4 * a + 3) / 146_097;
        let c = a - 146_097 * b / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;

        let day = (e - (153 * m + 2) / 5 + 1) as i32;
        let month = (m + 3 - 12 * (m / 10)) as i32;
        let astro_year = (100 * b + d - 4800 + m / 10) as i32;
        let year = if astro_year <= 0 {
            astro_year - 1
        } else {
            astro_year
        };
        (year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        let y = astronomical_year(year);
        y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        debug_assert!((1..=12).contains(&month));

        if month == 2 && self.is_leap_year(year) {
            29
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    }

    fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) { 366 } else { 365 }
    }

    fn is_solar(&self) -> bool {
        true
    }

    fn is_proleptic(&self) -> bool {
        true
    }

    fn week_day_of_pray(&self) -> i32 {
        SUNDAY
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_julian_days() {
        let calendar = Gregorian;
        // J2000.0 reference day
        assert_eq!(calendar.to_julian_day(2000, 1, 1), 2_451_545);
        // Epoch of the common era
        assert_eq!(calendar.to_julian_day(1, 1, 1), GREGORIAN_EPOCH);
        // Unix epoch
        assert_eq!(calendar.to_julian_day(1970, 1, 1), 2_440_588);
    }

    #[test]
    fn test_from_julian_day_inverts() {
        let calendar = Gregorian;
        assert_eq!(calendar.from_julian_day(2_451_545), (2000, 1, 1));
        assert_eq!(calendar.from_julian_day(GREGORIAN_EPOCH), (1, 1, 1));
        assert_eq!(calendar.from_julian_day(GREGORIAN_EPOCH - 1), (-1, 12, 31));
    }

    #[test]
    fn test_round_trip_across_leap_boundaries() {
        let calendar = Gregorian;
        let cases = [
            (2024, 2, 29),
            (2024, 3, 1),
            (1900, 2, 28),
            (2000, 2, 29),
            (1582, 10, 15),
            (-4712, 1, 2),
            (9999, 12, 31),
        ];
        for &(y, m, d) in &cases {
            let jd = calendar.to_julian_day(y, m, d);
            assert_eq!(
                calendar.from_julian_day(jd),
                (y, m, d),
                "round trip failed for {y}-{m}-{d}"
            );
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: -1,
                is_leap: true,
                description: "astronomical year 0",
            },
            TestCase {
                year: -5,
                is_leap: true,
                description: "astronomical year -4",
            },
        ];

        for case in &cases {
            assert_eq!(
                Gregorian.is_leap_year(case.year),
                case.is_leap,
                "year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let calendar = Gregorian;
        assert_eq!(calendar.days_in_month(2024, 2), 29);
        assert_eq!(calendar.days_in_month(2023, 2), 28);
        assert_eq!(calendar.days_in_month(2023, 1), 31);
        assert_eq!(calendar.days_in_month(2023, 4), 30);
        assert_eq!(calendar.days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(Gregorian.days_in_year(2024), 366);
        assert_eq!(Gregorian.days_in_year(2023), 365);
        assert_eq!(Gregorian.days_in_year(1900), 365);
    }

    #[test]
    fn test_classification() {
        let calendar = Gregorian;
        assert!(calendar.is_solar());
        assert!(!calendar.is_lunar());
        assert!(!calendar.is_lunisolar());
        assert!(calendar.is_proleptic());
        assert!(!calendar.has_year_zero());
        assert_eq!(calendar.week_day_of_pray(), SUNDAY);
        assert_eq!(calendar.months_in_year(2024), 12);
    }

    #[test]
    fn test_month_names() {
        let calendar = Gregorian;
        assert_eq!(
            calendar.month_name(1, 2024, MonthNameFormat::LongName),
            Some("January")
        );
        assert_eq!(
            calendar.month_name(12, 2024, MonthNameFormat::ShortName),
            Some("Dec")
        );
        assert_eq!(
            calendar.month_name(3, 2024, MonthNameFormat::LongNamePossessive),
            Some("of March")
        );
        assert_eq!(calendar.month_name(0, 2024, MonthNameFormat::LongName), None);
        assert_eq!(calendar.month_name(13, 2024, MonthNameFormat::LongName), None);
    }

    #[test]
    fn test_monotonic_over_month_boundary() {
        let calendar = Gregorian;
        let mut prev = calendar.to_julian_day(2023, 12, 30);
        for &(y, m, d) in &[(2023, 12, 31), (2024, 1, 1), (2024, 1, 2)] {
            let jd = calendar.to_julian_day(y, m, d);
            assert_eq!(jd, prev + 1);
            prev = jd;
        }
    }
}
