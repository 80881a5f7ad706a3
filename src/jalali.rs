//! The Jalali (Persian) calendar.
//!
//! Uses Birashk's arithmetic rendition: years live in a grand cycle of
//! 2820 years holding 1,029,983 days, with the leap pattern derived
//! from the position inside the cycle. The first six months have 31
//! days, the next five 30, and Esfand 29 or 30.
//!
//! The epoch-base arithmetic uses truncating division, which is the
//! domain the formulas were derived for; the supported years 1..=9999
//! stay inside it.

use crate::chronology::Chronology;
use crate::consts::{JALALI_EPOCH, MAX_YEAR};
use crate::types::MonthNameFormat;

/// Days in the 2820-year grand cycle.
const DAYS_IN_GRAND_CYCLE: i64 = 1_029_983;

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
];

const MONTH_NAMES_POSSESSIVE: [&str; 12] = [
    "of Farvardin",
    "of Ordibehesht",
    "of Khordad",
    "of Tir",
    "of Mordad",
    "of Shahrivar",
    "of Mehr",
    "of Aban",
    "of Azar",
    "of Dey",
    "of Bahman",
    "of Esfand",
];

const MONTH_NAMES_SHORT_POSSESSIVE: [&str; 12] = [
    "of Far", "of Ord", "of Kho", "of Tir", "of Mor", "of Sha", "of Meh", "of Aba", "of Aza",
    "of Dey", "of Bah", "of Esf",
];

/// Year position within the grand cycle, offset so the pattern anchors
/// at year 475.
const fn cycle_year(year: i64) -> i64 {
    474 + (year - 474) % 2820
}

/// The Jalali calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jalali;

impl Chronology for Jalali {
    fn calendar_type(&self) -> &'static str {
        "jalali"
    }

    fn epoch(&self) -> i64 {
        JALALI_EPOCH
    }

    fn earliest_valid_year(&self) -> i32 {
        1
    }

    fn latest_valid_year(&self) -> i32 {
        MAX_YEAR
    }

    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64 {
        let year = i64::from(year);
        let month = i64::from(month);
        let epbase = year - 474;
        let epyear = cycle_year(year);
        let month_days = if month <= 7 {
            (month - 1) * 31
        } else {
            (month - 1) * 30 + 6
        };

        i64::from(day)
            + month_days
            + (epyear * 682 - 110) / 2816
            + (epyear - 1) * 365
            + epbase / 2820 * DAYS_IN_GRAND_CYCLE
            + JALALI_EPOCH
            - 1
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32) {
        let depoch = julian_day - self.to_julian_day(475, 1, 1);
        let cycle = depoch.div_euclid(DAYS_IN_GRAND_CYCLE);
        let cyear = depoch.rem_euclid(DAYS_IN_GRAND_CYCLE);

        let ycycle = if cyear == DAYS_IN_GRAND_CYCLE - 1 {
            2820
        } else {
            let aux1 = cyear / 366;
            let aux2 = cyear % 366;
            (2134 * aux1 + 2816 * aux2 + 2815) / 1_028_522 + aux1 + 1
        };
        let year = (ycycle + 2820 * cycle + 474) as i32;

        let day_in_year = julian_day - self.to_julian_day(year, 1, 1) + 1;
        let month_guess = if day_in_year <= 186 {
            (day_in_year + 30) / 31
        } else {
            (day_in_year - 6 + 29) / 30
        };
        let month = month_guess as i32;
        let day = (julian_day - self.to_julian_day(year, month, 1) + 1) as i32;
        (year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (cycle_year(i64::from(year)) + 38) * 682 % 2816 < 682
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        if month <= 6 {
            31
        } else if month <= 11 {
            30
        } else if self.is_leap_year(year) {
            30
        } else {
            29
        }
    }

    fn is_solar(&self) -> bool {
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
