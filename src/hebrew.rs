//! The Hebrew calendar.
//!
//! New year (1 Tishrey) is located with Hatcher's closed formulas: the
//! molad of Tishrey is computed in halakim (1/1080 of an hour) and then
//! shifted by the Molad Zaken and ADU postponement rules. Month layout
//! within a year depends only on the year's "character", the six
//! possible year lengths 353, 354, 355, 383, 384 and 385 days.
//!
//! Months are numbered in calendar order starting at Tishrey. In leap
//! years the inserted month Adar I is month 6 and Adar II is month 7,
//! so Nisan shifts from 7 to 8 and Elul becomes month 13.

use crate::chronology::Chronology;
use crate::consts::{HEBREW_EPOCH, MAX_YEAR};
use crate::types::MonthNameFormat;

/// Halakim in a day (24 hours of 1080 parts).
const HALAKIM_PER_DAY: i64 = 25_920;
/// Halakim in a mean lunar month (29d 12h 793p).
const HALAKIM_PER_MONTH: i64 = 765_433;

/// Days before the start of each month, by year character (rows, year
/// lengths 353/354/355/383/384/385) and month in calendar order
/// (columns). The 13th column is only meaningful for the leap rows.
const DAYS_PRECEDING_MONTH: [[i32; 13]; 6] = [
    [0, 30, 59, 88, 117, 147, 176, 206, 235, 265, 294, 324, 0],
    [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 0],
    [0, 30, 60, 90, 119, 149, 178, 208, 237, 267, 296, 326, 0],
    [0, 30, 59, 88, 117, 147, 177, 206, 236, 265, 295, 324, 354],
    [0, 30, 59, 89, 118, 148, 178, 207, 237, 266, 296, 325, 355],
    [0, 30, 60, 90, 119, 149, 179, 209, 238, 267, 297, 326, 356],
];

/// Month names indexed by traditional month number: 1..=12 are
/// Tishrey..Elul, 13 and 14 are Adar I and Adar II (index 0 unused).
const MONTH_NAMES: [&str; 15] = [
    "", "Tishrey", "Heshvan", "Kislev", "Tevet", "Shvat", "Adar", "Nisan", "Iyar", "Sivan",
    "Tamuz", "Av", "Elul", "Adar I", "Adar II",
];

const MONTH_NAMES_POSSESSIVE: [&str; 15] = [
    "",
    "of Tishrey",
    "of Heshvan",
    "of Kislev",
    "of Tevet",
    "of Shvat",
    "of Adar",
    "of Nisan",
    "of Iyar",
    "of Sivan",
    "of Tamuz",
    "of Av",
    "of Elul",
    "of Adar I",
    "of Adar II",
];

/// Julian day of 1 Tishrey of the given year (Hatcher formula G).
fn julian_day_of_tishri1(year: i32) -> i64 {
    let year = i64::from(year);
    let t = 31_524 + HALAKIM_PER_MONTH * ((235 * year - 234) / 19);
    let mut d = t / HALAKIM_PER_DAY;
    let t1 = t % HALAKIM_PER_DAY;
    let w = 1 + d % 7;
    let e = ((7 * year + 13) % 19) / 12;
    let e1 = ((7 * year + 6) % 19) / 12;

    if t1 >= 19_940
        || (t1 >= 9_924 && w == 3 && e == 0)
        || (t1 >= 16_788 && w == 2 && e == 0 && e1 == 1)
    {
        d += 1;
    }
    d + (d + 5) % 7 % 2 + 347_997
}

/// Year containing the given Julian day (Hatcher formula H, with the
/// estimate corrected against the actual Tishrey 1 either way).
#[allow(clippy::cast_possible_truncation)]
fn year_of_julian_day(julian_day: i64) -> i32 {
    let m = HALAKIM_PER_DAY * (julian_day - 347_996) / HALAKIM_PER_MONTH + 1;
    let mut year = (19 * (m / 235) + (19 * (m % 235) - 2) / 235 + 1) as i32;
    while julian_day_of_tishri1(year) > julian_day {
        year -= 1;
    }
    while julian_day_of_tishri1(year + 1) <= julian_day {
        year += 1;
    }
    year
}

/// Character of a year, 1..=6, one per possible year length.
#[allow(clippy::cast_possible_truncation)]
fn character_of_year(year: i32) -> i32 {
    let length = julian_day_of_tishri1(year + 1) - julian_day_of_tishri1(year);
    let e = ((7 * i64::from(year) + 13) % 19) / 12;
    (length - 352 - 27 * e) as i32
}

fn days_preceding_month(character: i32, month: i32) -> i32 {
    debug_assert!((1..=6).contains(&character));
    debug_assert!((1..=13).contains(&month));
    DAYS_PRECEDING_MONTH[(character - 1) as usize][(month - 1) as usize]
}

/// The Hebrew calendar system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hebrew;

impl Chronology for Hebrew {
    fn calendar_type(&self) -> &'static str {
        "hebrew"
    }

    fn epoch(&self) -> i64 {
        HEBREW_EPOCH
    }

    fn earliest_valid_year(&self) -> i32 {
        1
    }

    fn latest_valid_year(&self) -> i32 {
        MAX_YEAR
    }

    fn has_leap_months(&self) -> bool {
        true
    }

    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64 {
        julian_day_of_tishri1(year)
            + i64::from(days_preceding_month(character_of_year(year), month))
            + i64::from(day)
            - 1
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32) {
        let year = year_of_julian_day(julian_day);
        let day_in_year = (julian_day - julian_day_of_tishri1(year) + 1) as i32;
        let character = character_of_year(year);
        let months = self.months_in_year(year);

        let mut month = (day_in_year / 30 + 1).min(months);
        while month > 1 && days_preceding_month(character, month) >= day_in_year {
            month -= 1;
        }
        while month < months && days_preceding_month(character, month + 1) < day_in_year {
            month += 1;
        }

        let day = day_in_year - days_preceding_month(character, month);
        (year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (7 * year + 1) % 19 < 7
    }

    fn months_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) { 13 } else { 12 }
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        let character = character_of_year(year);
        let months = self.months_in_year(year);
        if month == months {
            // Elul, always the final 29 days of the year
            self.days_in_year(year) - days_preceding_month(character, month)
        } else {
            days_preceding_month(character, month + 1) - days_preceding_month(character, month)
        }
    }

    fn is_lunisolar(&self) -> bool {
        true
    }

    fn week_day_of_pray(&self) -> i32 {
        6 // Saturday
    }

    fn month_name(&self, month: i32, year: i32, format: MonthNameFormat) -> Option<&'static str> {
        let months = self.months_in_year(year);
        if !(1..=months).contains(&month) {
            return None;
        }

        // Map calendar-order numbering to the traditional name index
        let traditional = if self.is_leap_year(year) {
            match month {
                6 => 13,
                7 => 14,
                m if m > 7 => m - 1,
                m => m,
            }
        } else {
            month
        };
        let index = traditional as usize;

        // No separate short forms; the traditional names are short already
        let name = match format {
            MonthNameFormat::LongName | MonthNameFormat::ShortName => MONTH_NAMES[index],
            MonthNameFormat::LongNamePossessive | MonthNameFormat::ShortNamePossessive => {
                MONTH_NAMES_POSSESSIVE[index]
            }
        };
        Some(name)
    }
}

// --- gematria numerals ---

const ALEF: u32 = 0x05D0;
const TET: u32 = 0x05D8;
const YOD: u32 = 0x05D9;
const VAV: u32 = 0x05D5;
const ZAYIN: u32 = 0x05D6;
const QOF: u32 = 0x05E7;
const TAV: u32 = 0x05EA;
const TSADI: u32 = 0x05E6;

/// Letters for 1..=9 (alef..tet).
const UNITS: [char; 9] = [
    '\u{05D0}', '\u{05D1}', '\u{05D2}', '\u{05D3}', '\u{05D4}', '\u{05D5}', '\u{05D6}', '\u{05D7}',
    '\u{05D8}',
];

/// Letters for 100..=400 (qof..tav).
const HUNDREDS: [char; 4] = ['\u{05E7}', '\u{05E8}', '\u{05E9}', '\u{05EA}'];

/// Decade letters; index 0 is tet for the 15/16 special case.
const DECADE: [char; 10] = [
    '\u{05D8}', '\u{05D9}', '\u{05DB}', '\u{05DC}', '\u{05DE}', '\u{05E0}', '\u{05E1}', '\u{05E2}',
    '\u{05E4}', '\u{05E6}',
];

/// Values of the letters tet through tsadi when read as decades.
const DECADE_VALUES: [i32; 14] = [10, 20, 20, 30, 40, 40, 50, 50, 60, 70, 80, 80, 90, 90];

/// Renders a number as a Hebrew gematria numeral with the customary
/// geresh/gershayim punctuation. Out-of-range values fall back to
/// decimal digits. The millennium letter is dropped unless requested
/// (or the number is an exact multiple of 1000).
///
/// An exact multiple of 1000 renders as a bare millennium letter,
/// which is indistinguishable from the matching unit numeral and reads
/// back as the unit value. Hebrew year strings sit in the sixth
/// millennium where this never arises.
pub(crate) fn hebrew_numeral(mut num: i32, include_millennium: bool) -> String {
    if !(1..=9999).contains(&num) {
        return num.to_string();
    }

    let mut result = String::new();
    if num >= 1000 {
        if include_millennium || num % 1000 == 0 {
            result.push(UNITS[(num / 1000 - 1) as usize]);
        }
        num %= 1000;
    }
    if num >= 100 {
        while num >= 500 {
            result.push('\u{05EA}');
            num -= 400;
        }
        result.push(HUNDREDS[(num / 100 - 1) as usize]);
        num %= 100;
    }
    if num >= 10 {
        // 15 and 16 are written 9+6 and 9+7, avoiding letter pairs that
        // spell the divine name
        if num == 15 || num == 16 {
            num -= 9;
        }
        result.push(DECADE[(num / 10) as usize]);
        num %= 10;
    }
    if num > 0 {
        result.push(UNITS[(num - 1) as usize]);
    }

    let mut chars: Vec<char> = result.chars().collect();
    if chars.len() == 1 {
        chars.push('\'');
    } else {
        chars.insert(chars.len() - 1, '"');
    }
    chars.into_iter().collect()
}

/// Parses a Hebrew gematria numeral from the front of a string.
///
/// Returns the value and the number of bytes consumed, or `None` when
/// the string does not start with a numeral (or mixes decade letters
/// illegally). Geresh and gershayim marks are consumed and ignored.
pub(crate) fn parse_hebrew_numeral(s: &str) -> Option<(i32, usize)> {
    let chars: Vec<char> = s.chars().collect();
    let mut result = 0_i32;
    let mut consumed_bytes = 0_usize;
    let mut pos = 0_usize;

    while pos < chars.len() {
        let c = chars[pos];
        let code = c as u32;

        // Peel a following geresh/gershayim so lookahead sees the
        // letter after it
        let mut punct = 0_usize;
        let mut next = chars.get(pos + 1).copied();
        if matches!(next, Some('\'' | '"')) {
            punct = 1;
            next = chars.get(pos + 2).copied();
        }
        let next_code = next.map(|n| n as u32);
        let next_is_letter = next_code.is_some_and(|n| (ALEF..=TAV).contains(&n));

        if (ALEF..TET).contains(&code) {
            // alef..het: thousands when another letter follows
            if next_is_letter {
                result += ((code - ALEF + 1) * 1000) as i32;
            } else {
                result += (code - ALEF + 1) as i32;
            }
        } else if code == TET {
            // tet: 9000 when followed by a letter other than vav/zayin
            // (which would be the 15/16 digram instead)
            if next_is_letter && next_code != Some(VAV) && next_code != Some(ZAYIN) {
                result += 9000;
            } else {
                result += 9;
            }
        } else if (YOD..=TSADI).contains(&code) {
            // A decade letter may not be followed by another one
            if next_code.is_some_and(|n| n >= YOD) {
                return None;
            }
            result += DECADE_VALUES[(code - YOD) as usize];
        } else if (QOF..=TAV).contains(&code) {
            result += ((code - QOF + 1) * 100) as i32;
        } else {
            break;
        }

        consumed_bytes += c.len_utf8();
        if punct == 1 {
            consumed_bytes += 1; // geresh/gershayim are ASCII-width marks
        }
        pos += 1 + punct;
    }

    if consumed_bytes == 0 {
        None
    } else {
        Some((result, consumed_bytes))
    }
}
