//! The generic calendar engine.
//!
//! `AnyChronology` is the closed set of shipped calendars;
//! `CalendarSystem` pairs one of them with a [`Localizer`] and builds
//! everything else on the raw conversion primitives: validation, date
//! arithmetic, ISO week numbering, component strings and their parsers.

use std::fmt;

use crate::chronology::Chronology;
use crate::consts::{DAYS_IN_WEEK, WEEK_DAY_NAMES, WEEK_DAY_NAMES_SHORT};
use crate::gregorian::Gregorian;
use crate::hebrew::{self, Hebrew};
use crate::islamic::IslamicCivil;
use crate::jalali::Jalali;
use crate::locale::{DefaultLocalizer, Localizer};
use crate::prelude::*;
use crate::types::{Date, DateError, MonthNameFormat, StringFormat, WeekDayNameFormat};

/// Weekday of a Julian day, 1 = Monday .. 7 = Sunday. Julian day 0
/// fell on a Monday, and the 7-day week runs unbroken over the whole
/// axis.
#[allow(clippy::cast_possible_truncation)]
const fn weekday(julian_day: i64) -> i32 {
    (julian_day.rem_euclid(7) + 1) as i32
}

/// One of the shipped calendars.
///
/// A closed enum rather than a trait object: the set of calendars is
/// fixed, and matching keeps the engine free of dynamic dispatch at
/// its hot conversion paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum AnyChronology {
    Gregorian(Gregorian),
    Hebrew(Hebrew),
    IslamicCivil(IslamicCivil),
    Jalali(Jalali),
}

impl AnyChronology {
    fn inner(&self) -> &dyn Chronology {
        match self {
            Self::Gregorian(c) => c,
            Self::Hebrew(c) => c,
            Self::IslamicCivil(c) => c,
            Self::Jalali(c) => c,
        }
    }
}

// Every method is forwarded, defaults included, so per-calendar
// overrides (13-month years, closed-form year lengths) stay in effect.
impl Chronology for AnyChronology {
    fn calendar_type(&self) -> &'static str {
        self.inner().calendar_type()
    }

    fn epoch(&self) -> i64 {
        self.inner().epoch()
    }

    fn earliest_valid_year(&self) -> i32 {
        self.inner().earliest_valid_year()
    }

    fn latest_valid_year(&self) -> i32 {
        self.inner().latest_valid_year()
    }

    fn has_year_zero(&self) -> bool {
        self.inner().has_year_zero()
    }

    fn has_leap_months(&self) -> bool {
        self.inner().has_leap_months()
    }

    fn to_julian_day(&self, year: i32, month: i32, day: i32) -> i64 {
        self.inner().to_julian_day(year, month, day)
    }

    fn from_julian_day(&self, julian_day: i64) -> (i32, i32, i32) {
        self.inner().from_julian_day(julian_day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.inner().is_leap_year(year)
    }

    fn months_in_year(&self, year: i32) -> i32 {
        self.inner().months_in_year(year)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        self.inner().days_in_month(year, month)
    }

    fn days_in_year(&self, year: i32) -> i32 {
        self.inner().days_in_year(year)
    }

    fn add_to_year(&self, year: i32, years: i32) -> i32 {
        self.inner().add_to_year(year, years)
    }

    fn year_difference(&self, from_year: i32, to_year: i32) -> i32 {
        self.inner().year_difference(from_year, to_year)
    }

    fn is_lunar(&self) -> bool {
        self.inner().is_lunar()
    }

    fn is_lunisolar(&self) -> bool {
        self.inner().is_lunisolar()
    }

    fn is_solar(&self) -> bool {
        self.inner().is_solar()
    }

    fn is_proleptic(&self) -> bool {
        self.inner().is_proleptic()
    }

    fn week_day_of_pray(&self) -> i32 {
        self.inner().week_day_of_pray()
    }

    fn month_name(&self, month: i32, year: i32, format: MonthNameFormat) -> Option<&'static str> {
        self.inner().month_name(month, year, format)
    }
}

/// A calendar paired with a localizer.
///
/// All fallible operations return [`DateError`]; the only intentional
/// clamping is the day-of-month clamp in [`add_months`] and
/// [`add_years`].
///
/// [`add_months`]: CalendarSystem::add_months
/// [`add_years`]: CalendarSystem::add_years
pub struct CalendarSystem {
    chronology: AnyChronology,
    localizer: Box<dyn Localizer>,
}

impl fmt::Debug for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarSystem")
            .field("chronology", &self.chronology)
            .finish_non_exhaustive()
    }
}

impl CalendarSystem {
    /// Creates a system over the given calendar with the default
    /// (English, Monday-first) localizer.
    pub fn new(chronology: impl Into<AnyChronology>) -> Self {
        Self::with_localizer(chronology, Box::new(DefaultLocalizer))
    }

    /// Creates a system over the given calendar with a custom localizer.
    pub fn with_localizer(
        chronology: impl Into<AnyChronology>,
        localizer: Box<dyn Localizer>,
    ) -> Self {
        Self {
            chronology: chronology.into(),
            localizer,
        }
    }

    pub fn chronology(&self) -> &AnyChronology {
        &self.chronology
    }

    /// Machine name of the calendar, e.g. `"hebrew"`.
    pub fn calendar_type(&self) -> &'static str {
        self.chronology.calendar_type()
    }

    // --- validation ---

    /// Whether the year/month/day triple names a day of this calendar.
    pub fn is_valid(&self, year: i32, month: i32, day: i32) -> bool {
        let c = &self.chronology;
        (c.earliest_valid_year()..=c.latest_valid_year()).contains(&year)
            && (c.has_year_zero() || year != 0)
            && (1..=c.months_in_year(year)).contains(&month)
            && (1..=c.days_in_month(year, month)).contains(&day)
    }

    /// Whether the date falls inside this calendar's supported span.
    pub fn is_valid_date(&self, date: Date) -> bool {
        self.check_julian_day(date).is_ok()
    }

    fn check_julian_day(&self, date: Date) -> Result<(), DateError> {
        let c = &self.chronology;
        let first = c.to_julian_day(c.earliest_valid_year(), 1, 1);
        let last_year = c.latest_valid_year();
        let last_month = c.months_in_year(last_year);
        let last = c.to_julian_day(last_year, last_month, c.days_in_month(last_year, last_month));
        if (first..=last).contains(&date.julian_day()) {
            Ok(())
        } else {
            Err(DateError::InvalidJulianDay {
                calendar: self.calendar_type(),
                julian_day: date.julian_day(),
            })
        }
    }

    fn invalid_date(&self, year: i32, month: i32, day: i32) -> DateError {
        DateError::InvalidDate {
            calendar: self.calendar_type(),
            year,
            month,
            day,
        }
    }

    // --- construction and components ---

    /// Builds a [`Date`] from calendar components.
    pub fn date(&self, year: i32, month: i32, day: i32) -> Result<Date, DateError> {
        if !self.is_valid(year, month, day) {
            return Err(self.invalid_date(year, month, day));
        }
        Ok(Date::from_julian_day(
            self.chronology.to_julian_day(year, month, day),
        ))
    }

    /// Splits a date into its (year, month, day) components.
    pub fn year_month_day(&self, date: Date) -> Result<(i32, i32, i32), DateError> {
        self.check_julian_day(date)?;
        Ok(self.chronology.from_julian_day(date.julian_day()))
    }

    pub fn year(&self, date: Date) -> Result<i32, DateError> {
        Ok(self.year_month_day(date)?.0)
    }

    pub fn month(&self, date: Date) -> Result<i32, DateError> {
        Ok(self.year_month_day(date)?.1)
    }

    pub fn day(&self, date: Date) -> Result<i32, DateError> {
        Ok(self.year_month_day(date)?.2)
    }

    // --- calendar facts ---

    pub fn is_leap_year(&self, year: i32) -> bool {
        self.chronology.is_leap_year(year)
    }

    /// Leap status of the year containing the date.
    pub fn is_leap_year_date(&self, date: Date) -> Result<bool, DateError> {
        Ok(self.is_leap_year(self.year(date)?))
    }

    pub fn months_in_year(&self, year: i32) -> i32 {
        self.chronology.months_in_year(year)
    }

    /// Month count of the year containing the date.
    pub fn months_in_year_of(&self, date: Date) -> Result<i32, DateError> {
        Ok(self.months_in_year(self.year(date)?))
    }

    pub fn days_in_month(&self, year: i32, month: i32) -> Result<i32, DateError> {
        if !self.is_valid(year, month, 1) {
            return Err(self.invalid_date(year, month, 1));
        }
        Ok(self.chronology.days_in_month(year, month))
    }

    pub fn days_in_year(&self, year: i32) -> Result<i32, DateError> {
        if !self.is_valid(year, 1, 1) {
            return Err(self.invalid_date(year, 1, 1));
        }
        Ok(self.chronology.days_in_year(year))
    }

    /// Length of the month containing the date.
    pub fn days_in_month_of(&self, date: Date) -> Result<i32, DateError> {
        let (year, month, _) = self.year_month_day(date)?;
        Ok(self.chronology.days_in_month(year, month))
    }

    /// Length of the year containing the date.
    pub fn days_in_year_of(&self, date: Date) -> Result<i32, DateError> {
        let (year, _, _) = self.year_month_day(date)?;
        Ok(self.chronology.days_in_year(year))
    }

    /// Always 7; every supported calendar shares the planetary week.
    pub fn days_in_week(&self) -> i32 {
        DAYS_IN_WEEK
    }

    /// Ordinal of the date within its year, starting at 1.
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_of_year(&self, date: Date) -> Result<i32, DateError> {
        let (year, _, _) = self.year_month_day(date)?;
        Ok((date.julian_day() - self.chronology.to_julian_day(year, 1, 1) + 1) as i32)
    }

    /// Weekday of the date, 1 = Monday .. 7 = Sunday.
    ///
    /// The weekday is a property of the shared day axis, not of any one
    /// calendar: Julian day 0 fell on a Monday and the week has run
    /// uninterrupted since, so all calendars agree on it.
    pub fn day_of_week(&self, date: Date) -> Result<i32, DateError> {
        self.check_julian_day(date)?;
        Ok(weekday(date.julian_day()))
    }

    pub fn first_day_of_year(&self, year: i32) -> Result<Date, DateError> {
        self.date(year, 1, 1)
    }

    pub fn last_day_of_year(&self, year: i32) -> Result<Date, DateError> {
        if !self.is_valid(year, 1, 1) {
            return Err(self.invalid_date(year, 1, 1));
        }
        let month = self.chronology.months_in_year(year);
        self.date(year, month, self.chronology.days_in_month(year, month))
    }

    pub fn first_day_of_month(&self, year: i32, month: i32) -> Result<Date, DateError> {
        self.date(year, month, 1)
    }

    pub fn last_day_of_month(&self, year: i32, month: i32) -> Result<Date, DateError> {
        let first = self.date(year, month, 1)?;
        Ok(first.offset(i64::from(self.chronology.days_in_month(year, month)) - 1))
    }

    // --- arithmetic ---

    /// Shifts by whole days. No clamping: `add_days(add_days(d, n), -n)`
    /// returns `d` whenever both steps stay in range.
    pub fn add_days(&self, date: Date, days: i64) -> Result<Date, DateError> {
        self.check_julian_day(date)?;
        let shifted = date.offset(days);
        self.check_julian_day(shifted)?;
        Ok(shifted)
    }

    /// Shifts by whole months, keeping the day of month where possible.
    ///
    /// Fixed-length calendars use euclidean month arithmetic, so
    /// negative amounts work symmetrically and the day is clamped to
    /// the target month's length. Calendars with leap months instead
    /// step month by month, so a single step always reaches the
    /// adjacent month even across a thirteen-month year boundary.
    pub fn add_months(&self, date: Date, months: i32) -> Result<Date, DateError> {
        if self.chronology.has_leap_months() {
            return self.add_months_stepwise(date, months);
        }
        let (year, month, day) = self.year_month_day(date)?;
        let c = &self.chronology;
        let months_here = c.months_in_year(year);
        let month0 = month + months - 1;
        let new_year = c.add_to_year(year, month0.div_euclid(months_here));
        let new_month = month0.rem_euclid(months_here) + 1;
        let new_day = day.min(c.days_in_month(new_year, new_month));
        self.date(new_year, new_month, new_day)
    }

    /// Month steps expressed as day shifts: forward by the current
    /// month's length, backward by the previous month's.
    fn add_months_stepwise(&self, date: Date, months: i32) -> Result<Date, DateError> {
        let mut result = date;
        let mut remaining = months;
        while remaining > 0 {
            let length = self.days_in_month_of(result)?;
            result = self.add_days(result, i64::from(length))?;
            remaining -= 1;
        }
        while remaining < 0 {
            let day = self.day(result)?;
            let end_of_previous = result.offset(-i64::from(day));
            let length = self.days_in_month_of(end_of_previous)?;
            result = self.add_days(result, -i64::from(length))?;
            remaining += 1;
        }
        Ok(result)
    }

    /// Shifts by whole years, skipping year 0 where the calendar has
    /// none. Month and day are clamped into the target year, so a leap
    /// day moved to a common year becomes the last day of the month.
    pub fn add_years(&self, date: Date, years: i32) -> Result<Date, DateError> {
        let (year, month, day) = self.year_month_day(date)?;
        let c = &self.chronology;
        let new_year = c.add_to_year(year, years);
        let new_month = month.min(c.months_in_year(new_year));
        let new_day = day.min(c.days_in_month(new_year, new_month));
        self.date(new_year, new_month, new_day)
    }

    // --- differences ---

    /// Signed day count from `from` to `to`.
    pub fn days_difference(&self, from: Date, to: Date) -> i64 {
        to.julian_day() - from.julian_day()
    }

    /// Whole years elapsed from `from` to `to` (negative when `to` is
    /// earlier).
    pub fn years_difference(&self, from: Date, to: Date) -> Result<i32, DateError> {
        if to < from {
            return Ok(-self.years_difference(to, from)?);
        }
        let (y1, m1, d1) = self.year_month_day(from)?;
        let (y2, m2, d2) = self.year_month_day(to)?;
        if y1 == y2 {
            return Ok(0);
        }
        let diff = self.chronology.year_difference(y1, y2);
        if m2 > m1 || (m2 == m1 && d2 >= d1) {
            Ok(diff)
        } else {
            Ok(diff - 1)
        }
    }

    /// Whole months elapsed from `from` to `to`. Calendars with leap
    /// months are walked year by year, since their month counts vary.
    pub fn months_difference(&self, from: Date, to: Date) -> Result<i32, DateError> {
        if to < from {
            return Ok(-self.months_difference(to, from)?);
        }
        let (y1, m1, d1) = self.year_month_day(from)?;
        let (y2, m2, d2) = self.year_month_day(to)?;
        let c = &self.chronology;

        let months_in_preceding_years = if c.has_leap_months() {
            let mut total = 0;
            let mut year = y1;
            while year != y2 {
                total += c.months_in_year(year);
                year = c.add_to_year(year, 1);
            }
            total
        } else {
            c.year_difference(y1, y2) * c.months_in_year(y2)
        };

        let whole = months_in_preceding_years + m2 - m1;
        Ok(if d2 >= d1 { whole } else { whole - 1 })
    }

    // --- ISO week numbering ---

    /// ISO 8601 week number and the year that week belongs to.
    ///
    /// Weeks start on Monday; week 1 is the first containing a
    /// Thursday. Days before it belong to the last week of the previous
    /// year, and a year's final days may already fall in week 1 of the
    /// next.
    ///
    /// Days of the earliest supported year that precede its week 1
    /// belong to a year the calendar does not have and report an
    /// error.
    #[allow(clippy::cast_possible_truncation)]
    pub fn week_number(&self, date: Date) -> Result<(i32, i32), DateError> {
        let (year, _, _) = self.year_month_day(date)?;
        let c = &self.chronology;
        let first_of_year = c.to_julian_day(year, 1, 1);
        let year_length = i64::from(c.days_in_year(year));

        // guess that week 1 opens the year, then correct to the next
        // Monday when the year starts after Thursday
        let mut first_day_week1 = first_of_year;
        let week_day1 = weekday(first_day_week1);
        if week_day1 > 4 {
            first_day_week1 += i64::from(7 - week_day1 + 1);
        }

        let day_of_year = date.julian_day() - first_of_year + 1;

        if day_of_year < first_day_week1 - first_of_year + 1 {
            let previous = c.add_to_year(year, -1);
            return Ok((self.weeks_in_year(previous)?, previous));
        }

        let last_week_day = weekday(first_of_year + year_length - 1);
        if last_week_day < 4 && day_of_year >= year_length - i64::from(last_week_day) + 1 {
            return Ok((1, c.add_to_year(year, 1)));
        }

        if week_day1 < 5 {
            first_day_week1 -= i64::from(week_day1 - 1);
        }
        let week = ((date.julian_day() - first_day_week1) / 7 + 1) as i32;
        Ok((week, year))
    }

    /// Number of ISO weeks in the year, 52 or 53.
    pub fn weeks_in_year(&self, year: i32) -> Result<i32, DateError> {
        let last_day = self.last_day_of_year(year)?;
        let (week, week_year) = self.week_number(last_day)?;
        if week_year == year {
            Ok(week)
        } else {
            // the final days already belong to week 1 of the next year
            let (week, _) = self.week_number(last_day.offset(-7))?;
            Ok(week)
        }
    }

    /// First day of the week per the localizer, 1 = Monday .. 7 = Sunday.
    pub fn week_start_day(&self) -> i32 {
        self.localizer.week_start_day()
    }

    // --- classification passthrough ---

    pub fn is_lunar(&self) -> bool {
        self.chronology.is_lunar()
    }

    pub fn is_lunisolar(&self) -> bool {
        self.chronology.is_lunisolar()
    }

    pub fn is_solar(&self) -> bool {
        self.chronology.is_solar()
    }

    pub fn is_proleptic(&self) -> bool {
        self.chronology.is_proleptic()
    }

    /// Weekday of religious observance, 1 = Monday .. 7 = Sunday.
    pub fn week_day_of_pray(&self) -> i32 {
        self.chronology.week_day_of_pray()
    }

    // --- names ---

    /// Translated month name, or an empty string when the month number
    /// is out of range for that year.
    pub fn month_name(&self, month: i32, year: i32, format: MonthNameFormat) -> String {
        match self.chronology.month_name(month, year, format) {
            Some(key) => self.localizer.translate(key),
            None => String::new(),
        }
    }

    /// Translated weekday name (1 = Monday .. 7 = Sunday), or an empty
    /// string for out-of-range numbers.
    pub fn week_day_name(&self, weekday: i32, format: WeekDayNameFormat) -> String {
        if !(1..=DAYS_IN_WEEK).contains(&weekday) {
            return String::new();
        }
        let key = match format {
            WeekDayNameFormat::LongDayName => WEEK_DAY_NAMES[weekday as usize],
            WeekDayNameFormat::ShortDayName => WEEK_DAY_NAMES_SHORT[weekday as usize],
        };
        self.localizer.translate(key)
    }

    /// Translated name of the weekday a date falls on.
    pub fn day_of_week_name(&self, date: Date, format: WeekDayNameFormat) -> Result<String, DateError> {
        let weekday = self.day_of_week(date)?;
        Ok(self.week_day_name(weekday, format))
    }

    // --- component strings ---

    /// Whether numerals render as Hebrew gematria: a Hebrew calendar
    /// paired with a Hebrew-language localizer.
    fn uses_gematria(&self) -> bool {
        matches!(self.chronology, AnyChronology::Hebrew(_)) && self.localizer.language() == "he"
    }

    /// The year as display text. `Long` pads to four digits, `Short`
    /// keeps the last two (signed for negative years). Under a Hebrew
    /// localizer the year renders as a gematria numeral, with the
    /// millennium letter only in `Long`.
    pub fn year_string(&self, date: Date, format: StringFormat) -> Result<String, DateError> {
        let (year, _, _) = self.year_month_day(date)?;
        if self.uses_gematria() {
            return Ok(hebrew::hebrew_numeral(year, format == StringFormat::Long));
        }
        Ok(match format {
            StringFormat::Long => format!("{year:04}"),
            StringFormat::Short => format!("{:02}", year % 100),
        })
    }

    /// The month number as display text; `Long` pads to two digits.
    /// Months stay numeric in every locale.
    pub fn month_string(&self, date: Date, format: StringFormat) -> Result<String, DateError> {
        let (_, month, _) = self.year_month_day(date)?;
        Ok(match format {
            StringFormat::Long => format!("{month:02}"),
            StringFormat::Short => month.to_string(),
        })
    }

    /// The day of month as display text; `Long` pads to two digits.
    /// Under a Hebrew localizer the day renders as a gematria numeral.
    pub fn day_string(&self, date: Date, format: StringFormat) -> Result<String, DateError> {
        let (_, _, day) = self.year_month_day(date)?;
        if self.uses_gematria() {
            return Ok(hebrew::hebrew_numeral(day, false));
        }
        Ok(match format {
            StringFormat::Long => format!("{day:02}"),
            StringFormat::Short => day.to_string(),
        })
    }

    // --- component parsers ---

    /// Reads a year from the front of a string, returning the value and
    /// the number of bytes consumed (`None` when nothing matches).
    ///
    /// Up to four digits with an optional leading minus; under a Hebrew
    /// localizer, a gematria numeral instead. For the Hebrew calendar a
    /// parsed value below 1000 is taken to be in the sixth millennium.
    pub fn year_string_to_integer(&self, s: &str) -> Option<(i32, usize)> {
        let (value, length) = if self.uses_gematria() {
            hebrew::parse_hebrew_numeral(s)?
        } else {
            parse_integer(s, 4, true)?
        };
        if matches!(self.chronology, AnyChronology::Hebrew(_)) && (1..1000).contains(&value) {
            Some((value + 5000, length))
        } else {
            Some((value, length))
        }
    }

    /// Reads a month number (up to two digits) from the front of a
    /// string; value and bytes consumed.
    pub fn month_string_to_integer(&self, s: &str) -> Option<(i32, usize)> {
        parse_integer(s, 2, false)
    }

    /// Reads a day number (up to two digits, or a gematria numeral
    /// under a Hebrew localizer) from the front of a string.
    pub fn day_string_to_integer(&self, s: &str) -> Option<(i32, usize)> {
        if self.uses_gematria() {
            return hebrew::parse_hebrew_numeral(s);
        }
        parse_integer(s, 2, false)
    }
}

/// Greedy scan of up to `max_digits` ASCII digits (after an optional
/// minus sign when `allow_sign`); value and bytes consumed.
fn parse_integer(s: &str, max_digits: usize, allow_sign: bool) -> Option<(i32, usize)> {
    let bytes = s.as_bytes();
    let negative = allow_sign && bytes.first() == Some(&b'-');
    let start = usize::from(negative);

    let mut end = start;
    while end < bytes.len() && end - start < max_digits && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }

    let value: i32 = s[start..end].parse().ok()?;
    Some((if negative { -value } else { value }, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StringFormat::{Long, Short};

    fn gregorian() -> CalendarSystem {
        CalendarSystem::new(Gregorian)
    }

    fn hebrew_system() -> CalendarSystem {
        CalendarSystem::new(Hebrew)
    }

    struct HebrewLocale;

    impl Localizer for HebrewLocale {
        fn week_start_day(&self) -> i32 {
            7
        }
        fn language(&self) -> &str {
            "he"
        }
    }

    #[test]
    fn test_validation() {
        let system = gregorian();
        assert!(system.is_valid(2024, 2, 29));
        assert!(!system.is_valid(2023, 2, 29));
        assert!(!system.is_valid(2024, 13, 1));
        assert!(!system.is_valid(2024, 0, 1));
        assert!(!system.is_valid(2024, 1, 0));
        assert!(!system.is_valid(0, 1, 1)); // no year 0
        assert!(!system.is_valid(10_000, 1, 1));
        assert!(system.is_valid(-4712, 1, 2));
    }

    #[test]
    fn test_month_13_only_in_hebrew_leap_years() {
        assert!(hebrew_system().is_valid(5760, 13, 1)); // leap
        assert!(!hebrew_system().is_valid(5761, 13, 1));
        assert!(!gregorian().is_valid(2024, 13, 1));
        assert!(!CalendarSystem::new(IslamicCivil).is_valid(1420, 13, 1));
        assert!(!CalendarSystem::new(Jalali).is_valid(1378, 13, 1));
    }

    #[test]
    fn test_date_and_components() {
        let system = gregorian();
        let date = system.date(2000, 1, 1).unwrap();
        assert_eq!(date.julian_day(), 2_451_545);
        assert_eq!(system.year_month_day(date).unwrap(), (2000, 1, 1));
        assert_eq!(system.year(date).unwrap(), 2000);
        assert_eq!(system.month(date).unwrap(), 1);
        assert_eq!(system.day(date).unwrap(), 1);

        let err = system.date(2023, 2, 29).unwrap_err();
        assert!(matches!(err, DateError::InvalidDate { month: 2, day: 29, .. }));
    }

    #[test]
    fn test_cross_calendar_agreement() {
        // The same Julian day read through all four calendars
        let date = gregorian().date(2000, 1, 1).unwrap();
        assert_eq!(
            hebrew_system().year_month_day(date).unwrap(),
            (5760, 4, 23)
        );
        assert_eq!(
            CalendarSystem::new(IslamicCivil).year_month_day(date).unwrap(),
            (1420, 9, 24)
        );
        assert_eq!(
            CalendarSystem::new(Jalali).year_month_day(date).unwrap(),
            (1378, 10, 11)
        );
        assert_eq!(
            CalendarSystem::new(IslamicCivil).date(1420, 9, 24).unwrap(),
            date
        );
    }

    #[test]
    fn test_out_of_range_julian_day() {
        let system = hebrew_system();
        let err = system.year_month_day(Date::from_julian_day(0)).unwrap_err();
        assert!(matches!(err, DateError::InvalidJulianDay { julian_day: 0, .. }));
        assert!(!system.is_valid_date(Date::from_julian_day(0)));
        assert!(system.is_valid_date(Date::from_julian_day(2_451_545)));
    }

    #[test]
    fn test_day_of_week_and_year() {
        let system = gregorian();
        let saturday = system.date(2000, 1, 1).unwrap();
        assert_eq!(system.day_of_week(saturday).unwrap(), 6);
        let monday = system.date(2000, 1, 3).unwrap();
        assert_eq!(system.day_of_week(monday).unwrap(), 1);

        assert_eq!(system.day_of_year(saturday).unwrap(), 1);
        let last = system.date(2000, 12, 31).unwrap();
        assert_eq!(system.day_of_year(last).unwrap(), 366);
    }

    #[test]
    fn test_add_days_inverse() {
        let system = gregorian();
        let date = system.date(2024, 2, 28).unwrap();
        let shifted = system.add_days(date, 2).unwrap();
        assert_eq!(system.year_month_day(shifted).unwrap(), (2024, 3, 1));
        assert_eq!(system.add_days(shifted, -2).unwrap(), date);

        // shifting past the supported span fails instead of clamping
        let last = system.date(9999, 12, 31).unwrap();
        assert!(system.add_days(last, 1).is_err());
    }

    #[test]
    fn test_add_months() {
        let system = gregorian();
        let jan31 = system.date(2024, 1, 31).unwrap();
        let clamped = system.add_months(jan31, 1).unwrap();
        assert_eq!(system.year_month_day(clamped).unwrap(), (2024, 2, 29));

        let back = system.add_months(jan31, -1).unwrap();
        assert_eq!(system.year_month_day(back).unwrap(), (2023, 12, 31));

        let across = system.add_months(jan31, 13).unwrap();
        assert_eq!(system.year_month_day(across).unwrap(), (2025, 2, 28));
    }

    #[test]
    fn test_add_years() {
        let system = gregorian();
        let leap_day = system.date(2024, 2, 29).unwrap();
        let clamped = system.add_years(leap_day, 1).unwrap();
        assert_eq!(system.year_month_day(clamped).unwrap(), (2025, 2, 28));

        // year 0 is skipped going backwards
        let early = system.date(1, 3, 1).unwrap();
        let before = system.add_years(early, -1).unwrap();
        assert_eq!(system.year(before).unwrap(), -1);
    }

    #[test]
    fn test_hebrew_month_arithmetic() {
        let system = hebrew_system();
        // Elul is month 13 of the leap year 5760 but month 12 of 5761
        let elul = system.date(5760, 13, 10).unwrap();
        let next_year = system.add_years(elul, 1).unwrap();
        assert_eq!(system.year_month_day(next_year).unwrap(), (5761, 12, 10));

        // twelve steps from Nisan of the leap year reach Nisan of the
        // common year, Adar I and II folding into one Adar
        let nisan = system.date(5760, 8, 15).unwrap();
        let later = system.add_months(nisan, 12).unwrap();
        assert_eq!(system.year_month_day(later).unwrap(), (5761, 7, 15));
    }

    #[test]
    fn test_hebrew_add_months_reaches_adjacent_month() {
        let system = hebrew_system();
        // one month before Tishrey of a common year is Elul, the
        // thirteenth month of the preceding leap year
        let tishrey = system.date(5761, 1, 10).unwrap();
        let back = system.add_months(tishrey, -1).unwrap();
        assert_eq!(system.year_month_day(back).unwrap(), (5760, 13, 10));
        assert_eq!(system.add_months(back, 1).unwrap(), tishrey);
    }

    #[test]
    fn test_week_number_errors_before_first_week_of_earliest_year() {
        // 1 Muharram AH 1 is a Friday, so its week belongs to a year
        // before the calendar begins
        let system = CalendarSystem::new(IslamicCivil);
        let epoch = system.date(1, 1, 1).unwrap();
        assert!(system.week_number(epoch).is_err());
    }

    #[test]
    fn test_week_number_iso_boundaries() {
        let system = gregorian();
        let cases = [
            ((2000, 1, 1), (52, 1999)),
            ((2012, 12, 31), (1, 2013)),
            ((2004, 1, 1), (1, 2004)),
            ((2010, 1, 1), (53, 2009)),
        ];
        for ((y, m, d), expected) in cases {
            let date = system.date(y, m, d).unwrap();
            assert_eq!(system.week_number(date).unwrap(), expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_weeks_in_year() {
        let system = gregorian();
        assert_eq!(system.weeks_in_year(2020).unwrap(), 53);
        assert_eq!(system.weeks_in_year(2009).unwrap(), 53);
        assert_eq!(system.weeks_in_year(2005).unwrap(), 52);
        assert_eq!(system.weeks_in_year(1999).unwrap(), 52);
    }

    #[test]
    fn test_weeks_in_year_matches_last_day_week() {
        let system = gregorian();
        for year in [1999, 2004, 2005, 2009, 2012, 2020] {
            let last = system.last_day_of_year(year).unwrap();
            let (week, week_year) = system.week_number(last).unwrap();
            if week_year == year {
                assert_eq!(system.weeks_in_year(year).unwrap(), week, "year {year}");
            } else {
                assert_eq!(week, 1, "year {year}");
            }
        }
    }

    #[test]
    fn test_first_and_last_day_helpers() {
        let system = gregorian();
        assert_eq!(
            system.first_day_of_year(2024).unwrap(),
            system.date(2024, 1, 1).unwrap()
        );
        assert_eq!(
            system.last_day_of_year(2024).unwrap(),
            system.date(2024, 12, 31).unwrap()
        );
        assert_eq!(
            system.first_day_of_month(2024, 2).unwrap(),
            system.date(2024, 2, 1).unwrap()
        );
        assert_eq!(
            system.last_day_of_month(2024, 2).unwrap(),
            system.date(2024, 2, 29).unwrap()
        );
        assert!(system.last_day_of_month(2024, 13).is_err());
    }

    #[test]
    fn test_differences() {
        let system = gregorian();
        let from = system.date(2000, 1, 1).unwrap();
        let to = system.date(2024, 6, 15).unwrap();
        assert_eq!(system.days_difference(from, from), 0);
        assert_eq!(
            system.days_difference(from, system.date(2000, 1, 31).unwrap()),
            30
        );
        assert_eq!(system.years_difference(from, to).unwrap(), 24);
        assert_eq!(system.years_difference(to, from).unwrap(), -24);

        // one month is complete only once the day of month is reached
        let jan31 = system.date(2024, 1, 31).unwrap();
        let feb29 = system.date(2024, 2, 29).unwrap();
        assert_eq!(system.months_difference(jan31, feb29).unwrap(), 0);
        let mar31 = system.date(2024, 3, 31).unwrap();
        assert_eq!(system.months_difference(jan31, mar31).unwrap(), 2);
    }

    #[test]
    fn test_hebrew_months_difference_walks_leap_years() {
        let system = hebrew_system();
        let from = system.date(5760, 1, 1).unwrap(); // 13-month year
        let to = system.date(5761, 1, 1).unwrap();
        assert_eq!(system.months_difference(from, to).unwrap(), 13);
        let common_from = system.date(5761, 1, 1).unwrap();
        let common_to = system.date(5762, 1, 1).unwrap();
        assert_eq!(system.months_difference(common_from, common_to).unwrap(), 12);
    }

    #[test]
    fn test_component_strings() {
        let system = gregorian();
        let date = system.date(2024, 3, 5).unwrap();
        assert_eq!(system.year_string(date, Long).unwrap(), "2024");
        assert_eq!(system.year_string(date, Short).unwrap(), "24");
        assert_eq!(system.month_string(date, Long).unwrap(), "03");
        assert_eq!(system.month_string(date, Short).unwrap(), "3");
        assert_eq!(system.day_string(date, Long).unwrap(), "05");
        assert_eq!(system.day_string(date, Short).unwrap(), "5");

        let early = system.date(5, 1, 1).unwrap();
        assert_eq!(system.year_string(early, Long).unwrap(), "0005");

        // negative years keep their sign in both formats
        let bce = system.date(-44, 3, 15).unwrap();
        assert_eq!(system.year_string(bce, Long).unwrap(), "-044");
        assert_eq!(system.year_string(bce, Short).unwrap(), "-44");
    }

    #[test]
    fn test_hebrew_gematria_strings() {
        let system = CalendarSystem::with_localizer(Hebrew, Box::new(HebrewLocale));
        let date = system.date(5760, 4, 23).unwrap();
        // tav-shin-samekh, with the millennium he only in long format
        assert_eq!(
            system.year_string(date, Long).unwrap(),
            "\u{05D4}\u{05EA}\u{05E9}\"\u{05E1}"
        );
        assert_eq!(
            system.year_string(date, Short).unwrap(),
            "\u{05EA}\u{05E9}\"\u{05E1}"
        );
        // day 23 is kaf-gimel
        assert_eq!(system.day_string(date, Long).unwrap(), "\u{05DB}\"\u{05D2}");
        // months stay numeric
        assert_eq!(system.month_string(date, Long).unwrap(), "04");
    }

    #[test]
    fn test_component_parsers() {
        let system = gregorian();
        assert_eq!(system.year_string_to_integer("2024-03"), Some((2024, 4)));
        assert_eq!(system.year_string_to_integer("-0044 BC"), Some((-44, 5)));
        assert_eq!(system.year_string_to_integer("20245"), Some((2024, 4)));
        assert_eq!(system.year_string_to_integer("x2024"), None);
        assert_eq!(system.month_string_to_integer("12/"), Some((12, 2)));
        assert_eq!(system.month_string_to_integer("-3"), None);
        assert_eq!(system.day_string_to_integer("07th"), Some((7, 2)));
        assert_eq!(system.day_string_to_integer("311"), Some((31, 2)));
    }

    #[test]
    fn test_hebrew_year_parsing_millennium_window() {
        // digits under the default locale
        let system = hebrew_system();
        assert_eq!(system.year_string_to_integer("760"), Some((5760, 3)));
        assert_eq!(system.year_string_to_integer("5760"), Some((5760, 4)));

        // gematria under a Hebrew locale
        let system = CalendarSystem::with_localizer(Hebrew, Box::new(HebrewLocale));
        let parsed = system.year_string_to_integer("\u{05EA}\u{05E9}\"\u{05E1}");
        assert_eq!(parsed, Some((5760, 7)));
        assert_eq!(system.day_string_to_integer("\u{05DB}\"\u{05D2}"), Some((23, 5)));
    }

    #[test]
    fn test_names_go_through_localizer() {
        struct Shouty;
        impl Localizer for Shouty {
            fn translate(&self, key: &str) -> String {
                key.to_uppercase()
            }
        }

        let system = CalendarSystem::with_localizer(Gregorian, Box::new(Shouty));
        assert_eq!(system.month_name(1, 2024, MonthNameFormat::LongName), "JANUARY");
        assert_eq!(
            system.week_day_name(1, WeekDayNameFormat::ShortDayName),
            "MON"
        );
        assert_eq!(system.month_name(13, 2024, MonthNameFormat::LongName), "");
        assert_eq!(system.week_day_name(8, WeekDayNameFormat::LongDayName), "");

        let date = system.date(2000, 1, 1).unwrap();
        assert_eq!(
            system.day_of_week_name(date, WeekDayNameFormat::LongDayName).unwrap(),
            "SATURDAY"
        );
    }

    #[test]
    fn test_facts_passthrough() {
        let system = CalendarSystem::new(IslamicCivil);
        assert_eq!(system.calendar_type(), "hijri");
        assert!(system.is_lunar());
        assert!(!system.is_solar());
        assert_eq!(system.week_day_of_pray(), 5);
        assert_eq!(system.days_in_week(), 7);
        assert_eq!(system.week_start_day(), 1);
        assert_eq!(system.months_in_year(1420), 12);
        assert_eq!(system.days_in_month(1420, 12).unwrap(), 30);
        assert_eq!(system.days_in_year(1421).unwrap(), 354);
        assert!(system.days_in_month(1420, 13).is_err());
        assert!(system.is_leap_year(1420));
        let date = system.date(1420, 9, 24).unwrap();
        assert!(system.is_leap_year_date(date).unwrap());
        assert_eq!(system.days_in_month_of(date).unwrap(), 30); // Ramadan
        assert_eq!(system.days_in_year_of(date).unwrap(), 355);
        assert_eq!(system.months_in_year_of(date).unwrap(), 12);
    }
}
