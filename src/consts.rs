/// Number of days in a week, shared by every supported calendar
pub const DAYS_IN_WEEK: i32 = 7;

/// ISO 8601 weekday number for Monday (the week day of Julian day 0)
pub const MONDAY: i32 = 1;
/// ISO 8601 weekday number for Sunday
pub const SUNDAY: i32 = 7;

/// Latest year supported by every calendar system (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Julian day of 1 January 1 CE in the proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: i64 = 1_721_426;
/// Earliest Gregorian year supported (inclusive)
pub const GREGORIAN_MIN_YEAR: i32 = -4712;

/// Julian day of 1 Tishrey AM 1 in the Hebrew calendar
pub const HEBREW_EPOCH: i64 = 347_998;

/// Julian day of 1 Muharram AH 1 in the civil (tabular) Islamic calendar
pub const ISLAMIC_CIVIL_EPOCH: i64 = 1_948_440;

/// Julian day of 1 Farvardin SH 1 in the Jalali calendar
pub const JALALI_EPOCH: i64 = 1_948_321;

/// Long weekday names indexed by ISO weekday number (index 0 unused,
/// weekdays are 1-indexed with Monday first)
pub const WEEK_DAY_NAMES: [&str; 8] = [
    "", // index 0 unused (weekdays are 1-indexed)
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Short weekday names indexed by ISO weekday number (index 0 unused)
pub const WEEK_DAY_NAMES_SHORT: [&str; 8] =
    ["", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
