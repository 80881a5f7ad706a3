//! String-keyed construction of calendar systems.

use crate::gregorian::Gregorian;
use crate::hebrew::Hebrew;
use crate::islamic::IslamicCivil;
use crate::jalali::Jalali;
use crate::locale::Localizer;
use crate::system::{AnyChronology, CalendarSystem};

/// Calendar names accepted by [`create`], in publication order.
pub const SUPPORTED_CALENDARS: [&str; 4] = ["gregorian", "hebrew", "hijri", "jalali"];

/// Returns the calendar names [`create`] recognizes.
pub fn supported_names() -> &'static [&'static str] {
    &SUPPORTED_CALENDARS
}

/// Creates a calendar system by name with the default localizer.
///
/// Names are case-sensitive. An unrecognized name yields a Gregorian
/// system, so construction never fails; callers that must reject bad
/// input should check against [`supported_names`] first.
pub fn create(name: &str) -> CalendarSystem {
    CalendarSystem::new(chronology_for(name))
}

/// Creates a calendar system by name with a custom localizer. Follows
/// the same Gregorian fallback as [`create`].
pub fn create_with_localizer(name: &str, localizer: Box<dyn Localizer>) -> CalendarSystem {
    CalendarSystem::with_localizer(chronology_for(name), localizer)
}

fn chronology_for(name: &str) -> AnyChronology {
    match name {
        "hebrew" => AnyChronology::from(Hebrew),
        "hijri" => AnyChronology::from(IslamicCivil),
        "jalali" => AnyChronology::from(Jalali),
        _ => AnyChronology::from(Gregorian),
    }
}
