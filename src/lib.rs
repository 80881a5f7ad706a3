//! Date computations for the Gregorian, Hebrew, Hijri and Jalali
//! calendars on a shared Julian Day axis.
//!
//! Every calendar converts to and from the Julian Day Number, so a
//! [`Date`] produced by one calendar system can be read back through
//! any other. [`CalendarSystem`] layers validation, date arithmetic,
//! ISO week numbering and display strings over the per-calendar
//! conversion rules; [`factory`] builds systems by name.
//!
//! # Example
//!
//! ```
//! use calendrical::factory;
//!
//! let gregorian = factory::create("gregorian");
//! let hebrew = factory::create("hebrew");
//!
//! let date = gregorian.date(2000, 1, 1)?;
//! assert_eq!(date.julian_day(), 2_451_545);
//! assert_eq!(hebrew.year_month_day(date)?, (5760, 4, 23));
//! # Ok::<(), calendrical::DateError>(())
//! ```

mod chronology;
mod consts;
pub mod factory;
mod gregorian;
mod hebrew;
mod islamic;
mod jalali;
mod locale;
mod prelude;
mod system;
mod types;

pub use chronology::Chronology;
pub use consts::*;
pub use gregorian::Gregorian;
pub use hebrew::Hebrew;
pub use islamic::IslamicCivil;
pub use jalali::Jalali;
pub use locale::{DefaultLocalizer, Localizer};
pub use system::{AnyChronology, CalendarSystem};
pub use types::{Date, DateError, MonthNameFormat, StringFormat, WeekDayNameFormat};
