//! Locale injection for calendar systems.
//!
//! The engine itself is locale-free; everything language dependent is
//! supplied through a [`Localizer`] handed to `CalendarSystem`. There
//! is no global locale state.

/// Supplies the locale-dependent pieces of date handling.
///
/// All methods have defaults, so a minimal implementation can override
/// only what it cares about.
pub trait Localizer: Send + Sync {
    /// Resolves a translation key into display text.
    ///
    /// The default returns the key unchanged, which yields English
    /// output for all built-in names.
    fn translate(&self, key: &str) -> String {
        key.to_owned()
    }

    /// First day of the week, 1 = Monday .. 7 = Sunday.
    fn week_start_day(&self) -> i32 {
        1
    }

    /// ISO 639 language code, e.g. `"en"` or `"he"`.
    ///
    /// A Hebrew calendar system paired with a `"he"` localizer renders
    /// years and days as gematria numerals.
    fn language(&self) -> &str {
        "en"
    }
}

/// The built-in localizer: untranslated keys, Monday week start,
/// English language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {}
