use chrono::Datelike;
use serde::Serialize;

use crate::diagnostics::{Diagnostics, Warning};
use crate::substitute::SubstitutionMap;

/// Glue characters used when none are given.
pub const DEFAULT_GLUE: &str = " _-.";
/// Glue characters of [`RawOptions::default`].
pub const LIBRARY_GLUE: &str = " ._-";
/// Earliest offset year accepted, and the exclusive lower bound for treating a number as a year.
pub const MIN_YEAR: i32 = 1900;

/// Configuration as supplied by the caller, before validation.
///
/// `None` for a string field means "not given"; `Some("")` means "given but empty"
/// and is reported as a warning by [`RawOptions::build`].
#[derive(Debug, Clone)]
pub struct RawOptions {
    pub full_year_to_short_year: bool,
    pub year_to_age: bool,
    pub offset_year: Option<i32>,
    pub specials: Option<String>,
    pub glue: Option<String>,
    pub glue_all: bool,
    pub substitution_map: Option<String>,
    pub lower: bool,
    pub upper: bool,
    pub camel: bool,
    pub prepend: bool,
    pub append: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        RawOptions {
            full_year_to_short_year: true,
            year_to_age: true,
            offset_year: None,
            specials: Some("!@".into()),
            glue: Some(LIBRARY_GLUE.into()),
            glue_all: false,
            substitution_map: None,
            lower: true,
            upper: true,
            camel: true,
            prepend: false,
            append: true,
        }
    }
}

/// Validated, immutable generation options.
#[derive(Debug, Clone, Serialize)]
pub struct Options {
    pub full_year_to_short_year: bool,
    pub year_to_age: bool,
    /// Year ages are computed against: the offset year when valid, else the current year.
    pub reference_year: i32,
    pub specials: Vec<char>,
    /// Always starts with the empty glue.
    pub glue: Vec<String>,
    pub glue_all: bool,
    pub substitutions: SubstitutionMap,
    pub lower: bool,
    pub upper: bool,
    pub camel: bool,
    pub prepend: bool,
    pub append: bool,
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl RawOptions {
    /// Validate against the local clock's year.
    pub fn build(self, diag: &mut dyn Diagnostics) -> Options {
        self.build_at(current_year(), diag)
    }

    pub fn build_at(self, current_year: i32, diag: &mut dyn Diagnostics) -> Options {
        let reference_year = match self.offset_year {
            Some(y) if y < MIN_YEAR => {
                diag.warning(Warning::OffsetYearTooEarly { year: y, fallback: current_year });
                current_year
            }
            Some(y) if y > current_year => {
                diag.warning(Warning::OffsetYearInFuture { year: y, fallback: current_year });
                current_year
            }
            Some(y) => y,
            None => current_year,
        };

        let specials: Vec<char> = match self.specials.as_deref() {
            Some("") => { diag.warning(Warning::EmptySpecials); Vec::new() }
            Some(s) => s.chars().collect(),
            None => Vec::new(),
        };

        let glue_chars = match self.glue.as_deref() {
            Some("") => { diag.warning(Warning::EmptyGlue); "" }
            Some(s) => s,
            None => DEFAULT_GLUE,
        };
        let mut glue = vec![String::new()];
        glue.extend(glue_chars.chars().map(String::from));

        let substitutions = match self.substitution_map.as_deref() {
            Some(s) => SubstitutionMap::parse(s, diag),
            None => SubstitutionMap::default(),
        };

        Options {
            full_year_to_short_year: self.full_year_to_short_year,
            year_to_age: self.year_to_age,
            reference_year,
            specials,
            glue,
            glue_all: self.glue_all,
            substitutions,
            lower: self.lower,
            upper: self.upper,
            camel: self.camel,
            prepend: self.prepend,
            append: self.append,
        }
    }
}
