//! Non-fatal warnings raised while building options or expanding input.
//!
//! Nothing in the engine prints. Every operation that can degrade by omission
//! takes a `&mut dyn Diagnostics` and reports what it skipped; the caller picks
//! whether to collect the warnings or forward them to the log.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("unsupported offset year: {year} - it will be ignored, using {fallback}")]
    OffsetYearTooEarly { year: i32, fallback: i32 },

    #[error("offset year detected that is in the future: {year} - it will be ignored, using {fallback}")]
    OffsetYearInFuture { year: i32, fallback: i32 },

    #[error("the length of substitution pair '{0}' is not equal to two, so it's ignored")]
    MalformedSubstitution(String),

    #[error("can only have 1 replacement value for '{source_char}' - multiple given. Using the first ('{kept}'), ignoring '{ignored}'")]
    DuplicateSubstitution { source_char: char, kept: char, ignored: char },

    #[error("unsupported number-string: '{0}' - it will be ignored")]
    InvalidNumber(String),

    #[error("empty glue string given - only the empty glue will be used")]
    EmptyGlue,

    #[error("empty special-character string given - no special characters will be used")]
    EmptySpecials,
}

/// Sink for [`Warning`]s.
pub trait Diagnostics {
    fn warning(&mut self, w: Warning);
}

impl Diagnostics for Vec<Warning> {
    fn warning(&mut self, w: Warning) {
        self.push(w);
    }
}

/// Forwards every warning to `tracing::warn!` and keeps a count for the final summary.
#[derive(Debug, Default)]
pub struct TracingDiagnostics {
    pub count: usize,
}

impl TracingDiagnostics {
    pub fn new() -> Self { Self::default() }
}

impl Diagnostics for TracingDiagnostics {
    fn warning(&mut self, w: Warning) {
        self.count += 1;
        tracing::warn!("{}", w);
    }
}
