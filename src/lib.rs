pub mod affix;
pub mod cli;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod input;
pub mod line;
pub mod numbers;
pub mod options;
pub mod output;
pub mod runner;
pub mod substitute;
pub mod words;

pub use diagnostics::{Diagnostics, TracingDiagnostics, Warning};
pub use engine::{Generator, LineStats};
pub use error::{Error, Result};
pub use options::{Options, RawOptions};
pub use runner::{Runner, Summary};
