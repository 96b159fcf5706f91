use clap::Parser;
use std::path::PathBuf;

use crate::options::{RawOptions, DEFAULT_GLUE};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wordsmith - targeted wordlist generator",
    long_about = "NAME:\n  wordsmith - build a candidate wordlist from a few seed words and numbers\n\nUSAGE:\n  wordsmith <WORDS_FILE> [NUMBERS_FILE] [OPTIONS]\n\nEvery line of WORDS_FILE is split on spaces; each word gets case variants, the words are\ncombined with every glue character, then numbers and special characters are attached and\nfinally the substitution map is applied.\n\nExamples:\n  wordsmith names.txt dates.txt --year2age --fullyear2shortyear -c '!@' -o out.txt\n  wordsmith names.txt --sl --su --sc --sm 'a4,e3,o0' -g '_.'",
    after_help = "Notes:\n  - When neither --pc nor --ac is given but special characters or a numbers file are,\n    characters/numbers are appended.\n  - Output grows multiplicatively: glue x word variants per line, times numbers and characters.\n  - Output ending in .gz is gzip-compressed automatically."
)]
pub struct Cli {
    /// Input file with words, one line per seed (words in a line are combined)
    #[arg(value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// (optional) Input file with numbers
    #[arg(value_name = "NUMBERS_FILE")]
    pub numbers: Option<PathBuf>,

    /// Output file. If omitted stdout is used
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output type: txt/jsonl
    #[arg(long = "output-type", alias = "oy", default_value = "txt", value_parser = ["txt", "json", "jsonl"])]
    pub output_type: String,

    /// Gzip the output file (automatic for a .gz path)
    #[arg(long = "gzip")]
    pub gzip: bool,

    /// Append to the output file instead of truncating it
    #[arg(long = "append")]
    pub append: bool,

    /// Full year to short year; add yy based on yyyy
    #[arg(long = "fullyear2shortyear")]
    pub full_year_to_short_year: bool,

    /// Year to age; add the (current) age based on a year
    #[arg(long = "year2age")]
    pub year_to_age: bool,

    /// Year ages are computed against instead of the current year (1900..=current year)
    #[arg(long = "offsetyear", allow_negative_numbers = true)]
    pub offset_year: Option<i32>,

    /// Glue characters used between words; every character is used on its own, plus no glue at all
    #[arg(short = 'g', long = "glue", default_value = DEFAULT_GLUE)]
    pub glue: String,

    /// Glue all: also put glue between words and numbers/special characters
    #[arg(long = "ga", alias = "glue-all")]
    pub glue_all: bool,

    /// Special characters, each used on its own
    #[arg(short = 'c', long = "chars")]
    pub chars: Option<String>,

    /// Prepend characters/numbers
    #[arg(long = "pc", alias = "prepend")]
    pub prepend: bool,

    /// Append characters/numbers
    #[arg(long = "ac", alias = "append-char")]
    pub append_char: bool,

    /// Substitution map, e.g. "a4,e3,o0" (source char followed by its replacement)
    #[arg(long = "sm", alias = "substitute-map")]
    pub substitute_map: Option<String>,

    /// Add a lowercase variant of every word
    #[arg(long = "sl", alias = "lower")]
    pub lower: bool,

    /// Add an uppercase variant of every word
    #[arg(long = "su", alias = "upper")]
    pub upper: bool,

    /// Add a CamelCase variant of every word
    #[arg(long = "sc", alias = "camel")]
    pub camel: bool,

    /// Verbose: report per-line statistics (same as --log-level info)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Log level on stderr: error|warn|info|debug|silent
    #[arg(long = "log-level", default_value = "warn", value_parser = ["error", "warn", "info", "debug", "silent"])]
    pub log_level: String,
}

impl Cli {
    /// Effective log level once `-v` is folded in.
    pub fn log_level(&self) -> &str {
        if self.verbose && matches!(self.log_level.as_str(), "error" | "warn") { "info" } else { &self.log_level }
    }

    /// Gzip when asked for or when the output path ends in `.gz`.
    pub fn gzip(&self) -> bool {
        self.gzip || self.output.as_ref().and_then(|p| p.to_str()).map_or(false, |s| s.ends_with(".gz"))
    }

    /// Options as given on the command line.
    ///
    /// Without an explicit --pc/--ac, characters and numbers are appended as soon as
    /// there is something to attach.
    pub fn raw_options(&self) -> RawOptions {
        let mut append = self.append_char;
        if !self.prepend && !self.append_char && (self.chars.as_deref().map_or(false, |c| !c.is_empty()) || self.numbers.is_some()) {
            append = true;
        }
        RawOptions {
            full_year_to_short_year: self.full_year_to_short_year,
            year_to_age: self.year_to_age,
            offset_year: self.offset_year,
            specials: self.chars.clone(),
            glue: Some(self.glue.clone()),
            glue_all: self.glue_all,
            substitution_map: self.substitute_map.clone(),
            lower: self.lower,
            upper: self.upper,
            camel: self.camel,
            prepend: self.prepend,
            append,
        }
    }
}
