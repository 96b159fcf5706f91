use tracing::{debug, info};

use crate::diagnostics::Diagnostics;
use crate::engine::Generator;
use crate::error::Result;
use crate::options::Options;
use crate::output::OutputWriter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub results: usize,
}

pub struct Runner {
    pub options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Self {
        Runner { options }
    }

    /// Expand `numbers` once, then every word line, streaming candidates into `out`.
    pub fn run(&self, words: &[String], numbers: &[String], out: &mut dyn OutputWriter, diag: &mut dyn Diagnostics) -> Result<Summary> {
        let generator = Generator::new(&self.options);
        let numbers = generator.number_variations(numbers, diag);
        if !numbers.is_empty() {
            debug!("numbers: {}", numbers.join(", "));
        }

        let mut summary = Summary::default();
        for line in words {
            info!("processing {}", line);
            let stats = generator.line(line, &numbers, |candidate| out.write(line, &candidate))?;
            info!(
                line_variants = stats.line_variants,
                with_numbers_and_chars = stats.with_affixes,
                substitutions = stats.substitutions(),
                total = stats.total,
                "{} combinations for {}", stats.total, line
            );
            summary.lines += 1;
            summary.results += stats.total;
        }
        Ok(summary)
    }
}
