use crate::affix;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::line::LineVariants;
use crate::numbers;
use crate::options::Options;
use crate::substitute;
use crate::words;

/// Per-line candidate generation over one set of [`Options`].
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    opt: &'a Options,
}

/// Counts gathered while expanding one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub line_variants: usize,
    pub with_affixes: usize,
    pub total: usize,
}

impl LineStats {
    pub fn substitutions(&self) -> usize { self.total - self.with_affixes }
}

impl<'a> Generator<'a> {
    pub fn new(opt: &'a Options) -> Self { Generator { opt } }

    pub fn number_variations(&self, numbers: &[String], diag: &mut dyn Diagnostics) -> Vec<String> {
        numbers::variations(numbers, self.opt, diag)
    }

    pub fn word_variations(&self, word: &str) -> Vec<String> {
        words::variations(word, self.opt)
    }

    pub fn line_variations(&self, line: &str) -> LineVariants<'a> {
        LineVariants::new(line, self.opt)
    }

    pub fn combine_numbers<'b>(&self, bases: &'b [String], numbers: &[String]) -> impl Iterator<Item = String> + 'b
    where
        'a: 'b,
    {
        affix::combine(bases, numbers, self.opt)
    }

    pub fn substitute<I>(&self, input: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        substitute::substitute(input, &self.opt.substitutions)
    }

    /// Run the whole pipeline for one input line, handing every candidate to `emit`.
    ///
    /// Line variants are materialised once since they are walked per affix;
    /// everything downstream is streamed. Generation stops at the first error
    /// returned by `emit`.
    pub fn line<F>(&self, line: &str, numbers: &[String], mut emit: F) -> Result<LineStats>
    where
        F: FnMut(String) -> Result<()>,
    {
        let bases: Vec<String> = self.line_variations(line).collect();
        let mut with_affixes = 0usize;
        let mut total = 0usize;
        let combined = affix::combine(&bases, numbers, self.opt).inspect(|_| with_affixes += 1);
        for candidate in substitute::substitute(combined, &self.opt.substitutions) {
            emit(candidate)?;
            total += 1;
        }
        Ok(LineStats { line_variants: bases.len(), with_affixes, total })
    }

    /// Collecting form of [`Generator::line`].
    pub fn line_to_vec(&self, line: &str, numbers: &[String]) -> Vec<String> {
        let mut out = Vec::new();
        // pushing never fails
        let _ = self.line(line, numbers, |s| {
            out.push(s);
            Ok(())
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;
    use crate::error::Error;
    use crate::options::RawOptions;

    fn strings(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn test_pipeline_single_word() {
        let raw = RawOptions {
            specials: Some("!".into()),
            substitution_map: Some("o0".into()),
            lower: true, upper: false, camel: false,
            ..Default::default()
        };
        let o = raw.build_at(2020, &mut Vec::<Warning>::new());
        let g = Generator::new(&o);
        let nums = g.number_variations(&strings(&["1990"]), &mut Vec::<Warning>::new());
        assert_eq!(nums, strings(&["1990", "30", "29", "90"]));

        let out = g.line_to_vec("Bob", &strings(&["7"]));
        assert_eq!(out, strings(&[
            "Bob", "B0b", "bob", "b0b",
            "Bob!", "B0b!", "bob!", "b0b!",
            "Bob7", "B0b7", "bob7", "b0b7",
            "Bob!7", "B0b!7", "bob!7", "b0b!7",
            "Bob7!", "B0b7!", "bob7!", "b0b7!",
        ]));
    }

    #[test]
    fn test_stats() {
        let raw = RawOptions { specials: Some("!".into()), substitution_map: Some("a4".into()), ..Default::default() };
        let o = raw.build_at(2020, &mut Vec::<Warning>::new());
        let g = Generator::new(&o);
        let mut n = 0usize;
        let stats = g
            .line("bob", &[], |_| {
                n += 1;
                Ok(())
            })
            .unwrap();
        // bob -> [bob, BOB, Bob]; x2 for "!" appended; no 'a' anywhere
        assert_eq!(stats, LineStats { line_variants: 3, with_affixes: 6, total: 6 });
        assert_eq!(stats.substitutions(), 0);
        assert_eq!(n, 6);
    }

    #[test]
    fn test_line_matches_composed_stages() {
        let raw = RawOptions { specials: Some("!@".into()), substitution_map: Some("e3,a4".into()), prepend: true, glue_all: true, ..Default::default() };
        let o = raw.build_at(2020, &mut Vec::<Warning>::new());
        let g = Generator::new(&o);
        let mut w: Vec<Warning> = vec![];
        let nums = g.number_variations(&strings(&["1985", "x"]), &mut w);
        assert_eq!(w, vec![Warning::InvalidNumber("x".into())]);

        let bases: Vec<String> = g.line_variations("jane doe").collect();
        let staged: Vec<String> = g.substitute(g.combine_numbers(&bases, &nums).collect::<Vec<_>>()).collect();
        assert_eq!(g.line_to_vec("jane doe", &nums), staged);
        assert_eq!(g.word_variations("jane"), strings(&["jane", "JANE", "Jane"]));
    }

    #[test]
    fn test_line_stops_at_first_emit_error() {
        let o = RawOptions { specials: Some("!@#".into()), ..Default::default() }.build_at(2020, &mut Vec::<Warning>::new());
        let g = Generator::new(&o);
        let mut calls = 0usize;
        let res = g.line("john doe", &strings(&["1990", "7"]), |_| {
            calls += 1;
            if calls == 3 {
                return Err(Error::io("cannot write output", "<test>", std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")));
            }
            Ok(())
        });
        assert!(matches!(res, Err(Error::Io { .. })));
        assert_eq!(calls, 3);
    }
}
