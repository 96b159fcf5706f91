//! Cartesian combination of per-word variants across a line.
//!
//! A line is split on single spaces, each word is expanded with
//! [`crate::words::variations`], and every pick of one variant per word is
//! joined with each glue string in turn. One glue string is used for the whole
//! line: `a b c` glued with `-` gives `a-b-c`, never `a-b_c`. A multi-word
//! line yields `|glue| * product(variants)` strings, a single word just its
//! variants.

use crate::options::Options;
use crate::words;

/// Lazy iterator over the combinations of one line.
///
/// Walks an index per word like an odometer (first word slowest, last word
/// fastest) with the glue choice spinning innermost, so nothing beyond the
/// per-word variant sets is held in memory.
#[derive(Debug, Clone)]
pub struct LineVariants<'a> {
    sets: Vec<Vec<String>>,
    glue: &'a [String],
    glue_count: usize,
    idx: Vec<usize>,
    glue_idx: usize,
    emitted: usize,
    total: usize,
    done: bool,
}

impl<'a> LineVariants<'a> {
    pub fn new(line: &str, opt: &'a Options) -> Self {
        let sets: Vec<Vec<String>> = line.split(' ').map(|w| words::variations(w, opt)).collect();
        Self::from_sets(sets, &opt.glue)
    }

    /// Build from already expanded variant sets, one per word position.
    pub fn from_sets(sets: Vec<Vec<String>>, glue: &'a [String]) -> Self {
        let glue_count = if sets.len() > 1 { glue.len() } else { 1 };
        let total = combination_count(&sets, glue_count);
        let done = total == 0;
        LineVariants {
            idx: vec![0; sets.len()],
            sets,
            glue,
            glue_count,
            glue_idx: 0,
            emitted: 0,
            total,
            done,
        }
    }

    /// Number of strings the full iteration yields (saturating at `usize::MAX`).
    pub fn total(&self) -> usize { self.total }

    fn current(&self) -> String {
        let glue = if self.sets.len() > 1 { self.glue[self.glue_idx].as_str() } else { "" };
        let mut s = String::new();
        for (pos, &i) in self.idx.iter().enumerate() {
            if pos > 0 { s.push_str(glue); }
            s.push_str(&self.sets[pos][i]);
        }
        s
    }

    fn advance(&mut self) {
        self.glue_idx += 1;
        if self.glue_idx < self.glue_count { return; }
        self.glue_idx = 0;
        for pos in (0..self.idx.len()).rev() {
            self.idx[pos] += 1;
            if self.idx[pos] < self.sets[pos].len() { return; }
            self.idx[pos] = 0;
        }
        self.done = true;
    }
}

impl Iterator for LineVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done { return None; }
        let item = self.current();
        self.emitted += 1;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { return (0, Some(0)); }
        if self.total == usize::MAX { return (usize::MAX, None); }
        let rem = self.total - self.emitted;
        (rem, Some(rem))
    }
}

fn combination_count(sets: &[Vec<String>], glue_count: usize) -> usize {
    if sets.is_empty() { return 0; }
    sets.iter().fold(glue_count, |acc, s| acc.saturating_mul(s.len()))
}
