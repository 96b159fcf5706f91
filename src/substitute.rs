use serde::Serialize;

use crate::diagnostics::{Diagnostics, Warning};

/// Single-character replacement table, built once from a `"a4,e3,o0"` string.
///
/// Each source character has at most one replacement; the first pair given for a
/// character wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionMap {
    pairs: Vec<(char, char)>,
}

impl SubstitutionMap {
    pub fn parse(text: &str, diag: &mut dyn Diagnostics) -> Self {
        let mut pairs: Vec<(char, char)> = Vec::new();
        if text.is_empty() { return SubstitutionMap { pairs }; }
        for piece in text.split(',') {
            let mut it = piece.chars();
            let (from, to) = match (it.next(), it.next(), it.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => {
                    diag.warning(Warning::MalformedSubstitution(piece.to_string()));
                    continue;
                }
            };
            match pairs.iter().find(|(k, _)| *k == from) {
                Some(&(_, kept)) => diag.warning(Warning::DuplicateSubstitution { source_char: from, kept, ignored: to }),
                None => pairs.push((from, to)),
            }
        }
        SubstitutionMap { pairs }
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.pairs.iter().find(|(k, _)| *k == c).map(|&(_, v)| v)
    }

    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    pub fn len(&self) -> usize { self.pairs.len() }

    /// Replace every mapped character. Each character is looked up once in the
    /// original text, so a replacement is never fed to another rule.
    pub fn apply(&self, s: &str) -> String {
        s.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }
}

/// Each input string followed by its substituted form, when that form differs.
pub fn substitute<'a, I>(input: I, map: &'a SubstitutionMap) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'a,
{
    input.into_iter().flat_map(move |s| {
        let replaced = if map.is_empty() { None } else { Some(map.apply(&s)) };
        let replaced = replaced.filter(|r| *r != s);
        std::iter::once(s).chain(replaced)
    })
}
