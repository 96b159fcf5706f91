use crate::options::Options;

/// Case variants of a single word, original first.
///
/// Only words starting with an ASCII letter are transformed. Lower and upper forms are
/// added when they differ from the word. The camel form (first letter up, rest
/// down) is added whenever the word is at least two characters long and both
/// ends are ASCII letters, even if it equals the original.
pub fn variations(word: &str, opt: &Options) -> Vec<String> {
    let mut out = vec![word.to_string()];
    let first = match word.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c,
        _ => return out,
    };

    if opt.lower {
        let lower = word.to_lowercase();
        if lower != word { out.push(lower); }
    }
    if opt.upper {
        let upper = word.to_uppercase();
        if upper != word { out.push(upper); }
    }
    if opt.camel && word.chars().count() >= 2 && word.chars().last().map_or(false, |c| c.is_ascii_alphabetic()) {
        let rest = &word[first.len_utf8()..];
        let mut camel: String = first.to_uppercase().collect();
        camel.push_str(&rest.to_lowercase());
        out.push(camel);
    }
    out
}
