use crate::options::Options;

/// Attach special characters and numbers to every base string.
///
/// Yields, in order:
/// 1. every base unchanged;
/// 2. for each special character, for each base: `base+c` (append) and `c+base` (prepend);
/// 3. for each affix from [`affixes`], for each base: the same append/prepend forms,
///    with every glue string between base and affix when glue-all is on.
///
/// Bases are borrowed and walked once per affix, so only the output of one
/// (base, affix) pair is materialised at a time.
pub fn combine<'a>(bases: &'a [String], numbers: &[String], opt: &'a Options) -> impl Iterator<Item = String> + 'a {
    let plain = bases.iter().cloned();

    let with_specials = opt.specials.iter().flat_map(move |c| {
        let c = c.to_string();
        bases.iter().flat_map(move |b| attach(b, &c, false, opt))
    });

    let with_affixes = affixes(numbers, opt).into_iter().flat_map(move |a| {
        bases.iter().flat_map(move |b| attach(b, &a, opt.glue_all, opt))
    });

    plain.chain(with_specials).chain(with_affixes)
}

/// Numbers alone and wrapped by each special character on either side.
///
/// With no numbers and glue-all on, the bare special characters are used instead
/// so that glued character-only forms (`bob_!`) still come out.
pub fn affixes(numbers: &[String], opt: &Options) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    if !numbers.is_empty() {
        for n in numbers {
            out.push(n.clone());
            for c in &opt.specials {
                out.push(format!("{}{}", c, n));
                out.push(format!("{}{}", n, c));
            }
        }
    } else if opt.glue_all {
        out.extend(opt.specials.iter().map(|c| c.to_string()));
    }
    out
}

fn attach(base: &str, affix: &str, glued: bool, opt: &Options) -> Vec<String> {
    let mut out = Vec::new();
    if opt.append {
        if glued {
            out.extend(opt.glue.iter().map(|g| format!("{}{}{}", base, g, affix)));
        } else {
            out.push(format!("{}{}", base, affix));
        }
    }
    if opt.prepend {
        if glued {
            out.extend(opt.glue.iter().map(|g| format!("{}{}{}", affix, g, base)));
        } else {
            out.push(format!("{}{}", affix, base));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;
    use crate::options::RawOptions;

    fn strings(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    fn opts(specials: &str, append: bool, prepend: bool, glue_all: bool) -> Options {
        RawOptions {
            specials: Some(specials.into()),
            glue: Some("_".into()),
            append,
            prepend,
            glue_all,
            ..Default::default()
        }
        .build_at(2024, &mut Vec::<Warning>::new())
    }

    #[test]
    fn test_specials_appended() {
        let o = opts("!@", true, false, false);
        let bases = strings(&["bob"]);
        let out: Vec<String> = combine(&bases, &[], &o).collect();
        assert_eq!(out, vec!["bob", "bob!", "bob@"]);
    }

    #[test]
    fn test_append_and_prepend_order() {
        let o = opts("!", true, true, false);
        let bases = strings(&["a", "b"]);
        let out: Vec<String> = combine(&bases, &strings(&["7"]), &o).collect();
        assert_eq!(out, strings(&[
            "a", "b",
            "a!", "!a", "b!", "!b",
            "a7", "7a", "b7", "7b",
            "a!7", "!7a", "b!7", "!7b",
            "a7!", "7!a", "b7!", "7!b",
        ]));
    }

    #[test]
    fn test_glue_all_with_numbers() {
        let o = opts("", true, false, true);
        let bases = strings(&["bob"]);
        let out: Vec<String> = combine(&bases, &strings(&["99"]), &o).collect();
        assert_eq!(out, vec!["bob", "bob99", "bob_99"]);
    }

    #[test]
    fn test_glue_all_without_numbers_uses_bare_specials() {
        let o = opts("!", false, true, true);
        let bases = strings(&["bob"]);
        let out: Vec<String> = combine(&bases, &[], &o).collect();
        assert_eq!(out, vec!["bob", "!bob", "!bob", "!_bob"]);
    }

    #[test]
    fn test_no_append_no_prepend_is_identity() {
        let o = opts("!@", false, false, true);
        let bases = strings(&["x", "y"]);
        let out: Vec<String> = combine(&bases, &strings(&["1", "2"]), &o).collect();
        assert_eq!(out, bases);
    }

    #[test]
    fn test_identity_without_specials_or_numbers() {
        let o = RawOptions { specials: None, glue_all: false, ..Default::default() }.build_at(2024, &mut Vec::<Warning>::new());
        let bases = strings(&["Bob", "bob", ""]);
        let out: Vec<String> = combine(&bases, &[], &o).collect();
        assert_eq!(out, bases);
    }

    #[test]
    fn test_affixes() {
        let o = opts("!", true, false, false);
        assert_eq!(affixes(&strings(&["1", "22"]), &o), strings(&["1", "!1", "1!", "22", "!22", "22!"]));
        assert!(affixes(&[], &o).is_empty());
        let o = opts("!@", true, false, true);
        assert_eq!(affixes(&[], &o), strings(&["!", "@"]));
    }
}
