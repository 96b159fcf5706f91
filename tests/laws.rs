use proptest::prelude::*;
use wordsmith::affix;
use wordsmith::substitute::{substitute, SubstitutionMap};
use wordsmith::{Generator, RawOptions};

fn options(lower: bool, upper: bool, camel: bool) -> wordsmith::Options {
    RawOptions { lower, upper, camel, ..Default::default() }.build_at(2024, &mut Vec::<wordsmith::Warning>::new())
}

proptest! {
    #[test]
    fn word_keeps_original_first(word in "\\PC{0,12}", lower in any::<bool>(), upper in any::<bool>(), camel in any::<bool>()) {
        let o = options(lower, upper, camel);
        let v = Generator::new(&o).word_variations(&word);
        prop_assert_eq!(&v[0], &word);
    }

    #[test]
    fn year_yields_both_ages(year in 1901u32..=2024) {
        let o = RawOptions { year_to_age: true, ..Default::default() }.build_at(2024, &mut Vec::<wordsmith::Warning>::new());
        let nums = Generator::new(&o).number_variations(&[year.to_string()], &mut Vec::<wordsmith::Warning>::new());
        let age = 2024 - i64::from(year);
        prop_assert!(nums.contains(&age.to_string()));
        prop_assert!(nums.contains(&(age - 1).to_string()));
    }

    #[test]
    fn unmatched_strings_are_not_duplicated(s in "[b-df-z]{0,10}") {
        let m = SubstitutionMap::parse("a4,e3", &mut Vec::<wordsmith::Warning>::new());
        let out: Vec<String> = substitute(vec![s.clone()], &m).collect();
        prop_assert_eq!(out, vec![s]);
    }

    #[test]
    fn combine_is_identity_without_affixes(bases in proptest::collection::vec("\\PC{0,8}", 0..6)) {
        let o = RawOptions { specials: None, glue_all: false, prepend: true, ..Default::default() }
            .build_at(2024, &mut Vec::<wordsmith::Warning>::new());
        let out: Vec<String> = affix::combine(&bases, &[], &o).collect();
        prop_assert_eq!(out, bases);
    }

    #[test]
    fn line_count_matches_product(words in proptest::collection::vec("[a-zA-Z]{1,5}", 1..4)) {
        let o = options(true, true, true);
        let g = Generator::new(&o);
        let product: usize = words.iter().map(|w| g.word_variations(w).len()).product();
        let glue = if words.len() > 1 { o.glue.len() } else { 1 };
        let line = words.join(" ");
        prop_assert_eq!(g.line_variations(&line).count(), product * glue);
    }
}
