//! Number expansion: originals plus year-derived ages and short years.

use crate::diagnostics::{Diagnostics, Warning};
use crate::options::{Options, MIN_YEAR};

/// Expand `numbers` into originals plus derived forms, without duplicates.
///
/// Entries containing anything but ASCII digits (or nothing at all) are reported
/// and dropped entirely. A number `n` with `1900 < n <= reference_year` is taken
/// for a year: it adds `reference_year - n` and `reference_year - n - 1` when age
/// derivation is on, and its two-digit short form when short years are on.
pub fn variations(numbers: &[String], opt: &Options, diag: &mut dyn Diagnostics) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for number in numbers {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            diag.warning(Warning::InvalidNumber(number.clone()));
            continue;
        }
        add_unique(&mut out, number.clone());

        // too long for a year, keep it as a plain number
        let Ok(n) = number.parse::<i64>() else { continue };
        let reference = i64::from(opt.reference_year);
        if n <= i64::from(MIN_YEAR) || n > reference { continue; }

        if opt.year_to_age {
            let age = reference - n;
            add_unique(&mut out, age.to_string());
            // birthday not reached yet this year; a year equal to the reference gives -1
            add_unique(&mut out, (age - 1).to_string());
        }
        if opt.full_year_to_short_year {
            add_unique(&mut out, format!("{:02}", n % 100));
        }
    }
    out
}

fn add_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) { list.push(value); }
}
