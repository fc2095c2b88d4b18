//! One-time compilation of the brand rule table.
//!
//! The raw rules in [`crate::brand::BRANDS`] embed their length
//! constraint in the full-number pattern as a lookahead such as
//! `(?=.{13,16}$)`. The `regex` crate rejects lookaheads, and rechecking
//! a length bound through the pattern engine on every lookup would be
//! wasteful anyway. Compilation therefore splits each rule into two
//! independently checkable pieces: plain integer length bounds, and a
//! lookahead-free pattern.
//!
//! The table compiles exactly once per process, behind a [`Lazy`]
//! barrier. A malformed pattern or a dangling `priority_over` reference
//! is a defect in the static table, so the first lookup panics rather
//! than serving results from a partially valid table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::brand::{Brand, BRANDS};
use crate::error::TableError;

/// A brand rule with its patterns compiled and length bounds extracted.
pub(crate) struct CompiledBrand {
    /// Same identity as the source rule.
    pub name: &'static str,
    /// Carried over from the source rule for tie-breaking.
    pub priority_over: &'static [&'static str],
    /// Minimum digit count; 0 means unconstrained below.
    pub min_length: usize,
    /// Maximum digit count; 0 means unconstrained above.
    pub max_length: usize,
    /// Full-number pattern, lookahead removed.
    pub full: Regex,
    /// Leading-digits (BIN) pattern.
    pub bin: Regex,
    /// Security-code pattern.
    pub cvv: Regex,
}

impl CompiledBrand {
    /// True when `length` is consistent with the extracted bounds.
    #[inline]
    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_length == 0 || length >= self.min_length)
            && (self.max_length == 0 || length <= self.max_length)
    }
}

/// Matches an embedded length assertion: `(?=.{N}$)` or `(?=.{M,N}$)`,
/// with the upper bound optional.
static LOOKAHEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\?=\.\{(\d+)(,(\d+)?)?\}\$\)").expect("lookahead matcher"));

/// Splits an embedded length assertion out of `pattern`.
///
/// Returns the pattern with the assertion removed, plus `(min, max)`
/// digit bounds. Both bounds are 0 when the pattern carries no assertion;
/// `max` alone is 0 for an open-ended range like `(?=.{13,}$)`.
pub(crate) fn extract_length(pattern: &str) -> (String, usize, usize) {
    let Some(caps) = LOOKAHEAD.captures(pattern) else {
        return (pattern.to_owned(), 0, 0);
    };

    let clean = LOOKAHEAD.replace(pattern, "").into_owned();
    let min: usize = caps[1].parse().unwrap_or(0);

    match (caps.get(2), caps.get(3)) {
        // Exact form: (?=.{15}$)
        (None, _) => (clean, min, min),
        // Range form: (?=.{13,16}$)
        (Some(_), Some(max)) => (clean, min, max.as_str().parse().unwrap_or(0)),
        // Open range: (?=.{13,}$)
        (Some(_), None) => (clean, min, 0),
    }
}

fn compile_pattern(
    brand: &'static str,
    field: &'static str,
    pattern: &str,
) -> Result<Regex, TableError> {
    Regex::new(pattern).map_err(|error| TableError::BadPattern {
        brand,
        field,
        error,
    })
}

/// Compiles every rule in `rules`, validating the table invariants.
///
/// Checks name uniqueness and `priority_over` references before touching
/// any pattern, so a configuration defect is reported even when all
/// patterns happen to compile.
pub(crate) fn compile_table(rules: &'static [Brand]) -> Result<Vec<CompiledBrand>, TableError> {
    for (i, rule) in rules.iter().enumerate() {
        if rules[..i].iter().any(|other| other.name == rule.name) {
            return Err(TableError::DuplicateName { name: rule.name });
        }
        for target in rule.priority_over {
            if !rules.iter().any(|other| other.name == *target) {
                return Err(TableError::UnknownPriority {
                    brand: rule.name,
                    target,
                });
            }
        }
    }

    rules
        .iter()
        .map(|rule| {
            let (clean_full, min_length, max_length) = extract_length(rule.regexp_full);
            Ok(CompiledBrand {
                name: rule.name,
                priority_over: rule.priority_over,
                min_length,
                max_length,
                full: compile_pattern(rule.name, "full", &clean_full)?,
                bin: compile_pattern(rule.name, "bin", rule.regexp_bin)?,
                cvv: compile_pattern(rule.name, "cvv", rule.regexp_cvv)?,
            })
        })
        .collect()
}

static COMPILED: Lazy<Vec<CompiledBrand>> = Lazy::new(|| match compile_table(BRANDS) {
    Ok(table) => table,
    Err(err) => panic!("brand rule table is invalid: {}", err),
});

/// Returns the compiled table, building it on first access.
///
/// `Lazy` is the initialization barrier: concurrent first callers block
/// until a single compilation finishes, and every caller observes the
/// complete table. The table is never rebuilt or invalidated.
pub(crate) fn compiled_brands() -> &'static [CompiledBrand] {
    &COMPILED
}
