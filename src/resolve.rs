//! Brand resolution for card numbers.
//!
//! Card number ranges are not partitioned cleanly across schemes: issuer
//! blocks get reassigned, and co-branded ranges exist (Elo reuses blocks
//! from the Visa, Discover and Aura spaces). Resolution therefore
//! collects every brand whose rule matches and breaks ties with the
//! declared `priority_over` relation, falling back to table order so the
//! result is always deterministic.

use crate::compile::{compiled_brands, CompiledBrand};

/// Identifies the brand of `card_number`.
///
/// Returns the lowercase scheme name, or `None` when no brand matches.
/// Candidates are filtered by the extracted length bounds before any
/// pattern runs, so a number of impossible length is rejected without
/// touching the regex engine.
///
/// Non-digit input never matches any pattern, so formatted numbers like
/// `"4111-1111-1111-1111"` resolve to `None`. Strip separators first.
///
/// # Example
///
/// ```
/// use card_identifier::find_brand;
///
/// assert_eq!(find_brand("4012001037141112"), Some("visa"));
/// assert_eq!(find_brand("378282246310005"), Some("amex"));
/// assert_eq!(find_brand("1234567890123456"), None);
/// assert_eq!(find_brand(""), None);
/// ```
pub fn find_brand(card_number: &str) -> Option<&'static str> {
    if card_number.is_empty() {
        return None;
    }

    let length = card_number.len();
    let candidates: Vec<&CompiledBrand> = compiled_brands()
        .iter()
        .filter(|brand| brand.accepts_length(length))
        .filter(|brand| brand.full.is_match(card_number))
        .collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some(only.name),
        several => Some(resolve_priority(several)),
    }
}

/// Picks the winner among several matching brands.
///
/// The first candidate, in table order, that declares priority over
/// another brand in the match set wins. When no priority relation
/// applies, the first candidate in table order is returned.
fn resolve_priority(candidates: &[&CompiledBrand]) -> &'static str {
    for candidate in candidates {
        for target in candidate.priority_over {
            if candidates.iter().any(|other| other.name == *target) {
                return candidate.name;
            }
        }
    }
    candidates[0].name
}
