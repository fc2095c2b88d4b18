//! Read-only lookups over the brand tables.
//!
//! Everything here dispatches to the resolver or indexes into the static
//! tables; there is no independent matching logic. All operations are
//! total: any input yields a definite `Option` or `bool`.

use crate::brand::{Brand, BrandDetailed, BRANDS, BRANDS_DETAILED};
use crate::compile::compiled_brands;
use crate::resolve::find_brand;

/// Like [`find_brand`], but resolves to the full descriptive record.
///
/// # Example
///
/// ```
/// use card_identifier::find_brand_detailed;
///
/// let detail = find_brand_detailed("378282246310005").unwrap();
/// assert_eq!(detail.scheme, "amex");
/// assert_eq!(detail.brand, "American Express");
/// assert_eq!(detail.cvv_length, 4);
/// ```
pub fn find_brand_detailed(card_number: &str) -> Option<&'static BrandDetailed> {
    let name = find_brand(card_number)?;
    BRANDS_DETAILED.iter().find(|detail| detail.scheme == name)
}

/// True when some brand's rule matches `card_number`.
#[inline]
pub fn is_supported(card_number: &str) -> bool {
    find_brand(card_number).is_some()
}

/// Validates a security code against the named brand's format.
///
/// The brand is looked up by name, not resolved from a card number. An
/// empty code or an unknown brand name is simply invalid.
///
/// # Example
///
/// ```
/// use card_identifier::validate_cvv;
///
/// assert!(validate_cvv("123", "visa"));
/// assert!(validate_cvv("1234", "amex"));
/// assert!(!validate_cvv("1234", "visa"));
/// assert!(!validate_cvv("123", "no-such-brand"));
/// ```
pub fn validate_cvv(cvv: &str, brand_name: &str) -> bool {
    if cvv.is_empty() {
        return false;
    }

    compiled_brands()
        .iter()
        .find(|brand| brand.name == brand_name)
        .map(|brand| brand.cvv.is_match(cvv))
        .unwrap_or(false)
}

/// True when `card_number` begins in the named brand's issuer (BIN) space.
///
/// This is a coarse prefix check only: it says nothing about the number's
/// length or checksum, and an ambiguous prefix can satisfy several
/// brands. Use [`find_brand`] for actual classification.
pub fn matches_bin(card_number: &str, brand_name: &str) -> bool {
    compiled_brands()
        .iter()
        .find(|brand| brand.name == brand_name)
        .map(|brand| brand.bin.is_match(card_number))
        .unwrap_or(false)
}

/// Looks up the raw rule for a brand name.
///
/// Direct table indexing; no pattern evaluation. Useful for inspecting
/// the pattern texts.
pub fn get_brand_info(brand_name: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.name == brand_name)
}

/// Looks up the descriptive record for a scheme name.
pub fn get_brand_info_detailed(scheme: &str) -> Option<&'static BrandDetailed> {
    BRANDS_DETAILED.iter().find(|detail| detail.scheme == scheme)
}

/// All brand names, in table order.
///
/// The order is stable for the lifetime of the process.
pub fn list_brands() -> Vec<&'static str> {
    BRANDS.iter().map(|brand| brand.name).collect()
}
