//! The static brand rule table.
//!
//! Each entry pairs a lowercase scheme name with three regular expressions:
//! one over the full digit string, one over the leading digits (the
//! BIN/IIN, for coarse issuer checks), and one over the security code.
//! The full-number pattern may embed a length constraint as a lookahead
//! (`(?=.{13,16}$)`); the compiler in [`crate::compile`] strips it and
//! enforces it numerically.
//!
//! Table order matters: it is the tie-break of last resort when several
//! brands match the same number and no priority relation decides.
//!
//! The table is fixed at build time. Card scheme formats change on the
//! order of years, so there is deliberately no runtime registration API.

/// The Elo issuer ranges, shared between the BIN and full-number patterns.
///
/// Elo reuses blocks carved out of the Visa (4...), Discover (65...) and
/// Aura (50...) spaces, which is why the `elo` entry declares priority
/// over those three brands.
macro_rules! elo_bins {
    () => {
        "401178|401179|431274|438935|451416|457393|457631|457632\
         |504175|506699|5067[0-6][0-9]|50677[0-8]|509[0-9]{3}\
         |627780|636297|636368\
         |65003[1-3]|65003[5-9]|65004[0-9]|65005[01]\
         |65040[5-9]|6504[1-3][0-9]\
         |65048[5-9]|65049[0-9]|6505[0-2][0-9]|65053[0-8]\
         |65054[1-9]|6505[5-8][0-9]|65059[0-8]\
         |65070[0-9]|65071[0-8]|65072[1-7]\
         |65090[1-9]|65091[0-9]|650920\
         |65165[2-9]|6516[67][0-9]\
         |65500[0-9]|65501[0-9]|65502[1-9]|6550[34][0-9]|65505[0-8]"
    };
}

/// A single brand rule, as authored.
///
/// This is the raw form; lookups go through the compiled form built once
/// by [`crate::compile`]. The pattern texts are public so callers can
/// introspect them (debugging, documentation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    /// Unique lowercase identifier, e.g. `"visa"`.
    pub name: &'static str,
    /// Brands this one preempts when both match the same number.
    pub priority_over: &'static [&'static str],
    /// Pattern over the leading digits (issuer identification).
    pub regexp_bin: &'static str,
    /// Pattern over the full digit string, with an optional embedded
    /// length lookahead.
    pub regexp_full: &'static str,
    /// Pattern over the security code.
    pub regexp_cvv: &'static str,
}

/// Descriptive metadata for a brand, keyed by scheme name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandDetailed {
    /// Scheme identifier, matches [`Brand::name`].
    pub scheme: &'static str,
    /// Human-readable brand name, e.g. `"American Express"`.
    pub brand: &'static str,
    /// Card category, e.g. `"credit"`.
    pub card_type: &'static str,
    /// Valid total digit counts for the card number.
    pub lengths: &'static [u8],
    /// Whether numbers of this scheme carry a Luhn check digit.
    pub luhn: bool,
    /// Security code length (3, or 4 for Amex).
    pub cvv_length: u8,
}

/// The brand rules, in matching order.
pub static BRANDS: &[Brand] = &[
    Brand {
        name: "visa",
        priority_over: &[],
        regexp_bin: "^(4|636700)",
        regexp_full: "^(?=.{13,16}$)(?:4|636700)[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "mastercard",
        priority_over: &[],
        regexp_bin: "^(5[1-5]|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)",
        regexp_full: "^(?=.{16}$)(?:5[1-5]|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "amex",
        priority_over: &[],
        regexp_bin: "^(34|37)",
        regexp_full: "^(?=.{15}$)(?:34|37)[0-9]*$",
        regexp_cvv: "^[0-9]{4}$",
    },
    Brand {
        name: "diners",
        priority_over: &[],
        regexp_bin: "^(30[0-5]|3[68])",
        regexp_full: "^(?=.{14}$)(?:30[0-5]|3[68])[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "discover",
        priority_over: &[],
        regexp_bin: "^(6011|64[4-9]|65)",
        regexp_full: "^(?=.{16}$)(?:6011|64[4-9]|65)[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "elo",
        priority_over: &["visa", "discover", "aura"],
        regexp_bin: concat!("^(", elo_bins!(), ")"),
        regexp_full: concat!("^(?=.{16}$)(?:", elo_bins!(), ")[0-9]*$"),
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "hipercard",
        priority_over: &[],
        regexp_bin: "^(606282|384100|384140|384160)",
        regexp_full: "^(?=.{16,19}$)(?:606282|384100|384140|384160)[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
    Brand {
        name: "aura",
        priority_over: &[],
        regexp_bin: "^(50)",
        regexp_full: "^(?=.{16,19}$)(?:50)[0-9]*$",
        regexp_cvv: "^[0-9]{3}$",
    },
];

/// Descriptive records, one per entry in [`BRANDS`].
pub static BRANDS_DETAILED: &[BrandDetailed] = &[
    BrandDetailed {
        scheme: "visa",
        brand: "Visa",
        card_type: "credit",
        lengths: &[13, 16],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "mastercard",
        brand: "Mastercard",
        card_type: "credit",
        lengths: &[16],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "amex",
        brand: "American Express",
        card_type: "credit",
        lengths: &[15],
        luhn: true,
        cvv_length: 4,
    },
    BrandDetailed {
        scheme: "diners",
        brand: "Diners Club",
        card_type: "credit",
        lengths: &[14],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "discover",
        brand: "Discover",
        card_type: "credit",
        lengths: &[16],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "elo",
        brand: "Elo",
        card_type: "credit",
        lengths: &[16],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "hipercard",
        brand: "Hipercard",
        card_type: "credit",
        lengths: &[16, 19],
        luhn: true,
        cvv_length: 3,
    },
    BrandDetailed {
        scheme: "aura",
        brand: "Aura",
        card_type: "credit",
        lengths: &[16, 17, 18, 19],
        luhn: true,
        cvv_length: 3,
    },
];
