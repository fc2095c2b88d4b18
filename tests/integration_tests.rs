//! Integration tests for card_identifier.
//!
//! The card numbers here are test vectors from payment processors and
//! scheme documentation; they pass structural checks but are not real
//! cards.

use card_identifier::{
    find_brand, find_brand_detailed, get_brand_info, get_brand_info_detailed, is_supported,
    list_brands, luhn_valid, matches_bin, validate_cvv,
};

// =============================================================================
// TEST CARD NUMBERS
// =============================================================================

mod test_cards {
    pub const VISA_1: &str = "4012001037141112";
    pub const VISA_2: &str = "4551870000000183";
    pub const VISA_3: &str = "4073020000000002";
    pub const VISA_13A: &str = "4024007190131";
    pub const VISA_13B: &str = "4556523434899";
    // A Visa range outside the 4xxx space
    pub const VISA_636700: &str = "6367000000001022";

    pub const MC_1: &str = "5533798818319497";
    pub const MC_2: &str = "5437251265160938";
    pub const MC_3: &str = "5101514275875158";
    // 2-series range
    pub const MC_2SERIES_LOW: &str = "2221000000000000";
    pub const MC_2SERIES_HIGH: &str = "2720990000000000";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "376411112222331";
    pub const AMEX_3: &str = "371449635398431";

    pub const DINERS_1: &str = "30066909048113";
    pub const DINERS_2: &str = "30266056449987";
    pub const DINERS_3: &str = "36490102462661";
    pub const DINERS_4: &str = "38520000023237";

    pub const DISCOVER_1: &str = "6011236044609927";
    pub const DISCOVER_2: &str = "6011091915358231";
    pub const DISCOVER_3: &str = "6511020000245045";

    pub const ELO_1: &str = "6362970000457013";
    pub const ELO_2: &str = "6363680000000000";

    pub const HIPERCARD_1: &str = "6062825624254001";
    pub const HIPERCARD_2: &str = "6062821294950895";
    pub const HIPERCARD_19A: &str = "3841001111222233334";
    pub const HIPERCARD_19B: &str = "3841401111222233334";
    pub const HIPERCARD_19C: &str = "3841601111222233334";

    pub const AURA_1: &str = "5000000000000000";
    pub const AURA_19: &str = "5078601912345600019";

    pub const UNSUPPORTED: &str = "1234567890123456";
}

use test_cards::*;

/// Every Elo issuer range, as six-digit BIN values.
fn elo_bins() -> Vec<u32> {
    let mut bins = vec![
        401178, 401179, 431274, 438935, 451416, 457393, 457631, 457632, 504175, 627780, 636297,
        636368,
    ];
    bins.extend(506699..=506778);
    bins.extend(509000..=509999);
    bins.extend(650031..=650033);
    bins.extend(650035..=650051);
    bins.extend(650405..=650439);
    bins.extend(650485..=650538);
    bins.extend(650541..=650598);
    bins.extend(650700..=650718);
    bins.extend(650721..=650727);
    bins.extend(650901..=650920);
    bins.extend(651652..=651679);
    bins.extend(655000..=655019);
    bins.extend(655021..=655058);
    bins
}

/// Pads a six-digit BIN out to a 16-digit card number.
fn card_for_bin(bin: u32) -> String {
    format!("{bin}0000000000")
}

// =============================================================================
// BRAND IDENTIFICATION
// =============================================================================

#[test]
fn test_visa_identification() {
    for card in [VISA_1, VISA_2, VISA_3, VISA_13A, VISA_13B, VISA_636700] {
        assert_eq!(find_brand(card), Some("visa"), "{card}");
    }
}

#[test]
fn test_mastercard_identification() {
    for card in [MC_1, MC_2, MC_3, MC_2SERIES_LOW, MC_2SERIES_HIGH] {
        assert_eq!(find_brand(card), Some("mastercard"), "{card}");
    }
}

#[test]
fn test_mastercard_rejects_out_of_range() {
    // 50 prefix at 15 digits is nothing; 56 prefix at 17 digits is nothing
    assert_eq!(find_brand("500000000000000"), None);
    assert_eq!(find_brand("56000000000000000"), None);
    // 2-series boundaries
    assert_ne!(find_brand("2220000000000000"), Some("mastercard"));
    assert_ne!(find_brand("2721000000000000"), Some("mastercard"));
}

#[test]
fn test_amex_identification() {
    for card in [AMEX_1, AMEX_2, AMEX_3] {
        assert_eq!(find_brand(card), Some("amex"), "{card}");
    }
}

#[test]
fn test_diners_identification() {
    for card in [DINERS_1, DINERS_2, DINERS_3, DINERS_4] {
        assert_eq!(find_brand(card), Some("diners"), "{card}");
    }
}

#[test]
fn test_diners_rejects_wrong_lengths() {
    // Diners is 14 digits only
    for card in [
        "310000000000000",
        "300000000000000",
        "3060000000000000",
        "390000000000000",
    ] {
        assert_ne!(find_brand(card), Some("diners"), "{card}");
    }
}

#[test]
fn test_discover_identification() {
    for card in [DISCOVER_1, DISCOVER_2, DISCOVER_3] {
        assert_eq!(find_brand(card), Some("discover"), "{card}");
    }
}

#[test]
fn test_elo_identification() {
    assert_eq!(find_brand(ELO_1), Some("elo"));
    assert_eq!(find_brand(ELO_2), Some("elo"));
}

#[test]
fn test_every_elo_bin_resolves_to_elo() {
    for bin in elo_bins() {
        let card = card_for_bin(bin);
        assert_eq!(find_brand(&card), Some("elo"), "{card}");
    }
}

#[test]
fn test_neighbors_of_elo_ranges_are_not_elo() {
    for card in [
        "4011770000000000", // below 401178, visa space
        "4011800000000000", // above 401179, visa space
        "5066980000000000", // below 506699, aura space
        "6500340000000000", // gap between 650033 and 650035, discover space
    ] {
        assert_ne!(find_brand(card), Some("elo"), "{card}");
    }
}

#[test]
fn test_hipercard_identification() {
    for card in [
        HIPERCARD_1,
        HIPERCARD_2,
        HIPERCARD_19A,
        HIPERCARD_19B,
        HIPERCARD_19C,
    ] {
        assert_eq!(find_brand(card), Some("hipercard"), "{card}");
    }
}

#[test]
fn test_aura_identification() {
    assert_eq!(find_brand(AURA_1), Some("aura"));
    assert_eq!(find_brand(AURA_19), Some("aura"));
    for prefix in 500..=508 {
        let card = format!("{prefix}0000000000000");
        assert_eq!(find_brand(&card), Some("aura"), "{card}");
    }
}

#[test]
fn test_aura_rejects_out_of_range() {
    // 15 digits is too short for aura
    assert_ne!(find_brand("510000000000000"), Some("aura"));
    assert_ne!(find_brand("500000000000000"), Some("aura"));
    // 51 prefix is mastercard space
    assert_ne!(find_brand("5100000000000000"), Some("aura"));
}

#[test]
fn test_unsupported_numbers() {
    assert_eq!(find_brand(UNSUPPORTED), None);
    assert_eq!(find_brand(""), None);
    assert_eq!(find_brand("0000000000000000"), None);
}

// =============================================================================
// PRIORITY RESOLUTION
// =============================================================================

#[test]
fn test_elo_preempts_visa() {
    // These bins match visa's 4xxx pattern too
    for bin in [401178, 401179, 431274, 438935, 451416, 457393, 457631, 457632] {
        let card = card_for_bin(bin);
        assert_eq!(find_brand(&card), Some("elo"), "{card}");
    }
}

#[test]
fn test_elo_preempts_discover() {
    // These bins match discover's 65 pattern too
    for bin in [650031, 650405, 651652, 655000] {
        let card = card_for_bin(bin);
        assert_eq!(find_brand(&card), Some("elo"), "{card}");
    }
}

#[test]
fn test_elo_preempts_aura() {
    // These bins match aura's 50 pattern too
    for bin in [504175, 506699, 509000, 509999] {
        let card = card_for_bin(bin);
        assert_eq!(find_brand(&card), Some("elo"), "{card}");
    }
}

// =============================================================================
// LUHN CHECKSUM
// =============================================================================

#[test]
fn test_luhn_valid_numbers() {
    for card in [VISA_1, MC_1, AMEX_1] {
        assert!(luhn_valid(card), "{card}");
    }
}

#[test]
fn test_luhn_invalid_numbers() {
    assert!(!luhn_valid(UNSUPPORTED));
    assert!(!luhn_valid(""));
    // Check digit flipped on an otherwise valid number
    assert!(!luhn_valid("4012001037141113"));
}

#[test]
fn test_luhn_rejects_formatting() {
    assert!(!luhn_valid("4012-0010-3714-1112"));
    assert!(!luhn_valid("4012 0010 3714 1112"));
    assert!(!luhn_valid(" 4012001037141112"));
}

// =============================================================================
// FACADE OPERATIONS
// =============================================================================

#[test]
fn test_is_supported() {
    assert!(is_supported(VISA_1));
    assert!(is_supported(MC_1));
    assert!(!is_supported(UNSUPPORTED));
    assert!(!is_supported(""));
}

#[test]
fn test_validate_cvv_matrix() {
    assert!(validate_cvv("123", "visa"));
    assert!(validate_cvv("1234", "amex"));
    assert!(!validate_cvv("12", "visa"));
    assert!(!validate_cvv("1234", "visa"));
    assert!(!validate_cvv("123", "amex"));
    assert!(!validate_cvv("", "visa"));
    assert!(!validate_cvv("123", "unknown-brand"));
}

#[test]
fn test_find_brand_detailed() {
    let visa = find_brand_detailed(VISA_1).unwrap();
    assert_eq!(visa.scheme, "visa");
    assert_eq!(visa.brand, "Visa");
    assert_eq!(visa.card_type, "credit");
    assert!(!visa.lengths.is_empty());

    let amex = find_brand_detailed(AMEX_1).unwrap();
    assert_eq!(amex.brand, "American Express");
    assert_eq!(amex.cvv_length, 4);

    assert!(find_brand_detailed(UNSUPPORTED).is_none());
}

#[test]
fn test_get_brand_info() {
    let visa = get_brand_info("visa").unwrap();
    assert_eq!(visa.name, "visa");
    assert!(get_brand_info("unknown").is_none());

    let detailed = get_brand_info_detailed("visa").unwrap();
    assert_eq!(detailed.scheme, "visa");
    assert!(!detailed.lengths.is_empty());
    assert!(get_brand_info_detailed("unknown").is_none());
}

#[test]
fn test_matches_bin_is_a_prefix_check_only() {
    // Matches regardless of length or checksum
    assert!(matches_bin("4", "visa"));
    assert!(matches_bin("4012", "visa"));
    assert!(matches_bin(VISA_636700, "visa"));
    // An Elo-reassigned prefix still sits in the visa BIN space
    assert!(matches_bin("4514160000000000", "visa"));
    assert!(!matches_bin(MC_1, "visa"));
}

#[test]
fn test_list_brands_order_is_stable() {
    let brands = list_brands();
    assert!(brands.contains(&"visa"));
    assert!(brands.contains(&"mastercard"));
    assert_eq!(brands, list_brands());
    assert_eq!(brands, list_brands());
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_lookups_are_idempotent() {
    for _ in 0..5 {
        assert_eq!(find_brand(VISA_1), Some("visa"));
        assert_eq!(find_brand("4514160000000000"), Some("elo"));
        assert_eq!(find_brand(UNSUPPORTED), None);
        assert!(luhn_valid(VISA_1));
        assert!(validate_cvv("123", "visa"));
    }
}

#[test]
fn test_concurrent_first_access() {
    // Hammer the lazily-built table from several threads at once
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    assert_eq!(find_brand(VISA_1), Some("visa"));
                } else {
                    assert_eq!(find_brand("6500310000000000"), Some("elo"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
