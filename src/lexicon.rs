//! Fixed Spanish number vocabulary.
//!
//! Every table is indexed from 0 and covers its whole index range, so callers
//! that derive indices from decimal digits never go out of bounds.

/// Words for 0..=19. Index 1 is the full form "uno"; the apocopic "un" is
/// [`APOCOPIC_ONE`].
pub const UNIT_WORDS: [&str; 20] = [
    "", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho", "diecinueve",
];

/// Form of 1 used right before "mil" or a scale word.
pub const APOCOPIC_ONE: &str = "un";

/// Indexed by tens digit; 0 and 1 are covered by [`UNIT_WORDS`].
pub const TENS_WORDS: [&str; 10] = [
    "", "", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

/// Indexed by hundreds digit. Exactly 100 is [`HUNDRED_ALONE`], not "ciento".
pub const HUNDREDS_WORDS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos",
    "seiscientos", "setecientos", "ochocientos", "novecientos",
];

pub const HUNDRED_ALONE: &str = "cien";

pub const ZERO: &str = "cero";
pub const MINUS: &str = "menos";
pub const AND: &str = "y";
pub const THOUSAND: &str = "mil";

/// Scale words for the short scale, indexed by base-1000 chunk position.
pub const SHORT_SCALE_WORDS: [&str; 8] = [
    "", "mil", "millón", "billón", "trillón", "cuatrillón", "quintillón", "sextillón",
];

/// Scale words for the long scale, indexed by base-10^6 tier.
pub const LONG_SCALE_WORDS: [&str; 6] = [
    "", "millón", "billón", "trillón", "cuatrillón", "quintillón",
];

/// Plural of a "-llón" scale word: "millón" becomes "millones".
pub fn plural_scale(word: &str) -> String {
    match word.strip_suffix("ón") {
        Some(stem) => format!("{}ones", stem),
        None => format!("{}es", word),
    }
}
