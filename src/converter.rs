//! Integer to Spanish words.
//!
//! Numbers are split into base-1000 chunks. Each chunk is spelled by
//! [`below_thousand`] and then combined with its scale word according to
//! [`CHUNK_RULES`], which captures the irregular forms ("mil" instead of
//! "un mil", "un millón" against "dos millones") as data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{NumeralError, NumeralResult};
use crate::lexicon::{
    plural_scale, APOCOPIC_ONE, AND, HUNDREDS_WORDS, HUNDRED_ALONE, LONG_SCALE_WORDS, MINUS,
    SHORT_SCALE_WORDS, TENS_WORDS, UNIT_WORDS, ZERO,
};

/// Naming system for magnitudes above one million.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleSystem {
    /// A new name for every power of 1000: billón = 10^9.
    #[default]
    Short,
    /// A new name for every power of 10^6: billón = 10^12, 10^9 = "mil millones".
    Long,
}

impl FromStr for ScaleSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(ScaleSystem::Short),
            "long" => Ok(ScaleSystem::Long),
            other => Err(format!("unknown scale system '{}', expected 'short' or 'long'", other)),
        }
    }
}

impl fmt::Display for ScaleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleSystem::Short => write!(f, "short"),
            ScaleSystem::Long => write!(f, "long"),
        }
    }
}

/// Spelling of a trailing 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneForm {
    /// "uno": the phrase ends the number.
    Full,
    /// "un": the phrase is followed by "mil" or a scale word.
    Apocopic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkPosition {
    Units,
    Thousands,
    Scaled,
}

impl ChunkPosition {
    fn of(index: usize) -> Self {
        match index {
            0 => ChunkPosition::Units,
            1 => ChunkPosition::Thousands,
            _ => ChunkPosition::Scaled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkClass {
    Zero,
    One,
    Many,
}

impl ChunkClass {
    fn of(value: u32) -> Self {
        match value {
            0 => ChunkClass::Zero,
            1 => ChunkClass::One,
            _ => ChunkClass::Many,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendering {
    Omit,
    Phrase,
    BareScale,
    PhraseScale,
    PhraseScalePlural,
}

const CHUNK_RULES: [(ChunkPosition, ChunkClass, Rendering); 9] = [
    (ChunkPosition::Units, ChunkClass::Zero, Rendering::Omit),
    (ChunkPosition::Units, ChunkClass::One, Rendering::Phrase),
    (ChunkPosition::Units, ChunkClass::Many, Rendering::Phrase),
    (ChunkPosition::Thousands, ChunkClass::Zero, Rendering::Omit),
    (ChunkPosition::Thousands, ChunkClass::One, Rendering::BareScale),
    (ChunkPosition::Thousands, ChunkClass::Many, Rendering::PhraseScale),
    (ChunkPosition::Scaled, ChunkClass::Zero, Rendering::Omit),
    (ChunkPosition::Scaled, ChunkClass::One, Rendering::PhraseScale),
    (ChunkPosition::Scaled, ChunkClass::Many, Rendering::PhraseScalePlural),
];

fn rule_for(position: ChunkPosition, class: ChunkClass) -> Rendering {
    CHUNK_RULES
        .iter()
        .find(|(p, c, _)| *p == position && *c == class)
        .map_or(Rendering::Omit, |(_, _, rendering)| *rendering)
}

fn unit_word(value: usize, one: OneForm) -> &'static str {
    if value == 1 && one == OneForm::Apocopic {
        APOCOPIC_ONE
    } else {
        UNIT_WORDS[value]
    }
}

/// Spells a value in `0..=999`. Zero yields an empty string.
pub fn below_thousand(num: u32, one: OneForm) -> String {
    let mut rest = (num % 1000) as usize;
    let mut words: Vec<&str> = Vec::with_capacity(4);

    if rest >= 100 {
        words.push(if rest == 100 { HUNDRED_ALONE } else { HUNDREDS_WORDS[rest / 100] });
        rest %= 100;
    }

    if rest > 0 {
        if rest < 20 {
            words.push(unit_word(rest, one));
        } else {
            words.push(TENS_WORDS[rest / 10]);
            if rest % 10 != 0 {
                words.push(AND);
                words.push(unit_word(rest % 10, one));
            }
        }
    }

    words.join(" ")
}

/// Renders one nonzero chunk together with its scale word.
fn render_chunk(chunk: u32, index: usize, scale_word: &str, units_one: OneForm) -> Option<String> {
    let one = if index == 0 { units_one } else { OneForm::Apocopic };
    match rule_for(ChunkPosition::of(index), ChunkClass::of(chunk)) {
        Rendering::Omit => None,
        Rendering::Phrase => Some(below_thousand(chunk, one)),
        Rendering::BareScale => Some(scale_word.to_string()),
        Rendering::PhraseScale => Some(format!("{} {}", below_thousand(chunk, one), scale_word)),
        Rendering::PhraseScalePlural => Some(format!(
            "{} {}",
            below_thousand(chunk, one),
            plural_scale(scale_word)
        )),
    }
}

fn group_count(mut n: u128, base: u128) -> usize {
    let mut count = 0;
    while n > 0 {
        n /= base;
        count += 1;
    }
    count
}

/// Joins chunks of `n` using `scales`, most significant first.
fn assemble(mut n: u128, scales: &[&str], units_one: OneForm) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut index = 0;

    while n > 0 {
        let chunk = (n % 1000) as u32;
        if let Some(group) = render_chunk(chunk, index, scales[index], units_one) {
            groups.push(group);
        }
        n /= 1000;
        index += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Spanish number-to-words converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanishNumberConverter {
    scale: ScaleSystem,
}

impl SpanishNumberConverter {
    pub fn new(scale: ScaleSystem) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> ScaleSystem {
        self.scale
    }

    /// Largest magnitude that has scale words in this system.
    pub fn max_magnitude(&self) -> u128 {
        match self.scale {
            ScaleSystem::Short => 1000u128.pow(SHORT_SCALE_WORDS.len() as u32) - 1,
            ScaleSystem::Long => 1_000_000u128.pow(LONG_SCALE_WORDS.len() as u32) - 1,
        }
    }

    /// Spells `n` in Spanish.
    ///
    /// # Examples
    /// ```
    /// # use numerales::SpanishNumberConverter;
    /// let converter = SpanishNumberConverter::default();
    /// assert_eq!(converter.convert(234).unwrap(), "doscientos treinta y cuatro");
    /// assert_eq!(converter.convert(-1_000_000).unwrap(), "menos un millón");
    /// ```
    pub fn convert(&self, n: i128) -> NumeralResult<String> {
        if n == 0 {
            return Ok(ZERO.to_string());
        }
        let magnitude = self.convert_magnitude(n.unsigned_abs())?;
        if n < 0 {
            Ok(format!("{} {}", MINUS, magnitude))
        } else {
            Ok(magnitude)
        }
    }

    fn convert_magnitude(&self, n: u128) -> NumeralResult<String> {
        match self.scale {
            ScaleSystem::Short => {
                let chunks = group_count(n, 1000);
                if chunks > SHORT_SCALE_WORDS.len() {
                    debug!(chunks, "number exceeds the short scale table");
                    return Err(NumeralError::MagnitudeOverflow {
                        chunks,
                        max_chunks: SHORT_SCALE_WORDS.len(),
                    });
                }
                Ok(assemble(n, &SHORT_SCALE_WORDS, OneForm::Full))
            }
            ScaleSystem::Long => self.long_scale(n),
        }
    }

    fn long_scale(&self, mut n: u128) -> NumeralResult<String> {
        let tiers = group_count(n, 1_000_000);
        if tiers > LONG_SCALE_WORDS.len() {
            debug!(tiers, "number exceeds the long scale table");
            return Err(NumeralError::MagnitudeOverflow {
                chunks: tiers,
                max_chunks: LONG_SCALE_WORDS.len(),
            });
        }

        let below_million = [SHORT_SCALE_WORDS[0], SHORT_SCALE_WORDS[1]];
        let mut groups: Vec<String> = Vec::new();
        let mut tier = 0;

        while n > 0 {
            let value = n % 1_000_000;
            if value > 0 {
                if tier == 0 {
                    groups.push(assemble(value, &below_million, OneForm::Full));
                } else {
                    let phrase = assemble(value, &below_million, OneForm::Apocopic);
                    let scale_word = LONG_SCALE_WORDS[tier];
                    if value == 1 {
                        groups.push(format!("{} {}", phrase, scale_word));
                    } else {
                        groups.push(format!("{} {}", phrase, plural_scale(scale_word)));
                    }
                }
            }
            n /= 1_000_000;
            tier += 1;
        }

        groups.reverse();
        Ok(groups.join(" "))
    }
}

/// Spells `n` using the short scale.
pub fn convert(n: i128) -> NumeralResult<String> {
    SpanishNumberConverter::default().convert(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(n: i128) -> String {
        convert(n).unwrap()
    }

    fn long(n: i128) -> String {
        SpanishNumberConverter::new(ScaleSystem::Long).convert(n).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(short(0), "cero");
        assert_eq!(long(0), "cero");
    }

    #[test]
    fn test_units_and_teens() {
        assert_eq!(short(1), "uno");
        assert_eq!(short(9), "nueve");
        assert_eq!(short(10), "diez");
        assert_eq!(short(15), "quince");
        assert_eq!(short(16), "dieciséis");
        assert_eq!(short(19), "diecinueve");
    }

    #[test]
    fn test_tens() {
        assert_eq!(short(20), "veinte");
        assert_eq!(short(21), "veinte y uno");
        assert_eq!(short(34), "treinta y cuatro");
        assert_eq!(short(90), "noventa");
        assert_eq!(short(99), "noventa y nueve");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(short(100), "cien");
        assert_eq!(short(101), "ciento uno");
        assert_eq!(short(110), "ciento diez");
        assert_eq!(short(115), "ciento quince");
        assert_eq!(short(234), "doscientos treinta y cuatro");
        assert_eq!(short(500), "quinientos");
        assert_eq!(short(701), "setecientos uno");
        assert_eq!(short(999), "novecientos noventa y nueve");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(short(1000), "mil");
        assert_eq!(short(1001), "mil uno");
        assert_eq!(short(1100), "mil cien");
        assert_eq!(short(2000), "dos mil");
        assert_eq!(short(21_000), "veinte y un mil");
        assert_eq!(short(100_000), "cien mil");
        assert_eq!(short(101_000), "ciento un mil");
        assert_eq!(short(999_999), "novecientos noventa y nueve mil novecientos noventa y nueve");
    }

    #[test]
    fn test_millions() {
        assert_eq!(short(1_000_000), "un millón");
        assert_eq!(short(2_000_000), "dos millones");
        assert_eq!(short(1_000_001), "un millón uno");
        assert_eq!(short(1_001_000), "un millón mil");
        assert_eq!(short(21_000_000), "veinte y un millones");
        assert_eq!(short(100_000_000), "cien millones");
    }

    #[test]
    fn test_short_scale_billions() {
        assert_eq!(short(1_000_000_000), "un billón");
        assert_eq!(short(3_000_000_000), "tres billones");
        assert_eq!(short(1_000_000_000_000), "un trillón");
        assert_eq!(
            short(2_001_000_000),
            "dos billones un millón"
        );
    }

    #[test]
    fn test_long_scale() {
        assert_eq!(long(1_000_000), "un millón");
        assert_eq!(long(1_000_000_000), "mil millones");
        assert_eq!(long(1_500_000_000), "mil quinientos millones");
        assert_eq!(long(2_001_000_000), "dos mil un millones");
        assert_eq!(long(21_000_000), "veinte y un millones");
        assert_eq!(long(1_000_000_000_000), "un billón");
        assert_eq!(long(1_000_000_021_000), "un billón veinte y un mil");
        assert_eq!(long(999_999), short(999_999));
    }

    #[test]
    fn test_negative() {
        assert_eq!(short(-1), "menos uno");
        assert_eq!(short(-100), "menos cien");
        assert_eq!(short(-1_000_000), "menos un millón");
        assert_eq!(long(-1_000_000_000), "menos mil millones");
    }

    #[test]
    fn test_largest_supported() {
        let converter = SpanishNumberConverter::default();
        let max = converter.max_magnitude() as i128;
        let words = converter.convert(max).unwrap();
        assert!(words.starts_with("novecientos noventa y nueve sextillones"));
        assert!(words.ends_with("novecientos noventa y nueve"));
    }

    #[test]
    fn test_magnitude_overflow() {
        let err = convert(10i128.pow(24)).unwrap_err();
        assert!(matches!(
            err,
            NumeralError::MagnitudeOverflow { chunks: 9, max_chunks: 8 }
        ));

        let long_converter = SpanishNumberConverter::new(ScaleSystem::Long);
        assert!(long_converter.convert(10i128.pow(36) - 1).is_ok());
        assert!(matches!(
            long_converter.convert(10i128.pow(36)),
            Err(NumeralError::MagnitudeOverflow { chunks: 7, max_chunks: 6 })
        ));
    }

    #[test]
    fn test_extremes_do_not_panic() {
        assert!(convert(i128::MIN).is_err());
        assert!(convert(i128::MAX).is_err());
    }

    #[test]
    fn test_below_thousand_one_forms() {
        assert_eq!(below_thousand(0, OneForm::Full), "");
        assert_eq!(below_thousand(1, OneForm::Apocopic), "un");
        assert_eq!(below_thousand(31, OneForm::Apocopic), "treinta y un");
        assert_eq!(below_thousand(11, OneForm::Apocopic), "once");
        assert_eq!(below_thousand(201, OneForm::Full), "doscientos uno");
    }

    #[test]
    fn test_rule_table_is_total() {
        for position in [ChunkPosition::Units, ChunkPosition::Thousands, ChunkPosition::Scaled] {
            for class in [ChunkClass::Zero, ChunkClass::One, ChunkClass::Many] {
                let matches = CHUNK_RULES
                    .iter()
                    .filter(|(p, c, _)| *p == position && *c == class)
                    .count();
                assert_eq!(matches, 1, "{:?}/{:?}", position, class);
            }
        }
    }

    #[test]
    fn test_scale_system_from_str() {
        assert_eq!("short".parse::<ScaleSystem>().unwrap(), ScaleSystem::Short);
        assert_eq!(" Long ".parse::<ScaleSystem>().unwrap(), ScaleSystem::Long);
        assert!("metric".parse::<ScaleSystem>().is_err());
    }
}
