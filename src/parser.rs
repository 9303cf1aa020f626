//! Spanish words to integer.
//!
//! Inverse of [`crate::converter`]. Accepts "un" and "uno" anywhere, ignores
//! case and accents ("millon" reads as "millón"), and rejects word sequences
//! that no Spanish number spells.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::converter::ScaleSystem;
use crate::error::{NumeralError, NumeralResult};
use crate::lexicon::{
    plural_scale, APOCOPIC_ONE, AND, HUNDREDS_WORDS, HUNDRED_ALONE, LONG_SCALE_WORDS, MINUS,
    SHORT_SCALE_WORDS, TENS_WORDS, THOUSAND, UNIT_WORDS, ZERO,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Word {
    Zero,
    Minus,
    And,
    Unit(u32),
    Tens(u32),
    Hundreds(u32),
    HundredAlone,
    Thousand,
    /// Rank 1 is "millón", 2 is "billón", and so on.
    Scale { rank: u32, plural: bool },
}

fn fold(word: &str) -> String {
    deunicode::deunicode(word).to_lowercase()
}

lazy_static! {
    static ref WORDS: HashMap<String, Word> = {
        let mut words = HashMap::new();
        words.insert(fold(ZERO), Word::Zero);
        words.insert(fold(MINUS), Word::Minus);
        words.insert(fold(AND), Word::And);
        words.insert(fold(APOCOPIC_ONE), Word::Unit(1));
        for (value, word) in UNIT_WORDS.iter().enumerate().skip(1) {
            words.insert(fold(word), Word::Unit(value as u32));
        }
        for (digit, word) in TENS_WORDS.iter().enumerate().skip(2) {
            words.insert(fold(word), Word::Tens(digit as u32 * 10));
        }
        for (digit, word) in HUNDREDS_WORDS.iter().enumerate().skip(1) {
            words.insert(fold(word), Word::Hundreds(digit as u32 * 100));
        }
        words.insert(fold(HUNDRED_ALONE), Word::HundredAlone);
        words.insert(fold(THOUSAND), Word::Thousand);
        for (index, word) in SHORT_SCALE_WORDS.iter().enumerate().skip(2) {
            let rank = index as u32 - 1;
            words.insert(fold(word), Word::Scale { rank, plural: false });
            words.insert(fold(&plural_scale(word)), Word::Scale { rank, plural: true });
        }
        words
    };
}

fn scale_value(rank: u32, scale: ScaleSystem) -> Option<u128> {
    match scale {
        ScaleSystem::Short => 1000u128.checked_pow(rank + 1),
        ScaleSystem::Long if (rank as usize) < LONG_SCALE_WORDS.len() => {
            1_000_000u128.checked_pow(rank)
        }
        ScaleSystem::Long => None,
    }
}

fn malformed(message: impl Into<String>) -> NumeralError {
    NumeralError::Malformed(message.into())
}

/// Running totals while reading one number.
#[derive(Default)]
struct Accumulator {
    /// Sum of every finished scale tier.
    total: u128,
    /// Value of the current tier read so far, up to and including "mil".
    group: u128,
    /// Phrase below one thousand currently being read.
    segment: u32,
    has_thousand: bool,
    /// "cien" was read; nothing may be added to the segment.
    segment_closed: bool,
    /// "ciento" was read and still needs its tail.
    needs_tail: bool,
    last_scale: Option<u128>,
    prev: Option<Word>,
}

impl Accumulator {
    fn push(&mut self, word: Word, raw: &str, scale: ScaleSystem) -> NumeralResult<()> {
        match word {
            Word::Zero | Word::Minus => {
                return Err(malformed(format!("'{}' out of place", raw)));
            }
            Word::And => {
                if !matches!(self.prev, Some(Word::Tens(_))) {
                    return Err(malformed("'y' must follow a tens word"));
                }
            }
            Word::Unit(value) => {
                self.check_open(raw)?;
                let low = self.segment % 100;
                if self.prev == Some(Word::And) {
                    if value > 9 {
                        return Err(malformed(format!("'{}' cannot follow 'y'", raw)));
                    }
                } else if low != 0 {
                    return Err(malformed(format!("unexpected '{}'", raw)));
                }
                self.segment += value;
                self.needs_tail = false;
            }
            Word::Tens(value) => {
                self.check_open(raw)?;
                if self.segment % 100 != 0 {
                    return Err(malformed(format!("unexpected '{}'", raw)));
                }
                self.segment += value;
                self.needs_tail = false;
            }
            Word::Hundreds(value) => {
                if self.segment != 0 {
                    return Err(malformed(format!("unexpected '{}'", raw)));
                }
                self.segment = value;
                self.needs_tail = value == 100;
            }
            Word::HundredAlone => {
                if self.segment != 0 {
                    return Err(malformed(format!("unexpected '{}'", raw)));
                }
                self.segment = 100;
                self.segment_closed = true;
            }
            Word::Thousand => {
                self.check_tail()?;
                if self.has_thousand {
                    return Err(malformed("'mil' repeated within one tier"));
                }
                let multiplier = if self.segment == 0 { 1 } else { self.segment };
                self.group += multiplier as u128 * 1000;
                self.segment = 0;
                self.segment_closed = false;
                self.has_thousand = true;
            }
            Word::Scale { rank, plural } => {
                self.check_tail()?;
                let value = scale_value(rank, scale)
                    .ok_or_else(|| NumeralError::UnknownWord(raw.to_string()))?;
                if self.has_thousand && scale == ScaleSystem::Short {
                    return Err(malformed(format!("'mil {}' is not a short scale number", raw)));
                }
                if self.last_scale.is_some_and(|last| value >= last) {
                    return Err(malformed("scale words out of descending order"));
                }
                let count = self.group + self.segment as u128;
                if count == 0 {
                    return Err(malformed(format!("'{}' needs a quantity", raw)));
                }
                if plural != (count > 1) {
                    return Err(malformed(format!("'{}' does not agree with its quantity", raw)));
                }
                let tier = count
                    .checked_mul(value)
                    .ok_or_else(|| malformed("number too large"))?;
                self.total = self
                    .total
                    .checked_add(tier)
                    .ok_or_else(|| malformed("number too large"))?;
                self.group = 0;
                self.segment = 0;
                self.segment_closed = false;
                self.has_thousand = false;
                self.last_scale = Some(value);
            }
        }
        self.prev = Some(word);
        Ok(())
    }

    fn check_open(&self, raw: &str) -> NumeralResult<()> {
        if self.segment_closed {
            return Err(malformed(format!("'cien' cannot be followed by '{}'", raw)));
        }
        Ok(())
    }

    fn check_tail(&self) -> NumeralResult<()> {
        if self.needs_tail {
            return Err(malformed("'ciento' must be followed by tens or units"));
        }
        Ok(())
    }

    fn finish(self) -> NumeralResult<u128> {
        if self.prev == Some(Word::And) {
            return Err(malformed("dangling 'y'"));
        }
        self.check_tail()?;
        self.total
            .checked_add(self.group + self.segment as u128)
            .ok_or_else(|| malformed("number too large"))
    }
}

/// Spanish words-to-number parser.
pub struct SpanishNumberParser;

impl SpanishNumberParser {
    /// Reads a Spanish number phrase.
    ///
    /// # Examples
    /// ```
    /// # use numerales::{ScaleSystem, SpanishNumberParser};
    /// let n = SpanishNumberParser::parse("doscientos treinta y cuatro", ScaleSystem::Short).unwrap();
    /// assert_eq!(n, 234);
    /// ```
    pub fn parse(text: &str, scale: ScaleSystem) -> NumeralResult<i128> {
        let raw_words: Vec<&str> = text.split_whitespace().collect();
        if raw_words.is_empty() {
            return Err(NumeralError::EmptyInput);
        }

        let mut words = Vec::with_capacity(raw_words.len());
        for raw in &raw_words {
            let word = WORDS
                .get(&fold(raw))
                .copied()
                .ok_or_else(|| NumeralError::UnknownWord(raw.to_string()))?;
            words.push((word, *raw));
        }

        let (negative, words) = match words.split_first() {
            Some(((Word::Minus, _), rest)) => (true, rest),
            _ => (false, &words[..]),
        };

        if words.is_empty() {
            return Err(malformed("'menos' without a number"));
        }

        if let [(Word::Zero, _)] = words {
            return if negative {
                Err(malformed("'menos cero'"))
            } else {
                Ok(0)
            };
        }

        let mut acc = Accumulator::default();
        for (word, raw) in words {
            acc.push(*word, raw, scale)?;
        }
        let magnitude = acc.finish()?;

        if negative {
            if magnitude == i128::MIN.unsigned_abs() {
                return Ok(i128::MIN);
            }
            let value = i128::try_from(magnitude).map_err(|_| malformed("number too large"))?;
            Ok(-value)
        } else {
            i128::try_from(magnitude).map_err(|_| malformed("number too large"))
        }
    }

    /// Checks that every word belongs to the Spanish number vocabulary.
    pub fn is_spanish_number(text: &str) -> bool {
        let mut words = text.split_whitespace().peekable();
        words.peek().is_some() && words.all(|word| WORDS.contains_key(&fold(word)))
    }
}
