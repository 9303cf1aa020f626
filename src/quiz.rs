//! Listening quiz: pick a number, announce its Spanish words, check the answer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::backends::Announcer;
use crate::converter::SpanishNumberConverter;
use crate::error::{NumeralError, NumeralResult};
use crate::parser::SpanishNumberParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub number: i128,
    pub words: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: i128 },
    /// The answer is neither digits nor Spanish number words.
    Invalid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
}

impl Score {
    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }
}

pub struct Quiz<R: Rng = StdRng> {
    converter: SpanishNumberConverter,
    min: i128,
    max: i128,
    rng: R,
    score: Score,
}

impl Quiz<StdRng> {
    pub fn new(converter: SpanishNumberConverter, min: i128, max: i128) -> NumeralResult<Self> {
        Self::with_rng(converter, min, max, StdRng::from_entropy())
    }

    /// Reproducible question sequence, mainly for tests.
    pub fn seeded(converter: SpanishNumberConverter, min: i128, max: i128, seed: u64) -> NumeralResult<Self> {
        Self::with_rng(converter, min, max, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Quiz<R> {
    pub fn with_rng(converter: SpanishNumberConverter, min: i128, max: i128, rng: R) -> NumeralResult<Self> {
        let limit = converter.max_magnitude();
        if min > max || min.unsigned_abs() > limit || max.unsigned_abs() > limit {
            return Err(NumeralError::InvalidRange { min, max });
        }
        Ok(Self {
            converter,
            min,
            max,
            rng,
            score: Score::default(),
        })
    }

    pub fn next_question(&mut self) -> NumeralResult<Question> {
        let number = self.rng.gen_range(self.min..=self.max);
        let words = self.converter.convert(number)?;
        Ok(Question { number, words })
    }

    /// Grades a typed answer. Digits are read first, then Spanish words.
    /// Invalid answers leave the score untouched.
    pub fn check(&mut self, question: &Question, answer: &str) -> Verdict {
        let answer = answer.trim();
        if answer.is_empty() {
            return Verdict::Invalid;
        }

        let given = match answer.parse::<i128>() {
            Ok(n) => n,
            Err(_) => match SpanishNumberParser::parse(answer, self.converter.scale()) {
                Ok(n) => n,
                Err(_) => return Verdict::Invalid,
            },
        };

        if given == question.number {
            self.score.correct += 1;
            Verdict::Correct
        } else {
            self.score.incorrect += 1;
            Verdict::Incorrect {
                expected: question.number,
            }
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }
}

/// Answers that replay the current question instead of being graded.
pub const REPLAY_COMMANDS: [&str; 2] = ["r", "repetir"];

fn announce_question<A, O>(announcer: &A, question: &Question, output: &mut O) -> NumeralResult<()>
where
    A: Announcer + ?Sized,
    O: Write,
{
    if let Err(e) = announcer.announce(&question.words) {
        warn!(announcer = announcer.id(), error = %e, "announce failed");
        writeln!(output, "⚠️ No se pudo reproducir el audio: {}", e)?;
    }
    Ok(())
}

/// Runs up to `rounds` questions over `input`/`output`.
///
/// Blank or invalid answers re-prompt the same question, `r`/`repetir`
/// announces it again without scoring, `q` ends the session early, and so
/// does end of input.
pub fn run_session<R, A, I, O>(
    quiz: &mut Quiz<R>,
    announcer: &A,
    rounds: u32,
    show_words: bool,
    mut input: I,
    mut output: O,
) -> NumeralResult<Score>
where
    R: Rng,
    A: Announcer + ?Sized,
    I: BufRead,
    O: Write,
{
    'rounds: for round in 1..=rounds {
        let question = quiz.next_question()?;
        writeln!(output, "Pregunta {}/{}", round, rounds)?;

        announce_question(announcer, &question, &mut output)?;
        if show_words {
            writeln!(output, "{}", question.words)?;
        }

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break 'rounds;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("q") {
                break 'rounds;
            }
            if REPLAY_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd)) {
                announce_question(announcer, &question, &mut output)?;
                continue;
            }

            match quiz.check(&question, line) {
                Verdict::Correct => {
                    writeln!(output, "✅ ¡Correcto! {}", question.number)?;
                    break;
                }
                Verdict::Incorrect { expected } => {
                    writeln!(
                        output,
                        "❌ Incorrecto. La respuesta era {} ({}).",
                        expected, question.words
                    )?;
                    break;
                }
                Verdict::Invalid => {
                    writeln!(output, "Introduce un número válido.")?;
                }
            }
        }
    }

    let score = quiz.score();
    info!(correct = score.correct, incorrect = score.incorrect, "quiz finished");
    writeln!(output, "Resultado: {}/{}", score.correct, score.answered())?;
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ScaleSystem;

    fn quiz(min: i128, max: i128) -> Quiz {
        Quiz::seeded(SpanishNumberConverter::default(), min, max, 7).unwrap()
    }

    #[test]
    fn test_questions_stay_in_range() {
        let mut quiz = quiz(0, 999);
        for _ in 0..200 {
            let question = quiz.next_question().unwrap();
            assert!((0..=999).contains(&question.number));
            assert_eq!(question.words, crate::convert(question.number).unwrap());
        }
    }

    #[test]
    fn test_seeded_quiz_is_reproducible() {
        let mut a = quiz(-500, 500);
        let mut b = quiz(-500, 500);
        for _ in 0..20 {
            assert_eq!(a.next_question().unwrap(), b.next_question().unwrap());
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut quiz = quiz(42, 42);
        let question = quiz.next_question().unwrap();
        assert_eq!(question.number, 42);
        assert_eq!(question.words, "cuarenta y dos");
    }

    #[test]
    fn test_invalid_range() {
        let converter = SpanishNumberConverter::default();
        assert!(matches!(
            Quiz::new(converter, 10, 1),
            Err(NumeralError::InvalidRange { min: 10, max: 1 })
        ));
        assert!(Quiz::new(converter, 0, 10i128.pow(24)).is_err());
    }

    #[test]
    fn test_check_digits_and_words() {
        let mut quiz = quiz(0, 999);
        let question = Question {
            number: 234,
            words: "doscientos treinta y cuatro".to_string(),
        };
        assert_eq!(quiz.check(&question, " 234 "), Verdict::Correct);
        assert_eq!(quiz.check(&question, "doscientos treinta y cuatro"), Verdict::Correct);
        assert_eq!(
            quiz.check(&question, "243"),
            Verdict::Incorrect { expected: 234 }
        );
        assert_eq!(quiz.score(), Score { correct: 2, incorrect: 1 });
    }

    #[test]
    fn test_invalid_answers_do_not_score() {
        let mut quiz = quiz(0, 999);
        let question = Question {
            number: 7,
            words: "siete".to_string(),
        };
        assert_eq!(quiz.check(&question, ""), Verdict::Invalid);
        assert_eq!(quiz.check(&question, "siete gatos"), Verdict::Invalid);
        assert_eq!(quiz.check(&question, "7.5"), Verdict::Invalid);
        assert_eq!(quiz.score(), Score::default());
    }

    #[test]
    fn test_long_scale_answers() {
        let converter = SpanishNumberConverter::new(ScaleSystem::Long);
        let mut quiz = Quiz::seeded(converter, 0, 10, 1).unwrap();
        let question = Question {
            number: 1_000_000_000,
            words: "mil millones".to_string(),
        };
        assert_eq!(quiz.check(&question, "mil millones"), Verdict::Correct);
    }
}
