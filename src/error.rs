use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeralError {
    // Conversion errors
    #[error("Magnitude overflow: {chunks} digit groups needed, only {max_chunks} have scale words")]
    MagnitudeOverflow { chunks: usize, max_chunks: usize },

    // Parser errors
    #[error("Empty input")]
    EmptyInput,

    #[error("Unknown number word: {0}")]
    UnknownWord(String),

    #[error("Malformed number expression: {0}")]
    Malformed(String),

    // Quiz errors
    #[error("Invalid quiz range: {min}..={max}")]
    InvalidRange { min: i128, max: i128 },

    // Announcer errors
    #[error("Announce failed: {0}")]
    Announce(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NumeralResult<T> = Result<T, NumeralError>;
