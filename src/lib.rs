//! Spanish number words.
//!
//! Spells integers as Spanish words ("doscientos treinta y cuatro"), reads
//! such words back into integers, and drives a listening quiz on top of both.

#![warn(rust_2018_idioms)]

pub mod backends;
pub mod config_loader;
pub mod converter;
pub mod error;
pub mod lexicon;
pub mod parser;
pub mod quiz;

// Re-export key types
pub use converter::{convert, ScaleSystem, SpanishNumberConverter};
pub use error::{NumeralError, NumeralResult};
pub use parser::SpanishNumberParser;
pub use quiz::{Question, Quiz, Score, Verdict};

/// Installs the global tracing subscriber.
///
/// The filter comes from `NUMERALES_LOG` (e.g. `NUMERALES_LOG=debug`) and
/// defaults to `warn`. Calling this more than once is harmless.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("NUMERALES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init() so a second call does not panic
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
