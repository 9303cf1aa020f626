//! numerales - Spanish number words from the command line
//!
//! Spell numbers, read them back, or practice listening with a quiz.

use clap::{Parser, Subcommand};
use numerales::config_loader::Settings;
use numerales::{backends, quiz, Quiz, ScaleSystem, SpanishNumberConverter, SpanishNumberParser};
use serde::Serialize;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Spanish number words: spell, parse, and practice
#[derive(Parser)]
#[command(name = "numerales")]
#[command(author = "StarTuz")]
#[command(version)]
#[command(about = "Spell integers as Spanish words and practice listening to them", long_about = None)]
struct Cli {
    /// Extra configuration file, merged over the default locations
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use the long scale (10^9 = "mil millones")
    #[arg(long, global = true)]
    long: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spell a number in Spanish
    Say {
        /// Number to spell
        #[arg(allow_negative_numbers = true)]
        number: i128,
        /// Print JSON instead of plain words
        #[arg(long)]
        json: bool,
    },

    /// Read Spanish number words back into a number
    Parse {
        /// Words to read, e.g. "doscientos treinta y cuatro"
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Listening quiz
    Quiz {
        /// Number of questions
        #[arg(short, long)]
        rounds: Option<u32>,
        /// Smallest number asked
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i128>,
        /// Largest number asked
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i128>,
        /// Also print the words under each prompt
        #[arg(long)]
        show_words: bool,
    },
}

#[derive(Serialize)]
struct Spelled {
    number: i128,
    words: String,
    scale: ScaleSystem,
}

fn main() -> Result<(), Box<dyn Error>> {
    numerales::init_logging();

    let cli = Cli::parse();
    let settings = Settings::load_from(cli.config.as_deref())?;
    let scale = if cli.long {
        ScaleSystem::Long
    } else {
        settings.scale_system
    };
    let converter = SpanishNumberConverter::new(scale);
    debug!(%scale, "settings loaded");

    match cli.command {
        Commands::Say { number, json } => {
            let words = converter.convert(number)?;
            if json {
                let spelled = Spelled { number, words, scale };
                println!("{}", serde_json::to_string_pretty(&spelled)?);
            } else {
                println!("{}", words);
            }
        }
        Commands::Parse { words } => {
            let text = words.join(" ");
            let number = SpanishNumberParser::parse(&text, scale)?;
            println!("{}", number);
        }
        Commands::Quiz {
            rounds,
            min,
            max,
            show_words,
        } => {
            let min = min.unwrap_or(settings.quiz_min as i128);
            let max = max.unwrap_or(settings.quiz_max as i128);
            let rounds = rounds.unwrap_or(settings.quiz_rounds);
            let show_words = show_words || settings.show_words;

            let mut quiz = Quiz::new(converter, min, max)?;
            let announcer = backends::from_settings(&settings);
            println!(
                "Escribe el número que oyes ({} a {}). 'r' para repetir, 'q' para salir.",
                min, max
            );

            let stdin = io::stdin();
            quiz::run_session(
                &mut quiz,
                announcer.as_ref(),
                rounds,
                show_words,
                stdin.lock(),
                io::stdout(),
            )?;
        }
    }

    Ok(())
}
