use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::converter::{ScaleSystem, SpanishNumberConverter};

/// How quiz prompts reach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncerKind {
    Console,
    Command,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scale_system: ScaleSystem,
    // Quiz settings
    pub quiz_min: i64,
    pub quiz_max: i64,
    pub quiz_rounds: u32,
    pub show_words: bool,
    // Announcer settings
    pub announcer: AnnouncerKind, // "console" or "command"
    pub speak_command: String,
    pub speak_args: Vec<String>,
    pub speak_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_system: ScaleSystem::Short,
            quiz_min: 0,
            quiz_max: 999,
            quiz_rounds: 10,
            show_words: false,
            announcer: AnnouncerKind::Console,
            speak_command: "espeak-ng".to_string(),
            speak_args: vec!["-v".to_string(), "es".to_string()],
            speak_timeout_secs: 5,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Loads defaults, the optional config files, an explicit file if given,
    /// and finally `NUMERALES_*` environment variables.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("scale_system", "short")?
            // Quiz defaults
            .set_default("quiz_min", 0)?
            .set_default("quiz_max", 999)?
            .set_default("quiz_rounds", 10)?
            .set_default("show_words", false)?
            // Announcer defaults
            .set_default("announcer", "console")?
            .set_default("speak_command", "espeak-ng")?
            .set_default("speak_args", vec!["-v", "es"])?
            .set_default("speak_timeout_secs", 5)?
            // Merge with local config file (if exists)
            .add_source(File::with_name("Numerales").required(false));

        if let Some(home) = dirs::home_dir() {
            builder = builder.add_source(
                File::with_name(&home.join(".config/numerales/Numerales").to_string_lossy())
                    .required(false),
            );
        }

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // Merge with environment variables (e.g. NUMERALES_QUIZ_MAX)
        builder = builder.add_source(
            Environment::with_prefix("NUMERALES")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("speak_args"),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.quiz_min > self.quiz_max {
            return Err(config::ConfigError::Message(format!(
                "Invalid quiz range: quiz_min {} is greater than quiz_max {}",
                self.quiz_min, self.quiz_max
            )));
        }
        let limit = SpanishNumberConverter::new(self.scale_system).max_magnitude();
        if (self.quiz_min.unsigned_abs() as u128) > limit || (self.quiz_max.unsigned_abs() as u128) > limit {
            return Err(config::ConfigError::Message(format!(
                "Quiz range exceeds the {} scale",
                self.scale_system
            )));
        }
        if self.quiz_rounds == 0 {
            return Err(config::ConfigError::Message(
                "quiz_rounds must be greater than 0".to_string(),
            ));
        }
        if self.speak_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "speak_timeout_secs must be positive".to_string(),
            ));
        }
        if self.announcer == AnnouncerKind::Command && self.speak_command.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "speak_command must be set when announcer is 'command'".to_string(),
            ));
        }
        Ok(())
    }
}
