pub mod command;
pub mod console;

use crate::config_loader::{AnnouncerKind, Settings};
use crate::error::NumeralResult;
use std::time::Duration;

pub use command::CommandAnnouncer;
pub use console::ConsoleAnnouncer;

/// Trait that every way of delivering quiz prompts must implement.
/// A text-to-speech program is the usual target, the console is the fallback.
pub trait Announcer: Send + Sync {
    /// Delivers `text` to the listener, returning once it has been handed off
    fn announce(&self, text: &str) -> NumeralResult<()>;

    /// Returns the unique ID of the announcer (e.g., "console")
    fn id(&self) -> &'static str;
}

/// Builds the announcer selected in the settings.
pub fn from_settings(settings: &Settings) -> Box<dyn Announcer> {
    match settings.announcer {
        AnnouncerKind::Console => Box::new(ConsoleAnnouncer::new()),
        AnnouncerKind::Command => Box::new(CommandAnnouncer::new(
            settings.speak_command.clone(),
            settings.speak_args.clone(),
            Duration::from_secs(settings.speak_timeout_secs),
        )),
    }
}
