use super::Announcer;
use crate::error::{NumeralError, NumeralResult};

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Prints the prompt instead of speaking it. Writes to stdout unless built
/// with [`ConsoleAnnouncer::with_writer`].
pub struct ConsoleAnnouncer<W: Write + Send = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleAnnouncer<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleAnnouncer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleAnnouncer<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Announcer for ConsoleAnnouncer<W> {
    fn id(&self) -> &'static str {
        "console"
    }

    fn announce(&self, text: &str) -> NumeralResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| NumeralError::Announce("console writer poisoned".to_string()))?;
        writeln!(writer, "🔊 {}", text)?;
        writer.flush()?;
        Ok(())
    }
}
