use super::Announcer;
use crate::error::{NumeralError, NumeralResult};

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use wait_timeout::ChildExt;

/// Hands the prompt to an external speech program, e.g. `espeak-ng -v es`.
/// The text is passed as the last argument.
pub struct CommandAnnouncer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandAnnouncer {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn id(&self) -> &'static str {
        "command"
    }

    fn announce(&self, text: &str) -> NumeralResult<()> {
        debug!(program = %self.program, text, "announcing");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| NumeralError::Announce(format!("failed to start {}: {}", self.program, e)))?;

        // Drain stderr while waiting so a chatty program cannot fill the pipe and stall
        let stderr = child.stderr.take();
        let stderr_reader = thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(mut pipe) = stderr {
                let _ = pipe.read_to_end(&mut buf);
            }
            buf
        });

        match child.wait_timeout(self.timeout)? {
            Some(status) => {
                if status.success() {
                    Ok(())
                } else {
                    let stderr = stderr_reader.join().unwrap_or_default();
                    let err_msg = String::from_utf8_lossy(&stderr);
                    Err(NumeralError::Announce(format!(
                        "{} exited with {}: {}",
                        self.program,
                        status,
                        err_msg.trim()
                    )))
                }
            }
            None => {
                // Timeout occurred, kill the process
                warn!(program = %self.program, "speech program timed out");
                let _ = child.kill();
                let _ = child.wait();
                Err(NumeralError::Announce(format!(
                    "{} timed out after {:?}",
                    self.program, self.timeout
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let announcer = CommandAnnouncer::new(
            "numerales-no-such-speech-program",
            Vec::new(),
            Duration::from_secs(1),
        );
        let err = announcer.announce("uno").unwrap_err();
        assert!(matches!(err, NumeralError::Announce(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_program() {
        let announcer = CommandAnnouncer::new("true", Vec::new(), Duration::from_secs(5));
        assert!(announcer.announce("dos").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program() {
        let announcer = CommandAnnouncer::new("false", Vec::new(), Duration::from_secs(5));
        assert!(matches!(
            announcer.announce("tres"),
            Err(NumeralError::Announce(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_stderr_is_reported_as_failure() {
        // The text lands in $0 of the script
        let script = "head -c 262144 /dev/zero | tr '\\0' x >&2; echo fin >&2; exit 3";
        let announcer = CommandAnnouncer::new(
            "sh",
            vec!["-c".to_string(), script.to_string()],
            Duration::from_secs(10),
        );
        let err = announcer.announce("cuatro").unwrap_err().to_string();
        assert!(err.contains("exited with"), "unexpected error: {:.120}", err);
        assert!(err.ends_with("fin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_program() {
        // `sleep` receives the text as its last argument, so the prompt is a duration
        let announcer = CommandAnnouncer::new("sleep", Vec::new(), Duration::from_millis(100));
        let err = announcer.announce("5").unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }
}
