//! Presentation seam for countdown results.

use std::io::Write;

use serde_json::json;

use crate::services::countdown::CountdownResult;

/// Receives rendered countdowns from the refresh loop.
#[cfg_attr(test, mockall::automock)]
pub trait CountdownDisplay {
    fn show(&mut self, name: &str, result: &CountdownResult, text: &str);
}

/// Writes one line per update, as plain text or a JSON object.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    json: bool,
}

impl ConsoleDisplay<std::io::Stdout> {
    pub fn stdout(json: bool) -> Self {
        Self::new(std::io::stdout(), json)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CountdownDisplay for ConsoleDisplay<W> {
    fn show(&mut self, name: &str, result: &CountdownResult, text: &str) {
        let written = if self.json {
            let line = json!({
                "name": name,
                "is_live": result.is_live(),
                "remaining": result.remaining(),
                "text": text,
            });
            writeln!(self.out, "{line}")
        } else {
            writeln!(self.out, "[{name}] {text}")
        };

        if let Err(err) = written.and_then(|_| self.out.flush()) {
            log::warn!("Failed to write countdown '{}': {}", name, err);
        }
    }
}
