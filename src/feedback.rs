//! Optional feedback after an answer.
//!
//! Sound is the terminal bell. A terminal has no vibration motor, so that
//! setting is accepted and skipped.

use std::io::{self, Write};

use tracing::debug;

use crate::config::Settings;

pub struct Feedback<W: Write> {
    out: W,
}

impl Feedback<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Feedback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// One bell for a correct answer, two for a wrong one.
    pub fn answer(&mut self, settings: &Settings, correct: bool) {
        if settings.vibration_enabled {
            debug!("No vibration device on a terminal, skipping");
        }
        if !settings.sound_enabled {
            return;
        }

        let bells: &[u8] = if correct { b"\x07" } else { b"\x07\x07" };
        if let Err(e) = self.out.write_all(bells).and_then(|_| self.out.flush()) {
            debug!("Could not ring terminal bell: {}", e);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bells() {
        let settings = Settings::default();
        let mut feedback = Feedback::new(Vec::new());
        feedback.answer(&settings, true);
        feedback.answer(&settings, false);
        assert_eq!(feedback.into_inner(), b"\x07\x07\x07");
    }

    #[test]
    fn test_sound_disabled_is_silent() {
        let settings = Settings {
            sound_enabled: false,
            ..Settings::default()
        };
        let mut feedback = Feedback::new(Vec::new());
        feedback.answer(&settings, false);
        assert!(feedback.into_inner().is_empty());
    }
}
