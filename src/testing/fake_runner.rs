use std::sync::mpsc::{self, Receiver};

use crate::domain::AppError;
use crate::ports::{OutputEvent, ProcessRunner};

/// Scripted process runner: replays a fixed event sequence.
#[derive(Debug, Clone)]
pub struct FakeRunner {
    events: Vec<OutputEvent>,
}

impl FakeRunner {
    pub fn new(events: Vec<OutputEvent>) -> Self {
        Self { events }
    }

    /// A run that prints one line and exits cleanly.
    pub fn success() -> Self {
        Self::new(vec![
            OutputEvent::Stdout("ok".to_string()),
            OutputEvent::Exited { success: true },
        ])
    }

    /// A run that complains and exits non-zero.
    pub fn failure() -> Self {
        Self::new(vec![
            OutputEvent::Stderr("boom".to_string()),
            OutputEvent::Exited { success: false },
        ])
    }
}

impl ProcessRunner for FakeRunner {
    fn launch(&self, _command: &str) -> Result<Receiver<OutputEvent>, AppError> {
        let (tx, rx) = mpsc::channel();
        for event in &self.events {
            tx.send(event.clone()).expect("receiver alive");
        }
        Ok(rx)
    }
}
