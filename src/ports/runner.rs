use std::sync::mpsc::Receiver;

use crate::domain::AppError;

/// One chunk of child-process activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// A line of standard output.
    Stdout(String),
    /// A line of standard error.
    Stderr(String),
    /// Terminal outcome; always the last event on the channel.
    Exited { success: bool },
}

/// Boundary contract for executing an assembled command.
///
/// `launch` spawns the command and returns immediately; output arrives as
/// events on the receiver until the terminal `Exited` event. There are no
/// retries: a failed command is reported once and must be re-triggered
/// manually.
pub trait ProcessRunner {
    fn launch(&self, command: &str) -> Result<Receiver<OutputEvent>, AppError>;
}
