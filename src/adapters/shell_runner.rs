//! Shell-backed process runner.
//!
//! Runs the assembled command under `sh -c` with piped stdout/stderr.
//! Reader threads forward each line as an event; a waiter thread joins the
//! readers, waits on the child, and sends the terminal event last.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::domain::AppError;
use crate::ports::{OutputEvent, ProcessRunner};

#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

fn forward_lines<R, F>(source: R, tx: Sender<OutputEvent>, wrap: F) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
    F: Fn(String) -> OutputEvent + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(source);
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send(wrap(line)).is_err() {
                break;
            }
        }
    })
}

impl ProcessRunner for ShellRunner {
    fn launch(&self, command: &str) -> Result<Receiver<OutputEvent>, AppError> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::SpawnFailed {
                command: command.to_string(),
                details: e.to_string(),
            })?;

        let (tx, rx) = mpsc::channel();

        let stdout_handle = child
            .stdout
            .take()
            .map(|out| forward_lines(out, tx.clone(), OutputEvent::Stdout));
        let stderr_handle = child
            .stderr
            .take()
            .map(|err| forward_lines(err, tx.clone(), OutputEvent::Stderr));

        thread::spawn(move || {
            if let Some(handle) = stdout_handle {
                let _ = handle.join();
            }
            if let Some(handle) = stderr_handle {
                let _ = handle.join();
            }
            let success = child.wait().map(|status| status.success()).unwrap_or(false);
            let _ = tx.send(OutputEvent::Exited { success });
        });

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(rx: Receiver<OutputEvent>) -> Vec<OutputEvent> {
        rx.into_iter().collect()
    }

    #[test]
    fn streams_stdout_then_reports_success() {
        let runner = ShellRunner::new();
        let rx = runner.launch("echo one && echo two").unwrap();
        let events = collect(rx);

        assert_eq!(
            events,
            vec![
                OutputEvent::Stdout("one".to_string()),
                OutputEvent::Stdout("two".to_string()),
                OutputEvent::Exited { success: true },
            ]
        );
    }

    #[test]
    fn captures_stderr_and_failure() {
        let runner = ShellRunner::new();
        let rx = runner.launch("echo oops >&2; exit 3").unwrap();
        let events = collect(rx);

        assert!(events.contains(&OutputEvent::Stderr("oops".to_string())));
        assert_eq!(events.last(), Some(&OutputEvent::Exited { success: false }));
    }

    #[test]
    fn terminal_event_arrives_last() {
        let runner = ShellRunner::new();
        let rx = runner.launch("echo a; echo b >&2; echo c").unwrap();
        let events = collect(rx);

        assert_eq!(events.last(), Some(&OutputEvent::Exited { success: true }));
        assert_eq!(events.iter().filter(|e| matches!(e, OutputEvent::Exited { .. })).count(), 1);
    }
}
