//! Thin I/O adapters around the engine: transcription in, playback out.
//! Neither holds any engine state.

use std::io::{self, BufRead};

use tracing::warn;

/// What one listening turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heard {
    /// A transcribed command, already lowercased.
    Command(String),
    /// Nothing intelligible this turn; no command is dispatched.
    Silence,
    /// The input stream ended.
    Closed,
}

/// Speech-to-text collaborator. The language tag is passed through untouched;
/// the engine never branches on it.
pub trait Transcriber {
    fn listen(&mut self, language: &str) -> Heard;
}

/// Console stand-in for the microphone: one line of stdin per turn,
/// lowercased the way a speech recognizer reports commands.
pub struct StdinTranscriber;

impl Transcriber for StdinTranscriber {
    fn listen(&mut self, _language: &str) -> Heard {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Heard::Closed,
            Ok(_) => {
                let command = line.trim().to_lowercase();
                if command.is_empty() {
                    Heard::Silence
                } else {
                    Heard::Command(command)
                }
            }
            Err(e) => {
                warn!("stdin read failed: {e}");
                Heard::Silence
            }
        }
    }
}

/// Text-to-speech collaborator. Consumes the reply string; has no effect on
/// engine state.
pub trait Speaker {
    fn speak(&mut self, text: &str);
}

/// Prints the reply.
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Spawns the system `say` command. Replacing the held child handle drops it
/// with kill-on-drop set, so a still-running utterance stops before the next
/// one starts. Must run inside a tokio runtime.
pub struct SaySpeaker {
    current: Option<tokio::process::Child>,
}

impl SaySpeaker {
    pub fn new() -> Self {
        Self { current: None }
    }
}

impl Default for SaySpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for SaySpeaker {
    fn speak(&mut self, text: &str) {
        self.current = None;
        match tokio::process::Command::new("say")
            .arg(text)
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => self.current = Some(child),
            Err(e) => {
                warn!("failed to spawn 'say': {e}");
                println!("{text}");
            }
        }
    }
}
