//! Runtime knobs for the assistant binary. Everything defaults, so the
//! binary runs with no environment set.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the purchase history document lives.
    pub history_path: PathBuf,
    /// Language tag forwarded to the transcription collaborator.
    pub language: String,
    /// Spawn the system `say` command for replies instead of console output.
    pub voice: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from("history.json"),
            language: "en-US".to_string(),
            voice: false,
        }
    }
}

impl Config {
    /// Read CARTWISE_HISTORY, CARTWISE_LANG, and CARTWISE_VOICE, keeping the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            history_path: env::var("CARTWISE_HISTORY")
                .map(PathBuf::from)
                .unwrap_or(base.history_path),
            language: env::var("CARTWISE_LANG").unwrap_or(base.language),
            voice: env::var("CARTWISE_VOICE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(base.voice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.history_path, PathBuf::from("history.json"));
        assert_eq!(config.language, "en-US");
        assert!(!config.voice);
    }
}
