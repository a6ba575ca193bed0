use std::path::PathBuf;

use crate::error::{DiaryError, Result};

/// User id addressed when the caller does not name one
pub const DEMO_USER: &str = "demo-user";

/// Results returned by a relevance search unless the caller narrows it
pub const DEFAULT_SEARCH_LIMIT: usize = 5;
/// Ranked records injected into an enhanced prompt
pub const PROMPT_CONTEXT_LIMIT: usize = 3;
/// Characters of record content shown in a prompt context block
pub const PREVIEW_MAX_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    /// Where context collections are persisted
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load(data_dir_override: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = data_dir_override {
            return Ok(Config { data_dir: dir });
        }

        if let Ok(dir) = std::env::var("KOKORO_DATA_DIR") {
            return Ok(Config {
                data_dir: PathBuf::from(dir),
            });
        }

        let home = dirs::home_dir()
            .ok_or_else(|| DiaryError::Config("Could not determine home directory".into()))?;

        Ok(Config {
            data_dir: home.join(".kokoro"),
        })
    }

    /// Path of the JSON file holding every user's context collection
    pub fn contexts_path(&self) -> PathBuf {
        self.data_dir.join("contexts.json")
    }
}
