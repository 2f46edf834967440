use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SlangError, SlangResult};

/// Environment variable that overrides [`SlangConfig::lexicon_path`].
pub const LEXICON_PATH_ENV: &str = "PHILLY_SLANG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlangConfig {
    /// JSON lexicon watched for changes.
    pub lexicon_path: PathBuf,
    /// Replacement for common nouns missing from the lexicon.
    pub default_term: String,
    /// Plural of `default_term`; derived with the usual rule when unset.
    pub default_plural: Option<String>,
    pub phrase_matching: bool,
}

impl Default for SlangConfig {
    fn default() -> Self {
        Self {
            lexicon_path: PathBuf::from("data/philly_slang.json"),
            default_term: "jawn".to_string(),
            default_plural: None,
            phrase_matching: true,
        }
    }
}

impl SlangConfig {
    pub fn from_json_str(json: &str) -> SlangResult<Self> {
        let config: SlangConfig =
            serde_json::from_str(json).map_err(|e| SlangError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> SlangResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| SlangError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_lexicon_path_override(std::env::var(LEXICON_PATH_ENV).ok())
    }

    /// Replaces `lexicon_path` when `value` is present and not blank.
    pub fn with_lexicon_path_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value.filter(|p| !p.trim().is_empty()) {
            self.lexicon_path = PathBuf::from(path);
        }
        self
    }

    fn validate(&self) -> SlangResult<()> {
        if self.default_term.trim().is_empty() {
            return Err(SlangError::Config("default_term must not be empty".to_string()));
        }
        if matches!(&self.default_plural, Some(p) if p.trim().is_empty()) {
            return Err(SlangError::Config("default_plural must not be empty".to_string()));
        }
        Ok(())
    }
}
