use std::collections::HashMap;
use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SlangError, SlangResult};

/// A lexicon value as it appears in the JSON resource.
///
/// Anything that is neither a string nor a list of strings is kept as
/// `Malformed` so a single bad entry never fails the whole load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SlangEntry {
    Single(String),
    Candidates(Vec<String>),
    Malformed(Value),
}

/// Result of looking a key up in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Non-empty list of replacement terms.
    Candidates(&'a [String]),
    /// No entry, or an empty candidate list.
    Absent,
    /// Present but unusable; the caller passes the token through.
    Malformed,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, SlangEntry>,
}

impl Lexicon {
    pub fn new(raw: HashMap<String, SlangEntry>) -> Self {
        Self {
            entries: Lexicon::normalize_keys(raw),
        }
    }

    /// Lowercases keys. An exactly-lowercase key wins over differently cased
    /// spellings of the same word.
    fn normalize_keys(raw: HashMap<String, SlangEntry>) -> HashMap<String, SlangEntry> {
        let mut entries = HashMap::with_capacity(raw.len());
        let mut recased = Vec::new();
        for (k, v) in raw {
            let lower = k.to_lowercase();
            if k == lower {
                entries.insert(k, v);
            } else {
                recased.push((lower, v));
            }
        }
        for (lower, v) in recased {
            entries.entry(lower).or_insert(v);
        }
        entries
    }

    /// Parses the persisted resource: a JSON object of key to term or terms.
    pub fn from_json_str(json: &str, path: &Path) -> SlangResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|source| SlangError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !value.is_object() {
            return Err(SlangError::NotAnObject {
                path: path.to_path_buf(),
            });
        }
        let raw: HashMap<String, SlangEntry> =
            serde_json::from_value(value).map_err(|source| SlangError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let lexicon = Lexicon::new(raw);
        for key in lexicon.malformed_keys() {
            tracing::warn!(key, path = %path.display(), "ignoring malformed lexicon entry");
        }
        Ok(lexicon)
    }

    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        match self.entries.get(key) {
            None => Lookup::Absent,
            Some(SlangEntry::Single(term)) => Lookup::Candidates(std::slice::from_ref(term)),
            Some(SlangEntry::Candidates(terms)) if terms.is_empty() => Lookup::Absent,
            Some(SlangEntry::Candidates(terms)) => Lookup::Candidates(terms),
            Some(SlangEntry::Malformed(_)) => Lookup::Malformed,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn malformed_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| matches!(v, SlangEntry::Malformed(_)))
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An immutable lexicon together with the modification time of the resource
/// it was read from. `modified` is `None` for the built-in mapping.
#[derive(Debug, Clone)]
pub struct LexiconSnapshot {
    pub lexicon: Lexicon,
    pub modified: Option<SystemTime>,
}

impl LexiconSnapshot {
    pub fn new(lexicon: Lexicon, modified: Option<SystemTime>) -> Self {
        Self { lexicon, modified }
    }
}
