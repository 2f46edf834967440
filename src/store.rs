use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::SystemTime;

use crate::data;
use crate::error::{SlangError, SlangResult};
use crate::lexicon::{Lexicon, LexiconSnapshot};

/// What a call to [`LexiconStore::refresh_if_stale`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Modification time matches the cached snapshot.
    Unchanged,
    /// A new snapshot was loaded and published.
    Reloaded,
    /// Loaded fine, but another caller published a snapshot first.
    Superseded,
    /// The resource could not be stat'ed, read or parsed.
    Failed,
}

/// Owns the current lexicon snapshot and the path it is reloaded from.
///
/// Readers clone an `Arc` out of the lock and never see a half-built
/// lexicon; all file I/O happens outside the lock.
pub struct LexiconStore {
    path: PathBuf,
    current: RwLock<Arc<LexiconSnapshot>>,
    // mtime of the last version that failed to load; repeats log at debug
    failed_at: Mutex<Option<SystemTime>>,
}

impl LexiconStore {
    /// Loads `path` if possible, otherwise starts from the built-in mapping.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = match load_snapshot(&path) {
            Ok(snapshot) => {
                tracing::info!(path = %path.display(), entries = snapshot.lexicon.len(), "loaded lexicon");
                snapshot
            }
            Err(e) => {
                log_load_failure(&e);
                let store = Self::from_snapshot(
                    path,
                    LexiconSnapshot::new(data::load_default_lexicon(), None),
                );
                if !is_not_found(&e) {
                    *store.failed_at.lock().unwrap_or_else(PoisonError::into_inner) =
                        modified_time(&store.path).ok();
                }
                return store;
            }
        };
        Self::from_snapshot(path, snapshot)
    }

    /// Starts from an in-memory lexicon; `path` is still consulted on refresh.
    pub fn with_lexicon(path: impl Into<PathBuf>, lexicon: Lexicon) -> Self {
        Self::from_snapshot(path.into(), LexiconSnapshot::new(lexicon, None))
    }

    fn from_snapshot(path: PathBuf, snapshot: LexiconSnapshot) -> Self {
        Self {
            path,
            current: RwLock::new(Arc::new(snapshot)),
            failed_at: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_snapshot(&self) -> Arc<LexiconSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reloads the resource if its modification time differs from the cached
    /// one. Failures leave the current snapshot in place.
    pub fn refresh_if_stale(&self) -> RefreshOutcome {
        let cached = self.current_snapshot();

        let modified = match modified_time(&self.path) {
            Ok(m) => m,
            Err(e) => {
                log_load_failure(&e);
                return RefreshOutcome::Failed;
            }
        };
        if cached.modified == Some(modified) {
            tracing::debug!(path = %self.path.display(), "lexicon unchanged, skipping reload");
            return RefreshOutcome::Unchanged;
        }

        let fresh = match read_snapshot(&self.path, modified) {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                if self.record_failure(modified) {
                    log_load_failure(&e);
                } else {
                    tracing::debug!(error = %e, "lexicon still unreadable");
                }
                return RefreshOutcome::Failed;
            }
        };
        *self.failed_at.lock().unwrap_or_else(PoisonError::into_inner) = None;

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if !Arc::ptr_eq(&*guard, &cached) {
            tracing::debug!(path = %self.path.display(), "lexicon already replaced by a concurrent reload");
            return RefreshOutcome::Superseded;
        }
        tracing::info!(path = %self.path.display(), entries = fresh.lexicon.len(), "reloaded lexicon");
        *guard = fresh;
        RefreshOutcome::Reloaded
    }

    /// Remembers `modified` as a failed version. Returns `false` when that
    /// version already failed before.
    fn record_failure(&self, modified: SystemTime) -> bool {
        let mut failed_at = self.failed_at.lock().unwrap_or_else(PoisonError::into_inner);
        if *failed_at == Some(modified) {
            return false;
        }
        *failed_at = Some(modified);
        true
    }

    /// Unconditionally reads the resource and publishes it.
    pub fn reload(&self) -> SlangResult<Arc<LexiconSnapshot>> {
        let fresh = Arc::new(load_snapshot(&self.path)?);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        tracing::info!(path = %self.path.display(), entries = fresh.lexicon.len(), "reloaded lexicon");
        Ok(fresh)
    }
}

fn modified_time(path: &Path) -> SlangResult<SystemTime> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| SlangError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn read_snapshot(path: &Path, modified: SystemTime) -> SlangResult<LexiconSnapshot> {
    let json = fs::read_to_string(path).map_err(|source| SlangError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lexicon = Lexicon::from_json_str(&json, path)?;
    Ok(LexiconSnapshot::new(lexicon, Some(modified)))
}

fn load_snapshot(path: &Path) -> SlangResult<LexiconSnapshot> {
    let modified = modified_time(path)?;
    read_snapshot(path, modified)
}

fn is_not_found(e: &SlangError) -> bool {
    matches!(e, SlangError::Io { source, .. } if source.kind() == ErrorKind::NotFound)
}

fn log_load_failure(e: &SlangError) {
    // A missing file is the normal state when running on the built-in table.
    if is_not_found(e) {
        tracing::debug!(error = %e, "lexicon resource not found");
    } else {
        tracing::warn!(error = %e, "keeping previous lexicon");
    }
}
