//! Re-lint documents when they are saved.
//!
//! Each document's parent directory is watched rather than the file itself:
//! many editors save by writing a temporary file and renaming it over the
//! original, which a watch on the original inode would miss.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{EventKind, RecursiveMode, Watcher};

use crate::error::{LintError, Result};

/// Saves closer together than this count as one change.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Watches a fixed set of documents for saves.
pub struct DocumentWatcher {
    _watcher: notify::RecommendedWatcher,
    receiver: mpsc::Receiver<(PathBuf, Instant)>,
    documents: BTreeSet<PathBuf>,
    debounce: Debounce,
}

impl DocumentWatcher {
    /// Start watching `documents`. Paths are canonicalized, so the paths
    /// yielded by [`next_change`](Self::next_change) are canonical too.
    pub fn new(documents: &[PathBuf]) -> Result<Self> {
        let documents = documents
            .iter()
            .map(|path| {
                path.canonicalize().map_err(|e| LintError::Watch {
                    message: format!("{}: {}", path.display(), e),
                })
            })
            .collect::<Result<BTreeSet<_>>>()?;

        let (tx, rx) = mpsc::channel();
        let filter: HashSet<PathBuf> = documents.iter().cloned().collect();

        let mut watcher =
            notify::recommended_watcher(move |event: notify::Result<notify::Event>| {
                let Ok(event) = event else { return };
                if !matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                ) {
                    return;
                }
                // Debounced on arrival, not on when the consumer gets to it
                let arrived = Instant::now();
                for path in event.paths {
                    let path = path.canonicalize().unwrap_or(path);
                    if filter.contains(&path) {
                        let _ = tx.send((path, arrived));
                    }
                }
            })
            .map_err(watch_error)?;

        let parents: BTreeSet<&Path> = documents.iter().filter_map(|p| p.parent()).collect();
        for parent in parents {
            tracing::debug!(dir = %parent.display(), "watching directory");
            watcher
                .watch(parent, RecursiveMode::NonRecursive)
                .map_err(watch_error)?;
        }

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            documents,
            debounce: Debounce::new(DEFAULT_DEBOUNCE),
        })
    }

    /// The watched documents, canonicalized.
    pub fn documents(&self) -> impl Iterator<Item = &PathBuf> {
        self.documents.iter()
    }

    /// Wait up to `timeout` for a document to be saved or removed.
    ///
    /// Returns `None` on timeout. Events that reached the watcher within the
    /// debounce window of an accepted one are folded into it, however long
    /// the caller took to come back.
    pub fn next_change(&mut self, timeout: Duration) -> Option<PathBuf> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let (path, arrived) = self.receiver.recv_timeout(remaining).ok()?;
            if self.debounce.accept(&path, arrived) {
                return Some(path);
            }
        }
    }
}

fn watch_error(e: notify::Error) -> LintError {
    LintError::Watch {
        message: e.to_string(),
    }
}

/// Per-path debouncing of change events.
#[derive(Debug)]
struct Debounce {
    window: Duration,
    last: HashMap<PathBuf, Instant>,
}

impl Debounce {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last: HashMap::new(),
        }
    }

    fn accept(&mut self, path: &Path, now: Instant) -> bool {
        match self.last.get(path) {
            Some(previous) if now.saturating_duration_since(*previous) < self.window => false,
            _ => {
                self.last.insert(path.to_path_buf(), now);
                true
            }
        }
    }
}
