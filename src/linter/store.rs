//! Per-document diagnostic store.
//!
//! Each lint run takes a [`RunTicket`] before spawning the validator and
//! presents it when publishing. Tickets are ordered by a process-wide
//! counter, so when runs on the same document overlap only the most
//! recently started run that completed is kept: a slower, older run that
//! finishes last is discarded instead of overwriting newer results.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::lint::Diagnostic;

/// Proof that a lint run for `path` started at position `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    path: PathBuf,
    seq: u64,
}

impl RunTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Outcome of publishing a run's diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publish {
    /// The diagnostics replaced the document's previous set.
    Applied,
    /// A newer run already published; these diagnostics were dropped.
    Stale,
}

#[derive(Debug)]
struct Entry {
    seq: u64,
    diagnostics: Vec<Diagnostic>,
}

/// Current diagnostics for every linted document.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    next_seq: AtomicU64,
    entries: RwLock<HashMap<PathBuf, Entry>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run for `path`.
    pub fn begin(&self, path: &Path) -> RunTicket {
        RunTicket {
            path: path.to_path_buf(),
            seq: self.next_seq.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Replace the document's diagnostics with those of a completed run.
    pub fn publish(&self, ticket: &RunTicket, diagnostics: Vec<Diagnostic>) -> Publish {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(existing) = entries.get(&ticket.path) {
            if existing.seq > ticket.seq {
                tracing::warn!(
                    path = %ticket.path.display(),
                    run = ticket.seq,
                    newer = existing.seq,
                    "discarding stale lint results"
                );
                return Publish::Stale;
            }
        }

        tracing::debug!(
            path = %ticket.path.display(),
            run = ticket.seq,
            count = diagnostics.len(),
            "publishing diagnostics"
        );
        entries.insert(
            ticket.path.clone(),
            Entry {
                seq: ticket.seq,
                diagnostics,
            },
        );
        Publish::Applied
    }

    /// Current diagnostics for `path`, if it has ever been published.
    pub fn get(&self, path: &Path) -> Option<Vec<Diagnostic>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .map(|entry| entry.diagnostics.clone())
    }

    /// Forget the diagnostics of `path`.
    pub fn clear(&self, path: &Path) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(path);
    }

    /// Documents with published diagnostics, sorted.
    pub fn documents(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect();
        paths.sort();
        paths
    }
}
