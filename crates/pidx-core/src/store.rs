//! The pattern store: load-once, cache-forever record collection.
//!
//! The store owns the one-time load lifecycle. The first [`PatternStore::load`]
//! reads the whole source directory, builds the ID-to-record map, and marks
//! the store loaded; every later call returns the cached collection without
//! touching the source again, regardless of argument. That is a deliberate
//! cache-forever design: callers needing freshness use [`PatternStore::reload`]
//! or build a fresh store.
//!
//! A missing or unreadable source directory yields an empty store plus a
//! logged warning, never an error — a workspace with no pattern library yet
//! is a normal state.

use crate::extract::Extractor;
use crate::pattern::Pattern;
use pidx_common::{Error, PatternId};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Immutable-after-load collection of pattern records keyed by ID.
pub struct PatternStore {
    patterns: Vec<Pattern>,
    index: HashMap<PatternId, usize>,
    loaded: bool,
    extractor: Extractor,
    /// Number of files handed to the extractor across the store's
    /// lifetime. Stays flat on repeated `load` calls.
    extracted_files: usize,
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternStore {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            index: HashMap::new(),
            loaded: false,
            extractor: Extractor::new(),
            extracted_files: 0,
        }
    }

    /// Load the record source. Idempotent: only the first call reads the
    /// directory; later calls return the cached collection.
    pub fn load(&mut self, dir: &Path) -> &[Pattern] {
        if self.loaded {
            return &self.patterns;
        }
        self.load_dir(dir);
        self.loaded = true;
        &self.patterns
    }

    /// Discard the cached collection and load again. The explicit
    /// freshness path; nothing triggers it automatically.
    pub fn reload(&mut self, dir: &Path) -> &[Pattern] {
        self.patterns.clear();
        self.index.clear();
        self.loaded = false;
        self.load(dir)
    }

    /// Build a store directly from records, applying the same first-wins
    /// collision rule as a directory load. For callers that already hold
    /// `(filename, raw text)` extractions, and for tests and benchmarks.
    pub fn from_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut store = Self::new();
        for pattern in patterns {
            store.insert(pattern);
        }
        store.loaded = true;
        store
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// O(1) lookup by ID. Absence is not an error.
    pub fn get(&self, id: &PatternId) -> Option<&Pattern> {
        self.index.get(id).map(|&i| &self.patterns[i])
    }

    /// All records, in load order.
    pub fn all(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// How many files have been run through the extractor. Repeated
    /// `load` calls do not move this counter.
    pub fn extracted_file_count(&self) -> usize {
        self.extracted_files
    }

    fn load_dir(&mut self, dir: &Path) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "pattern source unavailable, loading empty store");
                return;
            }
        };

        // Sort by filename so load order and first-wins collision
        // resolution are deterministic across platforms.
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort_unstable();

        for name in names {
            let path = dir.join(&name);
            let raw = match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(file = %name, error = %err, "skipping unreadable file");
                    continue;
                }
            };
            self.extracted_files += 1;
            match self.extractor.extract(&name, &raw) {
                Ok(pattern) => self.insert(pattern),
                Err(Error::NotAPatternFile(_)) => {
                    debug!(file = %name, "not a pattern file, skipped");
                }
                Err(err) => {
                    warn!(file = %name, error = %err, "extraction failed, record dropped");
                }
            }
        }

        info!(count = self.patterns.len(), dir = %dir.display(), "pattern library loaded");
    }

    /// First-wins insert: on a duplicate ID the later record is dropped
    /// with a warning.
    fn insert(&mut self, pattern: Pattern) {
        if self.index.contains_key(&pattern.id) {
            warn!(id = %pattern.id, "duplicate pattern ID, keeping first");
            return;
        }
        self.index.insert(pattern.id.clone(), self.patterns.len());
        self.patterns.push(pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).unwrap();
    }

    #[test]
    fn load_reads_pattern_files_in_filename_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Pattern-B-002.md", "# Second\n");
        write(&dir, "Pattern-A-001.md", "# First\n");
        write(&dir, "notes.txt", "not a pattern\n");

        let mut store = PatternStore::new();
        store.load(dir.path());

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "First");
        assert_eq!(store.all()[1].name, "Second");
    }

    #[test]
    fn load_is_idempotent_and_skips_reextraction() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Pattern-A-001.md", "# First\n");

        let mut store = PatternStore::new();
        store.load(dir.path());
        let count_after_first = store.extracted_file_count();
        assert_eq!(count_after_first, 1);

        // A second load must not touch the source again, even if the
        // source has changed underneath us.
        write(&dir, "Pattern-B-002.md", "# Second\n");
        store.load(dir.path());
        assert_eq!(store.extracted_file_count(), count_after_first);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Pattern-A-001.md", "# First\n");

        let mut store = PatternStore::new();
        store.load(dir.path());
        assert_eq!(store.len(), 1);

        write(&dir, "Pattern-B-002.md", "# Second\n");
        store.reload(dir.path());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_directory_loads_empty() {
        let mut store = PatternStore::new();
        store.load(Path::new("/nonexistent/pattern/library"));
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let dir = TempDir::new().unwrap();
        // Same ID stem, two extensions; filename sort makes .markdown
        // arrive first.
        write(&dir, "Pattern-A-001.markdown", "# Markdown wins\n");
        write(&dir, "Pattern-A-001.md", "# Md loses\n");

        let mut store = PatternStore::new();
        store.load(dir.path());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Markdown wins");
    }

    #[test]
    fn malformed_file_is_dropped_but_load_continues() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Pattern-A-001.md", "   \n");
        write(&dir, "Pattern-B-002.md", "# Good\n");

        let mut store = PatternStore::new();
        store.load(dir.path());
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Good");
    }

    #[test]
    fn get_by_id_and_absence() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Pattern-A-001.md", "# First\n");

        let mut store = PatternStore::new();
        store.load(dir.path());

        let id = PatternId::parse("Pattern-A-001").unwrap();
        assert!(store.get(&id).is_some());
        let ghost = PatternId::parse("Pattern-GHOST-999").unwrap();
        assert!(store.get(&ghost).is_none());
    }
}
