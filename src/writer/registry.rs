//! Writer registry loading
//!
//! The registry is a plain-text list of writer keys, one per line,
//! with `#` starting a trailing comment and blank lines ignored. Line
//! order is significant: it becomes the probe order of the dispatcher.
//!
//! Keys resolve through an explicit [`RegistryTable`] populated by a
//! registration call per writer. Lines that do not resolve are skipped
//! with a [`LoadDiagnostic`]; a single bad entry never fails the load,
//! and a registry with zero valid entries is a legal outcome.

use std::collections::HashSet;

use thiserror::Error;

use super::plugin::FormatWriter;

/// Constructor for a registered writer
pub type Constructor = fn() -> Box<dyn FormatWriter>;

/// A skipped registry entry
///
/// Diagnostics are reported, never raised: the offending entry is
/// simply absent from the loaded set.
#[derive(Debug, Error, PartialEq)]
pub enum LoadDiagnostic {
    #[error("\"{key}\" (line {line}) is not a registered format writer")]
    UnknownWriter { line: usize, key: String },

    #[error("\"{key}\" (line {line}) is listed more than once")]
    DuplicateWriter { line: usize, key: String },
}

/// Registration table mapping stable keys to writer constructors
pub struct RegistryTable {
    entries: Vec<(&'static str, Constructor)>,
}

impl RegistryTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a constructor under a stable key
    ///
    /// Last registration wins if a key is registered twice.
    pub fn register(&mut self, key: &'static str, constructor: Constructor) {
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, constructor));
    }

    /// Looks up a constructor by key
    pub fn get(&self, key: &str) -> Option<Constructor> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
    }
}

impl Default for RegistryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses registry text into (line number, key) pairs
///
/// Strips `#` comments, trims whitespace, drops blank lines. Line
/// numbers are 1-based and refer to the original text.
pub fn parse_registry(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };
            let key = line.trim();
            if key.is_empty() {
                None
            } else {
                Some((idx + 1, key.to_string()))
            }
        })
        .collect()
}

/// Constructs writers from registry text, in listed order
///
/// Unknown and duplicate keys are skipped with a diagnostic; the first
/// occurrence of a key wins.
pub fn load_writers(
    text: &str,
    table: &RegistryTable,
) -> (Vec<Box<dyn FormatWriter>>, Vec<LoadDiagnostic>) {
    let mut writers = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (line, key) in parse_registry(text) {
        if !seen.insert(key.clone()) {
            diagnostics.push(LoadDiagnostic::DuplicateWriter { line, key });
            continue;
        }

        match table.get(&key) {
            Some(constructor) => writers.push(constructor()),
            None => diagnostics.push(LoadDiagnostic::UnknownWriter { line, key }),
        }
    }

    (writers, diagnostics)
}
