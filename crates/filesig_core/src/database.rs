//! Signature database loading
//!
//! The definitions source is a plain text file, one entry per line:
//! `<hex bytes separated by spaces>|<type name>`. Lines starting with `#`
//! are inactive entries, lines without a `|` are ignored entirely, and
//! insertion order defines match priority.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::signature::SignatureEntry;

/// Upper bound on entries retained from a definitions source. Lines past
/// the cap are silently dropped, keeping the reported entry count
/// compatible with the original fixed-table tool.
pub const MAX_ENTRIES: usize = 100;

/// Ordered, immutable collection of signature entries.
#[derive(Debug, Clone, Default)]
pub struct SignatureDatabase {
    entries: Vec<SignatureEntry>,
}

impl SignatureDatabase {
    /// Reads and parses a definitions file.
    ///
    /// An unreadable file is the only error; its content is parsed
    /// best-effort and never fails. Non-UTF-8 bytes are decoded lossily.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).map_err(|source| CoreError::DatabaseRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&raw)))
    }

    /// Parses a definitions source, keeping at most [`MAX_ENTRIES`] entries.
    pub fn parse(source: &str) -> Self {
        let mut entries = Vec::new();
        for line in source.lines() {
            if entries.len() == MAX_ENTRIES {
                break;
            }
            if line.is_empty() {
                continue;
            }
            if let Some(entry) = SignatureEntry::parse(line) {
                entries.push(entry);
            }
        }
        Self { entries }
    }

    /// Total loaded slots, active and inactive alike.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    /// Entries that participate in matching, in file order.
    pub fn active_entries(&self) -> impl Iterator<Item = &SignatureEntry> {
        self.entries.iter().filter(|entry| entry.is_active())
    }
}
