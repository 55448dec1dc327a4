use memchr::memmem::Finder;

use crate::database::SignatureDatabase;
use crate::signature::SignatureEntry;

/// Number of leading bytes examined per candidate file.
pub const PREFIX_LEN: usize = 1024;

/// Outcome of classifying one buffer. Exactly one per file tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'db> {
    Identified(&'db str),
    Unidentified,
}

impl<'db> MatchResult<'db> {
    #[must_use]
    pub fn type_name(&self) -> Option<&'db str> {
        match *self {
            Self::Identified(name) => Some(name),
            Self::Unidentified => None,
        }
    }
}

/// Sliding-window matcher over the active entries of a database.
///
/// One substring finder per active entry is built up front, in database
/// order. A pattern matches if it occurs anywhere in the buffer, not just
/// at offset 0; some container formats place their magic a few bytes in.
#[derive(Debug)]
pub struct SignatureMatcher<'db> {
    active: Vec<(Finder<'db>, &'db SignatureEntry)>,
}

impl<'db> SignatureMatcher<'db> {
    #[must_use]
    pub fn new(database: &'db SignatureDatabase) -> Self {
        let active = database
            .active_entries()
            .map(|entry| (Finder::new(entry.pattern()), entry))
            .collect();
        Self { active }
    }

    /// Returns the first entry, in database order, whose pattern occurs in
    /// `buffer` at any offset.
    #[must_use]
    pub fn classify(&self, buffer: &[u8]) -> MatchResult<'db> {
        for (finder, entry) in &self.active {
            let pattern = entry.pattern();

            // An empty pattern matches every buffer at offset 0, including
            // an empty buffer.
            if pattern.is_empty() {
                return MatchResult::Identified(entry.type_name());
            }
            if pattern.len() > buffer.len() {
                continue;
            }
            if finder.find(buffer).is_some() {
                return MatchResult::Identified(entry.type_name());
            }
        }
        MatchResult::Unidentified
    }
}
