use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use filesig_core::{MatchResult, SignatureDatabase, SignatureMatcher, PREFIX_LEN};

use crate::report;

/// Walks `root` and prints a result line for every regular file whose
/// leading bytes match an active signature.
///
/// Unreadable files and directories are skipped without output; symlinks
/// are not followed, matching the lstat-based behavior of classic
/// signature checkers.
pub fn run(root: &Path, database: &SignatureDatabase) {
    let matcher = SignatureMatcher::new(database);

    for entry in WalkDir::new(root).into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(prefix) = read_prefix(entry.path()) else {
            debug!(path = %entry.path().display(), "skipping unreadable file");
            continue;
        };

        if let MatchResult::Identified(type_name) = matcher.classify(&prefix) {
            println!("{}", report::result_line(entry.path(), type_name));
        }
    }
}

/// Reads at most [`PREFIX_LEN`] leading bytes; a shorter file contributes
/// exactly the bytes it holds. `None` means the file could not be read.
fn read_prefix(path: &Path) -> Option<Vec<u8>> {
    let file = File::open(path).ok()?;
    let mut prefix = Vec::with_capacity(PREFIX_LEN);
    file.take(PREFIX_LEN as u64)
        .read_to_end(&mut prefix)
        .ok()?;
    Some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn read_prefix_is_bounded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, vec![0xAB; PREFIX_LEN * 4]).unwrap();

        let prefix = read_prefix(&path).unwrap();
        assert_eq!(prefix.len(), PREFIX_LEN);
    }

    #[test]
    fn read_prefix_of_short_file_returns_exact_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.bin");
        fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

        let prefix = read_prefix(&path).unwrap();
        assert_eq!(prefix, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn read_prefix_of_empty_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, []).unwrap();

        assert_eq!(read_prefix(&path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn read_prefix_of_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert!(read_prefix(&dir.path().join("gone.bin")).is_none());
    }
}
