use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read signature database {path:?}: {source}")]
    DatabaseRead { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, CoreError>;
