use phonebook_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: CoreError,
    },
    #[error("invalid contact number: {index} (phone book holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("invalid backup path (matches phone book): {0}")]
    InvalidBackupPath(PathBuf),
    #[error("phone book not found: {0}")]
    MissingBook(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Core,
    MalformedRecord,
    IndexOutOfRange,
    MissingHomeDir,
    InvalidDataPath,
    InvalidBackupPath,
    MissingBook,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::MalformedRecord { .. } => StoreErrorKind::MalformedRecord,
            StoreError::IndexOutOfRange { .. } => StoreErrorKind::IndexOutOfRange,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::InvalidBackupPath(_) => StoreErrorKind::InvalidBackupPath,
            StoreError::MissingBook(_) => StoreErrorKind::MissingBook,
        }
    }
}
