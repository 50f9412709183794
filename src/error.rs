use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or writing the persisted submissions document.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed cache document: {0}")]
    Malformed(String),
}

/// Failure to resolve or create the runtime-data directory.
#[derive(Error, Debug)]
pub enum DataDirError {
    #[error("could not determine a home directory for this platform")]
    NoHome,

    #[error("could not create data directory {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}
