use std::path::PathBuf;

/// Errors that can occur while reading the word list.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    #[error("failed to read word list from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that prevent a round from starting.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("word list is empty")]
    EmptyWordList,
}
