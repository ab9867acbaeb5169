//! Error types for the trainer

use std::path::PathBuf;

/// Fatal errors; keystrokes never produce one
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read sentence file {}: {source}", path.display())]
    SentenceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sentence pool is empty (no line contains typable kana)")]
    EmptySentencePool,
}
