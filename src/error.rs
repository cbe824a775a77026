use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole batch.
///
/// Backend upload failures are not represented here: they are reported per
/// file and the batch moves on to the next input.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("uuid generation error: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("File stat error for {}: {}", .path.display(), .source)]
    FileStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File read error for {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
