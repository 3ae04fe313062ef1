use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Query-level failures. None of these are fatal: the shell reports the
/// message and carries on with an empty result.
#[derive(Error, Debug)]
pub enum SightlineError {
    #[error("could not open point source {}: {source}", .path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("no point with id {0}")]
    PointNotFound(i32),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, SightlineError>;
