use std::io;

use thiserror::Error;

/// Library-wide error type for cmsfan operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The scratch directory holding integration-job artifacts could not be read.
    #[error("Cannot read '{path}': {source}")]
    ScratchUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A phase's log list does not pair up with its invocation list.
    /// Indicates a plan-construction bug, not a user input problem.
    #[error("Length of calls ({calls}) does not match length of logs ({logs})")]
    LogCountMismatch { calls: usize, logs: usize },

    /// Spawning an external process failed.
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
}
