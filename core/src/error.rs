use thiserror::Error;

use crate::roster::RosterFull;

/// Failures that abort a session. Bad input is not one of them.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Roster(#[from] RosterFull),
}
