//! Typed errors for the setup procedure.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole procedure.
///
/// A privileged command exiting non-zero is deliberately NOT represented
/// here: it is recorded in the stage outcome, reported to the operator, and
/// the run continues with the next independent stage.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A bundled template is missing from the toolkit tree.
    #[error("bundled file not found: {0}")]
    MissingAsset(PathBuf),

    /// The shared limits file exists but cannot be opened for reading.
    #[error("cannot read {path}: {source}")]
    LimitsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No privilege-escalation helper available on this host.
    #[error("sudo not found in PATH: {0}")]
    SudoMissing(#[from] which::Error),

    /// The privilege-escalation helper itself could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failed, e.g. stdin was closed under us.
    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
