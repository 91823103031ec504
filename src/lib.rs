//! One-shot host configuration for the LabStream toolkit.
//!
//! Prepares a Linux host so that non-privileged members of the `labstream`
//! group can use realtime scheduling, lock acquisition buffers in memory,
//! and talk to lab hardware directly. Three sequential stages:
//!
//! 1. install the bundled udev rules file if absent or stale;
//! 2. grant `memlock unlimited` and `rtprio 50` to the group, through a
//!    limits.d drop-in where available, otherwise by appending to the shared
//!    limits file;
//! 3. create the group when a limits write made it necessary.
//!
//! Every system mutation is confirmed interactively and executed through
//! sudo. On non-Linux hosts the whole run is a no-op.

pub mod cli;
pub mod error;
pub mod group;
pub mod limits;
pub mod paths;
pub mod privilege;
pub mod prompt;
pub mod rules;
pub mod setup;

pub use error::SetupError;
pub use limits::{LimitsResult, LimitsStatus};
pub use paths::SetupPaths;
pub use privilege::{CommandOutcome, DryRunRunner, PrivilegedRunner, SudoRunner};
pub use prompt::{AssumeYes, InteractivePrompter, Prompter};
pub use setup::{SetupReport, StageOutcome};
