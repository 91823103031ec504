//! Group provisioning.

use log::{info, warn};

use crate::error::SetupError;
use crate::paths::SetupPaths;
use crate::privilege::PrivilegedRunner;
use crate::setup::StageOutcome;

/// Ensure the privileged group exists.
///
/// Creation runs only when the limits stage flagged it, via an idempotent
/// `groupadd -f` (which succeeds silently when the group already exists).
/// Otherwise the group is assumed present and only probed for reporting.
pub fn ensure_group(
    paths: &SetupPaths,
    runner: &dyn PrivilegedRunner,
    needs_group: bool,
) -> Result<StageOutcome, SetupError> {
    if !needs_group {
        match group_exists(&paths.group) {
            Some(true) => info!("group '{}' already exists", paths.group),
            Some(false) => warn!(
                "group '{}' does not exist; rerun this tool after fixing the limits configuration",
                paths.group
            ),
            None => {}
        }
        return Ok(StageOutcome::Skipped);
    }

    let outcome = runner.run_privileged("groupadd", &["-f", &paths.group])?;
    if outcome.success() {
        info!("group '{}' present", paths.group);
        Ok(StageOutcome::Installed)
    } else {
        warn!(
            "groupadd failed (exit {}): {}",
            outcome.code(),
            outcome.stderr_trimmed()
        );
        Ok(StageOutcome::Failed(outcome.stderr_trimmed().to_string()))
    }
}

/// NSS lookup; `None` when the lookup itself fails.
#[cfg(unix)]
fn group_exists(name: &str) -> Option<bool> {
    nix::unistd::Group::from_name(name)
        .ok()
        .map(|group| group.is_some())
}

#[cfg(not(unix))]
fn group_exists(_name: &str) -> Option<bool> {
    None
}
