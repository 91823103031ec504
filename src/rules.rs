//! Hardware-access rules installation.
//!
//! Installs the bundled udev rules file when the system copy is absent or
//! older than the bundled reference.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use log::{info, warn};

use crate::error::SetupError;
use crate::paths::SetupPaths;
use crate::privilege::PrivilegedRunner;
use crate::prompt::Prompter;
use crate::setup::StageOutcome;

/// Ensure the hardware-access rules file is installed and current.
pub fn ensure_rules(
    paths: &SetupPaths,
    prompter: &dyn Prompter,
    runner: &dyn PrivilegedRunner,
) -> Result<StageOutcome, SetupError> {
    if !paths.rules_asset.is_file() {
        return Err(SetupError::MissingAsset(paths.rules_asset.clone()));
    }

    if !needs_install(&paths.rules_target, &paths.rules_asset) {
        info!("{} is current", paths.rules_target.display());
        return Ok(StageOutcome::AlreadyConfigured);
    }

    let question = format!(
        "Install hardware access rules to {}?",
        paths.rules_target.display()
    );
    if !prompter.confirm(&question)? {
        return Ok(StageOutcome::Declined);
    }

    let src = paths.rules_asset.display().to_string();
    let dst = paths.rules_target.display().to_string();
    let outcome = runner.run_privileged("cp", &[src.as_str(), dst.as_str()])?;

    if outcome.success() {
        info!("installed {}", paths.rules_target.display());
        Ok(StageOutcome::Installed)
    } else {
        warn!(
            "rules install failed (exit {}): {}",
            outcome.code(),
            outcome.stderr_trimmed()
        );
        Ok(StageOutcome::Failed(outcome.stderr_trimmed().to_string()))
    }
}

/// Absent, or present but older than the bundled copy.
fn needs_install(target: &Path, asset: &Path) -> bool {
    if !target.exists() {
        return true;
    }
    match (mtime(target), mtime(asset)) {
        (Some(installed), Some(bundled)) => installed < bundled,
        // An unreadable timestamp counts as stale.
        _ => true,
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
