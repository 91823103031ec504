//! Resource-limits configuration: memory locking and realtime priority.
//!
//! Two mutually exclusive policies, selected by whether the host has a
//! limits drop-in directory:
//!
//! - modern: install the bundled drop-in file if it is not already present;
//! - legacy: scan the shared limits file for the two grants and append them
//!   if either is missing.
//!
//! Either branch that actually writes something flags that the group must be
//! created afterwards.

use std::fs;

use log::{info, warn};

use crate::error::SetupError;
use crate::paths::SetupPaths;
use crate::privilege::{PrivilegedRunner, append_line};
use crate::prompt::Prompter;
use crate::setup::StageOutcome;

/// Which of the two required grants a limits file already contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimitsStatus {
    pub memlock: bool,
    pub rtprio: bool,
}

impl LimitsStatus {
    /// Scan limits-file lines for the two grants scoped to `group_marker`.
    ///
    /// A line satisfies a grant when it contains the keyword, the expected
    /// value, the group marker, and a literal `-`. Substring containment
    /// anywhere in the line is deliberate: the check predates this tool and
    /// hand-edited files are expected to keep matching, so it is preserved
    /// rather than replaced with a field-aware parser.
    pub fn scan<'a, I>(lines: I, group_marker: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut status = Self::default();
        for line in lines {
            let scoped = line.contains(group_marker) && line.contains('-');
            if scoped && line.contains("memlock") && line.contains("unlimited") {
                status.memlock = true;
            }
            if scoped && line.contains("rtprio") && line.contains("50") {
                status.rtprio = true;
            }
        }
        status
    }

    /// Both grants present.
    pub fn configured(&self) -> bool {
        self.memlock && self.rtprio
    }
}

/// Result of the limits stage.
///
/// `needs_group` is true iff this run performed a successful write, and is
/// what drives the group stage; it is threaded explicitly rather than kept
/// in shared state.
#[derive(Debug)]
pub struct LimitsResult {
    pub outcome: StageOutcome,
    pub needs_group: bool,
}

impl LimitsResult {
    fn without_group(outcome: StageOutcome) -> Self {
        Self {
            outcome,
            needs_group: false,
        }
    }
}

/// Ensure the group's memlock and rtprio grants are configured.
pub fn ensure_limits(
    paths: &SetupPaths,
    prompter: &dyn Prompter,
    runner: &dyn PrivilegedRunner,
) -> Result<LimitsResult, SetupError> {
    if paths.dropin_dir.is_dir() {
        ensure_dropin(paths, prompter, runner)
    } else {
        ensure_legacy(paths, prompter, runner)
    }
}

/// Modern policy: the drop-in file is present or it is not.
fn ensure_dropin(
    paths: &SetupPaths,
    prompter: &dyn Prompter,
    runner: &dyn PrivilegedRunner,
) -> Result<LimitsResult, SetupError> {
    if paths.dropin_target.exists() {
        info!("{} already installed", paths.dropin_target.display());
        return Ok(LimitsResult::without_group(StageOutcome::AlreadyConfigured));
    }

    if !paths.limits_asset.is_file() {
        return Err(SetupError::MissingAsset(paths.limits_asset.clone()));
    }

    let question = format!(
        "Install realtime and memory-lock limits for the '{}' group into {}?",
        paths.group,
        paths.dropin_dir.display()
    );
    if !prompter.confirm(&question)? {
        return Ok(LimitsResult::without_group(StageOutcome::Declined));
    }

    let src = paths.limits_asset.display().to_string();
    let dst = paths.dropin_target.display().to_string();
    let outcome = runner.run_privileged("cp", &[src.as_str(), dst.as_str()])?;

    if outcome.success() {
        info!("installed {}", paths.dropin_target.display());
        Ok(LimitsResult {
            outcome: StageOutcome::Installed,
            needs_group: true,
        })
    } else {
        warn!(
            "drop-in install failed (exit {}): {}",
            outcome.code(),
            outcome.stderr_trimmed()
        );
        Ok(LimitsResult::without_group(StageOutcome::Failed(
            outcome.stderr_trimmed().to_string(),
        )))
    }
}

/// Legacy policy: scan the shared limits file, append what is missing.
fn ensure_legacy(
    paths: &SetupPaths,
    prompter: &dyn Prompter,
    runner: &dyn PrivilegedRunner,
) -> Result<LimitsResult, SetupError> {
    // Unreadable shared limits file is fatal for the whole procedure.
    let content =
        fs::read_to_string(&paths.limits_file).map_err(|source| SetupError::LimitsUnreadable {
            path: paths.limits_file.clone(),
            source,
        })?;

    let status = LimitsStatus::scan(content.lines(), &paths.group_marker);
    if status.configured() {
        info!(
            "{} already grants memlock and rtprio to {}",
            paths.limits_file.display(),
            paths.group_marker
        );
        return Ok(LimitsResult::without_group(StageOutcome::AlreadyConfigured));
    }

    let question = format!(
        "Append realtime and memory-lock limits for the '{}' group to {}?",
        paths.group,
        paths.limits_file.display()
    );
    if !prompter.confirm(&question)? {
        return Ok(LimitsResult::without_group(StageOutcome::Declined));
    }

    let memlock = format!("{} - memlock unlimited", paths.group_marker);
    let first = append_line(runner, &paths.limits_file, &memlock)?;
    if !first.success() {
        warn!(
            "memlock append failed (exit {}): {}",
            first.code(),
            first.stderr_trimmed()
        );
        return Ok(LimitsResult::without_group(StageOutcome::Failed(
            first.stderr_trimmed().to_string(),
        )));
    }

    let rtprio = format!("{} - rtprio 50", paths.group_marker);
    let second = append_line(runner, &paths.limits_file, &rtprio)?;
    if !second.success() {
        warn!(
            "rtprio append failed (exit {}): {}",
            second.code(),
            second.stderr_trimmed()
        );
        // The memlock line already landed; no rollback, and the group is
        // still needed for the grant that did get written.
        return Ok(LimitsResult {
            outcome: StageOutcome::Failed(second.stderr_trimmed().to_string()),
            needs_group: true,
        });
    }

    info!("appended limits to {}", paths.limits_file.display());
    Ok(LimitsResult {
        outcome: StageOutcome::Installed,
        needs_group: true,
    })
}
