//! Sequential orchestration of the three configuration stages.
//!
//! Control flows top to bottom exactly once: rules, then limits, then group.
//! The only state carried between stages is the explicit "needs group" value
//! returned by the limits stage.

use std::io::{self, BufRead, Write};

use log::info;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::SetupError;
use crate::paths::SetupPaths;
use crate::privilege::PrivilegedRunner;
use crate::prompt::Prompter;
use crate::{group, limits, rules};

/// What a single stage did this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// A privileged command ran and exited zero.
    Installed,
    /// Nothing to do, the system was already configured.
    AlreadyConfigured,
    /// The operator declined the prompt.
    Declined,
    /// A privileged command exited non-zero; carries its stderr.
    Failed(String),
    /// The stage did not apply on this run.
    Skipped,
}

impl StageOutcome {
    fn describe(&self) -> String {
        match self {
            StageOutcome::Installed => "installed".to_string(),
            StageOutcome::AlreadyConfigured => "already configured".to_string(),
            StageOutcome::Declined => "skipped (declined)".to_string(),
            StageOutcome::Failed(diag) if diag.is_empty() => "FAILED".to_string(),
            StageOutcome::Failed(diag) => format!("FAILED: {diag}"),
            StageOutcome::Skipped => "skipped".to_string(),
        }
    }

    fn color(&self) -> Color {
        match self {
            StageOutcome::Installed | StageOutcome::AlreadyConfigured => Color::Green,
            StageOutcome::Declined | StageOutcome::Skipped => Color::Yellow,
            StageOutcome::Failed(_) => Color::Red,
        }
    }
}

/// Per-stage results, rendered by the completion summary.
#[derive(Debug)]
pub struct SetupReport {
    pub rules: StageOutcome,
    pub limits: StageOutcome,
    pub group: StageOutcome,
}

impl SetupReport {
    /// Report for a host where nothing was attempted.
    pub fn skipped() -> Self {
        Self {
            rules: StageOutcome::Skipped,
            limits: StageOutcome::Skipped,
            group: StageOutcome::Skipped,
        }
    }
}

/// Run the whole procedure: rules, limits, group.
///
/// On a non-Linux host this returns immediately without touching a file or
/// running a command. A non-zero privileged command is reported in the
/// returned outcomes; only the fatal conditions in [`SetupError`] abort.
pub fn run(
    paths: &SetupPaths,
    prompter: &dyn Prompter,
    runner: &dyn PrivilegedRunner,
) -> Result<SetupReport, SetupError> {
    if paths.os != "linux" {
        info!("host OS is '{}', nothing to configure", paths.os);
        return Ok(SetupReport::skipped());
    }

    let rules = rules::ensure_rules(paths, prompter, runner)?;
    let limits = limits::ensure_limits(paths, prompter, runner)?;
    let group = group::ensure_group(paths, runner, limits.needs_group)?;

    Ok(SetupReport {
        rules,
        limits: limits.outcome,
        group,
    })
}

/// Display welcome banner.
pub fn show_welcome(paths: &SetupPaths) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = writeln!(stdout, "\nLabStream host setup");
    let _ = stdout.reset();

    let _ = writeln!(
        stdout,
        "\nThis will configure the host for low-latency data acquisition:"
    );
    let _ = writeln!(
        stdout,
        "  - hardware access rules for members of '{}'",
        paths.group
    );
    let _ = writeln!(stdout, "  - unlimited memory locking for '{}'", paths.group);
    let _ = writeln!(
        stdout,
        "  - realtime scheduling priority for '{}'",
        paths.group
    );
    let _ = writeln!(
        stdout,
        "\nEach step asks for confirmation and may prompt for your password.\n"
    );
}

/// Display completion summary and the manual follow-up instructions.
pub fn show_completion(paths: &SetupPaths, report: &SetupReport) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let _ = writeln!(stdout, "\nSetup finished:");
    for (name, outcome) in [
        ("hardware access rules", &report.rules),
        ("resource limits", &report.limits),
        ("user group", &report.group),
    ] {
        let _ = write!(stdout, "  {name}: ");
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(outcome.color())));
        let _ = writeln!(stdout, "{}", outcome.describe());
        let _ = stdout.reset();
    }

    let _ = writeln!(
        stdout,
        "\nAdd each operator account to the '{}' group yourself:",
        paths.group
    );
    let _ = writeln!(stdout, "    sudo usermod -a -G {} <username>", paths.group);
    let _ = writeln!(
        stdout,
        "Group membership takes effect at the user's next login."
    );
}

/// Block until the operator presses Enter.
pub fn wait_for_enter() {
    print!("\nPress Enter to finish: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
