//! CLI argument parsing for labstream-setup.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Clone, Debug)]
#[command(name = "labstream-setup")]
#[command(
    version,
    about = "Configure realtime scheduling, memory locking and hardware access for LabStream"
)]
pub struct Cli {
    /// Toolkit root containing the bundled share/ templates.
    ///
    /// Defaults to the installation tree the binary runs from.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Show privileged commands without executing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Answer yes to every prompt and skip the final keypress.
    ///
    /// For scripted provisioning; sudo may still prompt for a password.
    #[arg(long)]
    pub assume_yes: bool,
}
