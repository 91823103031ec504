//! Fixed system paths and toolkit-tree layout.
//!
//! The tool touches a small, fixed set of external paths. They are gathered
//! in [`SetupPaths`] so the stages stay independent of the real filesystem:
//! the binary builds the system layout, tests build temporary trees.

use std::env;
use std::path::{Path, PathBuf};

/// Group granted realtime, memory-lock and hardware privileges.
pub const GROUP_NAME: &str = "labstream";

/// Marker for group-scoped entries in limits files.
pub const GROUP_MARKER: &str = "@labstream";

/// Bundled udev rules file, also the installed filename.
pub const RULES_FILE: &str = "60-labstream-hardware.rules";

/// Bundled limits drop-in, also the installed filename.
pub const LIMITS_DROPIN: &str = "50-labstream.conf";

/// Every external path the tool reads or writes, plus the host OS tag.
#[derive(Debug, Clone)]
pub struct SetupPaths {
    /// Host OS tag; anything but "linux" makes the whole run a no-op.
    pub os: String,
    /// Installed udev rules file.
    pub rules_target: PathBuf,
    /// Bundled reference copy of the rules file.
    pub rules_asset: PathBuf,
    /// Shared limits file used on hosts without a drop-in directory.
    pub limits_file: PathBuf,
    /// Drop-in directory; its existence selects the modern limits policy.
    pub dropin_dir: PathBuf,
    /// Installed limits drop-in file.
    pub dropin_target: PathBuf,
    /// Bundled limits drop-in template.
    pub limits_asset: PathBuf,
    /// Name of the privileged group.
    pub group: String,
    /// Group marker scanned for in limits files.
    pub group_marker: String,
}

impl SetupPaths {
    /// Real system layout, with bundled assets under `<root>/share`.
    pub fn system(toolkit_root: &Path) -> Self {
        let share = toolkit_root.join("share");
        let dropin_dir = PathBuf::from("/etc/security/limits.d");
        Self {
            os: env::consts::OS.to_string(),
            rules_target: PathBuf::from("/etc/udev/rules.d").join(RULES_FILE),
            rules_asset: share.join(RULES_FILE),
            limits_file: PathBuf::from("/etc/security/limits.conf"),
            dropin_target: dropin_dir.join(LIMITS_DROPIN),
            dropin_dir,
            limits_asset: share.join(LIMITS_DROPIN),
            group: GROUP_NAME.to_string(),
            group_marker: GROUP_MARKER.to_string(),
        }
    }

    /// Toolkit root for a default invocation.
    ///
    /// The binary ships as `<root>/bin/labstream-setup`, so the root is the
    /// executable's grandparent directory. Falls back to the current
    /// directory when the executable path cannot be resolved.
    pub fn default_root() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
