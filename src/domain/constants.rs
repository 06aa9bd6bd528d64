//! Stable literals shared across services.

/// Exact content of a boolean content flag when set. Content flags compare
/// by equality, so a writer that appends a newline produces an unset flag.
pub const FLAG_TRUE: &str = "true";

/// Battery percentage used when the critical-level config flag is absent.
pub const DEFAULT_CRITICAL_BATTERY_LEVEL: i64 = 5;

/// Per-app descriptor file name inside each application directory.
pub const SHARD_FILE: &str = "app.json";

/// Master registry file name inside the apps root.
pub const MASTER_FILE: &str = "apps.json";

/// Script invoked before handing off to the main-window flow.
pub const REMOUNT_LAUNCH_HOOK: &str = "remount_tmpfs_launch.sh";
