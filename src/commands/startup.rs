use crate::cli::{Cli, FlagCommands};
use crate::domain::constants::REMOUNT_LAUNCH_HOOK;
use crate::domain::models::{BootMode, HandoffPayload};
use crate::domain::paths::Paths;
use crate::services::flags::FlagStore;
use crate::services::output::print_one;
use crate::services::{boot, device};

/// Run one full boot selection and emit the handoff payload. The wrapper
/// script constructs exactly one UI flow from it; nothing comes back.
pub fn handle_boot(cli: &Cli, paths: &Paths) -> anyhow::Result<()> {
    let flags = FlagStore;
    let identity = device::resolve(paths, &flags);
    let mode = boot::select(&identity, &flags, paths);

    if mode == BootMode::NormalMain {
        run_launch_hook();
    }

    let payload = HandoffPayload {
        mode,
        alert: mode.alert_kind(),
        device: identity,
    };
    print_one(cli.json, payload, |p| p.mode.as_str().to_string())
}

pub fn handle_identity(cli: &Cli, paths: &Paths) -> anyhow::Result<()> {
    let identity = device::resolve(paths, &FlagStore);
    print_one(cli.json, identity, |d| {
        format!("{}\twifi={}", d.model.token(), d.wifi_capable)
    })
}

pub fn handle_flag(cli: &Cli, paths: &Paths, command: &FlagCommands) -> anyhow::Result<()> {
    let flags = FlagStore;
    match command {
        FlagCommands::Get { path } => {
            let value = flags.read_string(&paths.flag(path));
            print_one(cli.json, value, |v| v.clone().unwrap_or_default())
        }
        FlagCommands::Set { path, value } => {
            flags.write_string(&paths.flag(path), value);
            print_one(cli.json, path, |p| format!("set {p}"))
        }
        FlagCommands::Check { path } => {
            let set = flags.is_true(&paths.flag(path));
            print_one(cli.json, set, |s| s.to_string())
        }
    }
}

/// The main-window flow expects its tmpfs remounted before it starts.
/// Fire-and-forget: a missing hook only logs.
fn run_launch_hook() {
    match std::process::Command::new(REMOUNT_LAUNCH_HOOK).status() {
        Ok(status) if status.success() => {}
        Ok(status) => log::warn!("{} exited with {}", REMOUNT_LAUNCH_HOOK, status),
        Err(err) => log::warn!("failed to run {}: {}", REMOUNT_LAUNCH_HOOK, err),
    }
}
