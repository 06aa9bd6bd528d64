//! Boot Mode Selector.
//!
//! Evaluated exactly once per process start. The priority chain commits to
//! the first matching mode; later predicates are not evaluated. Every flag
//! read failure counts as "condition false", so the chain always terminates
//! in a decision — worst case `NormalMain`.

use crate::domain::constants::{DEFAULT_CRITICAL_BATTERY_LEVEL, FLAG_TRUE};
use crate::domain::models::{BootMode, DeviceIdentity, DeviceModel};
use crate::domain::paths::Paths;
use crate::services::flags::FlagStore;

/// Select the startup flow and perform the flag writes bundled with the
/// selection, so downstream flows find them in place at handoff.
pub fn select(identity: &DeviceIdentity, flags: &FlagStore, paths: &Paths) -> BootMode {
    if encryption_unlock_needed(flags, paths) {
        log::info!("encrypted storage needs the unlock flow");
        return BootMode::EncryptionUnlock;
    }

    // Past the encryption gate: tell companion scripts we're running, and
    // refresh the model flag so downstream flows don't re-resolve.
    flags.write_string(&paths.running_marker(), FLAG_TRUE);
    flags.write_string(&paths.device_model_flag(), identity.model.token());

    let mode = if battery_alert_needed(identity, flags, paths) {
        BootMode::AlertBattery
    } else if flags.exists(&paths.alert_flag()) {
        BootMode::AlertGeneric
    } else if resume_reader_requested(flags, paths) {
        prepare_reader_resume(identity, flags, paths);
        BootMode::ResumeReaderSuspended
    } else {
        BootMode::NormalMain
    };

    log::info!("selected boot mode {}", mode.as_str());
    mode
}

fn encryption_unlock_needed(flags: &FlagStore, paths: &Paths) -> bool {
    if !flags.is_true(&paths.encrypted_storage_status()) {
        return false;
    }
    // Unlock when the store isn't mounted yet, or is mounted but a repack
    // was requested.
    !flags.is_true(&paths.encfs_mounted_flag()) || flags.is_true(&paths.encfs_repack_flag())
}

fn battery_alert_needed(identity: &DeviceIdentity, flags: &FlagStore, paths: &Paths) -> bool {
    if identity.model == DeviceModel::Emulator {
        // Emulators report no meaningful battery level.
        return false;
    }
    let Some(level) = flags.read_int(&paths.battery_level_flag()) else {
        return false;
    };
    let critical = flags
        .read_int(&paths.battery_critical_level())
        .unwrap_or(DEFAULT_CRITICAL_BATTERY_LEVEL);
    level < critical && !flags.is_true(&paths.usb_plugged_flag())
}

fn resume_reader_requested(flags: &FlagStore, paths: &Paths) -> bool {
    flags.is_true(&paths.suspend_book_flag()) && !flags.is_true(&paths.book_is_epub_flag())
}

/// The reader flow starts without the main window, so it takes over duties
/// the main window would otherwise own: the open-book dialog is skipped and
/// the battery watchdog and USB-media prompt run inside the reader.
fn prepare_reader_resume(identity: &DeviceIdentity, flags: &FlagStore, paths: &Paths) {
    flags.write_string(&paths.skip_open_dialog_flag(), FLAG_TRUE);
    flags.write_string(&paths.battery_watchdog_flag(), FLAG_TRUE);
    flags.write_string(&paths.usbms_prompt_flag(), FLAG_TRUE);
    if identity.model.is_hardware() {
        flags.write_string(&paths.model_one_hot_flag(identity.model), FLAG_TRUE);
    }
}
