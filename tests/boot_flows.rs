mod common;

use common::TestEnv;
use serde_json::Value;

fn boot(env: &TestEnv) -> Value {
    let out = env.run_json(&["boot"]);
    assert_eq!(out["ok"], true);
    out["data"].clone()
}

#[test]
fn all_flags_clear_selects_normal_main() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");

    let data = boot(&env);
    assert_eq!(data["mode"], "normal_main");
    assert_eq!(data["alert"], Value::Null);
    assert_eq!(data["device"]["model"], "N705");
}

#[test]
fn unmounted_encrypted_storage_wins_over_everything_else() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.set_flag("mnt/onboard/.adds/folio/.config/18-encrypted_storage/status");
    env.write_file("external_root/run/battery_level", "2");
    env.set_flag("tmp/suspend_book");
    env.write_file("external_root/boot/flags/ALERT", "");

    assert_eq!(boot(&env)["mode"], "encryption_unlock");
    // the running marker is only written past the encryption gate
    assert!(!env.exists("tmp/folio_running"));
}

#[test]
fn mounted_storage_with_repack_requested_selects_encryption_unlock() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.set_flag("mnt/onboard/.adds/folio/.config/18-encrypted_storage/status");
    env.set_flag("external_root/run/encfs_mounted");
    env.set_flag("external_root/run/encfs_repack");

    assert_eq!(boot(&env)["mode"], "encryption_unlock");
}

#[test]
fn mounted_storage_without_repack_falls_through_to_normal_main() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.set_flag("mnt/onboard/.adds/folio/.config/18-encrypted_storage/status");
    env.set_flag("external_root/run/encfs_mounted");

    assert_eq!(boot(&env)["mode"], "normal_main");
}

#[test]
fn critical_battery_without_usb_power_selects_battery_alert() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.write_file("external_root/run/battery_level", "3");

    let data = boot(&env);
    assert_eq!(data["mode"], "alert_battery");
    assert_eq!(data["alert"], "battery");
}

#[test]
fn usb_power_suppresses_the_battery_alert() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.write_file("external_root/run/battery_level", "3");
    env.set_flag("external_root/run/usb_plugged");

    assert_eq!(boot(&env)["mode"], "normal_main");
}

#[test]
fn emulator_bypasses_the_battery_check_and_falls_to_generic_alert() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "emu\n");
    env.write_file("external_root/run/battery_level", "2");
    env.write_file("external_root/boot/flags/ALERT", "");

    let data = boot(&env);
    assert_eq!(data["mode"], "alert_generic");
    assert_eq!(data["alert"], "generic");
}

#[test]
fn suspended_book_resumes_the_reader_and_writes_its_flags() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.set_flag("tmp/suspend_book");

    assert_eq!(boot(&env)["mode"], "resume_reader_suspended");
    assert_eq!(env.read_file("folio/skip_opendialog"), "true");
    assert_eq!(env.read_file("folio/start_battery_watchdog"), "true");
    assert_eq!(env.read_file("folio/start_usbms_prompt"), "true");
    assert_eq!(env.read_file("run/device/is_n705"), "true");
}

#[test]
fn epub_book_requires_the_full_application() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n705\n");
    env.set_flag("tmp/suspend_book");
    env.set_flag("folio/book_is_epub");

    assert_eq!(boot(&env)["mode"], "normal_main");
    assert!(!env.exists("folio/skip_opendialog"));
}

#[test]
fn model_flag_and_running_marker_are_refreshed_for_every_handed_off_mode() {
    let env = TestEnv::new();
    env.write_file("opt/folio_device", "n905\n");

    assert_eq!(boot(&env)["mode"], "normal_main");
    assert_eq!(env.read_file("run/device_model"), "n905");
    assert_eq!(env.read_file("tmp/folio_running"), "true");
}
