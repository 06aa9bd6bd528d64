use crate::domain::constants::MASTER_FILE;
use crate::domain::models::DeviceModel;
use std::path::{Path, PathBuf};

/// Every fixed path the core touches, joined under one filesystem prefix.
///
/// On device the prefix is `/`. Tests and development shells point it at a
/// scratch tree via `--root`.
#[derive(Clone, Debug)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Root-relative flag path, as passed by companion scripts. A leading
    /// slash is accepted and stripped so device-absolute paths keep working
    /// under a test prefix.
    pub fn flag(&self, rel: &str) -> PathBuf {
        self.root.join(rel.trim_start_matches('/'))
    }

    pub fn device_id_file(&self) -> PathBuf {
        self.root.join("opt/folio_device")
    }

    pub fn wifi_able_flag(&self) -> PathBuf {
        self.root.join("run/wifi_able")
    }

    pub fn encrypted_storage_status(&self) -> PathBuf {
        self.root
            .join("mnt/onboard/.adds/folio/.config/18-encrypted_storage/status")
    }

    pub fn encfs_mounted_flag(&self) -> PathBuf {
        self.root.join("external_root/run/encfs_mounted")
    }

    pub fn encfs_repack_flag(&self) -> PathBuf {
        self.root.join("external_root/run/encfs_repack")
    }

    pub fn battery_level_flag(&self) -> PathBuf {
        self.root.join("external_root/run/battery_level")
    }

    pub fn battery_critical_level(&self) -> PathBuf {
        self.root
            .join("mnt/onboard/.adds/folio/.config/24-battery/critical_level")
    }

    pub fn usb_plugged_flag(&self) -> PathBuf {
        self.root.join("external_root/run/usb_plugged")
    }

    pub fn alert_flag(&self) -> PathBuf {
        self.root.join("external_root/boot/flags/ALERT")
    }

    pub fn suspend_book_flag(&self) -> PathBuf {
        self.root.join("tmp/suspend_book")
    }

    pub fn book_is_epub_flag(&self) -> PathBuf {
        self.root.join("folio/book_is_epub")
    }

    pub fn running_marker(&self) -> PathBuf {
        self.root.join("tmp/folio_running")
    }

    pub fn skip_open_dialog_flag(&self) -> PathBuf {
        self.root.join("folio/skip_opendialog")
    }

    pub fn battery_watchdog_flag(&self) -> PathBuf {
        self.root.join("folio/start_battery_watchdog")
    }

    pub fn usbms_prompt_flag(&self) -> PathBuf {
        self.root.join("folio/start_usbms_prompt")
    }

    pub fn device_model_flag(&self) -> PathBuf {
        self.root.join("run/device_model")
    }

    pub fn model_one_hot_flag(&self, model: DeviceModel) -> PathBuf {
        self.root
            .join("run/device")
            .join(format!("is_{}", model.token()))
    }

    pub fn apps_root(&self) -> PathBuf {
        self.root.join("mnt/onboard/onboard/.apps")
    }

    pub fn master_registry(&self) -> PathBuf {
        self.apps_root().join(MASTER_FILE)
    }
}
