//! Device Identity Resolver.

use crate::domain::models::{DeviceIdentity, DeviceModel};
use crate::domain::paths::Paths;
use crate::services::flags::FlagStore;

/// Resolve the device identity from the identity file and the Wi-Fi flag.
///
/// Never fails: an unreadable file or unrecognized token degrades to
/// `Unknown`, the safest default, and Wi-Fi capability comes solely from its
/// own flag regardless of the lookup outcome. Callers resolve once per
/// process and pass the result around.
pub fn resolve(paths: &Paths, flags: &FlagStore) -> DeviceIdentity {
    let raw_token = flags
        .read_string(&paths.device_id_file())
        .unwrap_or_default();
    // The identity file stores the code followed by one newline.
    let model = DeviceModel::from_token(raw_token.strip_suffix('\n').unwrap_or(&raw_token));
    let wifi_capable = flags.is_true(&paths.wifi_able_flag());

    log::info!(
        "running on device {} (wifi: {})",
        model.token(),
        wifi_capable
    );
    DeviceIdentity {
        raw_token,
        model,
        wifi_capable,
    }
}
