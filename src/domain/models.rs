use serde::Serialize;

/// Closed set of device models the identity file can name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DeviceModel {
    N705,
    N905C,
    N613,
    N873,
    N236,
    N437,
    N306,
    KT,
    Emulator,
    Unknown,
}

impl DeviceModel {
    pub fn from_token(token: &str) -> Self {
        match token {
            "n705" => DeviceModel::N705,
            "n905" => DeviceModel::N905C,
            "n613" => DeviceModel::N613,
            "n873" => DeviceModel::N873,
            "n236" => DeviceModel::N236,
            "n437" => DeviceModel::N437,
            "n306" => DeviceModel::N306,
            "kt" => DeviceModel::KT,
            "emu" => DeviceModel::Emulator,
            _ => DeviceModel::Unknown,
        }
    }

    /// Canonical token written back to flag files for downstream readers.
    pub fn token(&self) -> &'static str {
        match self {
            DeviceModel::N705 => "n705",
            DeviceModel::N905C => "n905",
            DeviceModel::N613 => "n613",
            DeviceModel::N873 => "n873",
            DeviceModel::N236 => "n236",
            DeviceModel::N437 => "n437",
            DeviceModel::N306 => "n306",
            DeviceModel::KT => "kt",
            DeviceModel::Emulator => "emu",
            DeviceModel::Unknown => "unknown",
        }
    }

    /// Hardware models get a one-hot flag for the reader flow; the emulator
    /// and unrecognized devices get none.
    pub fn is_hardware(&self) -> bool {
        !matches!(self, DeviceModel::Emulator | DeviceModel::Unknown)
    }
}

/// Resolved once per process start; immutable thereafter.
#[derive(Clone, Debug, Serialize)]
pub struct DeviceIdentity {
    pub raw_token: String,
    pub model: DeviceModel,
    pub wifi_capable: bool,
}

/// The single startup flow selected for this process lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootMode {
    EncryptionUnlock,
    AlertBattery,
    AlertGeneric,
    ResumeReaderSuspended,
    NormalMain,
}

impl BootMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BootMode::EncryptionUnlock => "encryption_unlock",
            BootMode::AlertBattery => "alert_battery",
            BootMode::AlertGeneric => "alert_generic",
            BootMode::ResumeReaderSuspended => "resume_reader_suspended",
            BootMode::NormalMain => "normal_main",
        }
    }

    /// Alert sub-kind for the handoff payload, instead of ambient state the
    /// alert flow would have to read back.
    pub fn alert_kind(&self) -> Option<AlertKind> {
        match self {
            BootMode::AlertBattery => Some(AlertKind::Battery),
            BootMode::AlertGeneric => Some(AlertKind::Generic),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Battery,
    Generic,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Everything the wrapper script needs to construct exactly one UI flow.
#[derive(Serialize)]
pub struct HandoffPayload {
    pub mode: BootMode,
    pub alert: Option<AlertKind>,
    pub device: DeviceIdentity,
}

#[derive(Serialize, Default)]
pub struct AggregateReport {
    pub collected: usize,
    pub skipped_missing_shard: Vec<String>,
    pub skipped_invalid: Vec<String>,
}

#[derive(Serialize)]
pub struct DisaggregateReport {
    pub entries: usize,
    pub updated: Vec<String>,
}
