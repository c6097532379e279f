use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_UNIT_MS: u64 = 1000;
/// Upper bound for one grace unit; the longest pause is three units.
pub const MAX_TIME_UNIT_MS: u64 = 5000;

pub const DEFAULT_SS7_COMMAND: &str = "sigploit-ss7";
pub const DEFAULT_GTP_COMMAND: &str = "sigploit-gtp";

/// On-disk shape of `sigploit.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub time_unit_ms: u64,
    pub clear_screen: bool,
    pub color: bool,
    pub file_logging_enabled: bool,
    pub modules: ModuleCommands,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
            clear_screen: true,
            color: true,
            file_logging_enabled: true,
            modules: ModuleCommands::default(),
        }
    }
}

/// Program launched for each loadable module. An empty string leaves the
/// module unconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleCommands {
    pub ss7: String,
    pub gtp: String,
}

impl Default for ModuleCommands {
    fn default() -> Self {
        Self {
            ss7: DEFAULT_SS7_COMMAND.to_string(),
            gtp: DEFAULT_GTP_COMMAND.to_string(),
        }
    }
}
