use crate::domain::Variant;
use crate::notice::DEFAULT_DURATION_MS;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// trace | debug | info | warn | error
    pub log_level: Option<String>,
    /// How long a snackbar stays up, in milliseconds
    pub notice_duration_ms: u64,
    pub notice_variant: Variant,
    /// Upper bound for the key-value store, in bytes (None = unlimited)
    pub storage_quota_bytes: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: None,
            notice_duration_ms: DEFAULT_DURATION_MS,
            notice_variant: Variant::Filled,
            storage_quota_bytes: None,
        }
    }
}

/// Load settings from config.json. Missing or broken files yield defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            warn!("event=settings_load status=unreadable path={} error={}", path.display(), e);
            return Settings::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("event=settings_load status=corrupt path={} error={}", path.display(), e);
        Settings::default()
    })
}
