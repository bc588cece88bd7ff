//! Runtime knobs with their defaults.

use std::path::PathBuf;
use std::time::Duration;

use home::home_dir;

/// Bundle identifier, also names the user defaults domain.
pub const BUNDLE_IDENTIFIER: &str = "day.nhanh.privacyreset";

pub const DEFAULT_TCCUTIL: &str = "/usr/bin/tccutil";

/// Environment variable overriding the reset tool path.
pub const TCCUTIL_ENV: &str = "PRIVACY_RESET_TCCUTIL";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub tccutil: PathBuf,
    pub poll_interval: Duration,
    pub defaults_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tccutil: PathBuf::from(DEFAULT_TCCUTIL),
            poll_interval: Duration::from_millis(500),
            defaults_path: defaults_path(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(tool) = std::env::var_os(TCCUTIL_ENV).filter(|v| !v.is_empty()) {
            config.tccutil = PathBuf::from(tool);
        }
        config
    }
}

/// ~/Library/Preferences/<bundle id>.plist
pub fn defaults_path() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("Library")
        .join("Preferences")
        .join(format!("{}.plist", BUNDLE_IDENTIFIER))
}
