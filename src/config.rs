//! App settings.
//!
//! Read once at startup from `<config dir>/lytes/settings.json`.
//! Every field is optional in the file; missing ones fall back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

pub(crate) const APP_DIR: &str = "lytes";
pub(crate) const SETTINGS_FILE: &str = "settings.json";

/// Floor for the engine/GUI tick so a typo can't spin the CPU.
const MIN_TICK_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Starting volume, 0.0..=1.0.
    pub initial_volume: f32,
    /// How often the engine reports position and the GUI drains events.
    pub tick_ms: u64,
    /// `tracing` filter used when RUST_LOG isn't set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_volume: 0.4,
            tick_ms: 200,
            log_filter: "lytes=info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the platform config dir. Never fails: problems are logged.
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "couldn't read settings, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&text) {
            Ok(s) => s.sanitized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "bad settings file, using defaults");
                Self::default()
            }
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn sanitized(mut self) -> Self {
        self.initial_volume = if self.initial_volume.is_finite() {
            self.initial_volume.clamp(0.0, 1.0)
        } else {
            Self::default().initial_volume
        };
        self.tick_ms = self.tick_ms.max(MIN_TICK_MS);
        if self.log_filter.trim().is_empty() {
            self.log_filter = Self::default().log_filter;
        }
        self
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load_from(&dir.path().join(SETTINGS_FILE));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "initial_volume": 0.75 }"#).unwrap();

        let s = Settings::load_from(&path);
        assert_eq!(s.initial_volume, 0.75);
        assert_eq!(s.tick_ms, 200);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(
            &path,
            r#"{ "initial_volume": 3.0, "tick_ms": 1, "log_filter": "" }"#,
        )
        .unwrap();

        let s = Settings::load_from(&path);
        assert_eq!(s.initial_volume, 1.0);
        assert_eq!(s.tick_ms, MIN_TICK_MS);
        assert_eq!(s.log_filter, "lytes=info");
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "volume = loud").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
