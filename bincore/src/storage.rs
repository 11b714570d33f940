//! Config file locations.

use std::path::PathBuf;

/// Platform config directory for the given app name, e.g.
/// `~/.config/bincalc` on Linux. Falls back to a relative path when the
/// home directory cannot be determined.
pub fn config_dir(app: &str) -> PathBuf {
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.config_dir().join(app),
        None => PathBuf::from(".").join(app),
    }
}
