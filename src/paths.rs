//! Well-known theme storage locations.
//!
//! The OS keeps per-user theme documents in a fixed folder under the local
//! application data directory. Resolution goes through environment variables
//! so tests and non-standard profiles can redirect it; when nothing is set,
//! a home-relative default is used rather than failing.

use std::env;
use std::path::{Path, PathBuf};

/// File name of the ad-hoc theme document the OS maintains for unsaved
/// theme state. Reconciliation falls back to this file when the reported
/// active path is stale.
pub const CUSTOM_THEME_FILE: &str = "Custom.theme";

/// Per-user theme storage directory.
///
/// Prefers `%LOCALAPPDATA%\Microsoft\Windows\Themes`; falls back to the
/// same layout under the user profile directory when `LOCALAPPDATA` is
/// unset (as on a freshly created profile or in tests).
pub fn theme_folder() -> PathBuf {
    if let Ok(base) = env::var("LOCALAPPDATA")
        && !base.trim().is_empty()
    {
        return Path::new(&base)
            .join("Microsoft")
            .join("Windows")
            .join("Themes");
    }
    let home = env::var("USERPROFILE")
        .or_else(|_| env::var("HOME"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home)
        .join("AppData")
        .join("Local")
        .join("Microsoft")
        .join("Windows")
        .join("Themes")
}

/// Full path of the ad-hoc fallback theme document.
pub fn custom_theme_path() -> PathBuf {
    theme_folder().join(CUSTOM_THEME_FILE)
}
