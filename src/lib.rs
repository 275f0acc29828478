//! Core library for managing desktop theme documents.
//!
//! A theme document is a line-oriented, section-keyed text file describing
//! an appearance profile: wallpaper, color scheme, cursor set, visual
//! style, metadata. This crate owns round-trip fidelity for that format
//! (unknown sections and keys survive edits), selective in-place mutation
//! of the known sections, and reconciliation of the in-memory model
//! against whatever theme the operating system currently reports as
//! active. The host service, switch-decision logic, and raw OS access
//! live outside, behind the trait seams in [`os`].

pub mod document;
pub mod error;
pub mod logging;
pub mod os;
pub mod paths;
pub mod reconcile;

pub use document::{
    Colors, Cursors, DEFAULT_DISPLAY_NAME, Desktop, LineDocument, MasterThemeSelector,
    MonitorWallpaper, PicturePosition, ThemeDocument, VisualStyles, replace_section, upsert_value,
};
pub use error::ThemeError;
pub use reconcile::Reconciler;

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Process-wide mutex serializing tests that mutate environment variables.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
