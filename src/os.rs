//! Trait seams for the operating-system integration layer.
//!
//! The core never talks to the registry or the shell directly; the host
//! service supplies implementations of these traits. Tests supply fakes.

use std::path::PathBuf;

use crate::error::ThemeError;

/// Source of truth for which theme the OS currently considers active.
///
/// Implementations must be callable from a thread the reconciler owns:
/// the display-name query runs on a dedicated worker because the
/// underlying OS API demands its own execution context, and the
/// reconciler only waits on it for a bounded time.
pub trait ActiveThemeSource: Send + Sync {
    /// Display name of the currently active theme.
    fn active_theme_name(&self) -> Result<String, ThemeError>;

    /// Path of the document the OS reports as the active theme.
    ///
    /// May be stale for unsaved ad-hoc themes; reconciliation compensates.
    fn active_theme_path(&self) -> Result<PathBuf, ThemeError>;
}

/// Registry-backed accent-color prevalence toggle.
///
/// Consumed by the switch-decision layer above this crate; the core only
/// defines the seam.
pub trait AccentColorControl: Send + Sync {
    /// Whether the accent color is currently applied to window chrome.
    fn is_prevalence_enabled(&self) -> Result<bool, ThemeError>;

    /// Enable or disable accent-color prevalence.
    fn set_prevalence(&self, enabled: bool) -> Result<(), ThemeError>;
}
