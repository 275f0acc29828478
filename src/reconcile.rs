//! Reconciliation of the in-memory model against the active OS theme.
//!
//! The OS-reported active theme path can be stale: when the user applies
//! an unsaved ad-hoc theme, the registry sometimes keeps pointing at the
//! previously saved document while the real state lives in the well-known
//! ad-hoc file. Reconciliation detects that case by comparing display
//! names and substitutes the ad-hoc document, then resets the model's
//! identity so the result is never mistaken for the pre-reconciliation
//! theme instance.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::document::{DEFAULT_DISPLAY_NAME, LineDocument, ThemeDocument};
use crate::os::ActiveThemeSource;
use crate::paths::CUSTOM_THEME_FILE;

/// Upper bound on the active-name query before it is treated as failed.
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves which on-disk document currently represents the active theme
/// and refreshes a model from it.
///
/// The staleness check compares display names only. Two distinct themes
/// sharing a display name defeat it; that imprecision is part of the
/// observable contract and is kept deliberately.
pub struct Reconciler {
    source: Arc<dyn ActiveThemeSource>,
    theme_dir: PathBuf,
    query_timeout: Duration,
}

impl Reconciler {
    /// New reconciler over the given OS source, with `theme_dir` as the
    /// storage directory containing the ad-hoc fallback document.
    pub fn new(source: Arc<dyn ActiveThemeSource>, theme_dir: impl Into<PathBuf>) -> Self {
        Reconciler {
            source,
            theme_dir: theme_dir.into(),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Same reconciler with a different bound on the name query.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// What: Refresh `doc` from whatever theme the OS considers active.
    ///
    /// Inputs:
    /// - `doc`: Model to overwrite; its path binding is left unchanged.
    ///
    /// Output:
    /// - None. Always leaves `doc` in a usable state.
    ///
    /// Details:
    /// - The display name is queried on a dedicated worker thread with a
    ///   bounded wait; failure or timeout degrades to an empty name.
    /// - When the document loaded from the reported path carries a
    ///   different display name than the query returned, the reported
    ///   path is treated as stale and the ad-hoc fallback document in the
    ///   theme directory is loaded instead.
    /// - Every failure on the way is logged and skipped over; whatever
    ///   content was obtained is parsed.
    /// - The result is always a new theme instance: the display name is
    ///   forced to the fixed default label and the identifier is
    ///   regenerated, even when the content is byte-identical.
    pub fn sync_from_system(&self, doc: &mut ThemeDocument) {
        let expected_name = self.query_active_name();

        match self.source.active_theme_path() {
            Ok(reported) => {
                let mut probe = ThemeDocument::new(&reported);
                probe.load();

                let active_path = if probe.display_name == expected_name {
                    reported
                } else {
                    // Unsaved ad-hoc themes leave the registry path behind
                    tracing::debug!(
                        loaded = %probe.display_name,
                        expected = %expected_name,
                        path = %reported.display(),
                        "active theme path is stale, using ad hoc fallback"
                    );
                    self.theme_dir.join(CUSTOM_THEME_FILE)
                };

                match LineDocument::read(&active_path) {
                    Ok(content) => doc.set_content(content),
                    Err(e) => {
                        tracing::error!(
                            path = %active_path.display(),
                            error = %e,
                            "could not read active theme content, keeping current data"
                        );
                        doc.parse();
                    }
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "could not query active theme path, keeping current data"
                );
                doc.parse();
            }
        }

        doc.display_name = DEFAULT_DISPLAY_NAME.to_string();
        doc.refresh_id();
    }

    /// Query the active display name on a dedicated worker thread, waiting
    /// at most the configured timeout. Any failure yields an empty name.
    fn query_active_name(&self) -> String {
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let spawned = thread::Builder::new()
            .name("theme-name-query".to_string())
            .spawn(move || {
                let _ = tx.send(source.active_theme_name());
            });
        if let Err(e) = spawned {
            tracing::error!(error = %e, "could not spawn theme name query worker");
            return String::new();
        }
        match rx.recv_timeout(self.query_timeout) {
            Ok(Ok(name)) => name,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "could not read active theme name");
                String::new()
            }
            Err(_) => {
                tracing::error!(
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "active theme name query timed out"
                );
                String::new()
            }
        }
    }
}
