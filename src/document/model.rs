//! Typed in-memory model of a theme document.
//!
//! A [`ThemeDocument`] owns one [`LineDocument`] for the duration of an
//! edit session: parsing never mutates the lines, and saving re-projects
//! the typed fields onto them with the per-section preservation policy
//! from the codec. Concurrent edits of the same model or backing file are
//! not supported; callers serialize access per file path.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ThemeError;

use super::codec::{self, OrderedSection, int_value, split_field};
use super::lines::LineDocument;
use super::sections::{
    Colors, Cursors, Desktop, MasterThemeSelector, MonitorWallpaper, PicturePosition, VisualStyles,
};

/// Marker line of the metadata section.
const THEME_MARKER: &str = "[Theme]";

/// Display name applied when a model's provenance is reset.
pub const DEFAULT_DISPLAY_NAME: &str = "ManagedTheme";

/// Fresh opaque theme identifier in the braced text form the document uses.
fn new_theme_id() -> String {
    format!("{{{}}}", Uuid::new_v4())
}

/// Typed view of one theme document: metadata plus five settings groups,
/// projected onto a backing [`LineDocument`].
#[derive(Debug, Clone)]
pub struct ThemeDocument {
    path: PathBuf,
    content: LineDocument,
    /// Human-readable theme label, stored under `[Theme]`.
    pub display_name: String,
    theme_id: String,
    /// Opaque master selector stamp; written, never parsed back.
    pub master_selector: MasterThemeSelector,
    /// Wallpaper settings, including per-monitor entries.
    pub desktop: Desktop,
    /// Visual style selection.
    pub visual_styles: VisualStyles,
    /// Mouse cursor set.
    pub cursors: Cursors,
    /// System color overrides.
    pub colors: Colors,
}

impl ThemeDocument {
    /// New model bound to `path`, carrying default values and a fresh
    /// identity. Immediately savable without loading anything first.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ThemeDocument {
            path: path.into(),
            content: LineDocument::new(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            theme_id: new_theme_id(),
            master_selector: MasterThemeSelector::default(),
            desktop: Desktop::default(),
            visual_styles: VisualStyles::default(),
            cursors: Cursors::default(),
            colors: Colors::default(),
        }
    }

    /// Path this model loads from and saves to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backing lines in their current state.
    #[must_use]
    pub fn content(&self) -> &LineDocument {
        &self.content
    }

    /// Current opaque theme identifier.
    #[must_use]
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// Regenerate the theme identifier. Two resets never yield the same id,
    /// so distinct sessions cannot share one.
    pub fn refresh_id(&mut self) {
        self.theme_id = new_theme_id();
    }

    /// Read the backing file and parse it.
    ///
    /// A missing or unreadable file is not fatal: the error is logged and
    /// the model keeps its default values.
    pub fn load(&mut self) {
        match LineDocument::read(&self.path) {
            Ok(content) => self.content = content,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read theme file, using default values"
                );
            }
        }
        self.parse();
    }

    /// Replace the backing lines wholesale, keeping the path, and re-parse.
    pub fn set_content(&mut self, content: LineDocument) {
        self.content = content;
        self.parse();
    }

    /// What: Rebuild every typed field from the backing lines.
    ///
    /// Inputs:
    /// - None (reads `self.content`).
    ///
    /// Output:
    /// - None (resets and repopulates the section groups in place).
    ///
    /// Details:
    /// - Single forward scan dispatching on the currently open section
    ///   marker; a `[`-prefixed line inside a section closes it and is
    ///   re-examined as a potential opener.
    /// - Metadata keys take the first match per key; the prior metadata is
    ///   kept when the document carries none.
    /// - Integer fields keep the prior value when the text does not parse.
    /// - Lines no section group recognizes stay untouched in the backing
    ///   document; they are simply absent from the typed view.
    pub fn parse(&mut self) {
        self.desktop = Desktop::default();
        self.visual_styles = VisualStyles::default();
        self.cursors = Cursors::default();
        self.colors = Colors::default();

        let mut display_name: Option<String> = None;
        let mut theme_id: Option<String> = None;

        let lines = self.content.lines();
        let mut i = 0;
        while i < lines.len() {
            let current = lines[i].as_str();
            i = if current == THEME_MARKER {
                scan_section(lines, i + 1, |line| {
                    if let Some((key, value)) = split_field(line) {
                        match key {
                            "DisplayName" if display_name.is_none() => {
                                display_name = Some(value.to_string());
                            }
                            "ThemeId" if theme_id.is_none() => {
                                theme_id = Some(value.to_string());
                            }
                            _ => {}
                        }
                    }
                })
            } else if current == Desktop::MARKER {
                scan_section(lines, i + 1, |line| {
                    if let Some((key, value)) = split_field(line) {
                        match key {
                            "Wallpaper" => self.desktop.wallpaper = value.to_string(),
                            "Pattern" => self.desktop.pattern = value.to_string(),
                            "PicturePosition" => {
                                if let Ok(code) = int_value(key, value)
                                    && let Some(pos) = PicturePosition::from_code(code)
                                {
                                    self.desktop.picture_position = pos;
                                }
                            }
                            "MultimonBackgrounds" => {
                                if let Ok(v) = int_value(key, value) {
                                    self.desktop.multimon_backgrounds = v;
                                }
                            }
                            other => {
                                if let Some(index) = other.strip_prefix("Wallpaper")
                                    && !other.starts_with("WallpaperWriteTime")
                                {
                                    self.desktop.monitor_wallpapers.push(MonitorWallpaper {
                                        index: index.to_string(),
                                        path: value.to_string(),
                                    });
                                }
                            }
                        }
                    }
                })
            } else if current == <VisualStyles as OrderedSection>::MARKER {
                scan_section(lines, i + 1, |line| {
                    if let Some((key, value)) = split_field(line) {
                        let _ = self.visual_styles.apply(key, value);
                    }
                })
            } else if current == <Cursors as OrderedSection>::MARKER {
                scan_section(lines, i + 1, |line| {
                    if let Some((key, value)) = split_field(line) {
                        let _ = self.cursors.apply(key, value);
                    }
                })
            } else if current == Colors::MARKER {
                scan_section(lines, i + 1, |line| {
                    if let Some((key, value)) = split_field(line)
                        && key == Colors::BACKGROUND_KEY
                    {
                        self.colors.background = value.to_string();
                    }
                })
            } else {
                i + 1
            };
        }

        if let Some(name) = display_name {
            self.display_name = name;
        }
        if let Some(id) = theme_id {
            self.theme_id = id;
        }
    }

    /// What: Re-project the typed fields onto the lines and write the file.
    ///
    /// Inputs:
    /// - None (consumes `self` state, writes to `self.path`).
    ///
    /// Output:
    /// - None. A disk failure is logged and swallowed; the in-memory
    ///   projection stays applied.
    ///
    /// Details:
    /// - Deterministic order: `[Theme]` metadata upserts, destructive
    ///   replace of `Cursors` then `VisualStyles` in canonical rank order,
    ///   `Background` upsert, `MTSM` upsert, then the hand-built desktop
    ///   block replaced as a whole.
    /// - The desktop block is literal because its monitor-indexed keys do
    ///   not fit the declared-field codec; entries emit in registration
    ///   order.
    pub fn save(&mut self) {
        codec::upsert_value(&mut self.content, THEME_MARKER, "ThemeId", &self.theme_id);
        codec::upsert_value(&mut self.content, THEME_MARKER, "DisplayName", &self.display_name);

        codec::replace_section(
            &mut self.content,
            <Cursors as OrderedSection>::MARKER,
            self.cursors.render_lines(),
        );
        codec::replace_section(
            &mut self.content,
            <VisualStyles as OrderedSection>::MARKER,
            self.visual_styles.render_lines(),
        );
        codec::upsert_value(
            &mut self.content,
            Colors::MARKER,
            Colors::BACKGROUND_KEY,
            &self.colors.background,
        );
        codec::upsert_value(
            &mut self.content,
            MasterThemeSelector::MARKER,
            MasterThemeSelector::MTSM_KEY,
            &self.master_selector.mtsm,
        );

        let mut desktop = Vec::with_capacity(5 + self.desktop.monitor_wallpapers.len());
        desktop.push(Desktop::MARKER.to_string());
        desktop.push(format!("Wallpaper={}", self.desktop.wallpaper));
        desktop.push(format!("Pattern={}", self.desktop.pattern));
        desktop.push(format!(
            "MultimonBackgrounds={}",
            self.desktop.multimon_backgrounds
        ));
        desktop.push(format!(
            "PicturePosition={}",
            self.desktop.picture_position.code()
        ));
        for w in &self.desktop.monitor_wallpapers {
            desktop.push(format!("Wallpaper{}={}", w.index, w.path));
        }
        codec::replace_section(&mut self.content, Desktop::MARKER, desktop);

        if let Err(e) = self.write_content() {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "could not save theme file"
            );
        }
    }

    fn write_content(&self) -> Result<(), ThemeError> {
        self.content.write(&self.path)
    }
}

/// Consume section body lines from `start` until the next marker or the
/// document end. Returns the index the caller should examine next; a
/// closing marker is returned, not skipped.
fn scan_section<F: FnMut(&str)>(lines: &[String], start: usize, mut on_line: F) -> usize {
    let mut i = start;
    while i < lines.len() {
        if lines[i].starts_with('[') {
            return i;
        }
        on_line(&lines[i]);
        i += 1;
    }
    i
}
