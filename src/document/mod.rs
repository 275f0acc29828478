//! Theme document handling: raw lines, section codec, typed model.
//!
//! Split into submodules along the layering: `lines` owns storage and
//! file I/O, `codec` owns section-level edits, `sections` owns the typed
//! settings groups, and `model` ties them into one document view.

/// Section-level editing primitives.
mod codec;
/// Raw line storage and Windows-1252 file I/O.
mod lines;
/// Typed document model and parse/save projection.
mod model;
/// Typed settings group definitions.
mod sections;

pub use codec::{replace_section, upsert_value};
pub use lines::LineDocument;
pub use model::{DEFAULT_DISPLAY_NAME, ThemeDocument};
pub use sections::{
    Colors, Cursors, Desktop, MasterThemeSelector, MonitorWallpaper, PicturePosition, VisualStyles,
};
