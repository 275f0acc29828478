//! Typed settings groups stored in a theme document.
//!
//! `VisualStyles` and `Cursors` are flat declared field sets driven through
//! the generic ordered-section codec. `Desktop` is hand-serialized because
//! of its irregular per-monitor `Wallpaper<N>` keys, and `Colors` plus
//! `MasterThemeSelector` are single-value groups that are only ever
//! value-upserted so their undeclared sibling keys survive saves.

use super::codec::{Field, OrderedSection};

/// How a wallpaper image is mapped onto the desktop.
///
/// Numeric codes follow the OS picture-position convention stored in the
/// document; unknown codes are rejected at parse time and the prior value
/// is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PicturePosition {
    /// Centered at native size.
    Center,
    /// Repeated to cover the desktop.
    Tile,
    /// Stretched to the desktop, ignoring aspect ratio.
    Stretch,
    /// Scaled to fit inside the desktop, preserving aspect ratio.
    Fit,
    /// Scaled to cover the desktop, preserving aspect ratio.
    Fill,
    /// Spanned across all monitors.
    Span,
}

impl PicturePosition {
    /// Map a stored numeric code to a position, if it is a known one.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Center),
            1 => Some(Self::Tile),
            2 => Some(Self::Stretch),
            3 => Some(Self::Fit),
            4 => Some(Self::Fill),
            5 => Some(Self::Span),
            _ => None,
        }
    }

    /// Numeric code as emitted into the document.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Center => 0,
            Self::Tile => 1,
            Self::Stretch => 2,
            Self::Fit => 3,
            Self::Fill => 4,
            Self::Span => 5,
        }
    }
}

/// One per-monitor wallpaper entry from an irregular `Wallpaper<N>` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorWallpaper {
    /// Monitor index text as stripped from the key; not assumed numeric.
    pub index: String,
    /// Image path assigned to that monitor.
    pub path: String,
}

/// Desktop wallpaper settings (`[Control Panel\Desktop]`).
///
/// Serialized by hand: the monitor-indexed wallpaper keys do not fit the
/// declared-field codec, and the section must never go through the
/// generic destructive replace with only its regular fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Desktop {
    /// Primary wallpaper image path.
    pub wallpaper: String,
    /// Desktop pattern name.
    pub pattern: String,
    /// Whether per-monitor backgrounds are enabled.
    pub multimon_backgrounds: i32,
    /// How the wallpaper image is placed.
    pub picture_position: PicturePosition,
    /// Per-monitor wallpaper entries in registration order.
    pub monitor_wallpapers: Vec<MonitorWallpaper>,
}

impl Desktop {
    /// Marker line of the desktop section.
    pub const MARKER: &'static str = "[Control Panel\\Desktop]";
}

impl Default for Desktop {
    fn default() -> Self {
        Desktop {
            wallpaper: String::new(),
            pattern: String::new(),
            multimon_backgrounds: 0,
            picture_position: PicturePosition::Fill,
            monitor_wallpapers: Vec::new(),
        }
    }
}

/// Visual style selection (`[VisualStyles]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualStyles {
    /// Path to the `.msstyles` resource.
    pub path: String,
    /// Color scheme name inside the style resource.
    pub color_style: String,
    /// Size scheme name inside the style resource.
    pub size: String,
    /// Whether the accent color is derived from the wallpaper.
    pub auto_colorization: String,
    /// Accent colorization color value.
    pub colorization_color: String,
    /// Light/dark mode applied to the shell.
    pub system_mode: String,
    /// Light/dark mode applied to applications.
    pub app_mode: String,
}

impl Default for VisualStyles {
    fn default() -> Self {
        VisualStyles {
            path: "%SystemRoot%\\resources\\themes\\Aero\\Aero.msstyles".to_string(),
            color_style: "NormalColor".to_string(),
            size: "NormalSize".to_string(),
            auto_colorization: "0".to_string(),
            colorization_color: "0XC40078D7".to_string(),
            system_mode: "Dark".to_string(),
            app_mode: "Dark".to_string(),
        }
    }
}

impl OrderedSection for VisualStyles {
    const MARKER: &'static str = "[VisualStyles]";

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field { name: "Path", rank: 1, value: &self.path },
            Field { name: "ColorStyle", rank: 2, value: &self.color_style },
            Field { name: "Size", rank: 3, value: &self.size },
            Field { name: "AutoColorization", rank: 4, value: &self.auto_colorization },
            Field { name: "ColorizationColor", rank: 5, value: &self.colorization_color },
            Field { name: "SystemMode", rank: 6, value: &self.system_mode },
            Field { name: "AppMode", rank: 7, value: &self.app_mode },
        ]
    }

    fn apply(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "Path" => &mut self.path,
            "ColorStyle" => &mut self.color_style,
            "Size" => &mut self.size,
            "AutoColorization" => &mut self.auto_colorization,
            "ColorizationColor" => &mut self.colorization_color,
            "SystemMode" => &mut self.system_mode,
            "AppMode" => &mut self.app_mode,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Mouse cursor set (`[Control Panel\Cursors]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursors {
    /// Busy-in-background cursor.
    pub app_starting: String,
    /// Normal pointer.
    pub arrow: String,
    /// Precision crosshair.
    pub crosshair: String,
    /// Link-select hand.
    pub hand: String,
    /// Help-select pointer.
    pub help: String,
    /// Text-select beam.
    pub ibeam: String,
    /// Unavailable indicator.
    pub no: String,
    /// Handwriting pen.
    pub nw_pen: String,
    /// Move cursor.
    pub size_all: String,
    /// Diagonal resize, north-east/south-west.
    pub size_nesw: String,
    /// Vertical resize.
    pub size_ns: String,
    /// Diagonal resize, north-west/south-east.
    pub size_nwse: String,
    /// Horizontal resize.
    pub size_we: String,
    /// Alternate-select cursor.
    pub up_arrow: String,
    /// Busy cursor.
    pub wait: String,
    /// Scheme name shown by the cursor control panel.
    pub default_value: String,
}

impl Default for Cursors {
    fn default() -> Self {
        Cursors {
            app_starting: "%SystemRoot%\\cursors\\aero_working.ani".to_string(),
            arrow: "%SystemRoot%\\cursors\\aero_arrow.cur".to_string(),
            crosshair: String::new(),
            hand: "%SystemRoot%\\cursors\\aero_link.cur".to_string(),
            help: "%SystemRoot%\\cursors\\aero_helpsel.cur".to_string(),
            ibeam: String::new(),
            no: "%SystemRoot%\\cursors\\aero_unavail.cur".to_string(),
            nw_pen: "%SystemRoot%\\cursors\\aero_pen.cur".to_string(),
            size_all: "%SystemRoot%\\cursors\\aero_move.cur".to_string(),
            size_nesw: "%SystemRoot%\\cursors\\aero_nesw.cur".to_string(),
            size_ns: "%SystemRoot%\\cursors\\aero_ns.cur".to_string(),
            size_nwse: "%SystemRoot%\\cursors\\aero_nwse.cur".to_string(),
            size_we: "%SystemRoot%\\cursors\\aero_ew.cur".to_string(),
            up_arrow: "%SystemRoot%\\cursors\\aero_up.cur".to_string(),
            wait: "%SystemRoot%\\cursors\\aero_busy.ani".to_string(),
            default_value: "Windows Aero".to_string(),
        }
    }
}

impl OrderedSection for Cursors {
    const MARKER: &'static str = "[Control Panel\\Cursors]";

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field { name: "AppStarting", rank: 1, value: &self.app_starting },
            Field { name: "Arrow", rank: 2, value: &self.arrow },
            Field { name: "Crosshair", rank: 3, value: &self.crosshair },
            Field { name: "Hand", rank: 4, value: &self.hand },
            Field { name: "Help", rank: 5, value: &self.help },
            Field { name: "IBeam", rank: 6, value: &self.ibeam },
            Field { name: "No", rank: 7, value: &self.no },
            Field { name: "NWPen", rank: 8, value: &self.nw_pen },
            Field { name: "SizeAll", rank: 9, value: &self.size_all },
            Field { name: "SizeNESW", rank: 10, value: &self.size_nesw },
            Field { name: "SizeNS", rank: 11, value: &self.size_ns },
            Field { name: "SizeNWSE", rank: 12, value: &self.size_nwse },
            Field { name: "SizeWE", rank: 13, value: &self.size_we },
            Field { name: "UpArrow", rank: 14, value: &self.up_arrow },
            Field { name: "Wait", rank: 15, value: &self.wait },
            Field { name: "DefaultValue", rank: 16, value: &self.default_value },
        ]
    }

    fn apply(&mut self, key: &str, value: &str) -> bool {
        let slot = match key {
            "AppStarting" => &mut self.app_starting,
            "Arrow" => &mut self.arrow,
            "Crosshair" => &mut self.crosshair,
            "Hand" => &mut self.hand,
            "Help" => &mut self.help,
            "IBeam" => &mut self.ibeam,
            "No" => &mut self.no,
            "NWPen" => &mut self.nw_pen,
            "SizeAll" => &mut self.size_all,
            "SizeNESW" => &mut self.size_nesw,
            "SizeNS" => &mut self.size_ns,
            "SizeNWSE" => &mut self.size_nwse,
            "SizeWE" => &mut self.size_we,
            "UpArrow" => &mut self.up_arrow,
            "Wait" => &mut self.wait,
            "DefaultValue" => &mut self.default_value,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// System color overrides (`[Control Panel\Colors]`).
///
/// Only the background color is modeled; the section commonly carries many
/// other color keys, which is why it is value-upserted and never replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    /// Desktop background color as an `R G B` triple.
    pub background: String,
}

impl Colors {
    /// Marker line of the colors section.
    pub const MARKER: &'static str = "[Control Panel\\Colors]";
    /// Key of the single declared field.
    pub(crate) const BACKGROUND_KEY: &'static str = "Background";
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            background: "0 0 0".to_string(),
        }
    }
}

/// Master theme selector stamp (`[MasterThemeSelector]`).
///
/// The value is a composite the engine understands; this model treats it
/// as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterThemeSelector {
    /// Opaque selector value.
    pub mtsm: String,
}

impl MasterThemeSelector {
    /// Marker line of the selector section.
    pub const MARKER: &'static str = "[MasterThemeSelector]";
    /// Key of the single declared field.
    pub(crate) const MTSM_KEY: &'static str = "MTSM";
}

impl Default for MasterThemeSelector {
    fn default() -> Self {
        MasterThemeSelector {
            mtsm: "DABM".to_string(),
        }
    }
}
