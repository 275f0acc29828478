//! Integration tests for theme document round trips on disk.
//!
//! Tests cover:
//! - Round-trip fidelity for declared fields through a real file
//! - Preservation of foreign sections and keys across a save
//! - Canonical emission order for destructively replaced sections
//! - Section creation at the document end via value upsert

use wintheme::{LineDocument, ThemeDocument, upsert_value};

/// A realistic document mixing known sections, foreign keys inside known
/// sections, and a whole section this model knows nothing about.
const SAMPLE: &str = "\
[Theme]\r\n\
DisplayName=Slate Dark\r\n\
ThemeId={11111111-2222-3333-4444-555555555555}\r\n\
\r\n\
[Control Panel\\Desktop]\r\n\
Wallpaper=C:\\Windows\\Web\\Wallpaper\\dark.jpg\r\n\
Pattern=\r\n\
MultimonBackgrounds=0\r\n\
PicturePosition=4\r\n\
\r\n\
[Control Panel\\Colors]\r\n\
InfoText=0 0 0\r\n\
Background=58 58 58\r\n\
\r\n\
[Sounds]\r\n\
SchemeName=@mmres.dll,-800\r\n\
\r\n\
[VisualStyles]\r\n\
Path=%SystemRoot%\\resources\\themes\\Aero\\Aero.msstyles\r\n\
ColorStyle=NormalColor\r\n\
Size=NormalSize\r\n";

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("Slate.theme");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn integration_edit_save_keeps_foreign_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    let mut doc = ThemeDocument::new(&path);
    doc.load();
    assert_eq!(doc.display_name, "Slate Dark");

    doc.colors.background = "10 10 10".to_string();
    doc.visual_styles.system_mode = "Light".to_string();
    doc.save();

    let mut back = ThemeDocument::new(&path);
    back.load();
    assert_eq!(back.colors.background, "10 10 10");
    assert_eq!(back.visual_styles.system_mode, "Light");

    let saved = back.content().lines().join("\n");
    // the whole unknown section survives untouched
    assert!(saved.contains("[Sounds]"));
    assert!(saved.contains("SchemeName=@mmres.dll,-800"));
    // foreign key in the value-upserted colors section survives too
    assert!(saved.contains("InfoText=0 0 0"));
}

#[test]
fn integration_replaced_sections_emit_in_canonical_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample(dir.path());

    let mut doc = ThemeDocument::new(&path);
    doc.load();
    doc.save();

    let lines = doc.content().lines();
    let start = lines
        .iter()
        .position(|l| l.as_str() == "[VisualStyles]")
        .expect("visual styles section present");
    let keys: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|l| !l.starts_with('['))
        .filter_map(|l| l.split_once('='))
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        keys,
        [
            "Path",
            "ColorStyle",
            "Size",
            "AutoColorization",
            "ColorizationColor",
            "SystemMode",
            "AppMode",
        ]
    );
}

#[test]
fn integration_upsert_into_missing_section_appends_at_end() {
    let mut doc = LineDocument::from_lines(vec![
        "[Theme]".to_string(),
        "DisplayName=x".to_string(),
    ]);
    upsert_value(&mut doc, "[MasterThemeSelector]", "MTSM", "DABM");
    assert_eq!(
        doc.lines(),
        [
            "[Theme]",
            "DisplayName=x",
            "",
            "[MasterThemeSelector]",
            "MTSM=DABM",
        ]
    );
}

#[test]
fn integration_save_into_missing_directory_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themes").join("deep").join("New.theme");
    let mut doc = ThemeDocument::new(&path);
    doc.display_name = "Deep".to_string();
    doc.save();

    let mut back = ThemeDocument::new(&path);
    back.load();
    assert_eq!(back.display_name, "Deep");
}
