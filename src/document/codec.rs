//! Section-level editing of a [`LineDocument`].
//!
//! Two mutation policies exist and they are deliberately different:
//! [`upsert_value`] touches exactly one `key=value` line and leaves every
//! sibling line in place, while [`replace_section`] discards a section's
//! whole body and re-emits it from scratch. Sections that may carry
//! engine-generated keys the model does not declare must only ever be
//! value-upserted.

use crate::error::ThemeError;

use super::lines::LineDocument;

/// A declared field as rendered into a section: key name, canonical
/// emission rank, current value.
pub(crate) struct Field<'a> {
    /// Textual key emitted before `=`.
    pub name: &'static str,
    /// Canonical emission rank; position in memory is irrelevant.
    pub rank: u8,
    /// Current value text.
    pub value: &'a str,
}

/// A settings group with a fixed marker and a declared, ranked field set.
///
/// Implementors drive both directions of the codec: [`Self::fields`] feeds
/// the rank-ordered renderer used by destructive section replacement, and
/// [`Self::apply`] is the key-to-setter lookup used during parsing.
pub(crate) trait OrderedSection {
    /// Exact marker line opening this section, brackets included.
    const MARKER: &'static str;

    /// Declared fields with their canonical ranks and current values.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Set the declared field named `key` to `value`. Returns `false` when
    /// no declared field matches; unmatched lines are ignored by parsing.
    fn apply(&mut self, key: &str, value: &str) -> bool;

    /// Render the marker plus every declared field in canonical rank order.
    fn render_lines(&self) -> Vec<String> {
        let mut fields = self.fields();
        fields.sort_by_key(|f| f.rank);
        let mut lines = Vec::with_capacity(fields.len() + 1);
        lines.push(Self::MARKER.to_string());
        for f in fields {
            lines.push(format!("{}={}", f.name, f.value));
        }
        lines
    }
}

/// What: Update or insert a single `key=value` line within a section.
///
/// Inputs:
/// - `doc`: Document to mutate in place.
/// - `marker`: Exact marker line of the target section (e.g. `[Theme]`).
/// - `key`: Field key; matched against line starts within the section.
/// - `value`: New value text.
///
/// Output:
/// - None (mutates `doc`).
///
/// Details:
/// - Missing section: appends a blank separator, the marker, and the line
///   at the end of the document, leaving all prior content untouched.
/// - Present section: the first line starting with `key` is rewritten in
///   place; with no such line, `key=value` is inserted right after the
///   marker. Every other line keeps its content and relative order.
pub fn upsert_value(doc: &mut LineDocument, marker: &str, key: &str, value: &str) {
    let lines = doc.lines_mut();
    let Some(found) = lines.iter().position(|l| l.as_str() == marker) else {
        lines.push(String::new());
        lines.push(marker.to_string());
        lines.push(format!("{key}={value}"));
        return;
    };
    let mut i = found + 1;
    while i < lines.len() {
        if lines[i].starts_with('[') {
            break;
        }
        if lines[i].starts_with(key) {
            lines[i] = format!("{key}={value}");
            return;
        }
        i += 1;
    }
    lines.insert(found + 1, format!("{key}={value}"));
}

/// What: Replace a section's marker and entire body with new lines.
///
/// Inputs:
/// - `doc`: Document to mutate in place.
/// - `marker`: Exact marker line of the target section.
/// - `lines`: Full replacement run; the marker itself must be the first
///   element, since the prior span is removed marker included.
///
/// Output:
/// - None (mutates `doc`).
///
/// Details:
/// - The removed span extends to the next `[`-prefixed line or document
///   end, so any unrecognized field previously in the section is lost.
/// - Missing section: appends a blank separator followed by `lines`.
pub fn replace_section(doc: &mut LineDocument, marker: &str, lines: Vec<String>) {
    let content = doc.lines_mut();
    let Some(found) = content.iter().position(|l| l.as_str() == marker) else {
        content.push(String::new());
        content.extend(lines);
        return;
    };
    let end = content[found + 1..]
        .iter()
        .position(|l| l.starts_with('['))
        .map_or(content.len(), |off| found + 1 + off);
    content.splice(found..end, lines);
}

/// Parse a declared integer field leniently.
///
/// Callers keep the prior in-memory value on error; the variant exists so
/// the failure still has a typed representation at the parse site.
pub(crate) fn int_value(key: &str, raw: &str) -> Result<i32, ThemeError> {
    raw.trim().parse().map_err(|_| ThemeError::Format {
        key: key.to_string(),
        value: raw.trim().to_string(),
    })
}

/// Split a `key=value` line at the first `=`.
///
/// The key is returned as-is (keys in this format carry no padding), the
/// value is trimmed. Lines without `=` carry no field and yield `None`.
pub(crate) fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::{LineDocument, int_value, replace_section, split_field, upsert_value};

    fn doc(lines: &[&str]) -> LineDocument {
        LineDocument::from_lines(lines.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn codec_upsert_rewrites_in_place_and_keeps_foreign_lines() {
        let mut d = doc(&[
            "[Control Panel\\Colors]",
            "Foo=Bar",
            "Background=000000",
            "",
            "[Next]",
        ]);
        upsert_value(&mut d, "[Control Panel\\Colors]", "Background", "111111");
        assert_eq!(
            d.lines(),
            [
                "[Control Panel\\Colors]",
                "Foo=Bar",
                "Background=111111",
                "",
                "[Next]",
            ]
        );
    }

    #[test]
    fn codec_upsert_inserts_after_marker_when_key_missing() {
        let mut d = doc(&["[Theme]", "DisplayName=x", "", "[Other]", "K=v"]);
        upsert_value(&mut d, "[Theme]", "ThemeId", "{id}");
        assert_eq!(
            d.lines(),
            ["[Theme]", "ThemeId={id}", "DisplayName=x", "", "[Other]", "K=v"]
        );
    }

    #[test]
    fn codec_upsert_creates_section_at_document_end() {
        let mut d = doc(&["[Existing]", "A=1"]);
        upsert_value(&mut d, "[Theme]", "DisplayName", "Fresh");
        assert_eq!(
            d.lines(),
            ["[Existing]", "A=1", "", "[Theme]", "DisplayName=Fresh"]
        );
    }

    #[test]
    fn codec_upsert_does_not_cross_into_next_section() {
        // key present only in the following section; must not be touched
        let mut d = doc(&["[A]", "", "[B]", "Background=000000"]);
        upsert_value(&mut d, "[A]", "Background", "ffffff");
        assert_eq!(
            d.lines(),
            ["[A]", "Background=ffffff", "", "[B]", "Background=000000"]
        );
    }

    #[test]
    fn codec_replace_discards_undeclared_lines() {
        let mut d = doc(&[
            "[VisualStyles]",
            "Path=old.msstyles",
            "EngineExtra=1",
            "[After]",
            "K=v",
        ]);
        replace_section(
            &mut d,
            "[VisualStyles]",
            vec!["[VisualStyles]".to_string(), "Path=new.msstyles".to_string()],
        );
        assert_eq!(
            d.lines(),
            ["[VisualStyles]", "Path=new.msstyles", "[After]", "K=v"]
        );
    }

    #[test]
    fn codec_replace_spans_to_document_end_when_last_section() {
        let mut d = doc(&["[Head]", "H=1", "", "[Tail]", "Old=1", "Older=2"]);
        replace_section(
            &mut d,
            "[Tail]",
            vec!["[Tail]".to_string(), "New=1".to_string()],
        );
        assert_eq!(d.lines(), ["[Head]", "H=1", "", "[Tail]", "New=1"]);
    }

    #[test]
    fn codec_replace_appends_with_separator_when_absent() {
        let mut d = doc(&["[Only]", "A=1"]);
        replace_section(
            &mut d,
            "[Fresh]",
            vec!["[Fresh]".to_string(), "B=2".to_string()],
        );
        assert_eq!(d.lines(), ["[Only]", "A=1", "", "[Fresh]", "B=2"]);
    }

    #[test]
    fn codec_int_value_reports_key_and_raw_text() {
        assert_eq!(int_value("MultimonBackgrounds", " 2 ").unwrap(), 2);
        assert!(int_value("PicturePosition", "notanumber").is_err());
    }

    #[test]
    fn codec_split_field_trims_value_only() {
        assert_eq!(split_field("Wallpaper=C:\\a.jpg "), Some(("Wallpaper", "C:\\a.jpg")));
        assert_eq!(split_field("MTSM=a=b"), Some(("MTSM", "a=b")));
        assert_eq!(split_field("no separator"), None);
    }
}
