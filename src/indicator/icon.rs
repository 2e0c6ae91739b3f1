//! SVG icon recoloring
//!
//! Rewrites every `fill="…"` and `stroke="…"` attribute of an icon document
//! with a single color. The whole document is rewritten on each call, always
//! starting from the original file on disk.

use crate::color::HexColor;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

fn fill_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"fill="[^"]*""#).expect("valid fill pattern"))
}

fn stroke_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"stroke="[^"]*""#).expect("valid stroke pattern"))
}

/// An icon document after recoloring
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoloredIcon {
    /// Asset the document was read from
    pub path: PathBuf,
    /// Color written into every fill/stroke attribute
    pub color: HexColor,
    /// Rewritten SVG markup
    #[serde(skip_serializing)]
    pub svg: String,
    /// Number of attributes replaced
    pub replaced: usize,
}

/// Replace every fill and stroke attribute value in `svg` with `color`.
///
/// Returns the rewritten document and the number of attributes replaced.
pub fn recolor_svg(svg: &str, color: HexColor) -> (String, usize) {
    let replaced = fill_pattern().find_iter(svg).count() + stroke_pattern().find_iter(svg).count();

    let fill = format!(r#"fill="{}""#, color);
    let stroke = format!(r#"stroke="{}""#, color);
    let svg = fill_pattern().replace_all(svg, fill.as_str());
    let svg = stroke_pattern().replace_all(&svg, stroke.as_str());

    (svg.into_owned(), replaced)
}

/// Read the icon at `path` and recolor it.
///
/// Returns `None` when the asset is missing or unreadable; the caller keeps
/// the previous icon.
pub fn load_recolored(path: &Path, color: HexColor) -> Option<RecoloredIcon> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Skipping icon recolor for {}: {}", path.display(), e);
            return None;
        }
    };

    let (svg, replaced) = recolor_svg(&content, color);
    Some(RecoloredIcon {
        path: path.to_path_buf(),
        color,
        svg,
        replaced,
    })
}
