//! Footnote extraction: document → note region → flat, normalized footnote units.

use crate::error::{NotediffError, Result};
use crate::settings::ExtractorSettings;
use crate::types::{Footnote, FootnoteLayout};
use crate::util::strings::normalize_spaces;
use crate::wml::{build_note_region, NoteRegion, RegionNode, WmlDocument};
use std::path::Path;
use tracing::debug;

const EXTRACT_OPERATION: &str = "extract footnotes from";

/// Depth of the line level below the region root (entries → paragraphs → lines).
const LINE_DEPTH: usize = 2;

pub struct FootnoteExtractor;

impl FootnoteExtractor {
    /// Reads `path` and returns its footnotes in document order.
    ///
    /// Any failure (missing file, corrupt package, malformed XML, a region shape the
    /// configured layout rejects) is returned as [`NotediffError::Parse`] carrying the path.
    pub fn extract(path: &Path, settings: Option<&ExtractorSettings>) -> Result<Vec<Footnote>> {
        let settings = settings.cloned().unwrap_or_default();

        let bytes = std::fs::read(path).map_err(|e| {
            NotediffError::parse(path, EXTRACT_OPERATION, NotediffError::io(path, e))
        })?;
        let footnotes = Self::extract_from_bytes(&bytes, &settings)
            .map_err(|e| NotediffError::parse(path, EXTRACT_OPERATION, e))?;

        debug!(
            path = %path.display(),
            footnotes = footnotes.len(),
            "extracted footnotes"
        );
        Ok(footnotes)
    }

    pub fn extract_from_bytes(bytes: &[u8], settings: &ExtractorSettings) -> Result<Vec<Footnote>> {
        let region = Self::read_region(bytes, settings)?;
        flatten_region(&region, settings)
    }

    /// Parses the container into its nested note region without flattening.
    pub fn read_region(bytes: &[u8], settings: &ExtractorSettings) -> Result<NoteRegion> {
        let document = WmlDocument::from_bytes(bytes)?;
        match document.notes(settings.note_kind)? {
            Some(notes) => build_note_region(&notes, settings.note_kind),
            None => Ok(NoteRegion::default()),
        }
    }
}

/// Extracts footnotes from `path` with default settings.
pub fn extract_footnotes(path: impl AsRef<Path>) -> Result<Vec<Footnote>> {
    FootnoteExtractor::extract(path.as_ref(), None)
}

/// Flattens a note region depth-first into one footnote unit per line.
pub fn flatten_region(region: &NoteRegion, settings: &ExtractorSettings) -> Result<Vec<Footnote>> {
    let mut units = Vec::new();
    for entry in &region.entries {
        flatten_into(entry, 0, settings.layout, &mut units)?;
    }

    Ok(units
        .into_iter()
        .map(|unit| normalize_unit(&unit, settings))
        .collect())
}

fn flatten_into(
    node: &RegionNode,
    depth: usize,
    layout: FootnoteLayout,
    out: &mut Vec<Footnote>,
) -> Result<()> {
    if depth == LINE_DEPTH {
        out.push(line_unit(node, layout)?);
        return Ok(());
    }

    match node {
        RegionNode::Group(children) => {
            for child in children {
                flatten_into(child, depth + 1, layout, out)?;
            }
            Ok(())
        }
        RegionNode::Text(_) => Err(NotediffError::UnsupportedStructure {
            message: format!("text found at {} level", level_name(depth)),
        }),
    }
}

/// Turns one line into a footnote unit, concatenating sub-fields where the layout allows.
fn line_unit(node: &RegionNode, layout: FootnoteLayout) -> Result<Footnote> {
    match (node, layout) {
        (RegionNode::Text(text), FootnoteLayout::Auto | FootnoteLayout::SingleColumn) => {
            Ok(text.clone())
        }
        (RegionNode::Text(_), FootnoteLayout::TwoColumn) => {
            Err(NotediffError::UnsupportedStructure {
                message: "two-column layout expects two sub-fields per line, found plain text"
                    .to_string(),
            })
        }
        (RegionNode::Group(fields), FootnoteLayout::SingleColumn) => {
            Err(NotediffError::UnsupportedStructure {
                message: format!(
                    "single-column layout expects plain text lines, found {} sub-fields",
                    fields.len()
                ),
            })
        }
        (RegionNode::Group(fields), _) if fields.len() != 2 => {
            Err(NotediffError::UnsupportedStructure {
                message: format!(
                    "{} layout expects two sub-fields per line, found {}",
                    layout_name(layout),
                    fields.len()
                ),
            })
        }
        (RegionNode::Group(fields), _) => {
            let mut unit = String::new();
            for field in fields {
                match field {
                    RegionNode::Text(text) => unit.push_str(text),
                    RegionNode::Group(_) => {
                        return Err(NotediffError::UnsupportedStructure {
                            message: "nested group below line level".to_string(),
                        })
                    }
                }
            }
            Ok(unit)
        }
    }
}

fn normalize_unit(unit: &str, settings: &ExtractorSettings) -> Footnote {
    let unit = normalize_spaces(unit, settings.conflate_nbsp);
    if settings.trim_whitespace {
        unit.trim().to_string()
    } else {
        unit
    }
}

fn layout_name(layout: FootnoteLayout) -> &'static str {
    match layout {
        FootnoteLayout::Auto => "auto",
        FootnoteLayout::SingleColumn => "single-column",
        FootnoteLayout::TwoColumn => "two-column",
    }
}

fn level_name(depth: usize) -> &'static str {
    match depth {
        0 => "entry",
        1 => "paragraph",
        _ => "line",
    }
}
