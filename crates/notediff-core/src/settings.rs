use crate::error::Result;
use crate::types::{FootnoteLayout, NoteKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for footnote extraction and directory scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Which line shapes the flattener accepts.
    pub layout: FootnoteLayout,

    /// Read footnotes or endnotes.
    pub note_kind: NoteKind,

    /// Trim leading and trailing whitespace from every unit.
    pub trim_whitespace: bool,

    /// Treat non-breaking spaces (U+00A0) as ordinary spaces.
    pub conflate_nbsp: bool,

    /// File extension, without the dot, of documents picked up from a directory.
    /// Matched case-sensitively.
    pub extension: String,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            layout: FootnoteLayout::Auto,
            note_kind: NoteKind::Footnote,
            trim_whitespace: true,
            conflate_nbsp: true,
            extension: "docx".to_string(),
        }
    }
}

impl ExtractorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: FootnoteLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_note_kind(mut self, note_kind: NoteKind) -> Self {
        self.note_kind = note_kind;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `path` carries the configured document extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.extension)
            .unwrap_or(false)
    }
}
