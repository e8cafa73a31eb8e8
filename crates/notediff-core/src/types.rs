use serde::{Deserialize, Serialize};

/// One flattened unit of footnote text.
pub type Footnote = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    #[default]
    Footnote,
    Endnote,
}

impl NoteKind {
    pub fn part_path(self) -> &'static str {
        match self {
            NoteKind::Footnote => "word/footnotes.xml",
            NoteKind::Endnote => "word/endnotes.xml",
        }
    }

    pub fn container_local_name(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnotes",
            NoteKind::Endnote => "endnotes",
        }
    }

    pub fn entry_local_name(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnote",
            NoteKind::Endnote => "endnote",
        }
    }

    /// Run-level element marking the note's own reference number.
    pub fn reference_mark_local_name(self) -> &'static str {
        match self {
            NoteKind::Footnote => "footnoteRef",
            NoteKind::Endnote => "endnoteRef",
        }
    }
}

/// Shape the flattener accepts at the line level of a note region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootnoteLayout {
    /// A line is either plain text or exactly two sub-fields.
    #[default]
    Auto,
    /// Every line is plain text.
    SingleColumn,
    /// Every line holds exactly two sub-fields that are concatenated.
    TwoColumn,
}
