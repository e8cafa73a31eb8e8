use crate::types::Footnote;
use crate::util::strings::quote_join;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// The base document's footnotes, extracted once per run and shared read-only
/// by every variant comparison.
#[derive(Debug, Clone, Default)]
pub struct BaseFootnotes {
    footnotes: Vec<Footnote>,
    set: HashSet<Footnote>,
}

impl BaseFootnotes {
    pub fn new(footnotes: Vec<Footnote>) -> Self {
        let set = footnotes.iter().cloned().collect();
        Self { footnotes, set }
    }

    pub fn contains(&self, footnote: &str) -> bool {
        self.set.contains(footnote)
    }

    /// Footnotes in extraction order, duplicates included.
    pub fn footnotes(&self) -> &[Footnote] {
        &self.footnotes
    }

    pub fn len(&self) -> usize {
        self.footnotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty()
    }

    pub fn distinct_len(&self) -> usize {
        self.set.len()
    }
}

/// Result of comparing one variant document against the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Display name: the file name without its extension.
    pub filename: String,
    /// Location of the variant, empty when compared from in-memory sets.
    #[serde(default)]
    pub path: PathBuf,
    /// Number of footnote units in the variant, duplicates included.
    pub footnote_count: usize,
    /// Variant footnotes absent from the base, deduplicated, in order of first appearance.
    pub extra_footnotes: Vec<Footnote>,
    pub extra_count: usize,
    /// Base footnotes absent from the variant, deduplicated, in base order.
    pub missing_footnotes: Vec<Footnote>,
    /// Distinct footnotes present in both documents.
    pub shared_count: usize,
}

impl ComparisonResult {
    /// Extra footnotes rendered as `"a", "b"` for a table cell.
    pub fn extra_footnotes_display(&self) -> String {
        quote_join(self.extra_footnotes.iter())
    }

    pub fn has_extras(&self) -> bool {
        self.extra_count > 0
    }
}

/// Compares one variant's footnotes against the base using set semantics.
///
/// Positions are ignored: a variant footnote is extra only when its exact text
/// appears nowhere in the base.
pub fn compare_footnotes(
    filename: &str,
    base: &BaseFootnotes,
    variant: &[Footnote],
) -> ComparisonResult {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut extra_footnotes = Vec::new();
    let mut shared_count = 0;

    for footnote in variant {
        if !seen.insert(footnote.as_str()) {
            continue;
        }
        if base.contains(footnote) {
            shared_count += 1;
        } else {
            extra_footnotes.push(footnote.clone());
        }
    }

    let mut reported: HashSet<&str> = HashSet::new();
    let missing_footnotes = base
        .footnotes()
        .iter()
        .filter(|f| !seen.contains(f.as_str()) && reported.insert(f.as_str()))
        .cloned()
        .collect();

    ComparisonResult {
        filename: filename.to_string(),
        path: PathBuf::new(),
        footnote_count: variant.len(),
        extra_count: extra_footnotes.len(),
        extra_footnotes,
        missing_footnotes,
        shared_count,
    }
}
