use super::engine::BaseFootnotes;
use crate::types::Footnote;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RowStatus {
    Match,
    Missing,
}

impl RowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Match => "MATCH",
            RowStatus::Missing => "MISSING",
        }
    }
}

/// Export row classifying one base footnote against a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub base_footnote: Footnote,
    pub status: RowStatus,
}

/// One row per base footnote, sorted by text, marking whether the variant carries it.
///
/// Duplicates in the base produce duplicate rows, matching the base's footnote count.
pub fn comparison_rows(base: &BaseFootnotes, variant: &[Footnote]) -> Vec<ComparisonRow> {
    let variant_set: HashSet<&str> = variant.iter().map(|f| f.as_str()).collect();

    let mut sorted: Vec<&Footnote> = base.footnotes().iter().collect();
    sorted.sort();

    sorted
        .into_iter()
        .map(|footnote| ComparisonRow {
            base_footnote: footnote.clone(),
            status: if variant_set.contains(footnote.as_str()) {
                RowStatus::Match
            } else {
                RowStatus::Missing
            },
        })
        .collect()
}
