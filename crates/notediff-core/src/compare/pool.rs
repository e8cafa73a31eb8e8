use crate::types::Footnote;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One reviewable row of the extra-footnote pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    pub selected: bool,
    pub text: Footnote,
}

/// Deduplicated union of extra footnotes across all variants of a run.
///
/// Entries keep first-insertion order; each text appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PoolEntry>", into = "Vec<PoolEntry>")]
pub struct ExtraFootnotePool {
    entries: Vec<PoolEntry>,
    index: HashSet<Footnote>,
}

impl ExtraFootnotePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `footnote` unless already pooled. Returns whether it was new.
    pub fn insert(&mut self, footnote: &str) -> bool {
        if self.index.contains(footnote) {
            return false;
        }
        self.index.insert(footnote.to_string());
        self.entries.push(PoolEntry {
            selected: false,
            text: footnote.to_string(),
        });
        true
    }

    pub fn extend<I, S>(&mut self, footnotes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for footnote in footnotes {
            self.insert(footnote.as_ref());
        }
    }

    /// Folds another pool into this one, keeping this pool's order first.
    pub fn merge(&mut self, other: ExtraFootnotePool) {
        for entry in other.entries {
            if self.insert(&entry.text) && entry.selected {
                self.select(&entry.text);
            }
        }
    }

    pub fn contains(&self, footnote: &str) -> bool {
        self.index.contains(footnote)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    /// Texts in lexicographic order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut texts: Vec<&str> = self.iter().collect();
        texts.sort_unstable();
        texts
    }

    /// Marks `footnote` as selected. Returns false when it is not pooled.
    pub fn select(&mut self, footnote: &str) -> bool {
        self.set_selected(footnote, true)
    }

    pub fn deselect(&mut self, footnote: &str) -> bool {
        self.set_selected(footnote, false)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.text.as_str())
    }

    fn set_selected(&mut self, footnote: &str, selected: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.text == footnote) {
            Some(entry) => {
                entry.selected = selected;
                true
            }
            None => false,
        }
    }
}

impl From<Vec<PoolEntry>> for ExtraFootnotePool {
    fn from(entries: Vec<PoolEntry>) -> Self {
        let mut pool = ExtraFootnotePool::new();
        for entry in entries {
            if pool.insert(&entry.text) && entry.selected {
                pool.select(&entry.text);
            }
        }
        pool
    }
}

impl From<ExtraFootnotePool> for Vec<PoolEntry> {
    fn from(pool: ExtraFootnotePool) -> Self {
        pool.entries
    }
}
