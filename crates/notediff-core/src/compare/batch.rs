use super::engine::{compare_footnotes, BaseFootnotes, ComparisonResult};
use super::pool::ExtraFootnotePool;
use crate::error::{NotediffError, Result};
use crate::extract::FootnoteExtractor;
use crate::settings::ExtractorSettings;
use crate::types::Footnote;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A variant that could not be extracted. It contributes no row and nothing to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantFailure {
    pub filename: String,
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of comparing every variant of a directory against one base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub base_filename: String,
    pub base_footnote_count: usize,
    /// One row per successfully compared variant, in filename order.
    pub results: Vec<ComparisonResult>,
    pub failures: Vec<VariantFailure>,
    pub pool: ExtraFootnotePool,
}

impl BatchReport {
    pub fn total_extra_count(&self) -> usize {
        self.results.iter().map(|r| r.extra_count).sum()
    }

    pub fn result(&self, filename: &str) -> Option<&ComparisonResult> {
        self.results.iter().find(|r| r.filename == filename)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Builds the pool from per-variant results once all of them are complete.
pub fn pool_from_results(results: &[ComparisonResult]) -> ExtraFootnotePool {
    let mut pool = ExtraFootnotePool::new();
    for result in results {
        pool.extend(&result.extra_footnotes);
    }
    pool
}

/// File name without its extension, as shown to reviewers.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compares already-extracted variant sets, keyed by file name, against the base.
///
/// Keys equal to `base_filename` and keys without the configured extension are skipped.
pub fn compare_batch(
    base_filename: &str,
    base: &BaseFootnotes,
    variants: &BTreeMap<String, Vec<Footnote>>,
    settings: &ExtractorSettings,
) -> BatchReport {
    let results: Vec<ComparisonResult> = variants
        .iter()
        .filter(|(name, _)| name.as_str() != base_filename && settings.accepts(Path::new(name)))
        .map(|(name, footnotes)| {
            let mut result = compare_footnotes(&display_name(Path::new(name)), base, footnotes);
            result.path = PathBuf::from(name);
            result
        })
        .collect();

    BatchReport {
        base_filename: display_name(Path::new(base_filename)),
        base_footnote_count: base.len(),
        pool: pool_from_results(&results),
        results,
        failures: Vec::new(),
    }
}

/// Run-scoped context: the base document's footnotes, extracted once and passed
/// to every variant comparison.
pub struct ComparisonRun {
    base_path: PathBuf,
    base: BaseFootnotes,
    settings: ExtractorSettings,
}

impl ComparisonRun {
    /// Extracts the base document. A failure here is fatal for the whole run.
    pub fn new(
        base_path: impl Into<PathBuf>,
        settings: Option<&ExtractorSettings>,
    ) -> Result<Self> {
        let base_path = base_path.into();
        let settings = settings.cloned().unwrap_or_default();
        let footnotes = FootnoteExtractor::extract(&base_path, Some(&settings))?;
        Ok(Self::from_footnotes(base_path, footnotes, settings))
    }

    pub fn from_footnotes(
        base_path: impl Into<PathBuf>,
        footnotes: Vec<Footnote>,
        settings: ExtractorSettings,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            base: BaseFootnotes::new(footnotes),
            settings,
        }
    }

    pub fn base(&self) -> &BaseFootnotes {
        &self.base
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// Whether `path` names the base document (compared by file name only).
    pub fn is_base(&self, path: &Path) -> bool {
        match (path.file_name(), self.base_path.file_name()) {
            (Some(name), Some(base)) => name == base,
            _ => false,
        }
    }

    /// Lists variant documents in `directory`, sorted by file name, excluding the base
    /// and files without the configured extension.
    pub fn scan_variants(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let entries =
            std::fs::read_dir(directory).map_err(|e| NotediffError::io(directory, e))?;

        let mut variants = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| NotediffError::io(directory, e))?;
            let path = entry.path();
            if !path.is_file() || !self.settings.accepts(&path) || self.is_base(&path) {
                continue;
            }
            variants.push(path);
        }

        variants.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(variants)
    }

    pub fn compare_variant(&self, path: &Path) -> Result<ComparisonResult> {
        let footnotes = FootnoteExtractor::extract(path, Some(&self.settings))?;
        let mut result = compare_footnotes(&display_name(path), &self.base, &footnotes);
        result.path = path.to_path_buf();
        Ok(result)
    }

    /// Compares each path, isolating per-variant failures. Paths naming the base are skipped.
    pub fn compare_paths(&self, paths: &[PathBuf]) -> BatchReport {
        let mut results = Vec::new();
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| !self.is_base(p)) {
            match self.compare_variant(path) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping variant");
                    failures.push(VariantFailure {
                        filename: display_name(path),
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let report = BatchReport {
            base_filename: display_name(&self.base_path),
            base_footnote_count: self.base.len(),
            pool: pool_from_results(&results),
            results,
            failures,
        };

        info!(
            base = %self.base_path.display(),
            variants = report.results.len(),
            failures = report.failures.len(),
            pooled_extras = report.pool.len(),
            "comparison run finished"
        );
        report
    }

    pub fn compare_directory(&self, directory: &Path) -> Result<BatchReport> {
        let variants = self.scan_variants(directory)?;
        if variants.is_empty() {
            return Err(NotediffError::NoDocuments {
                directory: directory.to_path_buf(),
            });
        }
        Ok(self.compare_paths(&variants))
    }
}
