use super::batch::{BatchReport, ComparisonRun};
use crate::error::{NotediffError, Result};
use crate::settings::ExtractorSettings;
use std::path::{Path, PathBuf};

/// Holds the reviewer's selections between actions: the base document and settings.
///
/// Directory comparisons require a base to have been selected first.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSession {
    base: Option<PathBuf>,
    settings: ExtractorSettings,
}

impl ComparisonSession {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self {
            base: None,
            settings,
        }
    }

    pub fn select_base(&mut self, path: impl Into<PathBuf>) {
        self.base = Some(path.into());
    }

    pub fn clear_base(&mut self) {
        self.base = None;
    }

    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    pub fn settings(&self) -> &ExtractorSettings {
        &self.settings
    }

    /// Starts a run against the selected base, extracting it once.
    pub fn start_run(&self) -> Result<ComparisonRun> {
        let base = self.base.as_ref().ok_or_else(|| NotediffError::Configuration {
            message: "select a base document before comparing a directory".to_string(),
        })?;
        ComparisonRun::new(base.clone(), Some(&self.settings))
    }

    pub fn compare_directory(&self, directory: &Path) -> Result<BatchReport> {
        self.start_run()?.compare_directory(directory)
    }
}
