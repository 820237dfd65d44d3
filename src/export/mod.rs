// src/export/mod.rs

mod backend;
mod collate;
mod fs_utils;
mod json_csv;
mod labels;
pub mod logic;
mod model;
#[cfg(feature = "xlsx")]
mod xlsx;

pub use backend::{SheetBackend, backend_for};
pub use collate::compare_names;
pub use labels::Labels;
pub use logic::{ExportLogic, ExportReport};
pub use model::{AttendanceSheet, Cell, StudentRow};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Default output file: the configured name with the extension of `format`.
pub fn default_output_file(configured: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(configured).with_extension(format.as_str())
}
