// src/export/backend.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{CsvBackend, JsonBackend};
use crate::export::model::AttendanceSheet;

/// Serializes a finished sheet into file bytes.
pub trait SheetBackend {
    fn name(&self) -> &'static str;

    fn render(&self, sheet: &AttendanceSheet) -> AppResult<Vec<u8>>;
}

/// Pick the backend for `format`, or `BackendUnavailable` when it was not
/// compiled in.
pub fn backend_for(format: ExportFormat) -> AppResult<Box<dyn SheetBackend>> {
    match format {
        ExportFormat::Csv => Ok(Box::new(CsvBackend)),
        ExportFormat::Json => Ok(Box::new(JsonBackend)),
        ExportFormat::Xlsx => xlsx_backend(),
    }
}

#[cfg(feature = "xlsx")]
fn xlsx_backend() -> AppResult<Box<dyn SheetBackend>> {
    Ok(Box::new(crate::export::xlsx::XlsxBackend))
}

#[cfg(not(feature = "xlsx"))]
fn xlsx_backend() -> AppResult<Box<dyn SheetBackend>> {
    Err(AppError::BackendUnavailable("xlsx".to_string()))
}

pub(crate) fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
