// src/export/logic.rs

use crate::core::storage::KeyValueStore;
use crate::core::store::audit;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::backend::backend_for;
use crate::export::fs_utils::{ensure_writable, write_atomically};
use crate::export::labels::Labels;
use crate::export::model::AttendanceSheet;
use crate::export::notify_export_success;
use crate::models::AttendanceArchive;
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub students: usize,
    pub days: usize,
}

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored day to `path`.
    ///
    /// Nothing is written unless the whole file could be rendered.
    pub fn export<S: KeyValueStore + ?Sized>(
        store: &S,
        archive: &AttendanceArchive,
        format: ExportFormat,
        path: &Path,
        force: bool,
        labels: Labels,
    ) -> AppResult<ExportReport> {
        let sheet = AttendanceSheet::build(archive, labels)?;
        let backend = backend_for(format)?;

        ensure_writable(path, force)?;

        info(format!("Exporting to {}: {}", backend.name(), path.display()));
        let bytes = backend.render(&sheet)?;
        write_atomically(path, &bytes)?;

        notify_export_success(backend.name(), path);

        let report = ExportReport {
            path: path.to_path_buf(),
            students: sheet.rows.len(),
            days: sheet.dates.len(),
        };

        audit(
            store,
            "export",
            format.as_str(),
            &format!(
                "{} students x {} days -> {}",
                report.students,
                report.days,
                path.display()
            ),
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::errors::AppError;
    use crate::models::DateKey;
    use std::env;
    use std::fs;

    fn out(name: &str, ext: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("{name}_attendbook_out.{ext}"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn empty_archive_writes_nothing() {
        let path = out("logic_empty", "csv");
        let err = ExportLogic::export(
            &MemoryStore::new(),
            &AttendanceArchive::new(),
            ExportFormat::Csv,
            &path,
            true,
            Labels::KO,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::EmptyArchive));
        assert!(!path.exists());
    }

    #[test]
    fn csv_export_writes_file() {
        let raw = r#"{"2024-05-01":[{"id":1,"name":"Kim","present":true}],
                      "2024-05-02":[{"id":1,"name":"Kim","present":false}]}"#;
        let archive = AttendanceArchive::decode(raw, DateKey::parse("2024-05-02").unwrap())
            .unwrap()
            .archive;

        let path = out("logic_csv", "csv");
        let report = ExportLogic::export(
            &MemoryStore::new(),
            &archive,
            ExportFormat::Csv,
            &path,
            true,
            Labels::EN,
        )
        .unwrap();

        assert_eq!(report.students, 1);
        assert_eq!(report.days, 2);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("1,Kim,Present,Absent,50"));
        fs::remove_file(&path).ok();
    }
}
