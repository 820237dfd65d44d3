// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::backend::{SheetBackend, to_export_error};
use crate::export::model::AttendanceSheet;
use serde::Serialize;
use std::collections::BTreeMap;

/// CSV: header row plus one row per student, same layout as the XLSX sheet.
pub(crate) struct CsvBackend;

impl SheetBackend for CsvBackend {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn render(&self, sheet: &AttendanceSheet) -> AppResult<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        for row in sheet.to_table() {
            wtr.write_record(row.iter().map(|c| c.as_text()))
                .map_err(to_export_error)?;
        }

        wtr.into_inner().map_err(to_export_error)
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    no: usize,
    name: &'a str,
    attendance: BTreeMap<String, bool>,
    rate: u32,
}

/// JSON: one object per student, days as `"YYYY-MM-DD": true|false`.
pub(crate) struct JsonBackend;

impl SheetBackend for JsonBackend {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn render(&self, sheet: &AttendanceSheet) -> AppResult<Vec<u8>> {
        let rows: Vec<JsonRow<'_>> = sheet
            .rows
            .iter()
            .map(|r| JsonRow {
                no: r.no,
                name: &r.name,
                attendance: sheet
                    .dates
                    .iter()
                    .map(|d| d.to_string())
                    .zip(r.days.iter().copied())
                    .collect(),
                rate: r.rate,
            })
            .collect();

        serde_json::to_vec_pretty(&rows).map_err(to_export_error)
    }
}
