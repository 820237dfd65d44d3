// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::backend::{SheetBackend, to_export_error};
use crate::export::model::{AttendanceSheet, Cell, StudentRow};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Single-sheet workbook with a styled header, banded rows and column
/// widths fitted to the content.
pub(crate) struct XlsxBackend;

impl SheetBackend for XlsxBackend {
    fn name(&self) -> &'static str {
        "XLSX"
    }

    fn render(&self, sheet: &AttendanceSheet) -> AppResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.labels.sheet).map_err(to_export_error)?;

        // ---------------------------
        // Header
        // ---------------------------
        let headers = sheet.headers();

        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x2F75B5))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center);

        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_with_format(0, col as u16, header.as_str(), &header_format)
                .map_err(to_export_error)?;
        }

        worksheet
            .set_freeze_panes(1, 2)
            .map_err(to_export_error)?;

        let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(h.as_str())).collect();

        let band1 = Color::RGB(0xEAF3FB);
        let band2 = Color::RGB(0xFFFFFF);

        // ---------------------------
        // Student rows
        // ---------------------------
        for (row_index, student) in sheet.rows.iter().enumerate() {
            let row = (row_index + 1) as u32;
            let band = if row_index % 2 == 0 { band1 } else { band2 };

            for (col, cell) in sheet.row_cells(student).iter().enumerate() {
                let absent = is_absent_cell(student, col);
                write_cell(worksheet, row, col as u16, cell, band, absent)?;

                let w = UnicodeWidthStr::width(cell.as_text().as_str());
                col_widths[col] = col_widths[col].max(w);
            }
        }

        for (c, w) in col_widths.iter().enumerate() {
            worksheet
                .set_column_width(c as u16, *w as f64 + 2.0)
                .map_err(to_export_error)?;
        }

        workbook.save_to_buffer().map_err(to_export_error)
    }
}

/// Day columns sit between the name and the rate.
fn is_absent_cell(student: &StudentRow, col: usize) -> bool {
    col >= 2 && student.days.get(col - 2).is_some_and(|present| !present)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
    absent: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n as f64, &fmt)
                .map_err(to_export_error)?;
        }
        Cell::Text(s) => {
            let fmt = if absent {
                base.set_font_color(Color::RGB(0xC00000))
                    .set_align(FormatAlign::Center)
            } else if col >= 2 {
                base.set_align(FormatAlign::Center)
            } else {
                base
            };
            worksheet
                .write_with_format(row, col, s.as_str(), &fmt)
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::labels::Labels;
    use crate::models::{AttendanceArchive, DateKey};

    #[test]
    fn renders_a_zip_container() {
        let raw = r#"{"2024-05-01":[{"id":1,"name":"김철수","present":true}]}"#;
        let archive = AttendanceArchive::decode(raw, DateKey::parse("2024-05-01").unwrap())
            .unwrap()
            .archive;
        let sheet = AttendanceSheet::build(&archive, Labels::KO).unwrap();

        let bytes = XlsxBackend.render(&sheet).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn only_day_columns_are_flagged_absent() {
        let raw = r#"{"2024-05-01":[{"id":1,"name":"결석","present":false}],
                      "2024-05-02":[{"id":1,"name":"결석","present":true}]}"#;
        let archive = AttendanceArchive::decode(raw, DateKey::parse("2024-05-02").unwrap())
            .unwrap()
            .archive;
        let sheet = AttendanceSheet::build(&archive, Labels::KO).unwrap();
        let row = &sheet.rows[0];

        // number, name, day 1, day 2, rate
        let flags: Vec<bool> = (0..5).map(|col| is_absent_cell(row, col)).collect();
        assert_eq!(flags, vec![false, false, true, false, false]);
    }
}
