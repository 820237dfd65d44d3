// src/export/model.rs

use crate::core::summary::rounded_percent;
use crate::errors::{AppError, AppResult};
use crate::export::collate::compare_names;
use crate::export::labels::Labels;
use crate::models::{AttendanceArchive, DateKey};
use std::collections::{BTreeMap, HashMap};

/// One student's line in the pivoted sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRow {
    pub no: usize,
    pub name: String,
    /// One flag per sheet date, same order as [`AttendanceSheet::dates`].
    /// A day the student was not on the roster counts as absent.
    pub days: Vec<bool>,
    pub rate: u32,
}

/// Wide attendance table: one row per student name, one column per day.
#[derive(Clone, Debug)]
pub struct AttendanceSheet {
    pub labels: Labels,
    pub dates: Vec<DateKey>,
    pub rows: Vec<StudentRow>,
}

/// A single cell value, kept typed so backends can write numbers as numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Number(u64),
    Text(String),
}

impl Cell {
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl AttendanceSheet {
    /// Pivot every stored day into one table.
    ///
    /// Students are matched across days by name; ids only mean something
    /// within a single day.
    pub fn build(archive: &AttendanceArchive, labels: Labels) -> AppResult<Self> {
        let dates = archive.date_keys();
        if dates.is_empty() {
            return Err(AppError::EmptyArchive);
        }

        let mut by_name: HashMap<&str, BTreeMap<DateKey, bool>> = HashMap::new();
        for (date, roster) in archive.iter() {
            for student in roster.students() {
                if student.name.is_empty() {
                    continue;
                }
                // later duplicates in the same roster win
                by_name
                    .entry(student.name.as_str())
                    .or_default()
                    .insert(*date, student.present);
            }
        }

        let mut names: Vec<&str> = by_name.keys().copied().collect();
        names.sort_by(|a, b| compare_names(a, b));

        let rows = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let record = &by_name[name];
                let days: Vec<bool> = dates
                    .iter()
                    .map(|d| record.get(d).copied().unwrap_or(false))
                    .collect();
                let present = days.iter().filter(|p| **p).count();

                StudentRow {
                    no: i + 1,
                    name: name.to_string(),
                    rate: rounded_percent(present, dates.len()),
                    days,
                }
            })
            .collect();

        Ok(Self {
            labels,
            dates,
            rows,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        let mut h = Vec::with_capacity(self.dates.len() + 3);
        h.push(self.labels.number.to_string());
        h.push(self.labels.name.to_string());
        h.extend(self.dates.iter().map(|d| d.to_string()));
        h.push(self.labels.rate.to_string());
        h
    }

    pub fn row_cells(&self, row: &StudentRow) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(row.days.len() + 3);
        cells.push(Cell::Number(row.no as u64));
        cells.push(Cell::Text(row.name.clone()));
        cells.extend(
            row.days
                .iter()
                .map(|p| Cell::Text(self.labels.mark(*p).to_string())),
        );
        cells.push(Cell::Number(u64::from(row.rate)));
        cells
    }

    /// Header row followed by one row per student.
    pub fn to_table(&self) -> Vec<Vec<Cell>> {
        let mut table = Vec::with_capacity(self.rows.len() + 1);
        table.push(self.headers().into_iter().map(Cell::Text).collect());
        table.extend(self.rows.iter().map(|r| self.row_cells(r)));
        table
    }
}
