//! In-memory workbook model.
//!
//! A `Document` is an ordered collection of uniquely named `Sheet`s. A
//! `Sheet` is a sparse (row, column) → value map plus the per-row heights,
//! the optional auto-filter descriptor and the gridline flag. Reading and
//! writing the .xlsx container lives in [`crate::xlsx`]; everything here is
//! plain owned data so the transfer engine can be tested without touching
//! the filesystem.

pub mod reference;

pub use reference::{column_letter, Anchor, CellRange};

use std::collections::BTreeMap;

/// A scalar cell value. Absent cells are simply absent from the sheet map.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Textual rendering, as used for line counting during height
    /// adjustment.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Str(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
        }
    }
}

/// One filterable column of an auto-filter: the 0-based column id within
/// the filter range plus the allowed values. An empty value list marks the
/// column as filterable without constraining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterColumn {
    pub col_id: u32,
    pub values: Vec<String>,
}

/// Auto-filter metadata: the filtered range and its per-column criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFilter {
    pub range: String,
    pub columns: Vec<FilterColumn>,
}

/// A single worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    /// Sparse cell storage keyed by (row, column), both 1-based.
    cells: BTreeMap<(u32, u32), CellValue>,
    /// Explicit row heights in points, keyed by 1-based row.
    row_heights: BTreeMap<u32, f64>,
    pub auto_filter: Option<AutoFilter>,
    pub show_grid_lines: bool,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            row_heights: BTreeMap::new(),
            auto_filter: None,
            show_grid_lines: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    pub fn set_cell(&mut self, row: u32, col: u32, value: CellValue) {
        self.cells.insert((row, col), value);
    }

    pub fn clear_cell(&mut self, row: u32, col: u32) {
        self.cells.remove(&(row, col));
    }

    /// Iterate populated cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> {
        self.cells.iter().map(|(&(row, col), v)| (row, col, v))
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(&row, &h)| (row, h))
    }

    /// Highest row carrying a value or an explicit height; 0 for an empty
    /// sheet.
    pub fn max_row(&self) -> u32 {
        let cell_max = self
            .cells
            .keys()
            .next_back()
            .map(|&(row, _)| row)
            .unwrap_or(0);
        let height_max = self
            .row_heights
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0);
        cell_max.max(height_max)
    }

    /// Delete every row strictly below `last_row`. Pure truncation: nothing
    /// shifts.
    pub fn truncate_rows_below(&mut self, last_row: u32) {
        self.cells.retain(|&(row, _), _| row <= last_row);
        self.row_heights.retain(|&row, _| row <= last_row);
    }
}

/// An ordered collection of sheets with unique names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_by_name_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name() == name)
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheet_by_name(name).is_some()
    }

    /// Append a sheet, replacing any existing sheet of the same name in
    /// place. Returns the inserted sheet.
    pub fn insert_sheet(&mut self, sheet: Sheet) -> &mut Sheet {
        if let Some(pos) = self.sheets.iter().position(|s| s.name() == sheet.name()) {
            self.sheets[pos] = sheet;
            &mut self.sheets[pos]
        } else {
            self.sheets.push(sheet);
            self.sheets.last_mut().expect("just pushed")
        }
    }

    /// Remove a sheet by name; true when one was removed.
    pub fn remove_sheet(&mut self, name: &str) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|s| s.name() != name);
        self.sheets.len() != before
    }
}
