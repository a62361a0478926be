//! Workbook adapter tests: save a model document to a real .xlsx file and
//! load it back.

use sheetforge::model::{AutoFilter, CellValue, Document, Sheet};
use sheetforge::xlsx;
use tempfile::TempDir;

#[test]
fn values_round_trip_with_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.xlsx");

    let mut sheet = Sheet::new("Data");
    sheet.set_cell(1, 1, CellValue::Str("plain text".into()));
    sheet.set_cell(1, 2, CellValue::Str("with\nbreak".into()));
    sheet.set_cell(2, 1, CellValue::Number(12.5));
    sheet.set_cell(2, 2, CellValue::Number(-3.0));
    sheet.set_cell(3, 1, CellValue::Bool(true));
    sheet.set_cell(3, 2, CellValue::Bool(false));
    let mut doc = Document::new();
    doc.insert_sheet(sheet);

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();
    let data = loaded.sheet_by_name("Data").unwrap();

    assert_eq!(data.cell(1, 1), Some(&CellValue::Str("plain text".into())));
    assert_eq!(data.cell(1, 2), Some(&CellValue::Str("with\nbreak".into())));
    assert_eq!(data.cell(2, 1), Some(&CellValue::Number(12.5)));
    assert_eq!(data.cell(2, 2), Some(&CellValue::Number(-3.0)));
    assert_eq!(data.cell(3, 1), Some(&CellValue::Bool(true)));
    assert_eq!(data.cell(3, 2), Some(&CellValue::Bool(false)));
}

#[test]
fn numeric_looking_text_stays_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("text.xlsx");

    let mut sheet = Sheet::new("Data");
    sheet.set_cell(1, 1, CellValue::Str("007".into()));
    sheet.set_cell(1, 2, CellValue::Str("12".into()));
    sheet.set_cell(1, 3, CellValue::Str("1e5".into()));
    sheet.set_cell(2, 1, CellValue::Number(7.0));
    let mut doc = Document::new();
    doc.insert_sheet(sheet);

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();
    let data = loaded.sheet_by_name("Data").unwrap();

    // Text content that parses as a number must come back as text.
    assert_eq!(data.cell(1, 1), Some(&CellValue::Str("007".into())));
    assert_eq!(data.cell(1, 2), Some(&CellValue::Str("12".into())));
    assert_eq!(data.cell(1, 3), Some(&CellValue::Str("1e5".into())));
    assert_eq!(data.cell(2, 1), Some(&CellValue::Number(7.0)));
}

#[test]
fn row_heights_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("heights.xlsx");

    let mut sheet = Sheet::new("Sized");
    sheet.set_cell(1, 1, CellValue::Str("x".into()));
    sheet.set_row_height(1, 42.5);
    sheet.set_row_height(7, 15.0);
    let mut doc = Document::new();
    doc.insert_sheet(sheet);

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();
    let sized = loaded.sheet_by_name("Sized").unwrap();

    assert_eq!(sized.row_height(1), Some(42.5));
    assert_eq!(sized.row_height(7), Some(15.0));
}

#[test]
fn auto_filter_range_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filtered.xlsx");

    let mut sheet = Sheet::new("Filtered");
    sheet.set_cell(1, 1, CellValue::Str("header".into()));
    sheet.auto_filter = Some(AutoFilter {
        range: "A1:C1".into(),
        columns: Vec::new(),
    });
    let mut doc = Document::new();
    doc.insert_sheet(sheet);

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();
    let filter = loaded
        .sheet_by_name("Filtered")
        .unwrap()
        .auto_filter
        .as_ref()
        .unwrap()
        .clone();
    assert_eq!(filter.range, "A1:C1");
}

#[test]
fn gridline_flag_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gridlines.xlsx");

    let mut hidden = Sheet::new("Hidden");
    hidden.set_cell(1, 1, CellValue::Str("x".into()));
    hidden.show_grid_lines = false;
    let mut visible = Sheet::new("Visible");
    visible.set_cell(1, 1, CellValue::Str("y".into()));
    let mut doc = Document::new();
    doc.insert_sheet(hidden);
    doc.insert_sheet(visible);

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();

    assert!(!loaded.sheet_by_name("Hidden").unwrap().show_grid_lines);
    assert!(loaded.sheet_by_name("Visible").unwrap().show_grid_lines);
}

#[test]
fn sheet_order_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ordered.xlsx");

    let mut doc = Document::new();
    for name in ["First", "Second", "Third"] {
        let mut sheet = Sheet::new(name);
        sheet.set_cell(1, 1, CellValue::Str(name.into()));
        doc.insert_sheet(sheet);
    }

    xlsx::save_document(&doc, &path).unwrap();
    let loaded = xlsx::load_document(&path).unwrap();
    let names: Vec<&str> = loaded.sheets().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}
