//! Workbook access: mapping between the on-disk .xlsx container and the
//! in-memory [`crate::model`] types.
//!
//! Built on `umya-spreadsheet` for read-modify-write access. The source
//! workbook is lifted into the model once and only read. The output
//! workbook is kept loaded as a [`Workbook`]: the engine computes the
//! transfer on the lifted model, and [`Workbook::apply_transfer`] mirrors
//! the result back onto the loaded container, starting the output sheet as
//! a worksheet-level clone of the template so column widths, fonts, fills
//! and every other piece of container state the model does not carry
//! survive the run. Untouched sheets are never rebuilt.

use crate::error::{SheetError, SheetResult};
use crate::model::{Anchor, AutoFilter, CellRange, CellValue, Document, Sheet};
use std::path::{Path, PathBuf};
use umya_spreadsheet::{reader, writer, Cell, CellRawValue, SheetView, Spreadsheet, Worksheet};

/// A workbook held open for in-place modification.
#[derive(Debug)]
pub struct Workbook {
    book: Spreadsheet,
    path: PathBuf,
}

impl Workbook {
    /// Open a workbook for read-modify-write access.
    ///
    /// Returns [`SheetError::DocumentNotFound`] when the path does not
    /// resolve to a readable workbook.
    pub fn open(path: &Path) -> SheetResult<Self> {
        let book = reader::xlsx::read(path)
            .map_err(|_| SheetError::DocumentNotFound(path.to_path_buf()))?;
        Ok(Self {
            book,
            path: path.to_path_buf(),
        })
    }

    /// Lift the loaded workbook into the in-memory model.
    pub fn document(&self) -> Document {
        lift_document(&self.book)
    }

    /// Mirror a finished transfer onto the loaded workbook.
    ///
    /// The output sheet is created as a worksheet-level clone of the
    /// template (replacing any existing sheet of that name), then receives
    /// exactly the engine's mutations from the finished model sheet: the
    /// pasted region's values, the truncation below the paste region, the
    /// region's row heights, the auto-filter range and the gridline flag.
    /// Everything else on the clone, and every other sheet, keeps its
    /// container state untouched.
    pub fn apply_transfer(
        &mut self,
        template_name: &str,
        finished: &Sheet,
        region: CellRange,
        anchor: Anchor,
    ) -> SheetResult<()> {
        let template = self
            .book
            .get_sheet_by_name(template_name)
            .ok_or_else(|| SheetError::TemplateNotFound(template_name.to_string()))?;
        let mut clone = template.clone();
        clone.set_name(finished.name());

        let _ = self.book.remove_sheet_by_name(finished.name());
        let worksheet = self
            .book
            .add_sheet(clone)
            .map_err(|e| SheetError::Format(e.to_string()))?;

        for i in 0..region.height() {
            for j in 0..region.width() {
                let (row, col) = (anchor.row + i, anchor.col + j);
                let cell = worksheet.get_cell_mut((col, row));
                match finished.cell(row, col) {
                    Some(value) => write_value(cell, value),
                    // An absent source cell blanks the mapped template cell.
                    None => {
                        cell.set_value_string(String::new());
                    }
                }
            }
        }

        let last_paste_row = anchor.row + region.height() - 1;
        let highest_row = worksheet.get_highest_row();
        if highest_row > last_paste_row {
            worksheet.remove_row(&(last_paste_row + 1), &(highest_row - last_paste_row));
        }

        for i in 0..region.height() {
            let row = anchor.row + i;
            if let Some(height) = finished.row_height(row) {
                worksheet.get_row_dimension_mut(&row).set_height(height);
            }
        }

        if let Some(filter) = &finished.auto_filter {
            worksheet.set_auto_filter(filter.range.clone());
        }

        if !finished.show_grid_lines {
            hide_worksheet_gridlines(worksheet);
        }

        Ok(())
    }

    /// Write the workbook back to the path it was opened from.
    pub fn save(&self) -> SheetResult<()> {
        writer::xlsx::write(&self.book, &self.path).map_err(|e| SheetError::Persistence {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Open a workbook and lift it into the in-memory model, read-only.
///
/// Returns [`SheetError::DocumentNotFound`] when the path does not resolve
/// to a readable workbook.
pub fn load_document(path: &Path) -> SheetResult<Document> {
    let book =
        reader::xlsx::read(path).map_err(|_| SheetError::DocumentNotFound(path.to_path_buf()))?;
    Ok(lift_document(&book))
}

/// Materialize a model document as a fresh workbook at `path`.
///
/// Carries what the model carries: values, row heights, the auto-filter
/// range and gridline visibility. Used to create workbooks from scratch;
/// in-place modification goes through [`Workbook`].
pub fn save_document(document: &Document, path: &Path) -> SheetResult<()> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    for sheet in document.sheets() {
        let worksheet = book
            .new_sheet(sheet.name())
            .map_err(|e| SheetError::Format(e.to_string()))?;

        for (row, col, value) in sheet.cells() {
            write_value(worksheet.get_cell_mut((col, row)), value);
        }

        for (row, height) in sheet.row_heights() {
            worksheet.get_row_dimension_mut(&row).set_height(height);
        }

        if let Some(filter) = &sheet.auto_filter {
            worksheet.set_auto_filter(filter.range.clone());
        }

        if !sheet.show_grid_lines {
            hide_worksheet_gridlines(worksheet);
        }
    }

    writer::xlsx::write(&book, path).map_err(|e| SheetError::Persistence {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn lift_document(book: &Spreadsheet) -> Document {
    let mut document = Document::new();
    for worksheet in book.get_sheet_collection() {
        let mut sheet = Sheet::new(worksheet.get_name());

        for cell in worksheet.get_cell_collection() {
            if cell.get_value().is_empty() {
                continue;
            }
            let coordinate = cell.get_coordinate();
            let row = *coordinate.get_row_num();
            let col = *coordinate.get_col_num();
            sheet.set_cell(row, col, lift_value(cell));
        }

        for row in worksheet.get_row_dimensions() {
            sheet.set_row_height(*row.get_row_num(), *row.get_height());
        }

        if let Some(filter) = worksheet.get_auto_filter() {
            sheet.auto_filter = Some(AutoFilter {
                range: filter.get_range().get_range(),
                // The container library models the filter range only;
                // per-column criteria live in the in-memory model.
                columns: Vec::new(),
            });
        }

        if let Some(view) = worksheet.get_sheets_views().get_sheet_view_list().first() {
            sheet.show_grid_lines = *view.get_show_grid_lines();
        }

        document.insert_sheet(sheet);
    }
    document
}

/// Lift a cell by its stored data type. A text cell whose content happens
/// to look numeric ("007") stays text.
fn lift_value(cell: &Cell) -> CellValue {
    match cell.get_raw_value() {
        CellRawValue::Numeric(n) => CellValue::Number(*n),
        CellRawValue::Bool(b) => CellValue::Bool(*b),
        CellRawValue::String(s) => CellValue::Str(s.to_string()),
        raw => CellValue::Str(raw.to_string()),
    }
}

fn write_value(cell: &mut Cell, value: &CellValue) {
    match value {
        CellValue::Str(s) => {
            cell.set_value_string(s.clone());
        }
        CellValue::Number(n) => {
            cell.set_value_number(*n);
        }
        CellValue::Bool(b) => {
            cell.set_value_bool(*b);
        }
    }
}

fn hide_worksheet_gridlines(worksheet: &mut Worksheet) {
    let views = worksheet.get_sheet_views_mut().get_sheet_view_list_mut();
    if views.is_empty() {
        views.push(SheetView::default());
    }
    views[0].set_show_grid_lines(false);
}
