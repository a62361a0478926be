//! Trimming the destination sheet to the transferred extent.

use crate::model::Sheet;

/// Delete every row strictly below the end of the paste region.
///
/// The template may carry more rows than the actual payload; truncating at
/// `anchor_row + transferred_rows - 1` sizes the output to the real data.
/// Pure truncation: surviving rows keep their indices. No-op when the sheet
/// already ends at or above the paste region.
pub fn trim_below(sheet: &mut Sheet, anchor_row: u32, transferred_rows: u32) {
    let last_paste_row = anchor_row + transferred_rows - 1;
    if sheet.max_row() > last_paste_row {
        sheet.truncate_rows_below(last_paste_row);
    }
}
