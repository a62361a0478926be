//! Gridline visibility.

use crate::error::SheetResult;
use crate::model::Sheet;

/// Turn off gridline rendering for the sheet.
///
/// Last cosmetic step before the document is persisted. The result is
/// fallible so the orchestrator can log a distinct event before propagating
/// a failure; on the in-memory model the flag itself always applies, and a
/// rejection by the container format surfaces from the save step as
/// [`crate::error::SheetError::Format`].
pub fn hide_gridlines(sheet: &mut Sheet) -> SheetResult<()> {
    sheet.show_grid_lines = false;
    Ok(())
}
