//! Rectangular value transfer between sheets.

use crate::model::{Anchor, CellRange, Sheet};

/// Copy every cell of `range` from the source sheet onto `dest`, anchored
/// at `anchor`, in row-major order.
///
/// Only values move: no styles, no formula re-evaluation. Destination cells
/// inside the mapped rectangle are overwritten unconditionally; a source
/// cell with no value clears the matching destination cell.
///
/// Returns the number of rows copied so downstream steps know the extent of
/// the transferred region without recomputing it.
pub fn transfer_values(source: &Sheet, dest: &mut Sheet, range: CellRange, anchor: Anchor) -> u32 {
    for i in 0..range.height() {
        for j in 0..range.width() {
            let value = source.cell(range.min_row + i, range.min_col + j).cloned();
            match value {
                Some(value) => dest.set_cell(anchor.row + i, anchor.col + j, value),
                None => dest.clear_cell(anchor.row + i, anchor.col + j),
            }
        }
    }
    range.height()
}
