//! The transfer engine: sheet duplication, range transfer, trimming,
//! row-height adjustment and gridline handling.
//!
//! Every operation here works on the in-memory [`crate::model`] types and
//! performs no I/O, so each step is testable on hand-built documents.

pub mod duplicate;
pub mod gridlines;
pub mod heights;
pub mod transfer;
pub mod trim;

pub use duplicate::duplicate_sheet;
pub use gridlines::hide_gridlines;
pub use heights::{adjust_row_heights, HeightRule};
pub use transfer::transfer_values;
pub use trim::trim_below;
