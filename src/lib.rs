//! SheetForge - template-sheet duplication and range transfer for Excel
//! workbooks.
//!
//! This library clones a template sheet inside an output workbook, pastes a
//! rectangular block of values from a separate source workbook, trims the
//! result to the pasted extent, recomputes row heights from embedded line
//! breaks, and hides gridlines before saving.
//!
//! # Example
//!
//! ```no_run
//! use sheetforge::config::Config;
//! use sheetforge::pipeline;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("transfer.yaml"))?;
//! let summary = pipeline::run(&config)?;
//!
//! println!("{} rows pasted into {}", summary.rows_transferred, summary.output_sheet);
//! # Ok::<(), sheetforge::error::SheetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod ops;
pub mod pipeline;
pub mod xlsx;

// Re-export commonly used types
pub use config::Config;
pub use error::{SheetError, SheetResult};
pub use model::{Anchor, CellRange, CellValue, Document, Sheet};
pub use pipeline::RunSummary;
