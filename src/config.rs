//! Run configuration.
//!
//! A transfer is described by a YAML file grouping file paths, sheet names,
//! the copy range and the row-height settings. The configuration is built
//! once at the entry point and passed by parameter; no component reads
//! ambient state.
//!
//! ```yaml
//! files:
//!   value_file: source.xlsx
//!   output_file: report.xlsx
//! sheets:
//!   template_sheet: Template
//!   value_sheet: Results
//!   output_sheet: OutputSheet
//! copy_settings:
//!   copy_range: "C12:E19"
//!   paste_start: "B15"
//! row_height_settings:
//!   default_font_size: 10
//!   min_row_height: 15
//!   line_height_multiplier: 2.0
//! ```

use crate::error::SheetResult;
use crate::model::{Anchor, CellRange};
use crate::ops::HeightRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub files: Files,
    pub sheets: Sheets,
    pub copy_settings: CopySettings,
    #[serde(default)]
    pub row_height_settings: RowHeightSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Files {
    /// Workbook the values are copied from.
    pub value_file: PathBuf,
    /// Workbook holding the template sheet; overwritten in place.
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Sheets {
    /// Sheet in the output workbook used as the structural starting point.
    pub template_sheet: String,
    /// Sheet in the value workbook the range is read from.
    pub value_sheet: String,
    /// Name given to the duplicated sheet in the output workbook.
    pub output_sheet: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CopySettings {
    /// Range expression for the block to copy, e.g. "C12:E19".
    pub copy_range: String,
    /// Cell the block's top-left corner is pasted at, e.g. "B15".
    pub paste_start: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RowHeightSettings {
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,
    #[serde(default = "default_min_row_height")]
    pub min_row_height: f64,
    #[serde(default = "default_line_height_multiplier")]
    pub line_height_multiplier: f64,
}

fn default_font_size() -> f64 {
    10.0
}

fn default_min_row_height() -> f64 {
    15.0
}

fn default_line_height_multiplier() -> f64 {
    2.0
}

impl Default for RowHeightSettings {
    fn default() -> Self {
        Self {
            default_font_size: default_font_size(),
            min_row_height: default_min_row_height(),
            line_height_multiplier: default_line_height_multiplier(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> SheetResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the reference expressions parse. Sheet and file existence
    /// is checked when the documents are opened.
    pub fn validate(&self) -> SheetResult<()> {
        self.copy_range()?;
        self.paste_anchor()?;
        Ok(())
    }

    pub fn copy_range(&self) -> SheetResult<CellRange> {
        CellRange::parse(&self.copy_settings.copy_range)
    }

    pub fn paste_anchor(&self) -> SheetResult<Anchor> {
        Anchor::parse(&self.copy_settings.paste_start)
    }

    pub fn height_rule(&self) -> HeightRule {
        HeightRule {
            min_row_height: self.row_height_settings.min_row_height,
            default_font_size: self.row_height_settings.default_font_size,
            line_height_multiplier: self.row_height_settings.line_height_multiplier,
        }
    }
}
