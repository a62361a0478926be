//! End-to-end transfer orchestration.
//!
//! Duplicate the template sheet, paste the source range, trim the sheet to
//! the pasted extent, recompute row heights, hide gridlines, save. The
//! engine runs on lifted in-memory documents; the finished result is then
//! mirrored onto the still-loaded output workbook so container formatting
//! survives, and the file is only written at the final save step — a
//! failure anywhere earlier leaves it in its pre-run state.

use crate::config::Config;
use crate::error::{SheetError, SheetResult};
use crate::ops;
use crate::xlsx;
use tracing::{error, info};

/// What a completed run did, for reporting at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_sheet: String,
    pub rows_transferred: u32,
    /// Final row of the pasted region; the sheet ends here after trimming.
    pub last_row: u32,
}

/// Execute the full transfer described by `config`.
pub fn run(config: &Config) -> SheetResult<RunSummary> {
    let range = config.copy_range()?;
    let anchor = config.paste_anchor()?;

    info!(path = %config.files.value_file.display(), "loading value document");
    let value_doc = xlsx::load_document(&config.files.value_file)?;
    let value_sheet = value_doc
        .sheet_by_name(&config.sheets.value_sheet)
        .ok_or_else(|| SheetError::SourceSheetNotFound(config.sheets.value_sheet.clone()))?;

    info!(path = %config.files.output_file.display(), "loading output document");
    let mut workbook = xlsx::Workbook::open(&config.files.output_file)?;
    let mut output_doc = workbook.document();

    info!(
        template = %config.sheets.template_sheet,
        output = %config.sheets.output_sheet,
        "duplicating template sheet"
    );
    let work_sheet = ops::duplicate_sheet(
        &mut output_doc,
        &config.sheets.template_sheet,
        &config.sheets.output_sheet,
    )?;

    info!(range = %config.copy_settings.copy_range, anchor = %config.copy_settings.paste_start, "transferring values");
    let rows_transferred = ops::transfer_values(value_sheet, work_sheet, range, anchor);

    info!("deleting rows below the paste region");
    ops::trim_below(work_sheet, anchor.row, rows_transferred);

    info!("adjusting row heights");
    ops::adjust_row_heights(work_sheet, range, anchor, &config.height_rule());

    info!("hiding gridlines");
    if let Err(e) = ops::hide_gridlines(work_sheet) {
        error!("failed to hide gridlines: {e}");
        return Err(e);
    }

    info!(path = %config.files.output_file.display(), "saving output document");
    workbook.apply_transfer(&config.sheets.template_sheet, work_sheet, range, anchor)?;
    workbook.save()?;

    Ok(RunSummary {
        output_sheet: config.sheets.output_sheet.clone(),
        rows_transferred,
        last_row: anchor.row + rows_transferred - 1,
    })
}

/// Validate a configuration against the documents it names, without
/// writing anything: both files must open and both named sheets must exist.
pub fn check(config: &Config) -> SheetResult<RunSummary> {
    let range = config.copy_range()?;
    let anchor = config.paste_anchor()?;

    let value_doc = xlsx::load_document(&config.files.value_file)?;
    if !value_doc.contains_sheet(&config.sheets.value_sheet) {
        return Err(SheetError::SourceSheetNotFound(
            config.sheets.value_sheet.clone(),
        ));
    }

    let output_doc = xlsx::load_document(&config.files.output_file)?;
    if !output_doc.contains_sheet(&config.sheets.template_sheet) {
        return Err(SheetError::TemplateNotFound(
            config.sheets.template_sheet.clone(),
        ));
    }

    Ok(RunSummary {
        output_sheet: config.sheets.output_sheet.clone(),
        rows_transferred: range.height(),
        last_row: anchor.row + range.height() - 1,
    })
}
