//! Template sheet duplication.

use crate::error::{SheetError, SheetResult};
use crate::model::{Document, Sheet};

/// Clone the template sheet under a new name and insert it into the
/// document.
///
/// Any existing sheet named `output_name` is removed first, so re-running a
/// transfer against the same document yields exactly one sheet of that name.
/// The clone carries the template's cell values, row heights and auto-filter
/// configuration; the template itself is left untouched.
///
/// Returns the inserted working sheet, or [`SheetError::TemplateNotFound`]
/// when the template is absent.
pub fn duplicate_sheet<'a>(
    document: &'a mut Document,
    template_name: &str,
    output_name: &str,
) -> SheetResult<&'a mut Sheet> {
    let template = document
        .sheet_by_name(template_name)
        .ok_or_else(|| SheetError::TemplateNotFound(template_name.to_string()))?;

    let mut copy = template.clone();
    copy.set_name(output_name);
    // A filter column with no recorded values still marks the column as
    // filterable; the clone keeps such entries as-is.
    copy.auto_filter = template.auto_filter.clone();

    document.remove_sheet(output_name);
    Ok(document.insert_sheet(copy))
}
