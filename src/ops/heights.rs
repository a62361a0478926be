//! Row-height adjustment for the pasted region.

use crate::model::{Anchor, CellRange, Sheet};

/// Sizing parameters for [`adjust_row_heights`].
#[derive(Debug, Clone, Copy)]
pub struct HeightRule {
    /// Floor applied to every row, in points.
    pub min_row_height: f64,
    /// Font size assumed for a single line of text.
    pub default_font_size: f64,
    /// Points of row height per point of font size.
    pub line_height_multiplier: f64,
}

impl HeightRule {
    /// Height for a cell containing `line_count` logical lines.
    fn candidate(&self, line_count: usize) -> f64 {
        self.default_font_size * self.line_height_multiplier * line_count as f64
    }
}

/// Recompute the height of every destination row in the transferred region.
///
/// A row's height is the maximum over its cells of
/// `default_font_size * line_height_multiplier * line_count`, floored at
/// `min_row_height`; rows with no content in the region get exactly the
/// floor. Lines are counted by splitting the cell text on `\n`, so heights
/// track manually inserted line breaks, which spreadsheet auto-fit does not
/// handle reliably. Wrapping from column width is deliberately ignored.
pub fn adjust_row_heights(sheet: &mut Sheet, region: CellRange, anchor: Anchor, rule: &HeightRule) {
    for i in 0..region.height() {
        let row = anchor.row + i;
        let mut max_height = rule.min_row_height;
        for j in 0..region.width() {
            if let Some(value) = sheet.cell(row, anchor.col + j) {
                let line_count = value.to_text().split('\n').count();
                max_height = max_height.max(rule.candidate(line_count));
            }
        }
        sheet.set_row_height(row, max_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    const RULE: HeightRule = HeightRule {
        min_row_height: 15.0,
        default_font_size: 10.0,
        line_height_multiplier: 2.0,
    };

    fn region_1x3() -> (CellRange, Anchor) {
        (
            CellRange::parse("A1:C1").unwrap(),
            Anchor::parse("A1").unwrap(),
        )
    }

    #[test]
    fn empty_row_gets_the_floor() {
        let mut sheet = Sheet::new("s");
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        assert_eq!(sheet.row_height(1), Some(15.0));
    }

    #[test]
    fn single_line_cell_scales_with_font_size() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 1, CellValue::Str("one line".into()));
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        // 10 * 2.0 * 1 = 20, above the 15pt floor.
        assert_eq!(sheet.row_height(1), Some(20.0));
    }

    #[test]
    fn line_breaks_stack_the_height() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 1, CellValue::Str("a\nb\nc".into()));
        sheet.set_cell(1, 2, CellValue::Str("short".into()));
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        // Tallest cell wins: 10 * 2.0 * 3 = 60.
        assert_eq!(sheet.row_height(1), Some(60.0));
    }

    #[test]
    fn empty_string_counts_as_one_line() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 1, CellValue::Str(String::new()));
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        assert_eq!(sheet.row_height(1), Some(20.0));
    }

    #[test]
    fn overwrites_prior_template_height() {
        let mut sheet = Sheet::new("s");
        sheet.set_row_height(1, 99.0);
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        assert_eq!(sheet.row_height(1), Some(15.0));
    }

    #[test]
    fn cells_outside_the_region_do_not_count() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 4, CellValue::Str("a\nb\nc\nd".into()));
        let (region, anchor) = region_1x3();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        assert_eq!(sheet.row_height(1), Some(15.0));
    }

    #[test]
    fn every_region_row_is_sized() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(15, 2, CellValue::Str("x\ny".into()));
        let region = CellRange::parse("C12:E19").unwrap();
        let anchor = Anchor::parse("B15").unwrap();
        adjust_row_heights(&mut sheet, region, anchor, &RULE);
        assert_eq!(sheet.row_height(15), Some(40.0));
        for row in 16..=22 {
            assert_eq!(sheet.row_height(row), Some(15.0), "row {row}");
        }
        assert_eq!(sheet.row_height(23), None);
    }
}
