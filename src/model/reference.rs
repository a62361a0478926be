//! A1-style cell references: single anchors ("B15") and ranges ("C12:E19").

use crate::error::{SheetError, SheetResult};

/// A single cell position, 1-based on both axes.
///
/// Used as the top-left corner at which a transferred block is pasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub col: u32,
    pub row: u32,
}

impl Anchor {
    /// Parse a cell reference like `B15`.
    pub fn parse(reference: &str) -> SheetResult<Self> {
        let (col, row) = split_cell(reference)?;
        Ok(Self { col, row })
    }
}

/// An axis-aligned rectangular region, 1-based, inclusive on both ends.
///
/// Non-empty by construction: parsing rejects ranges where max < min on
/// either axis, so width and height are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min_col: u32,
    pub min_row: u32,
    pub max_col: u32,
    pub max_row: u32,
}

impl CellRange {
    /// Parse a range expression like `C12:E19`.
    pub fn parse(expression: &str) -> SheetResult<Self> {
        let (start, end) = expression
            .split_once(':')
            .ok_or_else(|| SheetError::Reference(expression.to_string()))?;
        let (min_col, min_row) = split_cell(start)?;
        let (max_col, max_row) = split_cell(end)?;
        if min_col > max_col || min_row > max_row {
            return Err(SheetError::Reference(expression.to_string()));
        }
        Ok(Self {
            min_col,
            min_row,
            max_col,
            max_row,
        })
    }

    /// Number of columns spanned.
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows spanned.
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }
}

/// Split `C12` into (column number, row number).
fn split_cell(cell: &str) -> SheetResult<(u32, u32)> {
    let cell = cell.trim();
    let split = cell
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| SheetError::Reference(cell.to_string()))?;
    let (letters, digits) = cell.split_at(split);
    let col = column_index(letters).ok_or_else(|| SheetError::Reference(cell.to_string()))?;
    let row: u32 = digits
        .parse()
        .map_err(|_| SheetError::Reference(cell.to_string()))?;
    if row == 0 {
        return Err(SheetError::Reference(cell.to_string()));
    }
    Ok((col, row))
}

/// Convert column letters to a 1-based index (`A` → 1, `AA` → 27).
/// Rejects tokens whose index would not fit a `u32`.
fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index)
}

/// Convert a 1-based column index back to letters (`1` → `A`, `27` → `AA`).
pub fn column_letter(mut index: u32) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        index = (index - 1) / 26;
    }
    letters.iter().rev().collect()
}
