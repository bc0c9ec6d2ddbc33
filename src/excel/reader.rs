//! Source workbook access.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

use crate::error::SheetResult;
use crate::types::Cell;

/// A read-only vendor workbook: named sheets, each an ordered sequence of
/// rows of untyped cells.
///
/// The vendor column contracts are absolute sheet coordinates, while
/// calamine ranges are relative to the first used cell; rows are padded
/// back out to column A (and leading blank rows restored) before the
/// extractors see them.
pub struct SourceWorkbook {
    book: Xlsx<BufReader<File>>,
}

impl SourceWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> SheetResult<Self> {
        let book: Xlsx<_> = open_workbook(path)?;
        Ok(Self { book })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.book.sheet_names().to_vec()
    }

    /// All rows of a sheet, in order, with absolute column indices.
    pub fn rows(&mut self, sheet: &str) -> SheetResult<Vec<Vec<Cell>>> {
        let range = self.book.worksheet_range(sheet)?;
        let (start_row, start_col) = match range.start() {
            Some((row, col)) => (row as usize, col as usize),
            None => return Ok(Vec::new()), // sheet has no used cells
        };

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row];
        for source in range.rows() {
            let mut row = vec![Cell::Empty; start_col];
            row.extend(source.iter().map(Cell::from));
            rows.push(row);
        }
        Ok(rows)
    }
}
