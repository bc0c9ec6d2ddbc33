//! Master sheet output.

use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::SheetResult;
use crate::types::{Cell, NormalizedRow, MASTER_HEADER};

/// Write the master workbook: a single sheet holding the fixed header row
/// followed by every aggregated row, in order.
///
/// A run that produced no rows leaves no file behind: the header still
/// goes into the in-memory workbook, but the workbook is dropped without
/// saving. Returns whether the file was persisted.
pub fn write_master(path: &Path, rows: &[NormalizedRow]) -> SheetResult<bool> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in MASTER_HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let line = idx as u32 + 1;
        sheet.write_string(line, 0, row.manufacturer)?;
        write_cell(sheet, line, 1, &row.category)?;
        write_cell(sheet, line, 2, &row.part_number)?;
        write_cell(sheet, line, 3, &row.description)?;
        write_cell(sheet, line, 4, &row.list_price)?;
    }

    if rows.is_empty() {
        return Ok(false);
    }
    workbook.save(path)?;
    Ok(true)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> SheetResult<()> {
    match cell {
        Cell::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        Cell::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        Cell::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}
