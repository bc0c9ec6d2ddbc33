//! Aruba price lists: one sheet per product family, the sheet name is the
//! product type.

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::filter;
use crate::types::{Cell, NormalizedRow};

use super::cell;

const MANUFACTURER: &str = "Aruba";

const SHEETS: [&str; 3] = ["Access Points", "Switches", "Central Licensing"];

/// Section headings and column captions that appear inline in the data,
/// plus the blank-cell marker.
const ROW_FILTERS: [&str; 6] = [
    "Indoor Access Points",
    "Mounting Brackets",
    "Outdoor Access Points",
    "Part Number",
    "Series",
    "None",
];

pub(crate) fn extract(book: &mut SourceWorkbook) -> SheetResult<Vec<NormalizedRow>> {
    let mut out = Vec::new();
    for name in book.sheet_names() {
        if !SHEETS.contains(&name.as_str()) {
            continue;
        }
        scan_sheet(&name, &book.rows(&name)?, &mut out);
    }
    Ok(out)
}

fn scan_sheet(sheet: &str, rows: &[Vec<Cell>], out: &mut Vec<NormalizedRow>) {
    for row in rows {
        if !filter::passes(&ROW_FILTERS, row.iter().map(|c| c.to_string())) {
            continue;
        }
        out.push(NormalizedRow {
            manufacturer: MANUFACTURER,
            category: Cell::Text(sheet.to_owned()),
            part_number: cell(row, 0),
            description: cell(row, 1),
            list_price: cell(row, 2),
        });
    }
}
