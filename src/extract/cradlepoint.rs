//! Cradlepoint price lists: one flat "USA" sheet with category header
//! rows interleaved between product rows.

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::filter;
use crate::types::{Cell, NormalizedRow};

use super::cell;

const MANUFACTURER: &str = "Cradlepoint";

const SHEETS: [&str; 1] = ["USA"];

/// Part-number cells that mark caption, note, and blank rows.
const SKIP_PARTS: [&str; 3] = ["None", "Note", "Part Number"];

/// Known category names. A column B value mentioning one of these marks a
/// category header row; the value carries forward as the Type of the rows
/// under it.
const TYPE_NAMES: [&str; 23] = [
    "Routers",
    "Access Points",
    "LTE Adapters",
    "Performance Routers",
    "Virtual Router",
    "Mobile First Responder Packages",
    "Gateways",
    "FIPS",
    "NetCloud",
    "Threat Management",
    "Internet Security",
    "Feature Licenses",
    "Modems",
    "SIM-in-Box",
    "Antennas",
    "Cradlepoint Certified",
    "Power Supplies",
    "Miscellaneous",
    "COR Series Routers",
    "Accessories",
    "AER Series Routers",
    "Home Office",
    "M2M",
];

pub(crate) fn extract(book: &mut SourceWorkbook) -> SheetResult<Vec<NormalizedRow>> {
    let mut out = Vec::new();
    for name in book.sheet_names() {
        if !SHEETS.contains(&name.as_str()) {
            continue;
        }
        scan_sheet(&book.rows(&name)?, &mut out);
    }
    Ok(out)
}

fn scan_sheet(rows: &[Vec<Cell>], out: &mut Vec<NormalizedRow>) {
    let mut current_type = Cell::Empty;
    for row in rows {
        let part = cell(row, 3);
        if SKIP_PARTS.contains(&part.to_string().as_str()) {
            continue;
        }
        // A category name in column B retypes this row and everything
        // below it. The header row itself is still emitted, with the new
        // type already applied.
        if !filter::passes(&TYPE_NAMES, cell(row, 1).tokens()) {
            current_type = cell(row, 1);
        }
        out.push(NormalizedRow {
            manufacturer: MANUFACTURER,
            category: current_type.clone(),
            part_number: part,
            description: cell(row, 6),
            list_price: cell(row, 5),
        });
    }
}
