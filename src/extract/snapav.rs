//! SnapAV price lists, pre-filtered to the Power product line.

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::types::{Cell, NormalizedRow};

use super::cell;

const MANUFACTURER: &str = "SnapAV";

const SHEETS: [&str; 1] = ["Sheet 1"];

/// Rows of the wanted product line are tagged exactly this in column A.
const TYPE_LITERAL: &str = "Power";

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
    for row in rows {
        let tag = cell(row, 0);
        if tag.to_string() != TYPE_LITERAL {
            continue;
        }
        out.push(NormalizedRow {
            manufacturer: MANUFACTURER,
            category: tag,
            part_number: cell(row, 1),
            description: cell(row, 2),
            list_price: cell(row, 9),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_util::{num, text};
    use pretty_assertions::assert_eq;

    fn power_row() -> Vec<Cell> {
        vec![
            text("Power"),
            text("WB-800-IPVM-12"),
            text("12-outlet IP power strip"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            num(649.95),
        ]
    }

    #[test]
    fn only_exact_power_rows_are_emitted() {
        let rows = vec![
            power_row(),
            vec![text("power"), text("lowercase tag")],
            vec![text("Powered Speakers"), text("not an exact match")],
            vec![text("Lighting"), text("other line")],
        ];

        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].manufacturer, "SnapAV");
        assert_eq!(out[0].category, text("Power"));
        assert_eq!(out[0].part_number, text("WB-800-IPVM-12"));
        assert_eq!(out[0].description, text("12-outlet IP power strip"));
        assert_eq!(out[0].list_price, num(649.95));
    }

    #[test]
    fn short_rows_read_blank_past_their_end() {
        // No column J at all: the price comes out empty rather than
        // shifting columns.
        let rows = vec![vec![text("Power"), text("PS-5V"), text("5V supply")]];

        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].list_price, Cell::Empty);
    }
}
