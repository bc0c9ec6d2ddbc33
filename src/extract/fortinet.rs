//! Fortinet price lists: one sheet per product family, the sheet name is
//! the product type. The part-number column doubles as the row marker.

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::filter;
use crate::types::{Cell, NormalizedRow};

use super::cell;

const MANUFACTURER: &str = "Fortinet";

const SHEETS: [&str; 2] = ["FortiGate", "Wireless Products"];

/// Tokens marking caption rows, note rows, and formula artifacts.
const ROW_FILTERS: [&str; 5] = ["None", "SKU", "PRMA", "Requires", "HYPERLINK"];

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
        if !filter::passes(&ROW_FILTERS, cell(row, 1).tokens()) {
            continue;
        }
        out.push(NormalizedRow {
            manufacturer: MANUFACTURER,
            category: Cell::Text(sheet.to_owned()),
            part_number: cell(row, 1),
            description: cell(row, 2),
            list_price: cell(row, 4),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_util::{num, text};
    use pretty_assertions::assert_eq;

    #[test]
    fn product_rows_map_onto_the_master_schema() {
        let rows = vec![vec![
            Cell::Empty,
            text("FG-60F"),
            text("FortiGate 60F firewall"),
            Cell::Empty,
            num(750.0),
        ]];
        let mut out = Vec::new();
        scan_sheet("FortiGate", &rows, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].manufacturer, "Fortinet");
        assert_eq!(out[0].category, text("FortiGate"));
        assert_eq!(out[0].part_number, text("FG-60F"));
        assert_eq!(out[0].description, text("FortiGate 60F firewall"));
        assert_eq!(out[0].list_price, num(750.0));
    }

    #[test]
    fn caption_and_blank_rows_are_skipped() {
        let rows = vec![
            vec![Cell::Empty, text("SKU and pricing"), text(""), Cell::Empty],
            vec![Cell::Empty, Cell::Empty, text("note"), Cell::Empty],
            vec![Cell::Empty, text("Requires FC-10 license")],
        ];
        let mut out = Vec::new();
        scan_sheet("FortiGate", &rows, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn the_filter_applies_to_tokens_of_the_part_column_only() {
        // "SKU" elsewhere in the row does not drop it.
        let rows = vec![vec![
            Cell::Empty,
            text("FAP-231F"),
            text("Indoor AP, replaces SKU FAP-221E"),
            Cell::Empty,
            num(495.0),
        ]];
        let mut out = Vec::new();
        scan_sheet("Wireless Products", &rows, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, text("Wireless Products"));
    }
}
