//! Meraki "Report" exports: Cisco product rows grouped under non-Cisco
//! section header rows, with a two-row preamble before the data.

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::filter;
use crate::types::{Cell, NormalizedRow};

use super::cell;

const MANUFACTURER: &str = "Meraki";

const SHEETS: [&str; 1] = ["Report"];

/// Every product row spells out "Cisco" in column B; section headers
/// never do.
const ROW_FILTERS: [&str; 1] = ["Cisco"];

const PREAMBLE_ROWS: usize = 2;

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
    for row in rows.iter().skip(PREAMBLE_ROWS) {
        let section = cell(row, 1);
        if filter::passes(&ROW_FILTERS, [section.to_string()]) {
            // Section header: capture the type, emit nothing.
            current_type = Cell::Text(section.to_string());
            continue;
        }
        out.push(NormalizedRow {
            manufacturer: MANUFACTURER,
            category: current_type.clone(),
            part_number: cell(row, 2),
            description: cell(row, 3),
            list_price: cell(row, 5),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_util::{num, text};
    use pretty_assertions::assert_eq;

    fn preamble() -> Vec<Vec<Cell>> {
        vec![
            vec![text("Price list export")],
            vec![text("Generated 2024-07-01")],
        ]
    }

    #[test]
    fn section_header_rows_are_captured_but_not_emitted() {
        let mut rows = preamble();
        rows.push(vec![Cell::Empty, text("Wireless")]);

        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn cisco_rows_emit_with_the_captured_type() {
        let mut rows = preamble();
        rows.push(vec![Cell::Empty, text("Wireless")]);
        rows.push(vec![
            Cell::Empty,
            text("Cisco Meraki MR46"),
            text("MR46-HW"),
            text("Wi-Fi 6 access point"),
            Cell::Empty,
            num(1395.0),
        ]);

        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].manufacturer, "Meraki");
        assert_eq!(out[0].category, text("Wireless"));
        assert_eq!(out[0].part_number, text("MR46-HW"));
        assert_eq!(out[0].description, text("Wi-Fi 6 access point"));
        assert_eq!(out[0].list_price, num(1395.0));
    }

    #[test]
    fn a_later_header_retypes_subsequent_rows() {
        let mut rows = preamble();
        rows.push(vec![Cell::Empty, text("Wireless")]);
        rows.push(vec![
            Cell::Empty,
            text("Cisco Meraki MR46"),
            text("MR46-HW"),
            text("AP"),
            Cell::Empty,
            num(1395.0),
        ]);
        rows.push(vec![Cell::Empty, text("Security Appliances")]);
        rows.push(vec![
            Cell::Empty,
            text("Cisco Meraki MX64"),
            text("MX64-HW"),
            text("Router/firewall"),
            Cell::Empty,
            num(595.0),
        ]);

        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].category, text("Wireless"));
        assert_eq!(out[1].category, text("Security Appliances"));
    }

    #[test]
    fn the_preamble_rows_are_never_read() {
        // A "Cisco" mention in the preamble must not emit anything.
        let rows = vec![
            vec![Cell::Empty, text("Cisco Systems price list")],
            vec![Cell::Empty, text("Generated 2024-07-01")],
        ];
        let mut out = Vec::new();
        scan_sheet(&rows, &mut out);
        assert!(out.is_empty());
    }
}
