//! Core data model: untyped cell values and the normalized master row.

use std::fmt;

use calamine::Data;

/// Column headers of the master sheet, in output order.
pub const MASTER_HEADER: [&str; 5] = [
    "Manufacturer",
    "Type",
    "Part Number",
    "Description",
    "List Price",
];

/// A single untyped spreadsheet value.
///
/// Source rows carry whatever the vendor put in the cell; nothing is
/// validated or coerced beyond the string form used for filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Whitespace-separated tokens of the string form.
    pub fn tokens(&self) -> Vec<String> {
        self.to_string()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
            Data::Empty => Cell::Empty,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
            // Blank cells stringify to the marker the vendor filter lists
            // carry to exclude them.
            Cell::Empty => f.write_str("None"),
        }
    }
}

/// One row of the master sheet. Produced only by the vendor extractors,
/// consumed only by the writer; order in the aggregated sequence is the
/// only identity it has.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub manufacturer: &'static str,
    pub category: Cell,
    pub part_number: Cell,
    pub description: Cell,
    pub list_price: Cell,
}
