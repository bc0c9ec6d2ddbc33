//! Workbook I/O collaborators.
//!
//! - Reader: vendor price lists via calamine
//! - Writer: the master sheet via rust_xlsxwriter

mod reader;
mod writer;

pub use reader::SourceWorkbook;
pub use writer::write_master;
