//! Mastersheet - vendor price-list consolidation
//!
//! This library reads per-vendor `.xlsx` price lists (Aruba, Cradlepoint,
//! Fortinet, Meraki, SnapAV), applies each vendor's hard-coded extraction
//! rules, and writes one normalized master sheet with the columns
//! Manufacturer, Type, Part Number, Description, List Price.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! mastersheet::cli::compile(
//!     PathBuf::from("master.xlsx"),
//!     vec![PathBuf::from("pricelists/")],
//!     false,
//! )?;
//! # Ok::<(), mastersheet::SheetError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod extract;
pub mod filter;
pub mod types;
pub mod vendor;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use types::{Cell, NormalizedRow, MASTER_HEADER};
pub use vendor::Vendor;
