//! Vendor classification and extraction dispatch.

use std::fmt;
use std::path::Path;

use crate::error::SheetResult;
use crate::excel::SourceWorkbook;
use crate::extract;
use crate::types::NormalizedRow;

/// The vendors this tool understands, in filename-match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Aruba,
    Cradlepoint,
    Fortinet,
    Meraki,
    SnapAv,
}

impl Vendor {
    pub const ALL: [Vendor; 5] = [
        Vendor::Aruba,
        Vendor::Cradlepoint,
        Vendor::Fortinet,
        Vendor::Meraki,
        Vendor::SnapAv,
    ];

    /// Classify an input file by its lower-cased base name; first matching
    /// vendor substring wins. `None` means the file is not a known
    /// vendor's list and the caller skips it without comment.
    pub fn classify(path: &Path) -> Option<Vendor> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        Vendor::ALL.into_iter().find(|v| name.contains(v.token()))
    }

    fn token(self) -> &'static str {
        match self {
            Vendor::Aruba => "aruba",
            Vendor::Cradlepoint => "cradlepoint",
            Vendor::Fortinet => "fortinet",
            Vendor::Meraki => "meraki",
            Vendor::SnapAv => "snapav",
        }
    }

    /// Manufacturer name as written to the master sheet.
    pub fn name(self) -> &'static str {
        match self {
            Vendor::Aruba => "Aruba",
            Vendor::Cradlepoint => "Cradlepoint",
            Vendor::Fortinet => "Fortinet",
            Vendor::Meraki => "Meraki",
            Vendor::SnapAv => "SnapAV",
        }
    }

    /// Run this vendor's extractor over an opened workbook.
    pub fn extract(self, book: &mut SourceWorkbook) -> SheetResult<Vec<NormalizedRow>> {
        match self {
            Vendor::Aruba => extract::aruba::extract(book),
            Vendor::Cradlepoint => extract::cradlepoint::extract(book),
            Vendor::Fortinet => extract::fortinet::extract(book),
            Vendor::Meraki => extract::meraki::extract(book),
            Vendor::SnapAv => extract::snapav::extract(book),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
