use std::path::PathBuf;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input path not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("workbook read error: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
