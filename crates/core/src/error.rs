use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while inspecting a workbook
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("No spreadsheet file specified")]
    MissingFileArgument,

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read workbook: {0}")]
    Decode(#[from] calamine::XlsxError),

    #[error("Sheet \"{name}\" not found. Available sheets: {}", .available.join(", "))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectError>;
