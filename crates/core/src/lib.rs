//! Core library for sheetlens
//!
//! Decodes spreadsheet workbooks (.xlsx/.xlsm) and normalizes them into a
//! structured JSON report: header-keyed records, per-column statistics and
//! workbook metadata, suitable for machine consumption.
//!
//! # Examples
//!
//! ## Inspecting a workbook file
//!
//! ```no_run
//! use sheetlens_core::{inspect_file, InspectOptions};
//! use std::path::Path;
//!
//! let options = InspectOptions::default().with_row_limit(10);
//! let report = inspect_file(Path::new("data.xlsx"), &options).unwrap();
//! println!("{}", report.to_json_string().unwrap());
//! ```
//!
//! ## Normalizing an in-memory grid
//!
//! ```
//! use sheetlens_core::{sheet_report, InspectOptions, Sheet};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Name", "Age"],
//!     vec!["Alice", "30"],
//!     vec!["Bob", "25"],
//! ]);
//!
//! let report = sheet_report(&sheet, &InspectOptions::default());
//! assert_eq!(report.headers, vec!["Name", "Age"]);
//! assert_eq!(report.row_count, 2);
//! ```

mod book;
mod cell;
mod error;
mod report;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value types.
pub use cell::{CellValue, ValueKind};
/// Re-export error types.
pub use error::{InspectError, Result};
/// Re-export report types and pipeline entry points.
pub use report::{
    build_report, derive_headers, inspect_file, select_sheets, sheet_report, ColumnStats,
    InspectOptions, Metadata, Record, Report, SheetReport,
};
/// Re-export sheet type.
pub use sheet::Sheet;
