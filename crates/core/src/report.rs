//! Grid normalization, column statistics and report assembly.
//!
//! Turns decoded sheets into header-keyed records plus per-column
//! statistics, and composes the final output document.

use crate::book::Book;
use crate::cell::{CellValue, ValueKind};
use crate::error::{InspectError, Result};
use crate::sheet::Sheet;
use chrono::{SecondsFormat, Utc};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Number of sample values retained per column in statistics.
const SAMPLE_SIZE: usize = 3;

/// Effective processing options for one inspection run.
///
/// Serializes as the `options` block echoed in report metadata; the
/// output-formatting flag is a presentation concern and is not echoed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectOptions {
    pub target_sheet: Option<String>,
    pub headers_only: bool,
    pub row_limit: Option<usize>,
    #[serde(skip)]
    pub raw_output: bool,
}

impl InspectOptions {
    /// Restrict processing to a single sheet
    #[must_use]
    pub fn with_sheet<S: Into<String>>(mut self, name: S) -> Self {
        self.target_sheet = Some(name.into());
        self
    }

    /// Return structure only, without materializing row data
    #[must_use]
    pub fn headers_only(mut self, headers_only: bool) -> Self {
        self.headers_only = headers_only;
        self
    }

    /// Cap the number of records returned per sheet
    #[must_use]
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = Some(limit);
        self
    }

    /// Emit compact single-line JSON instead of pretty-printed
    #[must_use]
    pub fn raw_output(mut self, raw: bool) -> Self {
        self.raw_output = raw;
        self
    }
}

/// One data row as a header-keyed mapping.
///
/// Duplicate headers collapse to one key; the later column's value wins
/// while the key keeps its first position.
pub type Record = IndexMap<String, CellValue>;

/// Per-column statistics over the full (unlimited) data-row set
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    pub non_empty_count: usize,
    pub empty_count: usize,
    /// Distinct kinds among non-empty values, in order of first appearance
    pub types: Vec<ValueKind>,
    /// First few non-empty values in row order
    pub sample_values: Vec<CellValue>,
}

/// Result of normalizing one sheet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    pub headers: Vec<String>,
    pub header_count: usize,
    /// Total data rows, before any limit is applied
    pub row_count: usize,
    /// Records actually included; 0 in headers-only mode
    pub row_count_returned: usize,
    pub is_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_stats: Option<IndexMap<String, ColumnStats>>,
    pub data: Vec<Record>,
}

impl SheetReport {
    fn empty() -> Self {
        SheetReport {
            headers: Vec::new(),
            header_count: 0,
            row_count: 0,
            row_count_returned: 0,
            is_empty: true,
            column_stats: None,
            data: Vec::new(),
        }
    }
}

/// Top-level metadata about the inspected file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub filename: String,
    pub filepath: String,
    /// All sheet names in the workbook, not just the processed subset
    pub sheets: Vec<String>,
    pub sheet_count: usize,
    /// ISO-8601 generation timestamp (UTC)
    pub generated_at: String,
    pub options: InspectOptions,
}

/// The assembled output document
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metadata: Metadata,
    pub sheets: IndexMap<String, SheetReport>,
}

impl Report {
    /// Serialize the report to JSON, pretty-printed or compact per the
    /// raw-output option.
    pub fn to_json_string(&self) -> Result<String> {
        let json = if self.metadata.options.raw_output {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}

/// Derive the header list from a sheet's first row.
///
/// A blank or absent header cell is replaced by `Column_<1-based-index>`;
/// non-string header cells are stringified.
#[must_use]
pub fn derive_headers(header_row: &[CellValue]) -> Vec<String> {
    header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let text = cell.to_string();
            if text.is_empty() {
                format!("Column_{}", i + 1)
            } else {
                text
            }
        })
        .collect()
}

/// Compute per-column statistics across all data rows.
///
/// The row limit is deliberately ignored here: statistics describe the
/// whole sheet even when the returned records are capped.
fn column_stats(headers: &[String], rows: &[Vec<CellValue>]) -> IndexMap<String, ColumnStats> {
    let mut stats = IndexMap::new();

    for (col_index, header) in headers.iter().enumerate() {
        let mut non_empty_count = 0;
        let mut types: IndexSet<ValueKind> = IndexSet::new();
        let mut sample_values = Vec::new();

        for row in rows {
            let cell = row.get(col_index).unwrap_or(&CellValue::Null);
            if cell.is_empty() {
                continue;
            }
            non_empty_count += 1;
            if let Some(kind) = cell.kind() {
                types.insert(kind);
            }
            if sample_values.len() < SAMPLE_SIZE {
                sample_values.push(cell.clone());
            }
        }

        // Duplicate headers share a key; the later column's stats win.
        stats.insert(
            header.clone(),
            ColumnStats {
                non_empty_count,
                empty_count: rows.len() - non_empty_count,
                types: types.into_iter().collect(),
                sample_values,
            },
        );
    }

    stats
}

/// Normalize one sheet into headers, records and statistics.
#[must_use]
pub fn sheet_report(sheet: &Sheet, options: &InspectOptions) -> SheetReport {
    if sheet.is_empty() {
        return SheetReport::empty();
    }

    let grid = sheet.data();
    let headers = derive_headers(&grid[0]);
    let rows = &grid[1..];

    let returned_rows = match options.row_limit {
        Some(limit) if rows.len() > limit => &rows[..limit],
        _ => rows,
    };

    let data: Vec<Record> = if options.headers_only {
        Vec::new()
    } else {
        returned_rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let value = row.get(i).cloned().unwrap_or(CellValue::Null);
                        (header.clone(), value)
                    })
                    .collect()
            })
            .collect()
    };

    let column_stats = if options.headers_only {
        None
    } else {
        Some(column_stats(&headers, rows))
    };

    SheetReport {
        header_count: headers.len(),
        headers,
        row_count: rows.len(),
        row_count_returned: data.len(),
        is_empty: false,
        column_stats,
        data,
    }
}

/// Determine which sheets to process, validating the requested sheet
/// exists.
pub fn select_sheets(book: &Book, target: Option<&str>) -> Result<Vec<String>> {
    match target {
        Some(name) if !book.has_sheet(name) => Err(InspectError::SheetNotFound {
            name: name.to_string(),
            available: book.sheet_names(),
        }),
        Some(name) => Ok(vec![name.to_string()]),
        None => Ok(book.sheet_names()),
    }
}

/// Assemble the full report for an already-decoded book.
pub fn build_report(book: &Book, path: &Path, options: &InspectOptions) -> Result<Report> {
    let absolute = std::path::absolute(path)?;
    let filename = absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let metadata = Metadata {
        filename,
        filepath: absolute.to_string_lossy().into_owned(),
        sheets: book.sheet_names(),
        sheet_count: book.sheet_count(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        options: options.clone(),
    };

    let mut sheets = IndexMap::new();
    for name in select_sheets(book, options.target_sheet.as_deref())? {
        let sheet = book.get_sheet(&name)?;
        let report = sheet_report(sheet, options);
        debug!(
            sheet = %name,
            rows = report.row_count,
            returned = report.row_count_returned,
            "processed sheet"
        );
        sheets.insert(name, report);
    }

    Ok(Report { metadata, sheets })
}

/// Inspect a workbook file end to end: existence check, decode, normalize,
/// assemble.
pub fn inspect_file(path: &Path, options: &InspectOptions) -> Result<Report> {
    if !path.exists() {
        return Err(InspectError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let book = Book::from_xlsx(path)?;
    build_report(&book, path, options)
}
