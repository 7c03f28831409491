use crate::error::{InspectError, Result};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves workbook order)
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Book {
            sheets: IndexMap::new(),
        }
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book has no sheets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| InspectError::SheetNotFound {
                name: name.to_string(),
                available: self.sheet_names(),
            })
    }

    /// Add a sheet to the book, replacing any existing sheet with the
    /// same name
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) {
        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut book = Book::new();
        assert!(book.is_empty());

        book.add_sheet("Data", Sheet::from_data(vec![vec![1, 2, 3]]));
        book.add_sheet("Summary", Sheet::new());

        assert!(!book.is_empty());
        assert_eq!(book.sheet_count(), 2);
        assert!(book.has_sheet("Data"));
        assert_eq!(book.get_sheet("Data").unwrap().row_count(), 1);
    }

    #[test]
    fn test_sheet_order_preserved() {
        let mut book = Book::new();
        book.add_sheet("Zebra", Sheet::new());
        book.add_sheet("Alpha", Sheet::new());
        book.add_sheet("Mango", Sheet::new());

        assert_eq!(book.sheet_names(), vec!["Zebra", "Alpha", "Mango"]);
    }

    #[test]
    fn test_get_missing_sheet_lists_available() {
        let mut book = Book::new();
        book.add_sheet("Only", Sheet::new());

        let err = book.get_sheet("Nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Nope"));
        assert!(message.contains("Only"));
    }
}
