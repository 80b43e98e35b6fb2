//! Tabular text data
//!
//! A small in-memory table read from and written to CSV, with helpers that run a
//! [`Preprocessor`] over one text column and append the results as new columns.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};

use crate::error::PrepareError;
use crate::preprocess::Preprocessor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, PrepareError> {
        let mut reader = Reader::from_reader(reader);
        let headers = reader.headers()?.iter().map(String::from).collect();
        let mut table = Self::new(headers);

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(String::from).collect())?;
        }

        Ok(table)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PrepareError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), PrepareError> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(&self.headers)?;

        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<(), PrepareError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), PrepareError> {
        if row.len() != self.headers.len() {
            return Err(PrepareError::RowWidth {
                row: self.rows.len(),
                expected: self.headers.len(),
                found: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn column(&self, name: &str) -> Result<Vec<&str>, PrepareError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| PrepareError::MissingColumn(name.to_string()))?;

        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Replace the named column, or append it when it doesn't exist yet
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), PrepareError> {
        if values.len() != self.rows.len() {
            return Err(PrepareError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }

        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }

        Ok(())
    }
}

/// Run the full preprocessing chain over `column`, storing the result in `output`
pub fn add_cleaned_column<P: Preprocessor + ?Sized>(
    table: &mut TextTable,
    column: &str,
    output: &str,
    preprocessor: &P,
) -> Result<(), PrepareError> {
    let values: Vec<String> = table
        .column(column)?
        .into_iter()
        .map(|text| preprocessor.process(text))
        .collect();

    tracing::info!("Cleaned {} rows of column {column}", values.len());
    table.set_column(output, values)
}

/// Add `clean`, `stemmed` and `lemmatized` columns derived from `column`
pub fn add_processed_columns<P: Preprocessor + ?Sized>(
    table: &mut TextTable,
    column: &str,
    preprocessor: &P,
) -> Result<(), PrepareError> {
    let processed: Vec<_> = table
        .column(column)?
        .into_iter()
        .map(|text| preprocessor.process_columns(text))
        .collect();

    let mut clean = Vec::with_capacity(processed.len());
    let mut stemmed = Vec::with_capacity(processed.len());
    let mut lemmatized = Vec::with_capacity(processed.len());

    for text in processed {
        clean.push(text.clean);
        stemmed.push(text.stemmed);
        lemmatized.push(text.lemmatized);
    }

    tracing::info!("Processed {} rows of column {column}", clean.len());
    table.set_column("clean", clean)?;
    table.set_column("stemmed", stemmed)?;
    table.set_column("lemmatized", lemmatized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::DefaultPreprocessor;

    const CSV: &str = "title,content\nFirst,The cats are here.\nSecond,\"Children, and dogs!\"\n";

    #[test]
    fn reads_csv() {
        let table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.headers(), ["title", "content"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("content").unwrap()[1], "Children, and dogs!");
    }

    #[test]
    fn adds_clean_column() {
        let mut table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        add_cleaned_column(&mut table, "content", "clean", &DefaultPreprocessor::new()).unwrap();

        assert_eq!(table.headers(), ["title", "content", "clean"]);
        let clean = table.column("clean").unwrap();
        assert_eq!(clean[0], "cat");
        assert_eq!(clean[1], "child dog");
    }

    #[test]
    fn adds_processed_columns() {
        let mut table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        add_processed_columns(&mut table, "content", &DefaultPreprocessor::new()).unwrap();

        assert_eq!(
            table.headers(),
            ["title", "content", "clean", "stemmed", "lemmatized"]
        );
        assert_eq!(table.column("clean").unwrap(), ["cat", "children dog"]);
        assert_eq!(table.column("stemmed").unwrap()[1], "children dog");
        assert_eq!(table.column("lemmatized").unwrap()[1], "child dog");
    }

    #[test]
    fn rerun_replaces_column() {
        let mut table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let preprocessor = DefaultPreprocessor::new();
        add_cleaned_column(&mut table, "content", "clean", &preprocessor).unwrap();
        add_cleaned_column(&mut table, "content", "clean", &preprocessor).unwrap();

        assert_eq!(table.headers().len(), 3);
    }

    #[test]
    fn missing_column() {
        let mut table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        let err = add_cleaned_column(&mut table, "body", "clean", &DefaultPreprocessor::new())
            .unwrap_err();
        assert!(matches!(err, PrepareError::MissingColumn(name) if name == "body"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut table = TextTable::new(vec!["a".to_string(), "b".to_string()]);
        let err = table.push_row(vec!["1".to_string()]).unwrap_err();
        assert!(matches!(err, PrepareError::RowWidth { expected: 2, found: 1, .. }));
    }

    #[test]
    fn writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = TextTable::from_csv_reader(CSV.as_bytes()).unwrap();
        add_cleaned_column(&mut table, "content", "clean", &DefaultPreprocessor::new()).unwrap();
        table.write_csv_path(&path).unwrap();

        let reread = TextTable::from_csv_path(&path).unwrap();
        assert_eq!(reread, table);
    }
}
