// src/data_input/table_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data_input::table::DataTable;

/// Parses a headerless delimited numeric file into a rectangular table.
///
/// Every field must parse as a number and every row must have the same
/// width; any violation aborts the parse. There is no partial-row
/// recovery.
pub fn parse_table_file(path: &Path, delimiter: u8) -> Result<DataTable, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("cannot open input file '{}': {}", path.display(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let mut row = Vec::with_capacity(record.len());
        for (column_index, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| {
                format!(
                    "row {}, column {}: '{}' is not numeric",
                    row_index + 1,
                    column_index + 1,
                    field
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(format!("input file '{}' contains no data rows", path.display()).into());
    }

    Ok(DataTable::from_rows(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_comma_separated_table() {
        let (_dir, path) = write_fixture("1,2\n3,4\n5,6\n");
        let table = parse_table_file(&path, b',').unwrap();
        assert_eq!(table.n_columns(), 2);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.column(0).unwrap().to_vec(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn parses_alternate_delimiter() {
        let (_dir, path) = write_fixture("1;2\n3;4\n");
        let table = parse_table_file(&path, b';').unwrap();
        assert_eq!(table.n_columns(), 2);
        assert_eq!(table.column(1).unwrap().to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let (_dir, path) = write_fixture("1,2\n3,oops\n");
        let err = parse_table_file(&path, b',').unwrap_err();
        assert!(err.to_string().contains("not numeric"), "{}", err);
    }

    #[test]
    fn rejects_ragged_rows() {
        let (_dir, path) = write_fixture("1,2\n3,4,5\n");
        assert!(parse_table_file(&path, b',').is_err());
    }

    #[test]
    fn rejects_empty_file() {
        let (_dir, path) = write_fixture("");
        let err = parse_table_file(&path, b',').unwrap_err();
        assert!(err.to_string().contains("no data rows"), "{}", err);
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(parse_table_file(&path, b',').is_err());
    }
}

// src/data_input/table_parser.rs
