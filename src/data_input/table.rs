// src/data_input/table.rs

use ndarray::Array1;

/// Rectangular numeric table parsed from a delimited text file.
/// Columns carry no names; their meaning is purely positional.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<Array1<f64>>,
}

impl DataTable {
    pub fn new(columns: Vec<Array1<f64>>) -> Self {
        DataTable { columns }
    }

    /// Builds a table from row-major data. Rows must already be equal
    /// length; the parser enforces that before calling this.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n_columns = rows.first().map_or(0, |row| row.len());
        let columns = (0..n_columns)
            .map(|c| Array1::from_iter(rows.iter().map(|row| row[c])))
            .collect();
        DataTable { columns }
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    pub fn column(&self, index: usize) -> Option<&Array1<f64>> {
        self.columns.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_transposes() {
        let table = DataTable::from_rows(&[vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]]);
        assert_eq!(table.n_columns(), 2);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.column(0).unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(table.column(1).unwrap().to_vec(), vec![10.0, 20.0, 30.0]);
        assert!(table.column(2).is_none());
    }

    #[test]
    fn empty_table() {
        let table = DataTable::from_rows(&[]);
        assert_eq!(table.n_columns(), 0);
        assert_eq!(table.n_rows(), 0);
    }
}

// src/data_input/table.rs
