pub mod loader;
pub mod schema;

pub use self::loader::{load_table, load_table_from_reader};
pub use self::schema::{infer_schema, MatchupColumn, TableSchema, TableWarning};

use crate::config::TraitParams;

/// Read-only view of the predictions CSV.
///
/// Numeric data is stored column-major so scoring can slice a column at a time.
/// Raw string cells are kept alongside for the data view.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    pub headers: Vec<String>,
    pub raw_rows: Vec<Vec<String>>,
    columns: Vec<Vec<Option<f64>>>,
    partitions: Vec<String>,
}

impl ObservationTable {
    /// Builds a table from already-split records. Short rows are padded with blanks.
    pub fn from_records(
        headers: Vec<String>,
        records: Vec<Vec<String>>,
        params: &TraitParams,
    ) -> Self {
        let width = headers.len();
        let raw_rows: Vec<Vec<String>> = records
            .into_iter()
            .map(|mut r| {
                r.resize(width, String::new());
                r.truncate(width);
                r
            })
            .collect();

        let columns: Vec<Vec<Option<f64>>> = (0..width)
            .map(|c| raw_rows.iter().map(|r| parse_cell(&r[c])).collect())
            .collect();

        let partition_idx = headers.iter().position(|h| h == &params.partition_column);
        let partitions: Vec<String> = raw_rows
            .iter()
            .map(|r| match partition_idx {
                Some(idx) if !r[idx].is_empty() => r[idx].clone(),
                _ => params.default_partition.clone(),
            })
            .collect();

        Self {
            headers,
            raw_rows,
            columns,
            partitions,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.raw_rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn column(&self, idx: usize) -> &[Option<f64>] {
        &self.columns[idx]
    }

    /// Values of `idx` restricted to `rows`, in row order.
    pub fn column_subset(&self, idx: usize, rows: &[usize]) -> Vec<Option<f64>> {
        rows.iter().map(|&r| self.columns[idx][r]).collect()
    }

    pub fn partition_of(&self, row: usize) -> &str {
        &self.partitions[row]
    }

    /// Distinct partition labels in order of first appearance.
    pub fn partition_labels(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in &self.partitions {
            if !out.contains(p) {
                out.push(p.clone());
            }
        }
        out
    }

    pub fn rows_in(&self, partition: &str) -> Vec<usize> {
        self.partitions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.as_str() == partition)
            .map(|(i, _)| i)
            .collect()
    }
}

fn parse_cell(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
