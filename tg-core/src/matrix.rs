//! The low/high temperature frequency matrix for one station.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// First and last date on which a (low, high) pair was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellMeta {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error("matrix has {rows} rows, expected {expected}")]
    RowCount { rows: usize, expected: usize },

    #[error("matrix row {row} has {cols} columns, expected {expected}")]
    ColumnCount { row: usize, cols: usize, expected: usize },

    #[error("cell ({low}, {high}) has count {count} but no first/last dates")]
    MissingMeta { low: usize, high: usize, count: u32 },

    #[error("cell ({low}, {high}) first date {first} is after last date {last}")]
    DateOrder {
        low: usize,
        high: usize,
        first: NaiveDate,
        last: NaiveDate,
    },
}

/// Dense square matrix of observation counts.
///
/// Row index is the low temperature, column index the high temperature, both
/// indexing into the shared `axis`. Only cells with low <= high can be
/// non-zero in practice, but storage is dense for direct lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureMatrix {
    axis: Vec<f64>,
    counts: Vec<Vec<u32>>,
    meta: Vec<Vec<Option<CellMeta>>>,
}

/// A non-empty cell with its axis values resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupiedCell {
    pub low: f64,
    pub high: f64,
    pub count: u32,
    pub meta: CellMeta,
}

impl TemperatureMatrix {
    /// Build a matrix, checking dimensions and per-cell metadata.
    ///
    /// Metadata on zero-count cells is dropped. Every non-zero cell must carry
    /// metadata with `first <= last`.
    pub fn new(
        axis: Vec<f64>,
        counts: Vec<Vec<u32>>,
        mut meta: Vec<Vec<Option<CellMeta>>>,
    ) -> Result<Self, MatrixError> {
        let n = axis.len();
        check_square(&counts, n)?;
        check_square(&meta, n)?;

        for (low, row) in counts.iter().enumerate() {
            for (high, &count) in row.iter().enumerate() {
                let cell = &mut meta[low][high];
                if count == 0 {
                    *cell = None;
                    continue;
                }
                match cell {
                    None => return Err(MatrixError::MissingMeta { low, high, count }),
                    Some(m) if m.first > m.last => {
                        return Err(MatrixError::DateOrder {
                            low,
                            high,
                            first: m.first,
                            last: m.last,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self { axis, counts, meta })
    }

    /// An empty 0x0 matrix.
    pub fn empty() -> Self {
        Self {
            axis: Vec::new(),
            counts: Vec::new(),
            meta: Vec::new(),
        }
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn dimension(&self) -> usize {
        self.axis.len()
    }

    pub fn count(&self, low: usize, high: usize) -> u32 {
        self.counts
            .get(low)
            .and_then(|row| row.get(high))
            .copied()
            .unwrap_or(0)
    }

    pub fn meta(&self, low: usize, high: usize) -> Option<CellMeta> {
        self.meta
            .get(low)
            .and_then(|row| row.get(high))
            .copied()
            .flatten()
    }

    /// Largest count in the matrix, 0 when empty.
    pub fn max_count(&self) -> u32 {
        self.counts
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Number of distinct (low, high) pairs ever recorded.
    pub fn occupied_count(&self) -> usize {
        self.counts
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c > 0)
            .count()
    }

    /// Iterate over non-empty cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = OccupiedCell> + '_ {
        self.counts.iter().enumerate().flat_map(move |(low, row)| {
            row.iter().enumerate().filter_map(move |(high, &count)| {
                let meta = self.meta(low, high)?;
                (count > 0).then(|| OccupiedCell {
                    low: self.axis[low],
                    high: self.axis[high],
                    count,
                    meta,
                })
            })
        })
    }
}

fn check_square<T>(rows: &[Vec<T>], n: usize) -> Result<(), MatrixError> {
    if rows.len() != n {
        return Err(MatrixError::RowCount {
            rows: rows.len(),
            expected: n,
        });
    }
    for (row, cols) in rows.iter().enumerate() {
        if cols.len() != n {
            return Err(MatrixError::ColumnCount {
                row,
                cols: cols.len(),
                expected: n,
            });
        }
    }
    Ok(())
}
