//! Car matrix keyed by toll-location id pairs.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use serde::Serialize;
use tracing::{debug, warn};

use traffic_model::schema;

use crate::column;
use crate::error::Result;

/// Square grid of car counts with the same sorted id labels on both axes.
///
/// The labels are the union of every id seen in either id column, so a
/// lookup works for any id the table mentions regardless of which side it
/// appeared on. The diagonal is zero by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairMatrix {
    labels: Vec<i64>,
    cells: Vec<Vec<f64>>,
}

impl PairMatrix {
    /// Sorted ids labelling both axes.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// (rows, columns) of the cell grid. Always square.
    pub fn shape(&self) -> (usize, usize) {
        (self.cells.len(), self.labels.len())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Cell by grid position.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Cell addressed by the id pair labelling it.
    pub fn value(&self, id_1: i64, id_2: i64) -> Option<f64> {
        let row = self.labels.binary_search(&id_1).ok()?;
        let col = self.labels.binary_search(&id_2).ok()?;
        self.cell(row, col)
    }

    /// Apply `f` to every cell, producing a new matrix over the same labels.
    /// The receiver is not modified.
    pub fn map_cells(&self, f: impl Fn(f64) -> f64) -> PairMatrix {
        let cells = self
            .cells
            .iter()
            .map(|row| row.iter().map(|&cell| f(cell)).collect())
            .collect();
        PairMatrix {
            labels: self.labels.clone(),
            cells,
        }
    }

    /// Render the matrix as a frame with a leading id column and one
    /// float column per label.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.labels.len() + 1);
        columns.push(Series::new(schema::ID_1.into(), self.labels.clone()).into());
        for (col, label) in self.labels.iter().enumerate() {
            let values: Vec<f64> = self.cells.iter().map(|row| row[col]).collect();
            let name = label.to_string();
            columns.push(Series::new(name.as_str().into(), values).into());
        }
        Ok(DataFrame::new(columns)?)
    }
}

/// Pivot the count table into a [`PairMatrix`] of car counts.
///
/// Pairs absent from the table stay at zero and the diagonal is forced to
/// zero even when a row carries an id paired with itself. When several rows
/// carry the same id pair the last row wins.
pub fn generate_car_matrix(df: &DataFrame) -> Result<PairMatrix> {
    let ids_1 = column::id_values(df, schema::ID_1)?;
    let ids_2 = column::id_values(df, schema::ID_2)?;
    let cars = column::numeric_values(df, schema::CAR)?;

    let mut label_set = BTreeSet::new();
    label_set.extend(ids_1.iter().copied());
    label_set.extend(ids_2.iter().copied());
    let labels: Vec<i64> = label_set.into_iter().collect();

    let mut pairs: BTreeMap<(i64, i64), f64> = BTreeMap::new();
    let mut overwrites = 0usize;
    for row in 0..df.height() {
        if pairs.insert((ids_1[row], ids_2[row]), cars[row]).is_some() {
            overwrites += 1;
        }
    }
    if overwrites > 0 {
        warn!(
            pairs = overwrites,
            "duplicate id pairs in count table, keeping the last value"
        );
    }

    let size = labels.len();
    let mut cells = vec![vec![0.0; size]; size];
    for ((id_1, id_2), car) in pairs {
        if id_1 == id_2 {
            continue;
        }
        if let (Ok(row), Ok(col)) = (labels.binary_search(&id_1), labels.binary_search(&id_2)) {
            cells[row][col] = car;
        }
    }

    debug!(rows = df.height(), labels = size, "built car matrix");
    Ok(PairMatrix { labels, cells })
}

/// Rescale every cell of the matrix, returning a fresh matrix.
///
/// Cells strictly above the cut are scaled by 0.75, the rest by 1.25, and
/// every result is rounded to one decimal place. The input is not modified.
pub fn multiply_matrix(matrix: &PairMatrix) -> PairMatrix {
    matrix.map_cells(|cell| {
        let factor = if cell > schema::RESCALE_CUT {
            schema::RESCALE_DOWN
        } else {
            schema::RESCALE_UP
        };
        round_one_decimal(cell * factor)
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
