//! # Dense matrices
//!
//! A row-major matrix backed by a `Vec<Vec<F>>`. Storage and indexing work for any element type,
//! the arithmetic needed by the linear program solvers is only implemented for `f64`.
use std::fmt::{Display, Formatter};
use std::fmt;

use num_traits::{One, Zero};

use crate::data::linear_algebra::SINGULARITY_TOLERANCE;
use crate::data::linear_algebra::vector::{difference, inner_product};

/// Uses a Vec<Vec<F>> as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F = f64> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of equal length.
    ///
    /// # Return value
    ///
    /// The data wrapped inside a matrix. An empty `data` gives a matrix without rows or columns.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }
    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }
    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }
    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }
    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Copy> DenseMatrix<F> {
    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }
    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }
    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }
    /// Create the transpose of this matrix.
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns)
            .map(|j| self.column(j))
            .collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }
}

impl<F: Zero + Clone> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { data: vec![vec![F::zero(); columns]; rows], nr_rows: rows, nr_columns: columns }
    }
}

impl<F: Zero + One + Clone> DenseMatrix<F> {
    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        matrix
    }
}

impl DenseMatrix<f64> {
    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }
    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            self.data[write_row][j] += factor * self.data[read_row][j];
        }
    }
    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        let other_columns = other.transpose();
        let data = self.data.iter()
            .map(|row| other_columns.rows().map(|column| inner_product(row, column)).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns }
    }
    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_rows, other.nr_rows);
        debug_assert_eq!(self.nr_columns, other.nr_columns);

        let data = self.data.iter()
            .zip(&other.data)
            .map(|(left, right)| difference(left, right))
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }
    /// Matrix-vector product `self · vector`.
    pub fn multiply_vector(&self, vector: &[f64]) -> Vec<f64> {
        debug_assert_eq!(self.nr_columns, vector.len());

        self.data.iter().map(|row| inner_product(row, vector)).collect()
    }
    /// Multiply each column `j` by `factors[j]`.
    ///
    /// This is the product `self · diag(factors)`, without building the diagonal matrix.
    pub fn scale_columns(&self, factors: &[f64]) -> Self {
        debug_assert_eq!(self.nr_columns, factors.len());

        let data = self.data.iter()
            .map(|row| row.iter().zip(factors).map(|(value, factor)| value * factor).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: self.nr_columns }
    }
    /// Compute the inverse of a square matrix with Gauss-Jordan elimination and partial pivoting.
    ///
    /// # Return value
    ///
    /// `None` if the matrix is singular, that is, if a pivot is zero relative to the largest
    /// absolute value in the matrix.
    pub fn inverse(&self) -> Option<Self> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let size = self.nr_rows;
        let scale = self.data.iter()
            .flatten()
            .fold(0f64, |maximum, value| maximum.max(value.abs()));
        if size > 0 && !(scale > 0f64) {
            return None;
        }

        let mut left = self.clone();
        let mut right = Self::identity(size);
        for column in 0..size {
            let pivot_row = (column..size)
                .max_by(|&i, &j| left.data[i][column].abs().total_cmp(&left.data[j][column].abs()))?;
            let pivot = left.data[pivot_row][column];
            if !(pivot.abs() > SINGULARITY_TOLERANCE * scale) {
                return None;
            }

            left.data.swap(column, pivot_row);
            right.data.swap(column, pivot_row);
            left.multiply_row(column, 1f64 / pivot);
            right.multiply_row(column, 1f64 / pivot);

            for row in (0..size).filter(|&row| row != column) {
                let factor = -left.data[row][column];
                if factor != 0f64 {
                    left.mul_add_rows(column, row, factor);
                    right.mul_add_rows(column, row, factor);
                }
            }
        }

        Some(right)
    }
    /// Whether the last `nr_rows` columns of this matrix form exactly the identity matrix.
    pub fn ends_with_identity(&self) -> bool {
        if self.nr_columns < self.nr_rows {
            return false;
        }

        let offset = self.nr_columns - self.nr_rows;
        self.data.iter().enumerate().all(|(i, row)| {
            row[offset..].iter().enumerate().all(|(j, &value)| {
                value == if i == j { 1f64 } else { 0f64 }
            })
        })
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.data {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, "\t{}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// If all row lengths agree, return the dimensions of the vector `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
