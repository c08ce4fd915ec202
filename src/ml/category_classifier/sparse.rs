//! Sparse feature vectors.

use crate::error::{CategorizeError, Result};

/// A sparse `f64` vector of fixed dimension.
///
/// Entries are kept in strictly ascending index order and never hold an
/// explicit zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    dimension: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create an all-zero vector.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build a vector from `(index, value)` pairs in any order.
    ///
    /// Duplicate indices are summed and zero results dropped. An index outside
    /// `0..dimension` is an error.
    pub fn from_pairs<I>(dimension: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut pairs: Vec<(usize, f64)> = pairs.into_iter().collect();
        if let Some(&(index, _)) = pairs.iter().find(|(index, _)| *index >= dimension) {
            return Err(CategorizeError::prediction(format!(
                "feature index {index} out of range for dimension {dimension}"
            )));
        }
        pairs.sort_by_key(|(index, _)| *index);

        let mut indices: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (index, value) in pairs {
            if indices.last() == Some(&index) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(index);
                values.push(value);
            }
        }

        let mut vector = Self {
            dimension,
            indices,
            values,
        };
        vector.prune_zeros();
        Ok(vector)
    }

    /// Number of columns.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored non-zero entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at `index` (zero when not stored or out of range).
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate the non-zero entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product with a dense row of the same dimension.
    pub fn dot(&self, dense: &[f64]) -> Result<f64> {
        if dense.len() != self.dimension {
            return Err(CategorizeError::prediction(format!(
                "dimension mismatch: vector has {} columns, weights have {}",
                self.dimension,
                dense.len()
            )));
        }
        Ok(self.iter().map(|(index, value)| value * dense[index]).sum())
    }

    /// Sum of absolute values.
    pub fn l1_norm(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    /// Euclidean length.
    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Apply `f(index, value)` to every stored entry.
    pub fn map_values<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, f64) -> f64,
    {
        for (index, value) in self.indices.iter().zip(self.values.iter_mut()) {
            *value = f(*index, *value);
        }
        self.prune_zeros();
    }

    /// Divide every entry by `divisor`; a zero divisor leaves the vector unchanged.
    pub fn scale_down(&mut self, divisor: f64) {
        if divisor != 0.0 {
            self.map_values(|_, value| value / divisor);
        }
    }

    /// Expand into a dense vector.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for (index, value) in self.iter() {
            dense[index] = value;
        }
        dense
    }

    fn prune_zeros(&mut self) {
        if self.values.iter().all(|v| *v != 0.0) {
            return;
        }
        let (indices, values): (Vec<usize>, Vec<f64>) = self
            .iter()
            .filter(|(_, value)| *value != 0.0)
            .unzip();
        self.indices = indices;
        self.values = values;
    }
}
