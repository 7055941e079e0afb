//! N-dimensional payoff tensors and joint-profile enumeration.
//!
//! Every player in a normal-form game stores its payoffs in a tensor with
//! one dimension per player, so that a single joint strategy profile indexes
//! every player's tensor. Storage is a flat row-major `Vec<f64>`; the last
//! dimension varies fastest, which keeps profile enumeration order stable
//! and makes 2-player tensors read like the familiar row/column matrices.

use serde::{Deserialize, Serialize};

use crate::analysis::game::GameError;

/// A joint strategy profile: one strategy index per player, in player order.
pub type Profile = Vec<usize>;

/// An N-dimensional payoff tensor stored in row-major order.
///
/// The shape is the vector of strategy counts in player order; the tensor
/// belongs to one player but is indexed by the whole joint profile.
///
/// # Example
/// ```
/// use normal_form_analyzer::analysis::PayoffTensor;
///
/// // Row player's prisoner's dilemma payoffs.
/// let t = PayoffTensor::from_rows(&[vec![3.0, 0.0], vec![5.0, 1.0]]).unwrap();
/// assert_eq!(t.shape(), &[2, 2]);
/// assert_eq!(t.get(&[1, 0]), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffTensor {
    /// Length of each dimension, in player order.
    shape: Vec<usize>,

    /// Flat row-major payoff values (`shape.iter().product()` entries).
    values: Vec<f64>,
}

impl PayoffTensor {
    /// Create a tensor from a shape and flat row-major values.
    ///
    /// # Errors
    /// Returns [`GameError::TensorSize`] if the number of values does not
    /// match the product of the shape.
    pub fn new(shape: Vec<usize>, values: Vec<f64>) -> Result<Self, GameError> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(GameError::TensorSize {
                expected,
                received: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// Create a 2-dimensional tensor from nested rows.
    ///
    /// Convenience for 2-player games where payoffs are naturally written as
    /// a matrix (rows = first player's strategies, columns = second's).
    ///
    /// # Errors
    /// Returns [`GameError::TensorSize`] if the rows have unequal lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, GameError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(GameError::TensorSize {
                    expected: cols,
                    received: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            shape: vec![rows.len(), cols],
            values,
        })
    }

    /// The length of each dimension, in player order.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions (one per player).
    pub fn num_dims(&self) -> usize {
        self.shape.len()
    }

    /// The flat row-major payoff values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up the payoff at a joint profile.
    ///
    /// Returns `None` if the profile has the wrong number of components or
    /// any component is out of range for its dimension.
    pub fn get(&self, profile: &[usize]) -> Option<f64> {
        if profile.len() != self.shape.len() {
            return None;
        }
        if profile.iter().zip(&self.shape).any(|(&i, &dim)| i >= dim) {
            return None;
        }
        Some(self.values[self.offset(profile)])
    }

    /// Unchecked-by-contract lookup for profiles generated from this shape.
    ///
    /// Callers must pass a profile whose components were enumerated from
    /// `self.shape()`; a violation panics via slice indexing rather than
    /// reading a wrong entry.
    pub(crate) fn at(&self, profile: &[usize]) -> f64 {
        debug_assert_eq!(profile.len(), self.shape.len());
        self.values[self.offset(profile)]
    }

    /// Row-major offset of a profile (last dimension varies fastest).
    fn offset(&self, profile: &[usize]) -> usize {
        self.shape
            .iter()
            .zip(profile)
            .fold(0, |acc, (&dim, &i)| acc * dim + i)
    }
}

/// Ordered Cartesian product of per-player strategy index sets.
///
/// Profiles come out in odometer order: the first set varies slowest, the
/// last fastest. This matches the row-major layout of [`PayoffTensor`], so
/// enumerating `full_profiles` walks a tensor's values front to back.
///
/// An empty slice of sets yields one empty profile; any empty set yields no
/// profiles at all.
pub fn cartesian_product(sets: &[Vec<usize>]) -> Vec<Profile> {
    if sets.iter().any(Vec::is_empty) {
        return Vec::new();
    }
    let count: usize = sets.iter().map(Vec::len).product();
    let mut profiles = Vec::with_capacity(count);
    let mut counters = vec![0usize; sets.len()];
    loop {
        profiles.push(
            counters
                .iter()
                .zip(sets)
                .map(|(&c, set)| set[c])
                .collect::<Profile>(),
        );
        // Odometer increment; done once the first axis wraps.
        let mut axis = sets.len();
        loop {
            if axis == 0 {
                return profiles;
            }
            axis -= 1;
            counters[axis] += 1;
            if counters[axis] < sets[axis].len() {
                break;
            }
            counters[axis] = 0;
        }
    }
}

/// All joint profiles over a shape: the product of the ranges `0..count`.
pub fn full_profiles(shape: &[usize]) -> Vec<Profile> {
    let ranges: Vec<Vec<usize>> = shape.iter().map(|&count| (0..count).collect()).collect();
    cartesian_product(&ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_value_count() {
        let err = PayoffTensor::new(vec![2, 3], vec![1.0; 5]).unwrap_err();
        assert_eq!(
            err,
            GameError::TensorSize {
                expected: 6,
                received: 5
            }
        );
    }

    #[test]
    fn test_from_rows_layout() {
        let t = PayoffTensor::from_rows(&[vec![3.0, 0.0], vec![5.0, 1.0]]).unwrap();
        assert_eq!(t.shape(), &[2, 2]);
        assert_eq!(t.values(), &[3.0, 0.0, 5.0, 1.0]);
        assert_eq!(t.get(&[0, 1]), Some(0.0));
        assert_eq!(t.get(&[1, 1]), Some(1.0));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = PayoffTensor::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, GameError::TensorSize { .. }));
    }

    #[test]
    fn test_get_bounds() {
        let t = PayoffTensor::new(vec![2, 2], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(t.get(&[2, 0]), None); // component out of range
        assert_eq!(t.get(&[0]), None); // wrong arity
        assert_eq!(t.get(&[0, 0, 0]), None);
    }

    #[test]
    fn test_three_dimensional_offsets() {
        // shape (2, 2, 2): offset of (a, b, c) is 4a + 2b + c
        let values: Vec<f64> = (0..8).map(f64::from).collect();
        let t = PayoffTensor::new(vec![2, 2, 2], values).unwrap();
        assert_eq!(t.get(&[0, 0, 0]), Some(0.0));
        assert_eq!(t.get(&[1, 0, 1]), Some(5.0));
        assert_eq!(t.get(&[1, 1, 1]), Some(7.0));
    }

    #[test]
    fn test_cartesian_product_order() {
        let profiles = cartesian_product(&[vec![0, 1], vec![0, 2]]);
        assert_eq!(
            profiles,
            vec![vec![0, 0], vec![0, 2], vec![1, 0], vec![1, 2]]
        );
    }

    #[test]
    fn test_cartesian_product_edge_cases() {
        assert_eq!(cartesian_product(&[]), vec![Vec::<usize>::new()]);
        assert!(cartesian_product(&[vec![0, 1], vec![]]).is_empty());
    }

    #[test]
    fn test_full_profiles_count() {
        let profiles = full_profiles(&[3, 2]);
        assert_eq!(profiles.len(), 6);
        assert_eq!(profiles[0], vec![0, 0]);
        assert_eq!(profiles[5], vec![2, 1]);
    }
}
