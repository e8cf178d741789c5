//! # Dense vector operations
//!
//! Vectors are plain slices; these are the few operations the solvers need on them.

/// Inner product of two vectors of equal length.
pub fn inner_product(left: &[f64], right: &[f64]) -> f64 {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(a, b)| a * b).sum()
}

/// Elementwise difference `left - right`.
pub fn difference(left: &[f64], right: &[f64]) -> Vec<f64> {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(a, b)| a - b).collect()
}

/// The 2-norm of a vector.
pub fn euclidean_norm(vector: &[f64]) -> f64 {
    inner_product(vector, vector).sqrt()
}

/// Elementwise product, the same as multiplying `diag(left)` with `right`.
pub fn elementwise_product(left: &[f64], right: &[f64]) -> Vec<f64> {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).map(|(a, b)| a * b).collect()
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn products() {
        assert_abs_diff_eq!(inner_product(&[1f64, 2f64, 3f64], &[4f64, -5f64, 6f64]), 12f64);
        assert_abs_diff_eq!(inner_product(&[], &[]), 0f64);
        assert_eq!(elementwise_product(&[2f64, 3f64], &[4f64, 0.5f64]), vec![8f64, 1.5f64]);
    }

    #[test]
    fn norm_of_difference() {
        let step = difference(&[4f64, 6f64], &[1f64, 2f64]);
        assert_eq!(step, vec![3f64, 4f64]);
        assert_abs_diff_eq!(euclidean_norm(&step), 5f64);
    }
}
