use crate::utils::math::vector::{dot_prefix, magnitude};

/// Vector comparator
/// Scores two numeric vectors with a single scalar.
///
/// The corpus hands every comparator two vectors built over the same
/// pairwise term space, so lengths match in normal use.
pub trait Comparator: Send + Sync {
    fn compare(&self, vec: &[f64], other: &[f64]) -> f64;
}

impl<F> Comparator for F
where
    F: Fn(&[f64], &[f64]) -> f64 + Send + Sync,
{
    #[inline]
    fn compare(&self, vec: &[f64], other: &[f64]) -> f64 {
        self(vec, other)
    }
}

/// Cosine similarity
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// The dot product only covers the overlapping prefix of the two vectors,
/// while each magnitude covers its full vector.
/// A zero magnitude yields NaN or infinity; no special case is made.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{Comparator, CosineComparator};
/// assert_eq!(CosineComparator.compare(&[3.0, 4.0], &[4.0, 3.0]), 0.96);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineComparator;

impl Comparator for CosineComparator {
    #[inline]
    fn compare(&self, vec: &[f64], other: &[f64]) -> f64 {
        // trim, don't pad
        let dot = dot_prefix(vec, other);
        dot / (magnitude(vec) * magnitude(other))
    }
}
