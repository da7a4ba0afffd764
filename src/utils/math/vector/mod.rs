use num::Float;

/// Dot product over the overlapping prefix of two vectors
/// Positions past `min(a.len(), b.len())` are ignored, not zero-padded.
///
/// # Arguments
/// * `a` - first vector
/// * `b` - second vector
///
/// # Returns
/// * `N` - Σ(a_i * b_i) for i < min(|a|, |b|)
#[inline]
pub fn dot_prefix<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Euclidean norm over the whole vector
/// ||a|| = sqrt(Σ(a_i^2))
#[inline]
pub fn magnitude<N>(a: &[N]) -> N
where
    N: Float,
{
    a.iter().fold(N::zero(), |acc, &x| acc + x * x).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_prefix_trims_longer_vector() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [4.0_f64, 5.0];
        assert_eq!(dot_prefix(&a, &b), 14.0);
        assert_eq!(dot_prefix(&b, &a), 14.0);
        assert_eq!(dot_prefix::<f64>(&[], &a), 0.0);
    }

    #[test]
    fn magnitude_uses_full_length() {
        assert_eq!(magnitude(&[3.0_f64, 4.0]), 5.0);
        assert_eq!(magnitude(&[3.0_f32, 4.0, 12.0]), 13.0);
        assert_eq!(magnitude::<f64>(&[]), 0.0);
    }
}
