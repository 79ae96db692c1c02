use std::iter::Sum;

use num::Float;

/// Conjunction of two rule antecedents (Gödel t-norm)
#[inline]
pub fn and<F: Float>(u: F, v: F) -> F {
    F::min(u, v)
}

/// Disjunction of rules firing into the same consequent
#[inline]
pub fn or<F: Float>(u: F, v: F) -> F {
    F::max(u, v)
}

/// Clips a sampled membership curve at the strength its rules fired with.
pub fn clip<F: Float>(membership: impl IntoIterator<Item = F>, height: F) -> impl Iterator<Item = F> {
    membership.into_iter().map(move |m| and(m, height))
}

/// Pointwise maximum of two sampled curves.
pub fn aggregate<F: Float>(u: impl IntoIterator<Item = F>, v: impl IntoIterator<Item = F>) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| or(u, v))
}

/// Center of gravity over a sampled universe: `Σ x·μ(x) / Σ μ(x)`.
///
/// Returns `None` when the sampled area is exactly zero.
pub fn centroid<F: Float + Sum>(universe: &[F], membership: &[F]) -> Option<F> {
    debug_assert_eq!(universe.len(), membership.len());

    let den = membership.iter().copied().sum::<F>();

    if den == F::zero() {
        return None;
    }

    let num = universe
        .iter()
        .copied()
        .zip(membership.iter().copied())
        .map(|(x, m)| x * m)
        .sum::<F>();

    Some(num / den)
}

/// Tolerance for comparing against scores computed elsewhere
#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn test_and_or() {
    assert_eq!(and(0.3, 0.7), 0.3);
    assert_eq!(or(0.3, 0.7), 0.7);
    assert_eq!(and(0.5f32, 0.5), 0.5);
}

#[test]
fn test_clip_then_aggregate() {
    let low = [1., 0.5, 0., 0.];
    let high = [0., 0., 0.5, 1.];

    let clipped_low: Vec<f64> = clip(low, 0.25).collect();
    let clipped_high: Vec<f64> = clip(high, 0.75).collect();

    assert_eq!(clipped_low, vec![0.25, 0.25, 0., 0.]);
    assert_eq!(clipped_high, vec![0., 0., 0.5, 0.75]);
    assert_eq!(
        aggregate(clipped_low, clipped_high).collect::<Vec<_>>(),
        vec![0.25, 0.25, 0.5, 0.75]
    );
}

#[test]
fn test_centroid() {
    let universe = [0., 1., 2., 3., 4.];

    assert_eq!(centroid(&universe, &[0., 1., 1., 1., 0.]), Some(2.));
    assert_eq!(centroid(&universe, &[0., 0., 0., 0., 1.]), Some(4.));
    assert_eq!(centroid(&universe, &[0.; 5]), None);
}
