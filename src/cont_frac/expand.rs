//! Expansion of a rational value into continued fraction coefficients

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::Zero;

/// Expands `value` into at most `max_terms` simple continued fraction
/// coefficients.
///
/// Each step appends `floor(x)` of the running residual (rounding toward
/// negative infinity, so the first coefficient matches the sign of the
/// input) and continues with the reciprocal of the fractional remainder.
/// The expansion stops early when the remainder reaches exactly zero; the
/// reciprocal is only taken after that check, so no step can divide by
/// zero. An integer input therefore yields a single coefficient.
///
/// If `max_terms` is exhausted first, the returned sequence is a truncated
/// approximation of `value`. This is not signalled structurally: callers
/// that need to distinguish an exact expansion compare the length against
/// `max_terms`, or collapse the result and compare with the input.
/// `max_terms` is expected to be at least 1; zero yields an empty sequence.
///
/// For a fixed `value`, growing `max_terms` only ever extends the result,
/// it never changes coefficients already emitted.
pub fn expand<T: Integer + Clone>(value: Ratio<T>, max_terms: usize) -> Vec<T> {
    // With the residual held as n/d (d > 0), a floor step followed by a
    // reciprocal is one round of the Euclidean algorithm.
    let (mut n, mut d) = value.into();
    let mut coeffs = Vec::new();
    for _ in 0..max_terms {
        let (q, r) = n.div_mod_floor(&d);
        coeffs.push(q);
        if r.is_zero() {
            break;
        }
        // residual r/d in (0, 1); continue with its reciprocal d/r
        n = d;
        d = r;
    }
    coeffs
}
