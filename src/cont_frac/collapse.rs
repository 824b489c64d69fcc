//! Collapse of a coefficient sequence into a reduced fraction

use core::mem;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::errors::ContFracError;

/// Collapses a coefficient sequence into the fully reduced fraction it
/// represents.
///
/// The sequence is folded from the last coefficient backward, carrying an
/// exact integer pair: a single coefficient `c` is `(c, 1)`, and combining
/// the folded tail `n/d` with the coefficient `c` to its left gives
/// `c + d/n = (c*n + d) / n`. The final pair is reduced by its gcd with the
/// denominator normalised positive, so the numerator carries the sign.
///
/// Returns [InvalidInput][ContFracError::InvalidInput] for an empty
/// sequence, and [DivisionByZero][ContFracError::DivisionByZero] when a
/// fold step would flip a zero numerator into the denominator. The latter
/// requires a zero coefficient after the first position, which the
/// expansion of a rational value never emits.
pub fn collapse<T: Integer + Clone>(coeffs: &[T]) -> Result<Ratio<T>, ContFracError> {
    let (last, rest) = coeffs.split_last().ok_or(ContFracError::InvalidInput)?;
    let mut numer = last.clone();
    let mut denom = T::one();
    for c in rest.iter().rev() {
        if numer.is_zero() {
            return Err(ContFracError::DivisionByZero);
        }
        let folded = c.clone() * numer.clone() + denom;
        denom = mem::replace(&mut numer, folded);
    }
    Ok(Ratio::new(numer, denom))
}
