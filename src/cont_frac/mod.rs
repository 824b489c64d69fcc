//! Conversion between exact rational values and simple continued fraction
//! coefficients `a0 + 1/(a1 + 1/(a2 + ...))`, where every numerator is 1,
//! `a0` is a signed integer and `a1, a2, ..` are positive integers.
//!
//! [expand][expand] produces the coefficients of a rational value by
//! repeated floor/reciprocal steps; [collapse][collapse] folds a
//! coefficient sequence back into a single gcd-reduced fraction. Both work
//! on exact integer pairs throughout, never floating point.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>

mod collapse;
mod expand;

pub use collapse::*;
pub use expand::*;
