use thiserror::Error;

/// Errors reported by the operations that consume coefficient sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContFracError {
    /// The coefficient sequence is empty
    #[error("empty coefficient sequence")]
    InvalidInput,

    /// A fold step would use a zero partial numerator as the next
    /// denominator. Only reachable with a zero coefficient in a non-leading
    /// position, which a well-formed expansion never produces.
    #[error("zero pivot while folding coefficients")]
    DivisionByZero,
}
