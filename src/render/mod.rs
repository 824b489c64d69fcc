//! Text rendering of coefficient sequences as ASCII fraction diagrams
//!
//! Two independent formatting passes over the same coefficients: the
//! stair-stepped continued fraction layout, and the collapsed, gcd-reduced
//! simple fraction. Both return a rectangular [Block].

mod block;

pub use block::Block;

use std::fmt::Display;

use num_integer::Integer;

use crate::cont_frac::collapse;
use crate::errors::ContFracError;

/// Renders the coefficients in the classic stair-stepped continued
/// fraction layout, e.g. for `[3, 7, 16]`:
///
/// ```text
///       1
/// 3 + ------
///         1
///     7 + --
///         16
/// ```
///
/// Returns [InvalidInput][ContFracError::InvalidInput] for an empty
/// sequence; a single coefficient renders as a one-line block.
pub fn render_continued<T: Display>(coeffs: &[T]) -> Result<Block, ContFracError> {
    let (last, rest) = coeffs.split_last().ok_or(ContFracError::InvalidInput)?;
    let mut block = Block::leaf(last.to_string());
    for c in rest.iter().rev() {
        block = nest(c.to_string(), block);
    }
    Ok(block)
}

/// Wraps the already-rendered tail as `coeff + 1/tail`.
///
/// The unit numerator is centered over the tail's width, the coefficient
/// and " + " are prefixed to the rule line, and every other line is
/// right-justified to the grown width so the nesting steps rightward.
fn nest(coeff: String, tail: Block) -> Block {
    let fraction = Block::over(Block::leaf("1".to_string()), tail);
    let width = coeff.len() + 3 + fraction.width();
    let lines = fraction
        .into_lines()
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 1 {
                format!("{} + {}", coeff, line)
            } else {
                format!("{:>width$}", line)
            }
        })
        .collect();
    Block::from_lines(lines, width)
}

/// Renders the collapsed value of the coefficients as a three-line block:
/// reduced numerator, dash rule, reduced denominator.
///
/// The numeric work is delegated to [collapse], so the result is always
/// fully reduced with the sign on the numerator. Fails like [collapse]
/// does: [InvalidInput][ContFracError::InvalidInput] on an empty sequence,
/// [DivisionByZero][ContFracError::DivisionByZero] on a malformed one.
pub fn render_reduced<T: Integer + Clone + Display>(
    coeffs: &[T],
) -> Result<Block, ContFracError> {
    let value = collapse(coeffs)?;
    let numer = Block::leaf(value.numer().to_string());
    let denom = Block::leaf(value.denom().to_string());
    Ok(Block::over(numer, denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_continued_single_test() {
        let block = render_continued(&[3]).unwrap();
        assert_eq!(block.lines(), &["3"]);
        assert_eq!(block.width(), 1);
    }

    #[test]
    fn render_continued_pair_test() {
        // width grows by len("1") + 3 at the new level
        let block = render_continued(&[1, 2]).unwrap();
        assert_eq!(block.lines(), &["    1", "1 + -", "    2"]);
    }

    #[test]
    fn render_continued_nested_test() {
        let block = render_continued(&[3, 7, 16]).unwrap();
        assert_eq!(
            block.lines(),
            &[
                "      1   ",
                "3 + ------",
                "        1 ",
                "    7 + --",
                "        16",
            ]
        );

        let block = render_continued(&[3, 7, 15, 1]).unwrap();
        assert_eq!(
            block.lines(),
            &[
                "        1     ",
                "3 + ----------",
                "          1   ",
                "    7 + ------",
                "             1",
                "        15 + -",
                "             1",
            ]
        );
    }

    #[test]
    fn render_width_invariant_test() {
        for coeffs in [vec![42], vec![-4, 1, 6], vec![3, 7, 15, 1, 292, 1]] {
            let block = render_continued(&coeffs).unwrap();
            assert!(block.lines().iter().all(|line| line.len() == block.width()));
            let block = render_reduced(&coeffs).unwrap();
            assert!(block.lines().iter().all(|line| line.len() == block.width()));
        }
    }

    #[test]
    fn render_reduced_test() {
        let block = render_reduced(&[3, 7, 15, 1]).unwrap();
        assert_eq!(block.lines(), &["355", "---", "113"]);

        let block = render_reduced(&[3]).unwrap();
        assert_eq!(block.lines(), &["3", "-", "1"]);

        let block = render_reduced(&[-4, 1, 6]).unwrap();
        assert_eq!(block.lines(), &["-22", "---", " 7 "]);
    }

    #[test]
    fn render_error_test() {
        assert_eq!(
            render_continued::<i32>(&[]).unwrap_err(),
            ContFracError::InvalidInput
        );
        assert_eq!(
            render_reduced::<i32>(&[]).unwrap_err(),
            ContFracError::InvalidInput
        );
        assert_eq!(
            render_reduced(&[3, 0]).unwrap_err(),
            ContFracError::DivisionByZero
        );
    }
}
