use std::fmt;

/// A rectangular block of text used to lay out nested fractions.
///
/// Every line has exactly `width` characters; a block can be nested as the
/// denominator of a larger block without disturbing the alignment.
/// `Display` joins the lines with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// A single-line block holding `text` verbatim
    pub(crate) fn leaf(text: String) -> Self {
        let width = text.len();
        Block {
            lines: vec![text],
            width,
        }
    }

    pub(crate) fn from_lines(lines: Vec<String>, width: usize) -> Self {
        debug_assert!(lines.iter().all(|line| line.len() == width));
        Block { lines, width }
    }

    /// Stacks `numer` over `denom` as a fraction: both blocks centered to
    /// the wider of the two, separated by a dash rule of that width.
    pub(crate) fn over(numer: Block, denom: Block) -> Self {
        let width = numer.width.max(denom.width);
        let mut lines = Vec::with_capacity(numer.lines.len() + denom.lines.len() + 1);
        lines.extend(numer.lines.iter().map(|line| format!("{:^width$}", line)));
        lines.push("-".repeat(width));
        lines.extend(denom.lines.iter().map(|line| format!("{:^width$}", line)));
        Block { lines, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
