use crate::diff::BitDiff;

/// Width of one bit cell in every row.
pub const CELL_WIDTH: usize = 3;

const MARKER: char = '|';

/// The four aligned text rows of a comparison.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct BitRows {
    pub legend: String,
    pub left: String,
    pub marker: String,
    pub right: String,
}

/// Right-justifies one cell per bit position.
fn row<F: Fn(&BitDiff) -> String>(diffs: &[BitDiff], cell: F) -> String {
    diffs
        .iter()
        .map(|diff| format!("{:>w$}", cell(diff), w = CELL_WIDTH))
        .collect()
}

impl BitRows {
    pub fn new(diffs: &[BitDiff]) -> BitRows {
        BitRows {
            legend: row(diffs, |diff| diff.index.to_string()),
            left: row(diffs, |diff| diff.left.to_string()),
            marker: row(diffs, |diff| (if diff.differs() { MARKER } else { ' ' }).to_string()),
            right: row(diffs, |diff| diff.right.to_string()),
        }
    }

    /// Like `new`, with each value row prefixed by its operand in hex.
    ///
    /// Both operands are zero-padded to the longer hex representation and
    /// the legend and marker rows get blanks of the same width, so the bit
    /// columns stay aligned.
    pub fn with_operands(diffs: &[BitDiff], left: u64, right: u64) -> BitRows {
        let rows = BitRows::new(diffs);
        let width = format!("{:x}", left).len().max(format!("{:x}", right).len());
        let blank = " ".repeat(width);

        BitRows {
            legend: format!("{}{}", blank, rows.legend),
            left: format!("{:0w$x}{}", left, rows.left, w = width),
            marker: format!("{}{}", blank, rows.marker),
            right: format!("{:0w$x}{}", right, rows.right, w = width),
        }
    }
}

impl std::fmt::Display for BitRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.legend)?;
        writeln!(f, "{}", self.left)?;
        writeln!(f, "{}", self.marker)?;
        writeln!(f, "{}", self.right)?;
        Ok(())
    }
}
