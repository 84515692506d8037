use crate::utils::bits;

/// One displayed bit position of a comparison.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct BitDiff {
    pub index: u32,
    pub left: u8,
    pub right: u8,
}

impl BitDiff {
    pub fn differs(&self) -> bool {
        self.left != self.right
    }
}

/// Compares the low `length` bits of both numbers, most significant first.
pub fn differentiate(left: u64, right: u64, length: u32) -> Vec<BitDiff> {
    (0..length)
        .rev()
        .map(|index| BitDiff {
            index,
            left: bits::get_bit(left, index),
            right: bits::get_bit(right, index),
        })
        .collect()
}
