/// Helper functions for bit operations.
pub mod bits {
    /// Calculates the number of bits a rust type requires.
    pub const fn bit_size<T>() -> u32 {
        (std::mem::size_of::<T>() * 8) as u32
    }

    /// Extracts bit `index` of `n` as 0 or 1.
    pub const fn get_bit(n: u64, index: u32) -> u8 {
        ((n >> index) & 1) as u8
    }

    /// Smallest of 8, 16, 32 or 64 bits that can hold `n`.
    pub fn natural_width(n: u64) -> u32 {
        if n <= u8::MAX as u64 {
            bit_size::<u8>()
        } else if n <= u16::MAX as u64 {
            bit_size::<u16>()
        } else if n <= u32::MAX as u64 {
            bit_size::<u32>()
        } else {
            bit_size::<u64>()
        }
    }
}
