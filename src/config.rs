use log::{debug, info};

use crate::error::{DiffError, LiteralError};
use crate::utils::bits;

pub const MAX_COMPARE_LENGTH: u32 = bits::bit_size::<u64>();

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Comparison {
    pub left: u64,
    pub right: u64,
    /// Number of low-order bits to show, always in `1..=MAX_COMPARE_LENGTH`.
    pub length: u32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Invocation {
    Usage,
    Compare(Comparison),
}

impl Invocation {
    /// Resolves the positional values given on the command line.
    ///
    /// Two values are the operands, a third one is the result length. Any
    /// other count asks for the usage text rather than failing.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Result<Invocation, DiffError> {
        let (left, right, length) = match values {
            [left, right] => (left.as_ref(), right.as_ref(), None),
            [left, right, length] => (left.as_ref(), right.as_ref(), Some(length.as_ref())),
            _ => {
                debug!("{} values given, showing usage", values.len());
                return Ok(Invocation::Usage);
            }
        };

        let left = parse_operand(left)?;
        let right = parse_operand(right)?;
        let length = match length {
            Some(literal) => parse_result_length(literal)?,
            None => select_length(left, right),
        };
        debug!("Comparing {:#x} and {:#x} over {} bits", left, right, length);

        Ok(Invocation::Compare(Comparison { left, right, length }))
    }
}

/// Parses an unsigned integer literal in decimal, `0x` hexadecimal or
/// leading-zero octal notation.
pub fn parse_literal(literal: &str) -> Result<u64, LiteralError> {
    let (digits, radix) = if let Some(hex) = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        (hex, 16)
    } else if literal.len() > 1 && literal.starts_with('0') {
        (&literal[1..], 8)
    } else {
        (literal, 10)
    };

    // from_str_radix would also take a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::Malformed);
    }

    u64::from_str_radix(digits, radix).map_err(|_| LiteralError::OutOfRange)
}

pub fn parse_operand(literal: &str) -> Result<u64, DiffError> {
    parse_literal(literal).map_err(|reason| DiffError::InvalidOperand {
        literal: literal.to_owned(),
        reason,
    })
}

/// Parses and bounds-checks an explicit result length.
///
/// Only a literal too large for 64 bits counts as an operand error, anything
/// else that is not a length in `1..=MAX_COMPARE_LENGTH` is a length error.
pub fn parse_result_length(literal: &str) -> Result<u32, DiffError> {
    let length = match parse_literal(literal) {
        Ok(length) => length,
        Err(LiteralError::Malformed) => {
            return Err(DiffError::MalformedResultLength(literal.to_owned()))
        }
        Err(reason @ LiteralError::OutOfRange) => {
            return Err(DiffError::InvalidOperand { literal: literal.to_owned(), reason })
        }
    };
    if length == 0 || length > MAX_COMPARE_LENGTH as u64 {
        return Err(DiffError::InvalidResultLength(length));
    }
    Ok(length as u32)
}

/// Picks the narrowest of 8, 16, 32 or 64 bits that holds the larger operand.
pub fn select_length(left: u64, right: u64) -> u32 {
    let length = bits::natural_width(left.max(right));
    info!("No result length given, using {} bits", length);
    length
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <operand 1> <operand 2> [result length]\n\
         \n\
         All values can be given as decimal, hexadecimal or octal values.\n\
         Result length is a number between 1 and {max}.\n\
         Without a result length the smallest of 8, 16, 32 or 64 bits that\n\
         holds both operands is used.\n\
         \n\
         Example: {program} 0x1337 0x1338 15\n",
        program = program,
        max = MAX_COMPARE_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(values: &[&str]) -> Comparison {
        match Invocation::from_values(values) {
            Ok(Invocation::Compare(comparison)) => comparison,
            other => panic!("expected a comparison, got {:?}", other),
        }
    }

    #[test]
    fn literal_notations() {
        assert_eq!(parse_literal("1337"), Ok(1337));
        assert_eq!(parse_literal("0x1337"), Ok(0x1337));
        assert_eq!(parse_literal("0XaBc"), Ok(0xabc));
        assert_eq!(parse_literal("0755"), Ok(0o755));
        assert_eq!(parse_literal("0"), Ok(0));
        assert_eq!(parse_literal("00"), Ok(0));
        assert_eq!(parse_literal("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_literal("0xffffffffffffffff"), Ok(u64::MAX));
    }

    #[test]
    fn malformed_literals() {
        for literal in ["", "abc123xyz", "0x", "+5", "-5", " 5", "5 ", "089", "0xg", "1.5"] {
            assert_eq!(parse_literal(literal), Err(LiteralError::Malformed), "{:?}", literal);
        }
    }

    #[test]
    fn out_of_range_literals() {
        assert_eq!(parse_literal("18446744073709551616"), Err(LiteralError::OutOfRange));
        assert_eq!(parse_literal("0x1ffffffffffffffff"), Err(LiteralError::OutOfRange));
        assert_eq!(parse_literal("02000000000000000000000"), Err(LiteralError::OutOfRange));
    }

    #[test]
    fn two_values_select_length() {
        let comparison = compare(&["1337", "1338"]);
        assert_eq!(comparison.left, 1337);
        assert_eq!(comparison.right, 1338);
        assert_eq!(comparison.length, 16);

        assert_eq!(compare(&["0x1337", "0x1338"]).length, 16);
    }

    #[test]
    fn third_value_is_explicit_length() {
        let comparison = compare(&["5", "9", "4"]);
        assert_eq!(comparison.length, 4);
        assert_eq!(compare(&["5", "9", "64"]).length, 64);
        assert_eq!(compare(&["5", "9", "0x1"]).length, 1);
    }

    #[test]
    fn length_out_of_bounds() {
        assert_eq!(
            Invocation::from_values(&["5", "9", "0"]),
            Err(DiffError::InvalidResultLength(0))
        );
        assert_eq!(
            Invocation::from_values(&["5", "9", "65"]),
            Err(DiffError::InvalidResultLength(65))
        );
    }

    #[test]
    fn malformed_length_is_a_length_error() {
        for literal in ["four", "-1", "0x", "+4"] {
            let err = Invocation::from_values(&["5", "9", literal]).unwrap_err();
            assert_eq!(err, DiffError::MalformedResultLength(literal.to_string()));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn oversized_length_literal_is_an_operand_error() {
        let err = Invocation::from_values(&["5", "9", "0x10000000000000000"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn invalid_operand_keeps_literal() {
        let err = Invocation::from_values(&["abc123xyz", "1"]).unwrap_err();
        assert_eq!(
            err,
            DiffError::InvalidOperand {
                literal: "abc123xyz".to_string(),
                reason: LiteralError::Malformed,
            }
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn operands_are_checked_before_length() {
        let err = Invocation::from_values(&["1", "0x10000000000000000", "0"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn other_counts_show_usage() {
        let none: [&str; 0] = [];
        assert_eq!(Invocation::from_values(&none), Ok(Invocation::Usage));
        assert_eq!(Invocation::from_values(&["1"]), Ok(Invocation::Usage));
        assert_eq!(Invocation::from_values(&["1", "2", "3", "4"]), Ok(Invocation::Usage));
        // count wins over content
        assert_eq!(Invocation::from_values(&["x"]), Ok(Invocation::Usage));
    }

    #[test]
    fn selector_tiers() {
        assert_eq!(select_length(0, 0), 8);
        assert_eq!(select_length(0, 0xff), 8);
        assert_eq!(select_length(0, 0x100), 16);
        assert_eq!(select_length(0, 0xffff), 16);
        assert_eq!(select_length(0, 0x1_0000), 32);
        assert_eq!(select_length(0, 0xffff_ffff), 32);
        assert_eq!(select_length(0, 0x1_0000_0000), 64);
        assert_eq!(select_length(0x1_0000_0000, 0), 64);
    }

    #[test]
    fn selector_is_monotonic() {
        let mut previous = 0;
        for shift in 0..64 {
            let length = select_length(1 << shift, 0);
            assert!(length >= previous);
            assert!(length > shift);
            previous = length;
        }
    }

    #[test]
    fn usage_lists_forms() {
        let text = usage("diff64");
        assert!(text.contains("Usage: diff64 <operand 1> <operand 2> [result length]"));
        assert!(text.contains("between 1 and 64"));
        assert!(text.contains("Example: diff64 0x1337 0x1338"));
    }
}
