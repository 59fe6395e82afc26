//! Position parsing.

use num_bigint::BigInt;

use crate::errors::SolveError;

/// The position the driver asks about when none is given.
pub const DEFAULT_TARGET: u64 = 51_000_000_000;

/// Parse a 1-based position. Range checks happen against a concrete
/// grammar, in the [`Solver`](crate::Solver).
pub fn parse_target(input: &str) -> Result<BigInt, SolveError> {
    let trimmed = input.trim().replace('_', "");
    trimmed.parse().map_err(|_| SolveError::Parse {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_target("51000000000"), Ok(BigInt::from(51_000_000_000u64)));
        assert_eq!(parse_target(" 42\n"), Ok(BigInt::from(42)));
        assert_eq!(parse_target("51_000_000_000"), Ok(BigInt::from(51_000_000_000u64)));
    }

    #[test]
    fn test_parse_keeps_sign() {
        assert_eq!(parse_target("-3"), Ok(BigInt::from(-3)));
        assert_eq!(parse_target("0"), Ok(BigInt::from(0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_target("12x"),
            Err(SolveError::Parse {
                input: "12x".to_string()
            })
        );
        assert!(parse_target("").is_err());
        assert!(parse_target("1e9").is_err());
    }
}
