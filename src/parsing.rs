//! Parsing of fractions written as `numerator/denominator`.

use nom::character::complete::{i64 as signed_int, multispace0};
use nom::combinator::all_consuming;
use nom::sequence::{delimited, preceded};
use nom::IResult;

use crate::fract::{BaseInt, FractionError};

/// How strictly each side of `"A/B"` is read.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ParsePolicy {
    /// The whole segment, apart from surrounding whitespace, must be an optionally signed integer.
    #[default]
    Strict,
    /// Reads an optionally signed integer after any leading whitespace and ignores whatever
    /// follows it, so `"12abc"` reads as 12. A segment with no leading digits is still an error.
    Lenient,
}

/// Parses an integer that fills the whole segment, allowing whitespace around it.
pub fn strict_integer(input: &str) -> IResult<&str, BaseInt> {
    all_consuming(delimited(multispace0, signed_int, multispace0))(input)
}

/// Parses the leading integer of a segment, returning the unparsed rest.
pub fn lenient_integer(input: &str) -> IResult<&str, BaseInt> {
    preceded(multispace0, signed_int)(input)
}

fn segment(input: &str, policy: ParsePolicy) -> Option<BaseInt> {
    let parsed = match policy {
        ParsePolicy::Strict => strict_integer(input),
        ParsePolicy::Lenient => lenient_integer(input),
    };
    parsed.ok().map(|(_rest, n)| n)
}

/// Splits `input` on `/` and reads both sides. The denominator is not checked for zero here.
pub fn fraction_parts(
    input: &str,
    policy: ParsePolicy,
) -> Result<(BaseInt, BaseInt), FractionError> {
    let invalid = || {
        tracing::debug!(input, ?policy, "invalid fraction text");
        FractionError::InvalidFormat(input.to_owned())
    };

    let segments: Vec<&str> = input.split('/').collect();
    let [num, denom] = segments[..] else {
        return Err(invalid());
    };

    let num = segment(num, policy).ok_or_else(invalid)?;
    let denom = segment(denom, policy).ok_or_else(invalid)?;
    Ok((num, denom))
}

/// Reads `"A/B"` or a bare `"A"` in the given radix, for [`num_traits::Num::from_str_radix`].
/// Radixes outside `2..=36` are an error rather than a panic.
pub fn radix_parts(input: &str, radix: u32) -> Result<(BaseInt, BaseInt), FractionError> {
    let invalid = || FractionError::InvalidFormat(input.to_owned());
    if !(2..=36).contains(&radix) {
        tracing::debug!(input, radix, "unsupported radix");
        return Err(invalid());
    }
    let int = |s: &str| BaseInt::from_str_radix(s.trim(), radix).map_err(|_e| invalid());

    match input.split('/').collect::<Vec<_>>()[..] {
        [n] => Ok((int(n)?, 1)),
        [n, d] => Ok((int(n)?, int(d)?)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strict_integer() {
        assert_eq!(strict_integer("42"), Ok(("", 42)));
        assert_eq!(strict_integer(" -7 "), Ok(("", -7)));
        assert_eq!(strict_integer("+3"), Ok(("", 3)));
        assert!(strict_integer("12abc").is_err());
        assert!(strict_integer("").is_err());
        assert!(strict_integer("99999999999999999999").is_err());
    }

    #[test]
    fn test_lenient_integer() {
        assert_eq!(lenient_integer("12abc"), Ok(("abc", 12)));
        assert_eq!(lenient_integer("  -4.5"), Ok((".5", -4)));
        assert!(lenient_integer("abc").is_err());
        assert!(lenient_integer("").is_err());
    }

    #[test]
    fn test_fraction_parts() {
        assert_eq!(fraction_parts("30/40", ParsePolicy::Strict), Ok((30, 40)));
        assert_eq!(fraction_parts(" 3 / -4 ", ParsePolicy::Strict), Ok((3, -4)));
        assert_eq!(fraction_parts("5/0", ParsePolicy::Strict), Ok((5, 0)));
        assert_eq!(fraction_parts("12abc/4x", ParsePolicy::Lenient), Ok((12, 4)));
        for bad in ["12abc/4", "3", "1/2/3", "/4", "a/b", ""] {
            assert_eq!(
                fraction_parts(bad, ParsePolicy::Strict),
                Err(FractionError::InvalidFormat(bad.to_owned())),
                "{bad:?}"
            );
        }
        assert!(fraction_parts("x1/2", ParsePolicy::Lenient).is_err());
    }

    #[test]
    fn test_radix_parts() {
        assert_eq!(radix_parts("ff/10", 16), Ok((255, 16)));
        assert_eq!(radix_parts("-11", 2), Ok((-3, 1)));
        assert!(radix_parts("2/3", 2).is_err());
        assert!(radix_parts("1/2/3", 10).is_err());
        assert_eq!(
            radix_parts("1/2", 40),
            Err(FractionError::InvalidFormat("1/2".to_owned()))
        );
        assert!(radix_parts("0", 1).is_err());
    }
}
