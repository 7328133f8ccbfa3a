use crate::char::{is_char, one_of};
use crate::one_or_more::OneOrMoreExt;
use crate::or_else::OrElseExt;
use crate::parser::Parser;

/// Parser that matches a non-zero ASCII digit (1-9)
pub fn one_to_nine<'code>() -> impl Parser<'code, Output = String> + Clone {
    one_of("123456789")
}

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'code>() -> impl Parser<'code, Output = String> + Clone {
    is_char('0').or_else(one_to_nine())
}

/// Parser that matches a run of one or more ASCII digits
pub fn digits<'code>() -> impl Parser<'code, Output = String> + Clone {
    digit().one_or_more("digits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_zero() {
        assert_eq!(digit().parse("0abc").unwrap(), ("0".to_string(), "abc"));
    }

    #[test]
    fn test_digit_nine() {
        assert_eq!(digit().parse("9xyz").unwrap(), ("9".to_string(), "xyz"));
    }

    #[test]
    fn test_digit_letter_fails() {
        // Last alternative's error wins
        let error = digit().parse("a123").unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedCharacter {
                expected: "123456789".into(),
                found: 'a'
            }
        );
    }

    #[test]
    fn test_one_to_nine_rejects_zero() {
        assert!(one_to_nine().parse("0").is_err());
        assert_eq!(one_to_nine().parse("10").unwrap(), ("1".to_string(), "0"));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits().parse("10089").unwrap(), ("10089".to_string(), ""));
        assert_eq!(digits().parse("42.5").unwrap(), ("42".to_string(), ".5"));

        let error = digits().parse(".5").unwrap_err();
        assert_eq!(error.labels(), vec!["digits"]);
    }
}
