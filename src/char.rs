use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches a single character from a fixed acceptance set
///
/// On success the matched character is returned as a one-character `String`
/// so it can be concatenated by `AndThen` and `OneOrMore`. An empty
/// acceptance set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharParser {
    accepted: Cow<'static, str>,
}

impl CharParser {
    pub fn new(accepted: impl Into<Cow<'static, str>>) -> Self {
        CharParser {
            accepted: accepted.into(),
        }
    }

    /// The characters this parser accepts
    pub fn accepted(&self) -> &str {
        &self.accepted
    }
}

impl<'code> Parser<'code> for CharParser {
    type Output = String;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(ch) if self.accepted.contains(ch) => Ok((ch.to_string(), chars.as_str())),
            Some(ch) => Err(ParseError::UnexpectedCharacter {
                expected: self.accepted.clone(),
                found: ch,
            }),
            None => Err(ParseError::EndOfInput {
                expected: self.accepted.clone(),
            }),
        }
    }
}

/// Convenience function to create a parser matching any character of `accepted`
///
/// Example:
/// ```
/// use strcomb::char::one_of;
/// use strcomb::parser::Parser;
///
/// let vowel = one_of("aeiou");
/// assert_eq!(vowel.parse("echo").unwrap(), ("e".to_string(), "cho"));
/// assert!(vowel.parse("xyz").is_err());
/// ```
pub fn one_of(accepted: impl Into<Cow<'static, str>>) -> CharParser {
    CharParser::new(accepted)
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> CharParser {
    CharParser::new(expected.to_string())
}
