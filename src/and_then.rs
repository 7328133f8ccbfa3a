use crate::concat::Concat;
use crate::error::{ParseError, Part};
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that runs two parsers in order and concatenates their values
///
/// If the first parser fails the second is never attempted. Either failure is
/// wrapped in a `SequenceFailure` naming the side that failed and the label.
///
/// Example:
/// ```
/// use strcomb::and_then::AndThenExt;
/// use strcomb::char::is_char;
/// use strcomb::parser::Parser;
///
/// let parser = is_char('a').and_then(is_char('b'), "ab");
/// assert_eq!(parser.parse("abc").unwrap(), ("ab".to_string(), "c"));
/// ```
#[derive(Debug, Clone)]
pub struct AndThen<P1, P2> {
    parser1: P1,
    parser2: P2,
    label: Cow<'static, str>,
}

impl<P1, P2> AndThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2, label: impl Into<Cow<'static, str>>) -> Self {
        AndThen {
            parser1,
            parser2,
            label: label.into(),
        }
    }
}

impl<'code, P1, P2, O> Parser<'code> for AndThen<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
    O: Concat,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let (first, rest) = self
            .parser1
            .parse(input)
            .map_err(|e| ParseError::sequence(Part::First, self.label.clone(), e))?;
        let (second, rest) = self
            .parser2
            .parse(rest)
            .map_err(|e| ParseError::sequence(Part::Second, self.label.clone(), e))?;
        Ok((first.concat(second), rest))
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P1, P2, O>(
    parser1: P1,
    parser2: P2,
    label: impl Into<Cow<'static, str>>,
) -> AndThen<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
    O: Concat,
{
    AndThen::new(parser1, parser2, label)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<P>(self, other: P, label: impl Into<Cow<'static, str>>) -> AndThen<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
        Self::Output: Concat,
    {
        AndThen::new(self, other, label)
    }
}

/// Implement AndThenExt for all parsers
impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
