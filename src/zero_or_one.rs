use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator that makes the given parser optional
///
/// Never fails: when the inner parser does not match, this succeeds with the
/// default value of the output type and the input left untouched.
#[derive(Debug, Clone)]
pub struct ZeroOrOne<P> {
    parser: P,
}

impl<P> ZeroOrOne<P> {
    pub fn new(parser: P) -> Self {
        ZeroOrOne { parser }
    }
}

impl<'code, P> Parser<'code> for ZeroOrOne<P>
where
    P: Parser<'code>,
    P::Output: Default,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(input) {
            Ok(result) => Ok(result),
            Err(error) => {
                trace!(%error, "optional parser absent");
                Ok((P::Output::default(), input))
            }
        }
    }
}

/// Convenience function to create a ZeroOrOne parser
pub fn zero_or_one<'code, P>(parser: P) -> ZeroOrOne<P>
where
    P: Parser<'code>,
    P::Output: Default,
{
    ZeroOrOne::new(parser)
}

/// Extension trait to add .zero_or_one() method support for parsers
pub trait ZeroOrOneExt<'code>: Parser<'code> + Sized {
    fn zero_or_one(self) -> ZeroOrOne<Self>
    where
        Self::Output: Default,
    {
        ZeroOrOne::new(self)
    }
}

/// Implement ZeroOrOneExt for all parsers
impl<'code, P> ZeroOrOneExt<'code> for P where P: Parser<'code> {}
