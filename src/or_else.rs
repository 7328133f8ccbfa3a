use crate::parser::{ParseResult, Parser};
use tracing::trace;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original input. When both fail
/// the error of the second parser is returned and the first is discarded.
#[derive(Debug, Clone)]
pub struct OrElse<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrElse { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(input) {
            Ok(result) => Ok(result),
            Err(error) => {
                trace!(%error, "first alternative failed, trying second");
                self.parser2.parse(input)
            }
        }
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrElseExt<'code>: Parser<'code> + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrElseExt for all parsers
impl<'code, P> OrElseExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an OrElse parser
pub fn or_else<'code, P1, P2, O>(parser1: P1, parser2: P2) -> OrElse<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    OrElse::new(parser1, parser2)
}
