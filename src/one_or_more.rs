use crate::concat::Concat;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Values of all successful applications are concatenated. Repetition is
/// greedy and stops at the first failure; the input that failing attempt may
/// have looked at is left unconsumed. The inner parser must consume input on
/// every success, otherwise the loop never ends.
#[derive(Debug, Clone)]
pub struct OneOrMore<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        OneOrMore {
            parser,
            label: label.into(),
        }
    }
}

impl<'code, P> Parser<'code> for OneOrMore<P>
where
    P: Parser<'code>,
    P::Output: Concat,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (mut value, mut rest) = self
            .parser
            .parse(input)
            .map_err(|e| ParseError::none_matched(self.label.clone(), e))?;
        let mut count = 1usize;

        loop {
            match self.parser.parse(rest) {
                Ok((next, next_rest)) => {
                    value = value.concat(next);
                    rest = next_rest;
                    count += 1;
                }
                Err(error) => {
                    trace!(label = %self.label, count, %error, "repetition stopped");
                    break;
                }
            }
        }

        Ok((value, rest))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> OneOrMore<P>
where
    P: Parser<'code>,
    P::Output: Concat,
{
    OneOrMore::new(parser, label)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait OneOrMoreExt<'code>: Parser<'code> + Sized {
    fn one_or_more(self, label: impl Into<Cow<'static, str>>) -> OneOrMore<Self>
    where
        Self::Output: Concat,
    {
        OneOrMore::new(self, label)
    }
}

/// Implement OneOrMoreExt for all parsers
impl<'code, P> OneOrMoreExt<'code> for P where P: Parser<'code> {}
