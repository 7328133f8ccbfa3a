use crate::error::ParseError;

/// Result of running a parser: the produced value and the unconsumed input
pub type ParseResult<'code, T> = Result<(T, &'code str), ParseError>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// Returns Ok with the parsed value and the residual input on success,
    /// or Err if the parse fails. Parsers hold no state between calls, so
    /// running one twice on the same input gives the same result.
    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Type-erased parser that can be stored in collections or shared across threads
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + Send + Sync + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Parser backed by a plain function or closure
#[derive(Clone, Copy)]
pub struct FnParser<F> {
    function: F,
}

impl<'code, F, O> Parser<'code> for FnParser<F>
where
    F: Fn(&'code str) -> ParseResult<'code, O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (self.function)(input)
    }
}

/// Use a function from input to `ParseResult` as a parser
///
/// Example:
/// ```
/// use strcomb::parser::{Parser, from_fn};
///
/// let nothing = from_fn(|input| Ok((String::new(), input)));
/// assert_eq!(nothing.parse("abc").unwrap(), (String::new(), "abc"));
/// ```
pub fn from_fn<'code, F, O>(function: F) -> FnParser<F>
where
    F: Fn(&'code str) -> ParseResult<'code, O>,
{
    FnParser { function }
}
