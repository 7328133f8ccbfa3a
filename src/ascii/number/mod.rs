//! A JSON-style decimal number grammar built only from the public combinators
//!
//! ```text
//! number   = fraction | [1-9] digits? ("." digits)? | "0"
//! fraction = "0" "." digits
//! ```
//!
//! Repetition is greedy and never backtracks, so `digits?` after a leading
//! non-zero digit is written as `digits | digit?` rather than relying on
//! the sequence to give characters back.

use crate::and_then::AndThenExt;
use crate::char::is_char;
use crate::map::MapExt;
use crate::or_else::OrElseExt;
use crate::parser::Parser;
use crate::zero_or_one::ZeroOrOneExt;

pub mod digit;

pub use digit::{digit, digits, one_to_nine};

/// Parser for a literal decimal point
pub fn decimal_point<'code>() -> impl Parser<'code, Output = String> + Clone {
    is_char('.')
}

/// Parser for numbers below one written with a leading zero, e.g. `0.123`
pub fn fraction<'code>() -> impl Parser<'code, Output = String> + Clone {
    is_char('0')
        .and_then(decimal_point(), "zero and decimal")
        .and_then(digits(), "fraction")
}

/// Parser for numbers starting with a non-zero digit, e.g. `10089` or `9230000.00`
pub fn greater_than_one<'code>() -> impl Parser<'code, Output = String> + Clone {
    let leading_digits = digits().or_else(digit().zero_or_one());
    let decimals = decimal_point()
        .and_then(digits(), "decimal followed by digit")
        .zero_or_one();

    one_to_nine()
        .and_then(leading_digits, "1-9 followed by digits")
        .and_then(decimals, "number greater than one")
}

/// Parser that matches a decimal number and returns the matched text
///
/// Example:
/// ```
/// use strcomb::ascii::number;
/// use strcomb::parser::Parser;
///
/// assert_eq!(number().parse("9230000.00").unwrap(), ("9230000.00".to_string(), ""));
/// assert_eq!(number().parse("0.5,").unwrap(), ("0.5".to_string(), ","));
/// ```
pub fn number<'code>() -> impl Parser<'code, Output = String> + Clone {
    fraction().or_else(greater_than_one()).or_else(is_char('0'))
}

/// Parser that matches a decimal number and returns its value
pub fn number_value<'code>() -> impl Parser<'code, Output = f64> + Clone {
    // Every text number() accepts is valid float syntax
    number().map(|text: String| text.parse::<f64>().unwrap_or(f64::NAN))
}
