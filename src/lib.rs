//! # strcomb - Parser Combinator Library
//!
//! Small composable parsers over string slices. A parser consumes a prefix of
//! its input and either succeeds with a value and the unconsumed remainder, or
//! fails with a [`ParseError`] describing what was expected.
//!
//! - **Primitive**: [`one_of`] matches a single character from a set
//! - **Sequencing**: [`and_then`] runs two parsers and concatenates their values
//! - **Alternation**: [`or_else`] falls back to a second parser on failure
//! - **Repetition**: [`one_or_more`] applies a parser greedily, at least once
//! - **Optionality**: [`zero_or_one`] turns a failure into an empty match
//! - **Transformation**: [`map`] post-processes a successful value
//!
//! Parsers hold no mutable state, so a single parser value can be reused for
//! any number of inputs and shared between threads.
//!
//! ```
//! use strcomb::{AndThenExt, OneOrMoreExt, Parser, is_char, one_of};
//!
//! let digits = one_of("0123456789").one_or_more("digits");
//! let version = is_char('v').and_then(digits, "version");
//!
//! assert_eq!(version.parse("v42 beta").unwrap(), ("v42".to_string(), " beta"));
//! ```

pub mod and_then;
pub mod ascii;
pub mod char;
pub mod concat;
pub mod error;
pub mod map;
pub mod one_or_more;
pub mod or_else;
pub mod parser;
pub mod zero_or_one;

pub use and_then::{AndThen, AndThenExt, and_then};
pub use char::{CharParser, is_char, one_of};
pub use concat::Concat;
pub use error::{ParseError, Part};
pub use map::{Map, MapExt, map};
pub use one_or_more::{OneOrMore, OneOrMoreExt, one_or_more};
pub use or_else::{OrElse, OrElseExt, or_else};
pub use parser::{BoxedExt, BoxedParser, FnParser, ParseResult, Parser, from_fn};
pub use zero_or_one::{ZeroOrOne, ZeroOrOneExt, zero_or_one};
