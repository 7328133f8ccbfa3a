use std::borrow::Cow;
use std::fmt;

/// Which half of a sequence failed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Part {
    First,
    Second,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::First => write!(f, "first"),
            Part::Second => write!(f, "second"),
        }
    }
}

/// Error returned when a parser does not match its input
///
/// The two primitive variants describe the actual mismatch. The composite
/// variants wrap the error of the sub-parser that failed and add one layer of
/// context, so a failure deep inside a grammar reads as a chain of labels
/// ending in the concrete expected-vs-found pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was exhausted before a character could be matched
    #[error("no more input")]
    EndOfInput { expected: Cow<'static, str> },

    /// The next character is not in the acceptance set
    #[error("Expected '{expected}'. Got '{found}'")]
    UnexpectedCharacter {
        expected: Cow<'static, str>,
        found: char,
    },

    /// One side of a labelled sequence failed
    #[error("{part} group of '{label}' failed: {source}")]
    SequenceFailure {
        part: Part,
        label: Cow<'static, str>,
        #[source]
        source: Box<ParseError>,
    },

    /// A repetition did not match even once
    #[error("no matches for '{label}': {source}")]
    NoneMatched {
        label: Cow<'static, str>,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn sequence(part: Part, label: Cow<'static, str>, inner: ParseError) -> Self {
        ParseError::SequenceFailure {
            part,
            label,
            source: Box::new(inner),
        }
    }

    pub(crate) fn none_matched(label: Cow<'static, str>, inner: ParseError) -> Self {
        ParseError::NoneMatched {
            label,
            source: Box::new(inner),
        }
    }

    /// The wrapped error one layer down, if this is a composite error
    pub fn inner(&self) -> Option<&ParseError> {
        match self {
            ParseError::EndOfInput { .. } | ParseError::UnexpectedCharacter { .. } => None,
            ParseError::SequenceFailure { source, .. } | ParseError::NoneMatched { source, .. } => {
                Some(&**source)
            }
        }
    }

    /// Follow the chain of wrapped errors down to the primitive mismatch
    pub fn innermost(&self) -> &ParseError {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    /// Labels of the composite layers, outermost first
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        let mut current = self;
        loop {
            match current {
                ParseError::SequenceFailure { label, source, .. }
                | ParseError::NoneMatched { label, source } => {
                    labels.push(&**label);
                    current = source;
                }
                ParseError::EndOfInput { .. } | ParseError::UnexpectedCharacter { .. } => {
                    return labels;
                }
            }
        }
    }

    /// The acceptance set of the primitive matcher that produced this error
    pub fn expected(&self) -> &str {
        match self.innermost() {
            ParseError::EndOfInput { expected } | ParseError::UnexpectedCharacter { expected, .. } => {
                &**expected
            }
            // innermost() never stops on a composite variant
            ParseError::SequenceFailure { .. } | ParseError::NoneMatched { .. } => "",
        }
    }
}
