use std::panic::Location;

use thiserror::Error;

use crate::Values;

/// Failures of the dispatch engine. These never reach the caller as values:
/// the public entry points turn them into panics.
#[derive(Debug, Error)]
pub enum MockError {
    #[error("{mock}unexpected method call: {method}{arguments}{hint}")]
    UnexpectedCall {
        mock: String,
        method: String,
        arguments: Values,
        hint: String,
    },
    #[error("{mock}couldn't get the caller information at {location}")]
    CallerUnavailable {
        mock: String,
        location: &'static Location<'static>,
    },
}

/// Errors raised while turning configured values back into typed data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error("expected {expected} values, found {found}")]
    Arity { expected: usize, found: usize },
    #[error("no value at index {index} (length {len})")]
    MissingIndex { index: usize, len: usize },
    #[error("value {index}: {source}")]
    At {
        index: usize,
        #[source]
        source: Box<ValueError>,
    },
}

impl ValueError {
    pub fn at(self, index: usize) -> Self {
        ValueError::At {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: &crate::Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }
}
