use std::fmt::{Display, Formatter};

use thiserror::Error;

/// The kind of an object: either a named atom or a set.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Kind {
    Atom,
    Set,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Atom => write!(f, "atom"),
            Kind::Set => write!(f, "set"),
        }
    }
}

/// Errors raised by operations over objects.
///
/// A [`SetError::TypeMismatch`] signals a precondition violation in the calling code:
/// something that is not a set was used where a set was required.
/// It is meant to be propagated, not recovered from.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SetError {
    #[error("type mismatch: expected {expected}, found {found_kind} `{found}`")]
    TypeMismatch {
        expected: Kind,
        found_kind: Kind,
        found: String,
    },
}

pub type SetResult<T> = Result<T, SetError>;
