//! Errors raised by the sampling primitives.
//!
//! Every variant except [`Error::InjectedFailure`] is a caller precondition
//! violation, detected before any randomness is drawn.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot draw from an empty pool")]
    EmptyPool,
    #[error("cannot sample {requested} distinct elements from a pool of {len} (at most len - 1 allowed)")]
    InvalidSampleSize { requested: usize, len: usize },
    #[error("bound strings differ in length: min has {min_len} characters, max has {max_len}")]
    LengthMismatch { min_len: usize, max_len: usize },
    #[error("unsupported character {character:?} at position {position}, only [0-9A-Za-z] is allowed")]
    InvalidCharacter { character: char, position: usize },
    #[error("bound strings must not be empty")]
    EmptyPattern,
    #[error("no integer lies between {min} and {max}")]
    DegenerateRange { min: f64, max: f64 },
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("injected failure (probability {probability})")]
    InjectedFailure { probability: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
