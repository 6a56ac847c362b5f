use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("buffer of {actual} bytes is too short; expected at least {expected} bytes")]
    BufferTooShort { expected: usize, actual: usize },
    #[error("byte index {index} is out of range for a value of {size} bytes")]
    IndexOutOfRange { index: usize, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid byte order `{0}`")]
pub struct ParseEndianError(pub String);
