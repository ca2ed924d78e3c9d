use thiserror::Error;

/// Errors returned by the length-checked hashing entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("length {len} exceeds the {available} bytes available in the buffer")]
    LengthOutOfBounds { len: usize, available: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
