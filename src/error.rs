use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text input holds a character that has no single-byte (ISO-8859-1) encoding.
    #[error("character {ch:?} at index {index} is outside the single-byte range 0..=255")]
    NonLatin1Char { ch: char, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
