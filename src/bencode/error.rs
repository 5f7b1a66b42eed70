use thiserror::Error;

/// Failure to decode or encode a bencoded admin message.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The buffer ended inside a value, e.g. a datagram was truncated.
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    #[error("invalid string length")]
    InvalidStringLength,

    /// A byte that cannot start a value, with its offset.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    #[error("dictionary key at offset {0} is not a byte string")]
    NonStringKey(usize),

    #[error("trailing data after value")]
    TrailingData,

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
