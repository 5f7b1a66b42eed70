use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    /// The liveness probe got no answer, or not the expected `pong`.
    #[error("admin interface did not respond to ping")]
    NotResponding,

    /// The daemon explicitly rejected the shared secret.
    #[error("admin interface rejected password")]
    AuthenticationRejected,

    /// The daemon answered the probe but handed out no cookie.
    #[error("admin interface did not offer cookie")]
    NoCookie,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bencode error: {0}")]
    Bencode(#[from] crate::bencode::BencodeError),

    #[error("timeout")]
    Timeout,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
