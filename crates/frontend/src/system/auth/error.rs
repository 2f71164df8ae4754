use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("failed to send request: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// The server could not end the session; the local session is kept
    #[error("session termination failed: {0}")]
    SessionTermination(String),
}
