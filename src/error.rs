//! Error type shared by the overlay's collaborator seams.
//!
//! ERROR HANDLING
//! ==============
//! Collaborators (HTTP, storage, transport payload decoding) return
//! `Result<_, OverlayError>`. The public reconciler operations never surface
//! these: each one is logged and converted into a safe default or the
//! `localStorage` fallback path.

/// Errors produced by overlay collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// A response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The durable key-value store rejected a read or write.
    #[error("storage failed: {0}")]
    Storage(String),

    /// An inbound notification payload did not match its event's shape.
    #[error("malformed {event} payload: {reason}")]
    Payload { event: &'static str, reason: String },

    /// The overlay configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}
