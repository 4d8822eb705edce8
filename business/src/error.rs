//! Failure taxonomy for the one fallible path in the system: the
//! member-list fetch. Every table operation is total; only loading
//! data can go wrong.

use thiserror::Error;

/// Why a member-list fetch produced no records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connection, TLS, ...).
    /// `ehttp` reports transport failures as strings.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body was not a JSON array of flat objects.
    #[error("malformed member list: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record in the response had no usable `id` field.
    #[error("record at index {0} has no id field")]
    MissingId(usize),
}
