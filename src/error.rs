//! Error types for acqbuf-client.

use std::io;

use thiserror::Error;

/// Main error type for all exchange operations.
///
/// Every variant aborts the transaction that produced it. Nothing allocated
/// during a failed transaction survives to the caller, so there is never
/// cleanup to perform after an error.
#[derive(Debug, Error)]
pub enum AcqbufError {
    /// The endpoint stopped accepting bytes before the full buffer was sent.
    ///
    /// Covers both an explicit zero-length write result and an I/O failure
    /// mid-transfer (including the peer closing the connection).
    #[error("short write: sent {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes accepted by the endpoint before the failure.
        written: usize,
        /// Bytes that should have been sent.
        expected: usize,
        /// Underlying I/O error, if the endpoint reported one.
        #[source]
        source: Option<io::Error>,
    },

    /// The endpoint closed or failed before the full buffer was received.
    ///
    /// End-of-stream short of the expected length is always this error,
    /// never a silently truncated result.
    #[error("short read: received {read} of {expected} bytes")]
    ShortRead {
        /// Bytes received before the failure.
        read: usize,
        /// Bytes that should have been received.
        expected: usize,
        /// Underlying I/O error, if the endpoint reported one.
        #[source]
        source: Option<io::Error>,
    },

    /// The response header carries a protocol version this client does not
    /// speak. The rest of the response was not read: a foreign version means
    /// the size field and layout cannot be trusted.
    #[error("protocol version mismatch: expected {expected}, server sent {received}")]
    VersionMismatch {
        /// Version the exchange was configured to require.
        expected: u16,
        /// Version found in the response header.
        received: u16,
    },

    /// The response header declares a payload larger than the configured
    /// maximum.
    #[error("declared payload size {declared} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Size declared by the peer.
        declared: u32,
        /// Maximum this client will allocate.
        max: u32,
    },

    /// The response payload buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for response payload")]
    AllocationFailed {
        /// Size of the refused allocation.
        requested: usize,
    },
}

/// Result type alias using AcqbufError.
pub type Result<T> = std::result::Result<T, AcqbufError>;
