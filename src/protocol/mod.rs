//! Protocol module - wire format and message model.
//!
//! This module implements the binary frame layer:
//! - 8-byte header encoding/decoding
//! - Command code constants (opaque pass-through)
//! - Message struct with typed accessors

mod message;
mod wire_format;

pub use message::Message;
pub use wire_format::{
    check_payload_size, command, Header, DEFAULT_MAX_PAYLOAD_SIZE, HEADER_SIZE, PROTOCOL_VERSION,
};
