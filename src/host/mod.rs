//! Browser native-messaging host.
//!
//! The extension's background page talks to `influss host` over stdin/stdout:
//! one JSON document per frame, each preceded by its length.

pub mod framing;
pub mod session;

pub use framing::{read_frame, write_frame, MAX_HOST_FRAME_BYTES};
pub use session::HostSession;
