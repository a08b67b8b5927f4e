pub mod transport;

pub use transport::{HttpClipTransport, DEFAULT_REQUEST_TIMEOUT};
