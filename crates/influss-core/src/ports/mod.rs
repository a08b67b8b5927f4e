//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, keeping the clip logic independent of storage, HTTP
//! client and feedback channel.

pub mod app_dirs;
pub mod clip_transport;
pub mod errors;
pub mod feedback;
pub mod settings;

pub use app_dirs::AppDirsPort;
pub use clip_transport::{ClipTransportPort, TransportError};
pub use errors::AppDirsError;
pub use feedback::FeedbackPort;
pub use settings::{SettingsObserverPort, SettingsPort};
