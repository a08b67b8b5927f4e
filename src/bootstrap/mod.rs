pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, ResolvedConfig};
pub use run::run;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{wire_dependencies, WiringError};
