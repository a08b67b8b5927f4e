pub mod change;
pub mod model;
pub mod revision;

pub use change::SettingsChange;
pub use model::Settings;
pub use revision::SettingsRevision;
