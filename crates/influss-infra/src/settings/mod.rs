pub mod file_repo;
pub mod observable;

pub use file_repo::FileSettingsRepository;
pub use observable::ObservableSettings;
