use std::time::SystemTime;

/// One stored version of the settings, as seen by the store.
///
/// Two loads that observe the same revision read the same bytes. Stores that
/// cannot be written from outside the process report no revision at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRevision {
    pub modified: SystemTime,
    pub len: u64,
}
