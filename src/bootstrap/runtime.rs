//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired `AppDeps`; commands and the host reach use
//! cases through `runtime.usecases().xxx()`.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::sync::Arc;

use influss_app::usecases::{ClipUrl, GetSettings, HandleTrigger, UpdateSettings};
use influss_app::{AppDeps, ClipService, ClipServiceHandle};
use tracing::debug;

use super::config::ResolvedConfig;

/// Backlog of triggers waiting for a dispatch task.
pub const CLIP_QUEUE_CAPACITY: usize = 32;

/// Application runtime with dependencies.
/// 包含所有应用依赖的运行时。
pub struct AppRuntime {
    pub deps: AppDeps,
    pub config: ResolvedConfig,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: ResolvedConfig) -> Self {
        Self { deps, config }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    /// Spawn the background clip service and return its handle.
    ///
    /// The service stops once every clone of the handle is dropped.
    pub fn start_clip_service(&self) -> ClipServiceHandle {
        let (service, handle) = ClipService::new(
            Arc::new(self.usecases().handle_trigger()),
            CLIP_QUEUE_CAPACITY,
        );
        tokio::spawn(service.run());
        debug!(capacity = CLIP_QUEUE_CAPACITY, "Clip service spawned");
        handle
    }
}

/// Use cases accessor, pre-wired with the runtime's ports.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn clip_url(&self) -> ClipUrl {
        ClipUrl::new(
            self.runtime.deps.settings.clone(),
            self.runtime.deps.transport.clone(),
        )
    }

    pub fn handle_trigger(&self) -> HandleTrigger {
        HandleTrigger::new(self.clip_url(), self.runtime.deps.feedback.clone())
    }
}
