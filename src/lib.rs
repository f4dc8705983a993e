pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::client;
pub use modules::project;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use crate::modules::project::application::project_use_cases::ProjectUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
}
