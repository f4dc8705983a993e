pub mod app_state_builder;
pub mod project_fixtures;
pub mod stubs;
