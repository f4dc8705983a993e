pub mod client;
pub mod project;
