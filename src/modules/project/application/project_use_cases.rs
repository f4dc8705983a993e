use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, ListProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
}
