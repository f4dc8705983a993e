use std::sync::Arc;

use actix_web::web;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, ListProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::{StubCreateProjectUseCase, StubListProjectsUseCase};
use crate::AppState;

pub struct TestAppStateBuilder {
    create: Option<Arc<dyn CreateProjectUseCase + Send + Sync>>,
    list: Option<Arc<dyn ListProjectsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create: Some(Arc::new(StubCreateProjectUseCase::store_error(
                "not used in this test",
            ))),
            list: Some(Arc::new(StubListProjectsUseCase::success(vec![]))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_project_use_case(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create = Some(Arc::new(uc));
        self
    }

    pub fn with_list_projects_use_case(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: ProjectUseCases {
                create: self.create.expect("create project use case is set"),
                list: self.list.expect("list projects use case is set"),
            },
        })
    }
}
