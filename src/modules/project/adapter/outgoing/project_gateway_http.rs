// src/modules/project/adapter/outgoing/project_gateway_http.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::outgoing::project_gateway::{
    ProjectGateway, ReadFailure, WriteFailure,
};

//
// ──────────────────────────────────────────────────────────
// Wire DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectBody<'a> {
    title: &'a str,
    description: &'a str,
    technologies: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl<'a> CreateProjectBody<'a> {
    fn from_draft(draft: &'a ProjectDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            technologies: &draft.technologies,
            image_url: non_empty(&draft.image_url),
            project_url: non_empty(&draft.project_url),
            github_url: non_empty(&draft.github_url),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

/// `ProjectGateway` over the persistence API's wire contract:
/// `GET /api/projects` and `POST /api/projects`.
#[derive(Clone)]
pub struct HttpProjectGateway {
    client: Client,
    base_url: String,
}

impl HttpProjectGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn projects_url(&self) -> String {
        format!("{}/api/projects", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProjectGateway for HttpProjectGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, ReadFailure> {
        let resp = self
            .client
            .get(self.projects_url())
            .send()
            .await
            .map_err(|e| ReadFailure::new(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ReadFailure::new(format!(
                "unexpected status {}",
                resp.status()
            )));
        }

        resp.json::<Vec<Project>>()
            .await
            .map_err(|e| ReadFailure::new(format!("undecodable list body: {e}")))
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, WriteFailure> {
        let resp = self
            .client
            .post(self.projects_url())
            .json(&CreateProjectBody::from_draft(draft))
            .send()
            .await
            .map_err(|e| WriteFailure::Transport(e.to_string()))?;

        let status = resp.status();

        if status.is_success() {
            return resp
                .json::<Project>()
                .await
                .map_err(|e| WriteFailure::Transport(format!("undecodable project body: {e}")));
        }

        // Failure body is `{ "error": ... }` when the server had
        // something to say; anything else degrades to a transport error.
        match resp.json::<ErrorBody>().await {
            Ok(body) => Err(WriteFailure::Rejected(body.error)),
            Err(_) => Err(WriteFailure::Transport(format!("unexpected status {status}"))),
        }
    }
}
