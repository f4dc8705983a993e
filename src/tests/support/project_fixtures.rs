use chrono::Utc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

pub fn sample_project() -> Project {
    Project {
        id: Uuid::new_v4(),
        title: "Test Project".to_string(),
        description: "A project used in tests".to_string(),
        technologies: vec!["Rust".to_string(), "Actix".to_string()],
        image_url: None,
        project_url: Some("https://example.com/demo".to_string()),
        github_url: Some("https://github.com/test/repo".to_string()),
        created_at: Utc::now(),
    }
}
