use serde::{Deserialize, Serialize};

use super::Server;

/// A brand grouping one or more servers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub reviews_count: u64,
    #[serde(default)]
    pub total_votes: u64,
}

/// The project reference embedded in a [`Server`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub reviews_count: u64,
    #[serde(default)]
    pub total_votes: u64,
}

/// `GET /projects/:slug`: the project together with its servers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub servers: Vec<Server>,
}

impl ProjectDetail {
    /// The server shown on the project page.
    pub fn primary_server(&self) -> Option<&Server> {
        self.servers.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_detail_flattens_project() {
        let detail: ProjectDetail = serde_json::from_str(
            r#"{"id":3,"name":"Gods","slug":"gods","servers":[{"id":7,"announce_name":"Gods x5"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.project.slug, "gods");
        assert_eq!(detail.primary_server().map(|s| s.id), Some(7));

        let empty: ProjectDetail = serde_json::from_str(r#"{"id":4,"name":"Empty"}"#).unwrap();
        assert!(empty.primary_server().is_none());
    }
}
