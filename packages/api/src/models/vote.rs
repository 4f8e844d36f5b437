//! Vote records.
//!
//! `next_vote_at` is the server-provided moment the user may vote again. The
//! countdown shown next to a counted vote is computed from it in
//! [`crate::vote`]; the client never enforces the cooldown itself.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Chronicle, ProjectSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: u64,
    #[serde(default)]
    pub ip_address: String,
    pub voted_at: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub server: ServerVote,
    #[serde(default)]
    pub next_vote_at: Option<DateTime<Utc>>,
}

impl Vote {
    /// Date of the vote as `DD.MM.YYYY`: the record's `created_at`, else
    /// `voted_at`. A value that does not parse is returned raw.
    pub fn voted_on(&self) -> String {
        let raw = self
            .created_at
            .as_deref()
            .filter(|at| !at.is_empty())
            .unwrap_or(&self.voted_at);
        crate::format_date(raw)
    }

    /// Address the vote was cast from, or `-` when the API left it out.
    pub fn ip_label(&self) -> &str {
        if self.ip_address.is_empty() {
            "-"
        } else {
            &self.ip_address
        }
    }
}

/// The server snapshot embedded in a [`Vote`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVote {
    pub id: u64,
    #[serde(default)]
    pub url_slug: String,
    pub announce_name: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub votes_count: u64,
    #[serde(default)]
    pub rating_position: Option<u64>,
    #[serde(default)]
    pub project: Option<ProjectSummary>,
    #[serde(default)]
    pub chronicle: Option<Chronicle>,
}

/// One day of a project's vote history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteHistoryPoint {
    pub date: NaiveDate,
    pub votes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_decodes_without_expiry() {
        let vote: Vote = serde_json::from_str(
            r#"{"id":1,"voted_at":"2025-03-04T10:00:00Z","server":{"id":2,"announce_name":"Alpha"}}"#,
        )
        .unwrap();
        assert!(vote.next_vote_at.is_none());
        assert_eq!(vote.voted_on(), "04.03.2025");
        assert_eq!(vote.ip_label(), "-");
    }

    #[test]
    fn test_vote_table_fields() {
        let vote: Vote = serde_json::from_str(
            r#"{"id":1,"ip_address":"10.0.0.7","voted_at":"2025-03-04","created_at":"2025-03-02T22:15:00Z","server":{"id":2,"announce_name":"Alpha"}}"#,
        )
        .unwrap();
        assert_eq!(vote.ip_label(), "10.0.0.7");
        assert_eq!(vote.voted_on(), "02.03.2025");
    }

    #[test]
    fn test_vote_decodes_expiry() {
        let vote: Vote = serde_json::from_str(
            r#"{"id":1,"voted_at":"2025-03-04","server":{"id":2,"announce_name":"Alpha"},"next_vote_at":"2025-03-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            vote.next_vote_at.map(|t| t.to_rfc3339()),
            Some("2025-03-05T10:00:00+00:00".to_string())
        );
    }
}
