//! # Server listing models
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`ServerList`] | `GET /servers`, `GET /servers/top` |
//! | [`GroupedServers`] | `GET /servers/grouped` |
//! | [`Server`] | `GET /servers/:slug`, items of the lists above |
//! | [`ServerType`] | `GET /servers/types` |
//! | [`CreateServerRequest`] | `POST /servers` |
//!
//! [`ServerQuery`] and [`ServerFilter`] turn into query-string pairs for the
//! list endpoints. [`ModerationStatus`] is the client's reading of the free-form
//! `moderation_status` string and carries the badge mapping.

use serde::{Deserialize, Serialize};

use super::catalog::Chronicle;
use crate::i18n::Message;

/// A listed game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    #[serde(default)]
    pub url_slug: String,
    pub announce_name: String,
    #[serde(default)]
    pub rating_name: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub server_type_id: Option<u64>,
    #[serde(default)]
    pub server_type_data: Option<ServerType>,
    #[serde(default)]
    pub launch_date: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub icons: Vec<ServerIcon>,
    #[serde(default)]
    pub votes_count: u64,
    #[serde(default)]
    pub weighted_votes: f64,
    #[serde(default)]
    pub vote_coefficient: f64,
    #[serde(default)]
    pub rating_stars: f64,
    #[serde(default)]
    pub reviews_count: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub display_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub ranking_position: Option<u64>,
    #[serde(default)]
    pub project: Option<super::ProjectSummary>,
    #[serde(default)]
    pub chronicle: Option<Chronicle>,
    #[serde(default)]
    pub premium_features: Vec<PremiumFeature>,
    #[serde(default)]
    pub has_vip_background: bool,
    #[serde(default)]
    pub has_bold_font: bool,
    #[serde(default)]
    pub has_vip_icon: bool,
}

impl Server {
    /// `true` once the server has launched.
    pub fn is_opened(&self) -> bool {
        self.status == "opened"
    }

    /// Label for the launch status: "open" for opened servers, "soon" otherwise.
    pub fn status_message(&self) -> Message {
        if self.is_opened() {
            Message::StatusOpened
        } else {
            Message::StatusSoon
        }
    }

    /// Website without the scheme, or `-` when missing.
    pub fn website_display(&self) -> String {
        match self.website_url.as_deref() {
            Some(url) if !url.is_empty() => url
                .replace("https://", "")
                .replace("http://", ""),
            _ => "-".to_string(),
        }
    }

    /// Ranking position or `-` for unranked servers.
    pub fn ranking_display(&self) -> String {
        match self.ranking_position {
            Some(position) if position > 0 => position.to_string(),
            _ => "-".to_string(),
        }
    }

    /// Rate as displayed on listings (`x5`).
    pub fn rate_display(&self) -> String {
        format!("x{}", self.rate)
    }

    /// Key used to address the server in tabs and links.
    pub fn tab_key(&self) -> String {
        if self.url_slug.is_empty() {
            self.id.to_string()
        } else {
            self.url_slug.clone()
        }
    }

    /// Description to render: full, then short, then `None`.
    pub fn description(&self) -> Option<&str> {
        [self.full_description.as_str(), self.short_description.as_str()]
            .into_iter()
            .find(|d| !d.is_empty())
    }

    /// Initial shown when the server has no logo.
    pub fn initial(&self) -> String {
        self.announce_name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerIcon {
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumFeature {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_days: u32,
}

/// Server category (PvP, PvE, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerType {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub h1_tag: Option<String>,
    #[serde(default)]
    pub h2_tag: Option<String>,
    #[serde(default)]
    pub footer_description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub servers_count: u64,
}

/// A page of servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerList {
    pub data: Vec<Server>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Servers bucketed by launch date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedServers {
    #[serde(default)]
    pub coming_soon: Vec<Server>,
    #[serde(default)]
    pub tomorrow: Vec<Server>,
    #[serde(default)]
    pub today: Vec<Server>,
    #[serde(default)]
    pub yesterday: Vec<Server>,
    #[serde(default)]
    pub opened: Vec<Server>,
}

impl GroupedServers {
    pub fn group(&self, group: LaunchGroup) -> &[Server] {
        match group {
            LaunchGroup::ComingSoon => &self.coming_soon,
            LaunchGroup::Tomorrow => &self.tomorrow,
            LaunchGroup::Today => &self.today,
            LaunchGroup::Yesterday => &self.yesterday,
            LaunchGroup::Opened => &self.opened,
        }
    }
}

/// Launch-date bucket, also accepted as the `status` list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchGroup {
    ComingSoon,
    Tomorrow,
    Today,
    Yesterday,
    Opened,
}

impl LaunchGroup {
    /// Display order of the home page sections.
    pub const ALL: [LaunchGroup; 5] = [
        LaunchGroup::ComingSoon,
        LaunchGroup::Tomorrow,
        LaunchGroup::Today,
        LaunchGroup::Yesterday,
        LaunchGroup::Opened,
    ];

    pub fn title(&self) -> Message {
        match self {
            LaunchGroup::ComingSoon => Message::GroupComingSoon,
            LaunchGroup::Tomorrow => Message::GroupTomorrow,
            LaunchGroup::Today => Message::GroupToday,
            LaunchGroup::Yesterday => Message::GroupYesterday,
            LaunchGroup::Opened => Message::GroupOpened,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchGroup::ComingSoon => "coming_soon",
            LaunchGroup::Tomorrow => "tomorrow",
            LaunchGroup::Today => "today",
            LaunchGroup::Yesterday => "yesterday",
            LaunchGroup::Opened => "opened",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerSort {
    #[serde(rename = "votes")]
    Votes,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "launch date")]
    LaunchDate,
}

impl ServerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerSort::Votes => "votes",
            ServerSort::Rating => "rating",
            ServerSort::LaunchDate => "launch date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters of `GET /servers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronicle_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LaunchGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub my_servers: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ServerSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ServerQuery {
    /// The signed-in owner's servers.
    pub fn mine() -> Self {
        Self {
            my_servers: true,
            ..Self::default()
        }
    }

    /// Query-string pairs, omitting unset parameters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.chronicle_id {
            pairs.push(("chronicle_id".to_string(), id.to_string()));
        }
        if let Some(rate) = &self.rate {
            pairs.push(("rate".to_string(), rate.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search".to_string(), search.trim().to_string()));
        }
        if self.my_servers {
            pairs.push(("my_servers".to_string(), "1".to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".to_string(), order.as_str().to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }
}

/// Parameters of `GET /servers/grouped`, built from the applied sidebar filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chronicle_id: Option<u64>,
}

impl ServerFilter {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(rate) = self.rate.as_ref().filter(|r| !r.is_empty()) {
            pairs.push(("rate".to_string(), rate.clone()));
        }
        if let Some(id) = self.chronicle_id {
            pairs.push(("chronicle_id".to_string(), id.to_string()));
        }
        pairs
    }
}

/// Approval state of a submitted server.
///
/// Anything the backend sends other than `approved` or `pending` is treated
/// as rejected, including a missing or `null` status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ModerationStatus {
    Approved,
    Pending,
    #[default]
    Rejected,
}

impl From<&str> for ModerationStatus {
    fn from(value: &str) -> Self {
        match value {
            "approved" => ModerationStatus::Approved,
            "pending" => ModerationStatus::Pending,
            _ => ModerationStatus::Rejected,
        }
    }
}

impl From<String> for ModerationStatus {
    fn from(value: String) -> Self {
        ModerationStatus::from(value.as_str())
    }
}

impl From<Option<String>> for ModerationStatus {
    fn from(value: Option<String>) -> Self {
        value.map(ModerationStatus::from).unwrap_or_default()
    }
}

impl From<ModerationStatus> for String {
    fn from(value: ModerationStatus) -> Self {
        match value {
            ModerationStatus::Approved => "approved",
            ModerationStatus::Pending => "pending",
            ModerationStatus::Rejected => "rejected",
        }
        .to_string()
    }
}

impl ModerationStatus {
    pub fn message(&self) -> Message {
        match self {
            ModerationStatus::Approved => Message::ModerationApproved,
            ModerationStatus::Pending => Message::ModerationPending,
            ModerationStatus::Rejected => Message::ModerationRejected,
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            ModerationStatus::Approved => BadgeColor::Green,
            ModerationStatus::Pending => BadgeColor::Yellow,
            ModerationStatus::Rejected => BadgeColor::Red,
        }
    }
}

/// Badge background colors used by status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
}

impl BadgeColor {
    pub fn name(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Red => "red",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Green => "bg-brand-green",
            BadgeColor::Yellow => "bg-yellow-500",
            BadgeColor::Red => "bg-red-500",
        }
    }
}

/// Body of `POST /servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServerRequest {
    pub announce_name: String,
    pub rating_name: String,
    pub website_url: String,
    pub rate: u32,
    pub server_type_id: u64,
    /// ISO date, `YYYY-MM-DD`.
    pub launch_date: String,
    pub short_description: String,
    pub full_description: String,
    pub project_id: u64,
    pub chronicle_id: u64,
    pub logo: String,
}
