//! REST resource mirrors.
//!
//! These types follow the backend's JSON exactly; optional or late-added
//! fields are `#[serde(default)]` so older responses still decode.

mod advertisement;
mod catalog;
mod envelope;
mod project;
mod server;
mod user;
mod vote;

pub use advertisement::{Advertisement, AdvertisementBackground, AdvertisementBanner};
pub use catalog::{Chronicle, Rate};
pub(crate) use catalog::rate_key;
pub use envelope::{DataEnvelope, Payload};
pub use project::{Project, ProjectDetail, ProjectSummary, Review};
pub use server::{
    BadgeColor, CreateServerRequest, GroupedServers, LaunchGroup, ModerationStatus, PageLinks,
    PageMeta, PremiumFeature, Server, ServerFilter, ServerIcon, ServerList, ServerQuery,
    ServerSort, ServerType, SortOrder,
};
pub use user::{AuthCallbackResponse, ChangeUserPassword, User};
pub use vote::{ServerVote, Vote, VoteHistoryPoint};
