//! This crate contains all shared UI for the workspace: the portal contexts,
//! the query hooks and thin components over the `api` core.
//!
//! Wrap the router in [`PortalProvider`]; every component below it can call
//! [`use_portal`], [`use_auth`], [`use_filters`] and the `use_*` query hooks.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_credentials;

mod portal;
pub use portal::{use_api, use_portal, use_text, PortalClient, PortalContext, PortalProvider};

mod auth;
pub use auth::{complete_login, use_auth, AuthProvider, LogoutButton};

pub mod query;
pub use query::{use_portal_query, QueryHandle};

pub mod hooks;

mod filters;
pub use filters::{use_filters, FilterButtons, FilterProvider, FindServerButton};

mod navbar;
pub use navbar::Navbar;

mod moderation;
pub use moderation::ModerationBadge;

pub mod banners;
pub use banners::{banner_view, BannerList, BannerView};

mod vote;
pub use vote::VoteButton;

mod servers;
pub use servers::{GroupedServerList, MyServersList, ServerLogo, ServerRow, TopServerList};

mod project;
pub use project::ProjectView;

pub mod profile;
pub use profile::{AvatarUploader, ChangePasswordPanel, ProfileView, VotesTable};

mod create_server;
pub use create_server::CreateServerView;

mod auth_callback;
pub use auth_callback::AuthCallbackView;
