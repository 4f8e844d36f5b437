//! # API crate: the portal's client core
//!
//! Everything the UI needs from the backend, minus the rendering: resource
//! models, the decorated HTTP client, the query cache and the client-side
//! state machines (auth session, filters, vote flow, forms).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | REST resource mirrors (`Server`, `User`, `Vote`, ...) |
//! | [`config`] | [`ApiConfig`] from the environment or `l2top.toml` |
//! | [`error`] | [`ApiError`] taxonomy |
//! | [`transport`] | The [`Transport`] seam and its `reqwest` implementation |
//! | [`client`] | [`ApiClient`]: bearer token attach, 401 teardown |
//! | [`endpoints`] | One typed method per backend route |
//! | [`query`] | [`QueryCache`], [`QueryKey`] and the per-resource [`policy`] table |
//! | [`auth`] | [`AuthSession`] and the OAuth [`Provider`] |
//! | [`filters`] | Two-phase [`FilterState`] |
//! | [`vote`] | [`VoteFlow`] and the countdown projection |
//! | [`forms`] | Password, server and avatar form validation |
//! | [`i18n`] | [`Locale`] and [`Message`] |
//!
//! ## Request path
//!
//! ```text
//! component → hook → QueryCache (fresh?) ─no─▶ ApiClient::send ─▶ Transport ─▶ backend
//!                         ▲                        │ 401 → CredentialStore::clear_token
//!                         └──────── store ◀────────┘
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod filters;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod query;
pub mod transport;
pub mod vote;

#[cfg(test)]
mod testing;

pub use auth::{AuthSession, AuthState, Provider};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use filters::{FilterSelection, FilterState};
pub use forms::{
    AvatarUpload, ChangePasswordForm, CreateServerForm, Field, FormErrors, SubmitError,
};
pub use i18n::{format_date, Locale, Message};
pub use models::*;
pub use query::{
    policy, Mutation, Query, QueryCache, QueryKey, QueryPolicy, QueryState, Resource,
    Settled,
};
pub use transport::{ApiRequest, ApiResponse, Body, FilePart, HttpTransport, Method, Transport};
pub use vote::{format_countdown, VoteFlow, VotePhase};

pub use store::{CredentialStore, Persistence};
