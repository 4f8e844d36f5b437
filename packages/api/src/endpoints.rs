//! # Typed endpoints
//!
//! One method per backend route, all on [`ApiClient`] so every call passes
//! through the token decorator.
//!
//! | Method | Route |
//! |--------|-------|
//! | [`servers`](ApiClient::servers) | `GET /servers` |
//! | [`top_servers`](ApiClient::top_servers) | `GET /servers/top` |
//! | [`grouped_servers`](ApiClient::grouped_servers) | `GET /servers/grouped` |
//! | [`server_by_slug`](ApiClient::server_by_slug) | `GET /servers/:slug` |
//! | [`server_types`](ApiClient::server_types) | `GET /servers/types` |
//! | [`create_server`](ApiClient::create_server) | `POST /servers` |
//! | [`current_user`](ApiClient::current_user) | `GET /user` |
//! | [`user_votes`](ApiClient::user_votes) | `GET /user/votes` |
//! | [`change_password`](ApiClient::change_password) | `POST /user/password` |
//! | [`upload_avatar`](ApiClient::upload_avatar) | `POST /user/avatar` |
//! | [`projects`](ApiClient::projects) | `GET /projects` |
//! | [`project_by_slug`](ApiClient::project_by_slug) | `GET /projects/:slug` |
//! | [`project_reviews`](ApiClient::project_reviews) | `GET /projects/:id/reviews` |
//! | [`project_votes_history`](ApiClient::project_votes_history) | `GET /projects/:id/votes/history` |
//! | [`chronicles`](ApiClient::chronicles) | `GET /chronicles` |
//! | [`rates`](ApiClient::rates) | `GET /rates` |
//! | [`advertisement_banners`](ApiClient::advertisement_banners) | `GET /advertisements/banner` |
//! | [`advertisement_backgrounds`](ApiClient::advertisement_backgrounds) | `GET /advertisements/backgrounds` |
//! | [`advertisement`](ApiClient::advertisement) | `GET /advertisements/:id` |
//! | [`auth_callback`](ApiClient::auth_callback) | `GET /auth/callback` |
//!
//! The mutations here do no validation of their own; the form types in
//! [`crate::forms`] validate before calling them.

use crate::auth::Provider;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Advertisement, AdvertisementBackground, AdvertisementBanner, AuthCallbackResponse,
    ChangeUserPassword, Chronicle, CreateServerRequest, GroupedServers, Project, ProjectDetail,
    Rate, Review, Server, ServerFilter, ServerList, ServerQuery, ServerType, User, Vote,
    VoteHistoryPoint,
};
use crate::transport::{ApiRequest, FilePart, Transport};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped in a path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment.
fn segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

impl<N: Transport> ApiClient<N> {
    pub async fn servers(&self, query: &ServerQuery) -> Result<ServerList, ApiError> {
        let response = self
            .send(ApiRequest::get("/servers").with_query(query.to_pairs()))
            .await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub async fn top_servers(&self) -> Result<ServerList, ApiError> {
        let response = self.send(ApiRequest::get("/servers/top")).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    pub async fn grouped_servers(&self, filter: &ServerFilter) -> Result<GroupedServers, ApiError> {
        self.get("/servers/grouped", filter.to_pairs()).await
    }

    pub async fn server_by_slug(&self, slug: &str) -> Result<Server, ApiError> {
        self.get(&format!("/servers/{}", segment(slug)), Vec::new())
            .await
    }

    pub async fn server_types(&self) -> Result<Vec<ServerType>, ApiError> {
        self.get("/servers/types", Vec::new()).await
    }

    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<Server, ApiError> {
        self.post_json("/servers", request).await.inspect_err(|e| {
            tracing::error!("create server failed: {e}");
        })
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/user", Vec::new()).await
    }

    pub async fn user_votes(&self) -> Result<Vec<Vote>, ApiError> {
        self.get("/user/votes", Vec::new()).await
    }

    pub async fn change_password(&self, form: &ChangeUserPassword) -> Result<(), ApiError> {
        self.post_json_unit("/user/password", form)
            .await
            .inspect_err(|e| tracing::error!("password change failed: {e}"))
    }

    /// Upload a new avatar as the multipart field `avatar`.
    pub async fn upload_avatar(&self, mut file: FilePart) -> Result<User, ApiError> {
        file.field = "avatar".to_string();
        self.post_file("/user/avatar", file)
            .await
            .inspect_err(|e| tracing::error!("avatar upload failed: {e}"))
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects", Vec::new()).await
    }

    pub async fn project_by_slug(&self, slug: &str) -> Result<ProjectDetail, ApiError> {
        self.get(&format!("/projects/{}", segment(slug)), Vec::new())
            .await
    }

    pub async fn project_reviews(&self, project_id: u64) -> Result<Vec<Review>, ApiError> {
        self.get(&format!("/projects/{project_id}/reviews"), Vec::new())
            .await
    }

    pub async fn project_votes_history(
        &self,
        project_id: u64,
    ) -> Result<Vec<VoteHistoryPoint>, ApiError> {
        self.get(&format!("/projects/{project_id}/votes/history"), Vec::new())
            .await
    }

    pub async fn chronicles(&self) -> Result<Vec<Chronicle>, ApiError> {
        self.get("/chronicles", Vec::new()).await
    }

    pub async fn rates(&self) -> Result<Vec<Rate>, ApiError> {
        self.get("/rates", Vec::new()).await
    }

    pub async fn advertisement_banners(&self) -> Result<Vec<AdvertisementBanner>, ApiError> {
        self.get("/advertisements/banner", Vec::new()).await
    }

    pub async fn advertisement_backgrounds(
        &self,
    ) -> Result<Vec<AdvertisementBackground>, ApiError> {
        self.get("/advertisements/backgrounds", Vec::new()).await
    }

    pub async fn advertisement(&self, id: u64) -> Result<Advertisement, ApiError> {
        self.get(&format!("/advertisements/{id}"), Vec::new()).await
    }

    /// Exchange the OAuth redirect parameters for a token and user.
    ///
    /// `params` are the query pairs the provider appended to the callback URL
    /// (`code`, `state`, ...); `provider` is sent alongside them.
    pub async fn auth_callback(
        &self,
        provider: &Provider,
        params: &[(String, String)],
    ) -> Result<AuthCallbackResponse, ApiError> {
        let mut query = vec![("provider".to_string(), provider.as_str().to_string())];
        query.extend(
            params
                .iter()
                .filter(|(key, _)| key != "provider")
                .cloned(),
        );
        self.get("/auth/callback", query).await
    }
}
