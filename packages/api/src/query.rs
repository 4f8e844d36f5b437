//! # Query cache
//!
//! Every read the UI performs is a [`Query`]: a [`Resource`] plus the
//! parameters that distinguish one request from another. Results are kept in a
//! [`QueryCache`] under the query's [`QueryKey`].
//!
//! Freshness and invalidation are decided by one explicit table, [`policy`]:
//!
//! | Resource | TTL | Dropped by |
//! |----------|-----|-----------|
//! | advertisements (banner, backgrounds, by id) | 60 s | none |
//! | user votes, project vote history | 60 s | `Login`, `Logout` (user votes) |
//! | servers, "my servers" | 0 | `CreateServer`, `Login`, `Logout` |
//! | grouped servers, top servers | 0 | `CreateServer` |
//! | current user | 0 | `UploadAvatar`, `Login`, `Logout` |
//! | everything else | 0 | none |
//!
//! A TTL of zero means a cached value is never fresh: a mounting component
//! always refetches, but may show the stale value meanwhile.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Servers,
    TopServers,
    GroupedServers,
    Server,
    ServerTypes,
    User,
    UserVotes,
    Projects,
    Project,
    ProjectReviews,
    VotesHistory,
    Chronicles,
    Rates,
    AdvertisementBanners,
    AdvertisementBackgrounds,
    Advertisement,
}

impl Resource {
    pub const ALL: [Resource; 16] = [
        Resource::Servers,
        Resource::TopServers,
        Resource::GroupedServers,
        Resource::Server,
        Resource::ServerTypes,
        Resource::User,
        Resource::UserVotes,
        Resource::Projects,
        Resource::Project,
        Resource::ProjectReviews,
        Resource::VotesHistory,
        Resource::Chronicles,
        Resource::Rates,
        Resource::AdvertisementBanners,
        Resource::AdvertisementBackgrounds,
        Resource::Advertisement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Servers => "servers",
            Resource::TopServers => "top-servers",
            Resource::GroupedServers => "grouped-servers",
            Resource::Server => "server",
            Resource::ServerTypes => "server-types",
            Resource::User => "user",
            Resource::UserVotes => "user-votes",
            Resource::Projects => "projects",
            Resource::Project => "project",
            Resource::ProjectReviews => "reviews",
            Resource::VotesHistory => "votes-history",
            Resource::Chronicles => "chronicles",
            Resource::Rates => "rates",
            Resource::AdvertisementBanners => "advertisements-banner",
            Resource::AdvertisementBackgrounds => "advertisements-backgrounds",
            Resource::Advertisement => "advertisement-by-id",
        }
    }

    pub fn policy(&self) -> QueryPolicy {
        policy(*self)
    }
}

/// Writes that make cached reads stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    CreateServer,
    UploadAvatar,
    ChangePassword,
    Login,
    Logout,
}

impl Mutation {
    /// Resources whose cached entries this mutation drops.
    pub fn invalidates(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .filter(|resource| policy(*resource).invalidated_by.contains(self))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryPolicy {
    pub ttl: Duration,
    pub invalidated_by: &'static [Mutation],
}

pub fn policy(resource: Resource) -> QueryPolicy {
    use Mutation::*;
    let minute = Duration::seconds(60);
    let (ttl, invalidated_by): (Duration, &'static [Mutation]) = match resource {
        Resource::AdvertisementBanners
        | Resource::AdvertisementBackgrounds
        | Resource::Advertisement
        | Resource::VotesHistory => (minute, &[]),
        Resource::UserVotes => (minute, &[Login, Logout]),
        Resource::Servers => (Duration::zero(), &[CreateServer, Login, Logout]),
        Resource::GroupedServers | Resource::TopServers => (Duration::zero(), &[CreateServer]),
        Resource::User => (Duration::zero(), &[UploadAvatar, Login, Logout]),
        _ => (Duration::zero(), &[]),
    };
    QueryPolicy {
        ttl,
        invalidated_by,
    }
}

/// Cache key: resource plus its parameters serialized to JSON.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: Resource,
    pub params: String,
}

impl QueryKey {
    pub fn new(resource: Resource, params: &impl Serialize) -> Self {
        let params = serde_json::to_string(params).unwrap_or_default();
        Self { resource, params }
    }

    /// Key of a query without parameters, same as `new(resource, &())`.
    pub fn bare(resource: Resource) -> Self {
        Self::new(resource, &())
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params == "null" {
            f.write_str(self.resource.name())
        } else {
            write!(f, "{}:{}", self.resource.name(), self.params)
        }
    }
}

/// One cacheable read returning `V`, parameterized by `K`.
pub struct Query<K, V> {
    pub resource: Resource,
    pub params: K,
    value: PhantomData<fn() -> V>,
}

impl<K: Serialize, V> Query<K, V> {
    pub fn new(resource: Resource, params: K) -> Self {
        Self {
            resource,
            params,
            value: PhantomData,
        }
    }

    pub fn key(&self) -> QueryKey {
        QueryKey::new(self.resource, &self.params)
    }

    pub fn policy(&self) -> QueryPolicy {
        policy(self.resource)
    }
}

impl<V> Query<(), V> {
    pub fn of(resource: Resource) -> Self {
        Self {
            resource,
            params: (),
            value: PhantomData,
        }
    }
}

/// What [`QueryCache::settle`] did with a fetch result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Stored,
    /// The request hit a 401; the credential store no longer holds a token.
    SignedOut,
    Failed,
}

struct Entry {
    value: Box<dyn Any>,
    fetched_at: DateTime<Utc>,
}

/// Results of past queries, keyed by [`QueryKey`].
#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("keys", &self.entries.keys().map(|k| k.to_string()).collect::<Vec<_>>())
            .finish()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// The cached value regardless of age.
    pub fn cached<V: Clone + 'static>(&self, key: &QueryKey) -> Option<V> {
        self.entries.get(key)?.value.downcast_ref::<V>().cloned()
    }

    /// The cached value if it is younger than the resource's TTL.
    pub fn fresh<V: Clone + 'static>(&self, key: &QueryKey) -> Option<V> {
        self.fresh_at(key, Utc::now())
    }

    pub fn fresh_at<V: Clone + 'static>(&self, key: &QueryKey, now: DateTime<Utc>) -> Option<V> {
        let entry = self.entries.get(key)?;
        let ttl = policy(key.resource).ttl;
        if now.signed_duration_since(entry.fetched_at) < ttl {
            entry.value.downcast_ref::<V>().cloned()
        } else {
            None
        }
    }

    pub fn store<V: 'static>(&mut self, key: QueryKey, value: V) {
        self.store_at(key, value, Utc::now());
    }

    pub fn store_at<V: 'static>(&mut self, key: QueryKey, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            Entry {
                value: Box::new(value),
                fetched_at: now,
            },
        );
    }

    /// Record the result of a fetch for `key`. A success replaces the entry,
    /// a failure leaves the previous one in place.
    pub fn settle<V: Clone + 'static>(
        &mut self,
        key: QueryKey,
        result: &Result<V, ApiError>,
    ) -> Settled {
        match result {
            Ok(value) => {
                self.store(key, value.clone());
                Settled::Stored
            }
            Err(ApiError::Unauthorized) => Settled::SignedOut,
            Err(e) => {
                tracing::debug!(%key, "query failed: {e}");
                Settled::Failed
            }
        }
    }

    /// Drop every entry the mutation makes stale. Returns how many were dropped.
    pub fn invalidate(&mut self, mutation: Mutation) -> usize {
        let stale = mutation.invalidates();
        let before = self.entries.len();
        self.entries.retain(|key, _| !stale.contains(&key.resource));
        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::debug!(?mutation, dropped, "query cache invalidated");
        }
        dropped
    }

    pub fn invalidate_key(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// What a hook hands to its component.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<V> {
    pub data: Option<V>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<V> Default for QueryState<V> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

impl<V> QueryState<V> {
    pub fn loading(previous: Option<V>) -> Self {
        Self {
            data: previous,
            is_loading: true,
            error: None,
        }
    }

    pub fn from_result(result: Result<V, ApiError>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                is_loading: false,
                error: None,
            },
            Err(error) => Self {
                data: None,
                is_loading: false,
                error: Some(error),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSession;
    use crate::client::ApiClient;
    use crate::models::{Chronicle, ServerQuery, Vote};
    use crate::testing::RecordingTransport;
    use store::{CredentialStore, Persistence};

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_policy_table() {
        assert_eq!(policy(Resource::AdvertisementBanners).ttl, Duration::seconds(60));
        assert_eq!(policy(Resource::UserVotes).ttl, Duration::seconds(60));
        assert_eq!(policy(Resource::Servers).ttl, Duration::zero());
        assert_eq!(policy(Resource::Chronicles).ttl, Duration::zero());

        assert_eq!(
            Mutation::CreateServer.invalidates(),
            vec![Resource::Servers, Resource::TopServers, Resource::GroupedServers]
        );
        assert_eq!(Mutation::UploadAvatar.invalidates(), vec![Resource::User]);
        assert!(Mutation::ChangePassword.invalidates().is_empty());
        assert_eq!(
            Mutation::Logout.invalidates(),
            vec![Resource::Servers, Resource::User, Resource::UserVotes]
        );
    }

    #[test]
    fn test_ttl_freshness() {
        let mut cache = QueryCache::new();
        let banners = QueryKey::bare(Resource::AdvertisementBanners);
        cache.store_at(banners.clone(), vec![1u64, 2], t(0));

        assert_eq!(cache.fresh_at::<Vec<u64>>(&banners, t(59)), Some(vec![1, 2]));
        assert_eq!(cache.fresh_at::<Vec<u64>>(&banners, t(60)), None);
        assert_eq!(cache.cached::<Vec<u64>>(&banners), Some(vec![1, 2]));
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        let mut cache = QueryCache::new();
        let key = QueryKey::bare(Resource::Rates);
        cache.store_at(key.clone(), 5u8, t(0));

        assert_eq!(cache.fresh_at::<u8>(&key, t(0)), None);
        assert_eq!(cache.cached::<u8>(&key), Some(5));
    }

    #[test]
    fn test_wrong_type_is_a_miss() {
        let mut cache = QueryCache::new();
        let key = QueryKey::bare(Resource::Advertisement);
        cache.store_at(key.clone(), "text".to_string(), t(0));
        assert_eq!(cache.fresh_at::<u64>(&key, t(1)), None);
    }

    #[test]
    fn test_params_distinguish_keys() {
        let all: Query<ServerQuery, ()> = Query::new(Resource::Servers, ServerQuery::default());
        let mine: Query<ServerQuery, ()> = Query::new(Resource::Servers, ServerQuery::mine());
        assert_ne!(all.key(), mine.key());
        assert_eq!(mine.key().to_string(), r#"servers:{"my_servers":true}"#);
        assert_eq!(Query::<(), ()>::of(Resource::Rates).key().to_string(), "rates");
    }

    #[test]
    fn test_invalidate_by_mutation() {
        let mut cache = QueryCache::new();
        cache.store(QueryKey::new(Resource::Servers, &ServerQuery::mine()), 1u8);
        cache.store(QueryKey::bare(Resource::GroupedServers), 2u8);
        cache.store(QueryKey::bare(Resource::TopServers), 3u8);
        cache.store(QueryKey::bare(Resource::User), 4u8);
        cache.store(QueryKey::bare(Resource::Chronicles), 5u8);

        assert_eq!(cache.invalidate(Mutation::ChangePassword), 0);
        assert_eq!(cache.invalidate(Mutation::CreateServer), 3);
        assert!(cache.contains(&QueryKey::bare(Resource::User)));
        assert_eq!(cache.invalidate(Mutation::UploadAvatar), 1);
        assert_eq!(cache.len(), 1);

        assert!(cache.invalidate_key(&QueryKey::bare(Resource::Chronicles)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bare_key_matches_unit_params() {
        for resource in Resource::ALL {
            assert_eq!(QueryKey::bare(resource), QueryKey::new(resource, &()));
        }
        assert_eq!(QueryKey::bare(Resource::Rates).to_string(), "rates");
    }

    struct Fixture {
        cache: QueryCache,
        session: AuthSession,
        client: ApiClient<RecordingTransport>,
        transport: RecordingTransport,
    }

    impl Fixture {
        fn new() -> Self {
            let credentials = CredentialStore::in_memory();
            let transport = RecordingTransport::new();
            Self {
                cache: QueryCache::new(),
                session: AuthSession::new(credentials.clone()),
                client: ApiClient::new(transport.clone(), credentials),
                transport,
            }
        }

        fn sign_in(&mut self) {
            self.client
                .credentials()
                .set_token("token", Persistence::Durable);
            self.session.set_token(Some("token".to_string()));
        }

        /// Same sequence as the UI query hook: a fresh entry skips the request.
        async fn votes(&mut self) -> Result<Vec<Vote>, ApiError> {
            let key = QueryKey::bare(Resource::UserVotes);
            if let Some(value) = self.cache.fresh::<Vec<Vote>>(&key) {
                return Ok(value);
            }
            let result = self.client.user_votes().await;
            if self.cache.settle(key, &result) == Settled::SignedOut {
                self.session.sync_with_credentials();
            }
            result
        }

        async fn chronicles(&mut self) -> Result<Vec<Chronicle>, ApiError> {
            let key = QueryKey::bare(Resource::Chronicles);
            if let Some(value) = self.cache.fresh::<Vec<Chronicle>>(&key) {
                return Ok(value);
            }
            let result = self.client.chronicles().await;
            self.cache.settle(key, &result);
            result
        }
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_request() {
        let mut fx = Fixture::new();
        fx.sign_in();
        fx.transport.respond(200, "[]");

        assert_eq!(fx.votes().await.unwrap(), Vec::new());
        assert_eq!(fx.votes().await.unwrap(), Vec::new());

        assert_eq!(fx.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_refetches_on_every_mount() {
        let mut fx = Fixture::new();
        fx.transport
            .respond(200, r#"[{"id":1,"name":"Interlude"}]"#)
            .respond(200, r#"{"data":[{"id":2,"name":"High Five"}]}"#);

        assert_eq!(fx.chronicles().await.unwrap()[0].name, "Interlude");
        assert_eq!(fx.chronicles().await.unwrap()[0].name, "High Five");

        assert_eq!(fx.transport.requests().len(), 2);
        assert_eq!(
            fx.cache
                .cached::<Vec<Chronicle>>(&QueryKey::bare(Resource::Chronicles))
                .map(|list| list[0].id),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_invalidation_forces_refetch() {
        let mut fx = Fixture::new();
        fx.sign_in();
        fx.votes().await.unwrap();

        fx.cache.invalidate(Mutation::Login);
        fx.votes().await.unwrap();
        assert_eq!(fx.transport.requests().len(), 2);

        fx.cache.invalidate_key(&QueryKey::bare(Resource::UserVotes));
        fx.votes().await.unwrap();
        assert_eq!(fx.transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_entry() {
        let mut fx = Fixture::new();
        fx.transport
            .respond(200, r#"[{"id":1,"name":"Interlude"}]"#)
            .respond(500, r#"{"message":"Server Error"}"#);

        fx.chronicles().await.unwrap();
        let err = fx.chronicles().await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(fx.cache.contains(&QueryKey::bare(Resource::Chronicles)));
    }

    #[tokio::test]
    async fn test_unauthorized_signs_session_out() {
        let mut fx = Fixture::new();
        fx.sign_in();
        fx.transport.respond(401, r#"{"message":"Unauthenticated."}"#);

        assert_eq!(fx.votes().await.unwrap_err(), ApiError::Unauthorized);

        assert!(!fx.session.is_authenticated());
        assert_eq!(fx.client.credentials().get_token(), None);
        assert!(fx.cache.is_empty());
    }

    #[test]
    fn test_query_state() {
        let ok: QueryState<u8> = QueryState::from_result(Ok(1));
        assert!(ok.is_success());
        let err: QueryState<u8> = QueryState::from_result(Err(ApiError::Unauthorized));
        assert_eq!(err.error, Some(ApiError::Unauthorized));
        assert!(!err.is_loading);
        assert!(QueryState::<u8>::default().is_loading);
        assert_eq!(QueryState::loading(Some(3)).data, Some(3));
    }
}
