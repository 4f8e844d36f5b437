//! # Query hooks
//!
//! [`use_portal_query`] is the one place where components meet the
//! [`QueryCache`](api::QueryCache). For a resource and a parameter closure it
//!
//! 1. returns the cached value when it is still fresh for the resource's TTL,
//! 2. otherwise runs `fetch` through the shared client and stores the result,
//! 3. re-runs whenever a signal read by the parameter closure changes or a
//!    mutation bumps the portal's invalidation counter.
//!
//! Errors are handed to the component untouched. A 401 additionally signs the
//! auth session out (the client has already cleared the stored token).

use std::future::Future;

use api::{ApiError, QueryCache, QueryKey, QueryState, Settled};
use dioxus::prelude::*;
use serde::Serialize;

use crate::auth::use_auth;
use crate::portal::{use_portal, PortalClient};

/// What a query hook returns: read it for `{data, is_loading, error}`,
/// call [`QueryHandle::refetch`] to bypass the cache.
pub struct QueryHandle<V: 'static> {
    inner: Resource<Result<V, ApiError>>,
    key: CopyValue<Option<QueryKey>>,
    cache: Signal<QueryCache>,
}

impl<V: 'static> Clone for QueryHandle<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for QueryHandle<V> {}

impl<V: Clone + 'static> QueryHandle<V> {
    pub fn state(&self) -> QueryState<V> {
        let pending = matches!(*self.inner.state().read(), UseResourceState::Pending);
        match &*self.inner.read() {
            None => QueryState::loading(None),
            Some(Ok(data)) => QueryState {
                data: Some(data.clone()),
                is_loading: pending,
                error: None,
            },
            Some(Err(error)) => QueryState {
                data: None,
                is_loading: pending,
                error: Some(error.clone()),
            },
        }
    }

    pub fn data(&self) -> Option<V> {
        self.state().data
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state().error
    }

    /// Forget the cached value and fetch again.
    pub fn refetch(&mut self) {
        if let Some(key) = self.key.peek().clone() {
            self.cache.write().invalidate_key(&key);
        }
        self.inner.restart();
    }
}

pub fn use_portal_query<K, V, Fut>(
    resource: api::Resource,
    mut params: impl FnMut() -> K + 'static,
    fetch: impl Fn(PortalClient, K) -> Fut + 'static,
) -> QueryHandle<V>
where
    K: Serialize + 'static,
    V: Clone + 'static,
    Fut: Future<Output = Result<V, ApiError>> + 'static,
{
    let portal = use_portal();
    let mut auth = use_auth();
    let mut cache = portal.cache;
    let generation = portal.generation;
    let client = portal.client.clone();
    let mut last_key = use_hook(|| CopyValue::new(None::<QueryKey>));

    let inner = use_resource(move || {
        // subscribe to invalidations
        let _ = generation();
        let params = params();
        let key = QueryKey::new(resource, &params);
        last_key.set(Some(key.clone()));
        let request = fetch(client.clone(), params);
        async move {
            if let Some(value) = cache.peek().fresh::<V>(&key) {
                tracing::trace!(%key, "query cache hit");
                return Ok(value);
            }
            let result = request.await;
            if cache.write().settle(key, &result) == Settled::SignedOut {
                auth.write().sync_with_credentials();
            }
            result
        }
    });

    QueryHandle {
        inner,
        key: last_key,
        cache,
    }
}
