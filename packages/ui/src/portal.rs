//! # Portal context
//!
//! [`PortalProvider`] builds the pieces every page shares and puts them in
//! context:
//!
//! | Piece | Type |
//! |-------|------|
//! | HTTP client | [`PortalClient`] (`ApiClient` over `reqwest`) |
//! | query cache | `Signal<QueryCache>` |
//! | invalidation counter | `Signal<u64>`, read by every query hook |
//! | locale | [`Locale`] from the configuration |
//!
//! It also nests [`AuthProvider`](crate::AuthProvider) and
//! [`FilterProvider`](crate::FilterProvider), so wrapping the router in
//! `PortalProvider` is enough.

use api::{ApiClient, ApiConfig, HttpTransport, Locale, Message, Mutation, QueryCache};
use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::filters::FilterProvider;
use crate::storage::make_credentials;

pub type PortalClient = ApiClient<HttpTransport>;

#[derive(Clone)]
pub struct PortalContext {
    pub client: PortalClient,
    pub cache: Signal<QueryCache>,
    pub generation: Signal<u64>,
    pub locale: Locale,
}

impl PortalContext {
    /// Drop the cache entries `mutation` makes stale and wake the query hooks.
    pub fn after_mutation(&mut self, mutation: Mutation) {
        let dropped = self.cache.write().invalidate(mutation);
        tracing::debug!(?mutation, dropped, "mutation settled");
        *self.generation.write() += 1;
    }

    pub fn text(&self, message: Message) -> &'static str {
        message.text(self.locale)
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>()
}

pub fn use_api() -> PortalClient {
    use_portal().client
}

/// Localized text for `message`.
pub fn use_text(message: Message) -> &'static str {
    message.text(use_portal().locale)
}

#[component]
pub fn PortalProvider(children: Element) -> Element {
    let context = use_hook(|| {
        let config = ApiConfig::load().unwrap_or_else(|e| {
            tracing::error!("invalid configuration, using defaults: {e}");
            ApiConfig::default()
        });
        tracing::info!(base_url = %config.base_url, locale = %config.locale, "portal configured");
        let credentials = make_credentials();
        PortalContext {
            client: ApiClient::http(&config, credentials),
            cache: Signal::new(QueryCache::new()),
            generation: Signal::new(0),
            locale: config.locale,
        }
    });
    use_context_provider(|| context);

    rsx! {
        AuthProvider {
            FilterProvider {
                {children}
            }
        }
    }
}
