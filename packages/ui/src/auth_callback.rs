//! Landing page of the OAuth redirect.

use api::auth::callback_params;
use api::{Message, Provider};
use dioxus::prelude::*;

use crate::auth::{complete_login, use_auth};
use crate::portal::use_portal;

/// Exchanges the redirect's query for a session, then goes to the profile.
#[component]
pub fn AuthCallbackView(query: String) -> Element {
    let portal = use_portal();
    let mut session = use_auth();
    let navigator = use_navigator();
    let mut failed = use_signal(|| false);

    let exchange = portal.clone();
    use_effect(move || {
        let params = callback_params(&query);
        let provider = Provider::from_param(
            params
                .iter()
                .find(|(key, _)| key == "provider")
                .map(|(_, value)| value.as_str()),
        );
        let mut portal = exchange.clone();
        spawn(async move {
            match portal.client.auth_callback(&provider, &params).await {
                Ok(response) => {
                    complete_login(&mut session, &mut portal, response);
                    navigator.replace("/profile");
                }
                Err(e) => {
                    tracing::error!(%provider, "oauth callback failed: {e}");
                    failed.set(true);
                }
            }
        });
    });

    if failed() {
        rsx! {
            div {
                class: "auth-callback flex flex-col items-center gap-3 py-10",
                p { class: "text-red-400", {portal.text(Message::AuthorizationRetry)} }
                Link { to: "/", class: "text-brand-green", {portal.text(Message::Home)} }
            }
        }
    } else {
        rsx! {
            p { class: "auth-callback text-center py-10", {portal.text(Message::Loading)} }
        }
    }
}
