//! Authentication context and hooks for the UI.

use api::{ApiError, AuthCallbackResponse, AuthSession, Message, Mutation};
use dioxus::prelude::*;

use crate::portal::{use_portal, PortalContext};
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// Get the current auth session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthSession> {
    use_context::<Signal<AuthSession>>()
}

/// Provider component that owns the auth session.
///
/// The session is restored from storage on mount. When a token is present
/// the current user is refetched once; a 401 there signs the session out.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let portal = use_portal();
    let credentials = portal.client.credentials().clone();
    let mut session = use_signal(move || AuthSession::restore(credentials));

    let client = portal.client.clone();
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            if session.peek().token().is_none() {
                return;
            }
            match client.current_user().await {
                Ok(user) => session.write().set_user(user),
                Err(ApiError::Unauthorized) => {
                    session.write().sync_with_credentials();
                }
                Err(e) => tracing::warn!("could not refresh current user: {e}"),
            }
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Sign in from an OAuth callback and drop the queries that depend on who is
/// signed in.
pub fn complete_login(
    session: &mut Signal<AuthSession>,
    portal: &mut PortalContext,
    response: AuthCallbackResponse,
) {
    session.write().login_from_callback(response);
    portal.after_mutation(Mutation::Login);
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let mut session = use_auth();
    let mut portal = use_portal();
    let navigator = use_navigator();
    let label = portal.text(Message::Logout);

    let onclick = move |_| {
        session.write().logout();
        portal.after_mutation(Mutation::Logout);
        navigator.push("/");
    };

    rsx! {
        button {
            class: "logout-button {class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            "{label}"
        }
    }
}
