use dioxus::prelude::*;
use ui::AuthCallbackView;

/// `/auth/callback?code=...&provider=...`
#[component]
pub fn AuthCallback(query: String) -> Element {
    rsx! {
        AuthCallbackView { query }
    }
}
