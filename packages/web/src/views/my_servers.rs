use api::Message;
use dioxus::prelude::*;
use ui::{use_auth, use_text, CreateServerView, MyServersList};

/// The owner's servers above the "add server" form.
#[component]
pub fn MyServers() -> Element {
    let auth = use_auth();
    let title = use_text(Message::MyServers);
    let create = use_text(Message::CreateServer);
    let denied = use_text(Message::AuthorizationError);

    if !auth.read().is_authenticated() {
        return rsx! { p { class: "text-neutral-400", "{denied}" } };
    }

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "{title}" }
        MyServersList {}
        h2 { class: "text-xl font-semibold mt-8 mb-4", "{create}" }
        CreateServerView {}
    }
}
