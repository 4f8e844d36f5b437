use api::Message;
use dioxus::prelude::*;
use ui::{use_text, TopServerList};

#[component]
pub fn TopServers() -> Element {
    let title = use_text(Message::TopServers);
    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "{title}" }
        TopServerList {}
    }
}
