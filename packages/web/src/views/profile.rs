use api::Message;
use dioxus::prelude::*;
use ui::{use_text, ProfileView};

#[component]
pub fn Profile() -> Element {
    let title = use_text(Message::Profile);
    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "{title}" }
        ProfileView {}
    }
}
