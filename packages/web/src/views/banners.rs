use api::Message;
use dioxus::prelude::*;
use ui::{use_text, BannerList};

const POSITIONS: [u8; 5] = [1, 2, 3, 4, 5];

/// Every banner slot, one section per position.
#[component]
pub fn Banners() -> Element {
    let title = use_text(Message::Banners);
    let mut position = use_signal(|| None::<u8>);

    rsx! {
        h1 { class: "text-2xl font-bold mb-4", "{title}" }
        div {
            class: "flex gap-2 mb-4",
            button {
                class: "px-3 py-1 rounded bg-neutral-800",
                onclick: move |_| position.set(None),
                "*"
            }
            for slot in POSITIONS {
                button {
                    key: "{slot}",
                    class: if position() == Some(slot) { "px-3 py-1 rounded bg-brand-green" } else { "px-3 py-1 rounded bg-neutral-800" },
                    onclick: move |_| position.set(Some(slot)),
                    "{slot}"
                }
            }
        }
        BannerList { position: position() }
    }
}
