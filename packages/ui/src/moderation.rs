use api::ModerationStatus;
use dioxus::prelude::*;

use crate::portal::use_portal;

/// Colored pill for a server's moderation state.
#[component]
pub fn ModerationBadge(status: ModerationStatus, comment: Option<String>) -> Element {
    let portal = use_portal();
    let label = portal.text(status.message());
    let color = status.color().css_class();

    rsx! {
        span {
            class: "moderation-badge inline-flex items-center px-2 py-0.5 rounded text-xs text-white {color}",
            title: comment.unwrap_or_default(),
            "{label}"
        }
    }
}
