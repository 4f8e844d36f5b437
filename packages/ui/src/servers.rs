//! Server listings: cards, the grouped home listing, the top list and the
//! owner's "my servers" list.

use api::{LaunchGroup, Message, Server};
use dioxus::prelude::*;

use crate::hooks::{use_grouped_servers, use_my_servers, use_top_servers};
use crate::moderation::ModerationBadge;
use crate::portal::use_portal;
use crate::vote::VoteButton;

#[component]
pub fn ServerLogo(server: Server) -> Element {
    match server.logo.clone().filter(|logo| !logo.is_empty()) {
        Some(src) => rsx! {
            img {
                class: "server-logo w-10 h-10 rounded object-cover",
                src: "{src}",
                alt: "{server.announce_name}",
            }
        },
        None => rsx! {
            span {
                class: "server-logo w-10 h-10 rounded bg-neutral-700 flex items-center justify-center font-bold",
                "{server.initial()}"
            }
        },
    }
}

/// One row of a listing.
#[component]
pub fn ServerRow(server: Server, #[props(default)] show_vote: bool) -> Element {
    let portal = use_portal();
    let status = portal.text(server.status_message());
    let name_class = if server.has_bold_font { "font-bold" } else { "font-medium" };
    let row_class = if server.has_vip_background {
        "server-row server-row--vip flex items-center gap-3 px-3 py-2 bg-amber-900/30"
    } else {
        "server-row flex items-center gap-3 px-3 py-2"
    };
    let chronicle = server
        .chronicle
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: row_class,
            ServerLogo { server: server.clone() }
            div {
                class: "flex-1 min-w-0",
                a {
                    class: "{name_class} truncate",
                    href: server.website_url.clone().unwrap_or_default(),
                    target: "_blank",
                    "{server.announce_name}"
                }
                div {
                    class: "text-xs text-neutral-400",
                    "{server.website_display()}"
                }
            }
            span { class: "w-16 text-sm", "{server.rate_display()}" }
            span { class: "w-28 text-sm", "{chronicle}" }
            span { class: "w-24 text-sm", "{server.display_date}" }
            span { class: "w-16 text-xs text-neutral-400", "{status}" }
            if show_vote {
                VoteButton { server_id: server.id }
            }
        }
    }
}

#[component]
fn ListStatus(message: Message) -> Element {
    let portal = use_portal();
    let text = portal.text(message);
    rsx! {
        p { class: "list-status py-4 text-center text-neutral-400", "{text}" }
    }
}

/// Home page listing, one section per launch group, for the applied filters.
#[component]
pub fn GroupedServerList() -> Element {
    let portal = use_portal();
    let state = use_grouped_servers().state();

    if let Some(error) = state.error {
        return rsx! { ListStatus { message: error.message() } };
    }
    let Some(grouped) = state.data else {
        return rsx! { ListStatus { message: Message::Loading } };
    };
    if LaunchGroup::ALL.iter().all(|g| grouped.group(*g).is_empty()) {
        return rsx! { ListStatus { message: Message::ServersNotFound } };
    }

    rsx! {
        div {
            class: "grouped-servers flex flex-col gap-6",
            for group in LaunchGroup::ALL.into_iter().filter(|g| !grouped.group(*g).is_empty()) {
                section {
                    key: "{group.as_str()}",
                    h2 { class: "text-lg font-semibold mb-2", {portal.text(group.title())} }
                    for server in grouped.group(group).iter().cloned() {
                        ServerRow { key: "{server.id}", server }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TopServerList() -> Element {
    let state = use_top_servers().state();

    if let Some(error) = state.error {
        return rsx! { ListStatus { message: error.message() } };
    }
    let Some(list) = state.data else {
        return rsx! { ListStatus { message: Message::Loading } };
    };
    if list.data.is_empty() {
        return rsx! { ListStatus { message: Message::ServersNotFound } };
    }

    rsx! {
        div {
            class: "top-servers flex flex-col",
            for server in list.data {
                div {
                    key: "{server.id}",
                    class: "flex items-center gap-2",
                    span { class: "w-8 text-center text-neutral-400", "{server.ranking_display()}" }
                    div {
                        class: "flex-1",
                        ServerRow { server: server.clone(), show_vote: true }
                    }
                    span { class: "w-16 text-right text-sm", "{server.votes_count}" }
                }
            }
        }
    }
}

/// The signed-in owner's servers with their moderation badges.
#[component]
pub fn MyServersList() -> Element {
    let state = use_my_servers().state();

    if let Some(error) = state.error {
        return rsx! { ListStatus { message: error.message() } };
    }
    let Some(list) = state.data else {
        return rsx! { ListStatus { message: Message::Loading } };
    };
    if list.data.is_empty() {
        return rsx! { ListStatus { message: Message::NoServersYet } };
    }

    rsx! {
        div {
            class: "my-servers flex flex-col gap-2",
            for server in list.data {
                div {
                    key: "{server.id}",
                    class: "flex items-center gap-3",
                    div {
                        class: "flex-1",
                        ServerRow { server: server.clone() }
                    }
                    ModerationBadge {
                        status: server.moderation_status,
                        comment: server.moderation_comment.clone(),
                    }
                }
            }
        }
    }
}
