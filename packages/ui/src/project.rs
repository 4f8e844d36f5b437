//! Project page: header, primary server, description, reviews and the daily
//! vote history.

use api::{format_date, Message};
use dioxus::prelude::*;

use crate::hooks::{use_project, use_project_reviews, use_votes_history};
use crate::portal::use_portal;
use crate::servers::ServerRow;

#[component]
pub fn ProjectView(slug: String) -> Element {
    let portal = use_portal();
    let state = use_project(slug).state();

    if state.error.is_some() {
        return rsx! { p { class: "text-red-400", {portal.text(Message::ProjectNotFound)} } };
    }
    let Some(detail) = state.data else {
        return rsx! { p { {portal.text(Message::Loading)} } };
    };
    let description = detail
        .primary_server()
        .and_then(|server| server.description())
        .or(detail.description.as_deref())
        .unwrap_or(portal.text(Message::NoDescription))
        .to_string();
    let summary = format!(
        "★ {:.1} · {}",
        detail.project.average_rating,
        detail.project.total_votes
    );

    rsx! {
        article {
            class: "project flex flex-col gap-6",
            header {
                class: "flex items-baseline gap-4",
                h1 { class: "text-2xl font-bold", "{detail.project.name}" }
                span { class: "text-sm text-neutral-400", "{summary}" }
            }
            if let Some(server) = detail.primary_server().cloned() {
                ServerRow { server, show_vote: true }
            }
            p { class: "whitespace-pre-line", "{description}" }
            ProjectReviews { project_id: detail.project.id }
            VotesHistory { project_id: detail.project.id }
        }
    }
}

fn stars(count: u8) -> String {
    "★".repeat(usize::from(count.min(5)))
}

#[component]
fn ProjectReviews(project_id: u64) -> Element {
    let reviews = use_project_reviews(project_id).state().data.unwrap_or_default();

    rsx! {
        section {
            class: "reviews flex flex-col gap-3",
            for review in reviews {
                div {
                    key: "{review.id}",
                    class: "review rounded bg-neutral-800 p-3",
                    div {
                        class: "flex justify-between text-sm text-neutral-400",
                        span { {review.author.clone().unwrap_or_default()} }
                        span { {stars(review.rating)} }
                    }
                    p { "{review.comment}" }
                }
            }
        }
    }
}

#[component]
fn VotesHistory(project_id: u64) -> Element {
    let history = use_votes_history(project_id).state().data.unwrap_or_default();
    if history.is_empty() {
        return rsx! {};
    }

    rsx! {
        table {
            class: "votes-history text-sm",
            tbody {
                for point in history {
                    tr {
                        key: "{point.date}",
                        td { class: "pr-4", {format_date(&point.date.to_string())} }
                        td { "{point.votes}" }
                    }
                }
            }
        }
    }
}
