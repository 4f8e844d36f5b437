//! The vote button and its countdown.

use api::{Message, VoteFlow, VotePhase};
use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::hooks::use_user_votes;
use crate::portal::use_portal;

/// Sleep for one countdown tick.
pub(crate) async fn tick() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(1_000).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
}

#[component]
pub fn VoteButton(server_id: u64) -> Element {
    let portal = use_portal();
    let auth = use_auth();
    let mut votes = use_user_votes();
    let mut flow = use_signal(VoteFlow::new);
    let mut now = use_signal(Utc::now);

    // Seed from the user's votes and settle a confirmed vote once they reload.
    // A refetch keeps the previous list around while pending, so wait it out.
    use_effect(move || {
        let state = votes.state();
        if state.is_loading {
            return;
        }
        let Some(list) = state.data else {
            return;
        };
        let mut next = *flow.peek();
        next.settle(server_id, &list, Utc::now());
        if next != *flow.peek() {
            flow.set(next);
        }
    });

    use_future(move || async move {
        loop {
            tick().await;
            let at = Utc::now();
            now.set(at);
            if matches!(flow.peek().phase(), VotePhase::Voted { .. }) {
                flow.write().refresh(at);
            }
        }
    });

    let current = flow();
    let label = portal.text(current.button_message());
    let countdown = current.countdown_label(now());
    let next_vote_in = portal.text(Message::NextVoteIn);
    let confirm = portal.text(Message::Confirm);
    let cancel = portal.text(Message::Cancel);
    let button_class = if current.has_voted() {
        "vote-button px-3 py-1 rounded text-sm bg-neutral-600 text-white"
    } else {
        "vote-button px-3 py-1 rounded text-sm bg-brand-green text-white"
    };

    rsx! {
        div {
            class: "vote relative inline-flex flex-col items-end",
            button {
                class: button_class,
                disabled: current.has_voted(),
                onclick: move |_| {
                    let signed_in = auth.read().is_authenticated();
                    flow.write().request(signed_in);
                },
                "{label}"
            }
            if let Some(left) = countdown {
                span { class: "text-xs text-neutral-400", "{next_vote_in} {left}" }
            }
            {match current.phase() {
                VotePhase::Confirming => rsx! {
                    div {
                        class: "vote-dialog absolute top-full mt-1 flex gap-2 bg-neutral-900 p-2 rounded shadow",
                        button {
                            class: "px-2 py-1 rounded bg-brand-green text-white text-sm",
                            onclick: move |_| {
                                flow.write().confirm();
                                votes.refetch();
                            },
                            "{confirm}"
                        }
                        button {
                            class: "px-2 py-1 rounded bg-neutral-700 text-white text-sm",
                            onclick: move |_| flow.write().cancel(),
                            "{cancel}"
                        }
                    }
                },
                VotePhase::AuthRequired => rsx! {
                    div {
                        class: "vote-dialog absolute top-full mt-1 flex gap-2 items-center bg-neutral-900 p-2 rounded shadow",
                        span { class: "text-sm", "{label}" }
                        button {
                            class: "px-2 py-1 rounded bg-neutral-700 text-white text-sm",
                            onclick: move |_| flow.write().cancel(),
                            "{cancel}"
                        }
                    }
                },
                _ => rsx! {},
            }}
        }
    }
}
