//! Sidebar filters: rate and chronicle buttons plus the "find server" button
//! that applies them.

use api::{FilterState, Message};
use dioxus::prelude::*;

use crate::hooks::{use_chronicles, use_rates};
use crate::portal::use_portal;

pub fn use_filters() -> Signal<FilterState> {
    use_context::<Signal<FilterState>>()
}

#[component]
pub fn FilterProvider(children: Element) -> Element {
    let filters = use_signal(FilterState::new);
    use_context_provider(|| filters);
    rsx! {
        {children}
    }
}

fn chip_class(highlighted: bool) -> &'static str {
    if highlighted {
        "filter-chip px-3 py-1 rounded text-sm bg-brand-green text-white"
    } else {
        "filter-chip px-3 py-1 rounded text-sm bg-neutral-800 text-neutral-300 hover:bg-neutral-700"
    }
}

/// Rate and chronicle buttons. Clicking changes only the pending selection.
#[component]
pub fn FilterButtons() -> Element {
    let portal = use_portal();
    let mut filters = use_filters();
    let rates = use_rates().state();
    let chronicles = use_chronicles().state();

    let state = filters.read().clone();
    let all_rates = portal.text(Message::AllRates);
    let all_chronicles = portal.text(Message::AllChronicles);

    rsx! {
        div {
            class: "filters flex flex-col gap-4",
            div {
                class: "filter-group flex flex-wrap gap-2",
                button {
                    class: chip_class(state.pending.rate.is_none()),
                    onclick: move |_| filters.write().set_pending_rate(None),
                    "{all_rates}"
                }
                for rate in rates.data.unwrap_or_default() {
                    button {
                        key: "rate-{rate.id}",
                        class: chip_class(state.is_rate_highlighted(&rate)),
                        onclick: {
                            let name = rate.name.clone();
                            move |_| filters.write().set_pending_rate(Some(name.as_str()))
                        },
                        "{rate.name}"
                    }
                }
            }
            div {
                class: "filter-group flex flex-wrap gap-2",
                button {
                    class: chip_class(state.pending.chronicle_id.is_none()),
                    onclick: move |_| filters.write().set_pending_chronicle(None),
                    "{all_chronicles}"
                }
                for chronicle in chronicles.data.unwrap_or_default() {
                    button {
                        key: "chronicle-{chronicle.id}",
                        class: chip_class(state.is_chronicle_highlighted(&chronicle)),
                        onclick: {
                            let id = chronicle.id;
                            move |_| filters.write().set_pending_chronicle(Some(id))
                        },
                        "{chronicle.name}"
                    }
                }
            }
        }
    }
}

/// Applies the pending selection; the grouped listing refetches.
#[component]
pub fn FindServerButton() -> Element {
    let portal = use_portal();
    let mut filters = use_filters();
    let dirty = filters.read().is_dirty();
    let label = portal.text(Message::FindServer);

    rsx! {
        button {
            class: if dirty { "find-server w-full py-2 rounded bg-brand-green text-white font-semibold" } else { "find-server w-full py-2 rounded bg-neutral-700 text-white font-semibold" },
            onclick: move |_| filters.write().apply(),
            "{label}"
        }
    }
}
