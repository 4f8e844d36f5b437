use dioxus::prelude::*;
use ui::{BannerList, FilterButtons, FindServerButton, GroupedServerList};

/// Filters on the left, the grouped listing for the applied filters on the right.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "grid gap-6 lg:grid-cols-[267px_1fr]",
            aside {
                class: "flex flex-col gap-4",
                FilterButtons {}
                FindServerButton {}
                BannerList { position: 1 }
            }
            GroupedServerList {}
        }
    }
}
