use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar over the routed page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-neutral-950 text-neutral-100",
            Navbar {}
            main {
                class: "max-w-6xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
