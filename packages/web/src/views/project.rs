use dioxus::prelude::*;
use ui::ProjectView;

#[component]
pub fn ProjectPage(slug: String) -> Element {
    rsx! {
        ProjectView { slug }
    }
}
