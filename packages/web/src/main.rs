use dioxus::prelude::*;

use ui::PortalProvider;
use views::{AuthCallback, Banners, Home, MyServers, Profile, ProjectPage, Shell, TopServers};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/top-servers")]
        TopServers {},
        #[route("/profile")]
        Profile {},
        #[route("/my-servers")]
        MyServers {},
        #[route("/banners")]
        Banners {},
        #[route("/project/:slug")]
        ProjectPage { slug: String },
        #[route("/auth/callback?:..query")]
        AuthCallback { query: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    tracing::debug!("starting portal");
    rsx! {
        PortalProvider {
            Router::<Route> {}
        }
    }
}
