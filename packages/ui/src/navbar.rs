use api::Message;
use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::{FaBullhorn, FaHouse, FaServer, FaTrophy, FaUser};
use crate::portal::use_portal;
use crate::Icon;

/// Top navigation. Account links appear once the user is signed in.
#[component]
pub fn Navbar(children: Element) -> Element {
    let portal = use_portal();
    let auth = use_auth();
    let signed_in = auth.read().is_authenticated();

    rsx! {
        nav {
            class: "navbar flex items-center gap-6 px-6 h-14 bg-neutral-900 text-white font-bold",
            Link {
                to: "/",
                class: "flex items-center gap-2",
                Icon { icon: FaHouse, width: 14, height: 14 }
                {portal.text(Message::Home)}
            }
            Link {
                to: "/top-servers",
                class: "flex items-center gap-2",
                Icon { icon: FaTrophy, width: 14, height: 14 }
                {portal.text(Message::TopServers)}
            }
            if signed_in {
                Link {
                    to: "/profile",
                    class: "flex items-center gap-2",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    {portal.text(Message::Profile)}
                }
                Link {
                    to: "/my-servers",
                    class: "flex items-center gap-2",
                    Icon { icon: FaServer, width: 14, height: 14 }
                    {portal.text(Message::MyServers)}
                }
                Link {
                    to: "/banners",
                    class: "flex items-center gap-2",
                    Icon { icon: FaBullhorn, width: 14, height: 14 }
                    {portal.text(Message::Banners)}
                }
            }
            div { class: "flex-1" }
            {children}
            if signed_in {
                LogoutButton { class: "flex items-center gap-2" }
            }
        }
    }
}
