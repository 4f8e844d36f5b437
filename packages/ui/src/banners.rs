//! Advertisement banners, optionally narrowed to one position.

use api::{AdvertisementBanner, Message, QueryState};
use dioxus::prelude::*;

use crate::hooks::use_advertisement_banners;
use crate::portal::use_portal;

#[derive(Clone, Debug, PartialEq)]
pub enum BannerView {
    Loading,
    Error,
    Empty,
    Items(Vec<AdvertisementBanner>),
}

/// What the banner list shows for a query state. A load error wins over
/// stale data. `limit` caps the items shown after position filtering; zero
/// means no cap.
pub fn banner_view(
    state: &QueryState<Vec<AdvertisementBanner>>,
    position: Option<u8>,
    limit: Option<usize>,
) -> BannerView {
    if state.error.is_some() {
        return BannerView::Error;
    }
    match &state.data {
        None => BannerView::Loading,
        Some(banners) => {
            let mut items = AdvertisementBanner::at_position(banners, position);
            if let Some(limit) = limit.filter(|&n| n > 0) {
                items.truncate(limit);
            }
            if items.is_empty() {
                BannerView::Empty
            } else {
                BannerView::Items(items)
            }
        }
    }
}

#[component]
pub fn BannerList(position: Option<u8>, limit: Option<usize>) -> Element {
    let portal = use_portal();
    let state = use_advertisement_banners().state();

    match banner_view(&state, position, limit) {
        BannerView::Loading => rsx! {
            p { class: "banners-status", {portal.text(Message::Loading)} }
        },
        BannerView::Error => rsx! {
            p { class: "banners-status text-red-400", {portal.text(Message::BannersError)} }
        },
        BannerView::Empty => rsx! {
            p { class: "banners-status text-neutral-400", {portal.text(Message::NoBanners)} }
        },
        BannerView::Items(items) => rsx! {
            div {
                class: "banners flex flex-col gap-4",
                for banner in items {
                    div {
                        key: "{banner.id}",
                        class: "banner flex flex-col md:flex-row gap-5",
                        a {
                            class: "block shrink-0",
                            href: banner.link.clone().unwrap_or_else(|| "#".to_string()),
                            target: "_blank",
                            img {
                                class: "size-40 object-cover rounded-2xl",
                                src: "{banner.image}",
                                alt: "{banner.alt_text()}",
                            }
                        }
                        div {
                            class: "flex-1 rounded-xl px-5 py-4 bg-neutral-800",
                            h3 { class: "text-sm font-semibold mb-2", "{banner.title}" }
                            if let Some(name) = banner.name.as_deref() {
                                p { class: "text-xs text-neutral-400", "{name}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;

    fn banner(id: u64, position: u8) -> AdvertisementBanner {
        AdvertisementBanner {
            id,
            title: format!("banner {id}"),
            name: None,
            image: format!("/img/{id}.png"),
            alt: None,
            position,
            link: None,
        }
    }

    fn loaded(banners: Vec<AdvertisementBanner>) -> QueryState<Vec<AdvertisementBanner>> {
        QueryState {
            data: Some(banners),
            is_loading: false,
            error: None,
        }
    }

    #[test]
    fn test_banner_view_loading_and_error() {
        assert_eq!(banner_view(&QueryState::loading(None), None, None), BannerView::Loading);

        let failed = QueryState {
            data: Some(vec![banner(1, 1)]),
            is_loading: false,
            error: Some(ApiError::Transport("offline".into())),
        };
        assert_eq!(banner_view(&failed, None, None), BannerView::Error);
    }

    #[test]
    fn test_banner_view_filters_by_position() {
        let state = loaded(vec![banner(1, 1), banner(2, 3), banner(3, 3)]);

        match banner_view(&state, Some(3), None) {
            BannerView::Items(items) => {
                assert_eq!(items.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3]);
            }
            other => panic!("unexpected view: {other:?}"),
        }
        assert_eq!(banner_view(&state, Some(5), None), BannerView::Empty);
        assert!(matches!(banner_view(&state, None, None), BannerView::Items(items) if items.len() == 3));
    }

    #[test]
    fn test_banner_view_limit_applies_after_position() {
        let state = loaded(vec![banner(1, 2), banner(2, 1), banner(3, 2), banner(4, 2)]);
        let ids = |view: BannerView| match view {
            BannerView::Items(items) => items.iter().map(|b| b.id).collect::<Vec<_>>(),
            other => panic!("unexpected view: {other:?}"),
        };

        assert_eq!(ids(banner_view(&state, Some(2), Some(2))), vec![1, 3]);
        assert_eq!(ids(banner_view(&state, None, Some(10))), vec![1, 2, 3, 4]);
        assert_eq!(ids(banner_view(&state, Some(2), Some(0))), vec![1, 3, 4]);
        assert_eq!(banner_view(&state, Some(9), Some(1)), BannerView::Empty);
    }

    #[test]
    fn test_banner_view_empty_list() {
        assert_eq!(banner_view(&loaded(Vec::new()), None, None), BannerView::Empty);
    }
}
