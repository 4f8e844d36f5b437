//! Per-resource query hooks. Parameters passed by value are tracked with
//! `use_reactive`, so a changed prop refetches.

use api::{
    Advertisement, AdvertisementBackground, AdvertisementBanner, Chronicle, GroupedServers,
    Project, ProjectDetail, Rate, Resource as Res, Review, Server, ServerList, ServerQuery,
    ServerType, User, Vote, VoteHistoryPoint,
};
use dioxus::prelude::*;

use crate::filters::use_filters;
use crate::query::{use_portal_query, QueryHandle};

pub fn use_servers(query: ServerQuery) -> QueryHandle<ServerList> {
    use_portal_query(
        Res::Servers,
        use_reactive((&query,), |(query,)| query),
        |client, query| async move { client.servers(&query).await },
    )
}

/// The signed-in owner's servers (`my_servers=1`).
pub fn use_my_servers() -> QueryHandle<ServerList> {
    use_servers(ServerQuery::mine())
}

pub fn use_top_servers() -> QueryHandle<ServerList> {
    use_portal_query(Res::TopServers, || (), |client, ()| async move {
        client.top_servers().await
    })
}

/// Grouped servers for the *applied* sidebar filters.
pub fn use_grouped_servers() -> QueryHandle<GroupedServers> {
    let filters = use_filters();
    let applied = use_memo(move || filters.read().server_filter());
    use_portal_query(
        Res::GroupedServers,
        move || applied(),
        |client, filter| async move { client.grouped_servers(&filter).await },
    )
}

pub fn use_server(slug: String) -> QueryHandle<Server> {
    use_portal_query(
        Res::Server,
        use_reactive((&slug,), |(slug,)| slug),
        |client, slug| async move { client.server_by_slug(&slug).await },
    )
}

pub fn use_server_types() -> QueryHandle<Vec<ServerType>> {
    use_portal_query(Res::ServerTypes, || (), |client, ()| async move {
        client.server_types().await
    })
}

pub fn use_current_user() -> QueryHandle<User> {
    use_portal_query(Res::User, || (), |client, ()| async move {
        client.current_user().await
    })
}

/// Signed out, this resolves to an empty list without a request.
pub fn use_user_votes() -> QueryHandle<Vec<Vote>> {
    use_portal_query(Res::UserVotes, || (), |client, ()| async move {
        if client.credentials().get_token().is_none() {
            return Ok(Vec::new());
        }
        client.user_votes().await
    })
}

pub fn use_projects() -> QueryHandle<Vec<Project>> {
    use_portal_query(Res::Projects, || (), |client, ()| async move {
        client.projects().await
    })
}

pub fn use_project(slug: String) -> QueryHandle<ProjectDetail> {
    use_portal_query(
        Res::Project,
        use_reactive((&slug,), |(slug,)| slug),
        |client, slug| async move { client.project_by_slug(&slug).await },
    )
}

pub fn use_project_reviews(project_id: u64) -> QueryHandle<Vec<Review>> {
    use_portal_query(
        Res::ProjectReviews,
        use_reactive((&project_id,), |(id,)| id),
        |client, id| async move { client.project_reviews(id).await },
    )
}

pub fn use_votes_history(project_id: u64) -> QueryHandle<Vec<VoteHistoryPoint>> {
    use_portal_query(
        Res::VotesHistory,
        use_reactive((&project_id,), |(id,)| id),
        |client, id| async move { client.project_votes_history(id).await },
    )
}

pub fn use_chronicles() -> QueryHandle<Vec<Chronicle>> {
    use_portal_query(Res::Chronicles, || (), |client, ()| async move {
        client.chronicles().await
    })
}

pub fn use_rates() -> QueryHandle<Vec<Rate>> {
    use_portal_query(Res::Rates, || (), |client, ()| async move {
        client.rates().await
    })
}

pub fn use_advertisement_banners() -> QueryHandle<Vec<AdvertisementBanner>> {
    use_portal_query(Res::AdvertisementBanners, || (), |client, ()| async move {
        client.advertisement_banners().await
    })
}

pub fn use_advertisement_backgrounds() -> QueryHandle<Vec<AdvertisementBackground>> {
    use_portal_query(Res::AdvertisementBackgrounds, || (), |client, ()| async move {
        client.advertisement_backgrounds().await
    })
}

pub fn use_advertisement(id: u64) -> QueryHandle<Advertisement> {
    use_portal_query(
        Res::Advertisement,
        use_reactive((&id,), |(id,)| id),
        |client, id| async move { client.advertisement(id).await },
    )
}
