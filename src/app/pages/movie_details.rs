//! Movie details page.
//!
//! A layout route: it loads the record for `movie_id`, renders it, and hosts
//! the cast/reviews/videos sections in its outlet. Those sections get their
//! data from this page (through navigation state or [`DetailsContext`]) and
//! never fetch on their own.

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::app::catalog_context::use_catalog;
use crate::app::components::{BackLinkButton, ErrorMessage, Loader, StateLink};
use crate::app::fetch::restart_fetch;
use crate::app::navigation::use_navigation;
use crate::app::Route;
use crate::catalog::DETAIL_EXPANSIONS;
use crate::details::{
    section_links, BackLink, DetailsLoader, DetailsView, PresentationSettings,
};

/// The loaded record, shared with the nested sections.
#[derive(Clone, Copy)]
pub struct DetailsContext {
    pub loader: Signal<DetailsLoader>,
}

/// State hooks of the details page: the loader for `movie_id` (refetched
/// whenever it changes) and the back link captured from the state that
/// arrived with the first render at `arrived_at`.
pub fn use_details_loader(
    movie_id: String,
    arrived_at: &Route,
) -> (Signal<DetailsLoader>, BackLink) {
    let catalog = use_catalog();
    let settings = use_context::<PresentationSettings>();
    let navigation = use_navigation();

    let loader = use_signal(DetailsLoader::default);
    let task = use_signal(|| None::<Task>);
    use_context_provider(|| DetailsContext { loader });

    // Captured once per mount; later navigation state does not move it
    let back_link = use_hook(|| {
        let incoming = navigation.incoming(arrived_at);
        BackLink::capture(
            incoming.as_ref().and_then(|s| s.from.as_deref()),
            &settings.fallback_back_link,
        )
    });

    use_effect(use_reactive((&movie_id,), move |(movie_id,)| {
        let catalog = catalog.clone();
        restart_fetch(loader, task, &movie_id, move |movie_id| async move {
            catalog.fetch_details(&movie_id, DETAIL_EXPANSIONS).await
        });
    }));

    (loader, back_link)
}

#[component]
pub fn MovieDetailsPage(movie_id: String) -> Element {
    let settings = use_context::<PresentationSettings>();
    let route = use_route::<Route>();
    let (loader, back_link) = use_details_loader(movie_id.clone(), &route);

    let view = DetailsView::new(&loader.read(), &settings);
    let links = section_links(&movie_id, loader.read().data(), &back_link);
    let poster_width = settings.poster_width;

    rsx! {
        main { class: "details",
            BackLinkButton { to: back_link.target().to_string() }
            if view.show_loader {
                Loader {}
            }
            if let Some(message) = view.error_message {
                ErrorMessage { message: message.to_string() }
            }
            div { class: "container",
                div { class: "img",
                    img {
                        src: "{view.poster_url}",
                        alt: "{view.poster_alt}",
                        width: "{poster_width}",
                    }
                }
                div {
                    h1 { class: "title", "{view.title}" }
                    ul {
                        DetailItem { topic: "Release date", value: view.release_date.clone() }
                        DetailItem { topic: "User Score", value: view.user_score.clone() }
                        DetailItem { topic: "Overview", value: view.overview.clone() }
                        DetailItem { topic: "Genres", value: view.genres.clone() }
                        DetailItem { topic: "Original language", value: view.original_language.clone() }
                        DetailItem { topic: "Production countries", value: view.production_countries.clone() }
                    }
                }
            }
            div {
                h2 { class: "topic-add", "Additional information" }
                ul { class: "more-info",
                    {links.into_iter().map(|link| {
                        let label = link.section.label();
                        let to = Route::section(link.section, movie_id.clone());
                        rsx! {
                            li { key: "{label}",
                                StateLink { to: to, state: link.state, class: "more", "{label}" }
                            }
                        }
                    })}
                }
                SuspenseBoundary {
                    fallback: |_| rsx! { Loader {} },
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn DetailItem(topic: String, value: String) -> Element {
    rsx! {
        li { class: "list-item",
            h2 { class: "topic", "{topic}" }
            p { class: "dscr", "{value}" }
        }
    }
}

/// Index of the details layout: the record itself is all there is.
#[component]
pub fn MovieOverview(movie_id: String) -> Element {
    rsx! {
        div { class: "overview", "data-movie": "{movie_id}" }
    }
}
