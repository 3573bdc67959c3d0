//! Dioxus web application.
//!
//! The root [`App`] provides the catalog client, presentation settings and
//! navigation-state contexts, then hands over to the router.

use dioxus::prelude::*;

pub mod api;
pub mod catalog_context;
pub mod components;
pub mod fetch;
pub mod navigation;
pub mod pages;

use components::Shell;
use pages::{
    Home, MovieCast, MovieDetailsPage, MovieOverview, MovieReviews, MovieVideos, Movies, NotFound,
};

use crate::details::{PresentationSettings, Section};
use api::ProxyCatalog;
use catalog_context::{use_catalog_provider, CatalogHandle};
use navigation::use_navigation_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_catalog_provider(|| CatalogHandle::new(ProxyCatalog::default()));
    use_context_provider(PresentationSettings::default);
    use_navigation_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/movies?:query")]
        Movies { query: String },
        #[nest("/movies/:movie_id")]
            #[layout(MovieDetailsPage)]
                #[route("/")]
                MovieOverview { movie_id: String },
                #[route("/cast")]
                MovieCast { movie_id: String },
                #[route("/reviews")]
                MovieReviews { movie_id: String },
                #[route("/videos")]
                MovieVideos { movie_id: String },
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route of a nested details section.
    pub fn section(section: Section, movie_id: String) -> Self {
        match section {
            Section::Cast => Route::MovieCast { movie_id },
            Section::Reviews => Route::MovieReviews { movie_id },
            Section::Videos => Route::MovieVideos { movie_id },
        }
    }

    pub fn movie(movie_id: impl ToString) -> Self {
        Route::MovieOverview {
            movie_id: movie_id.to_string(),
        }
    }
}
