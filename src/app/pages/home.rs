//! Home page: movies trending today.

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::app::catalog_context::use_catalog;
use crate::app::components::{ErrorMessage, Loader, MovieList};
use crate::app::fetch::restart_fetch;
use crate::app::Route;
use crate::details::{ListLoader, LOAD_ERROR_MESSAGE};

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let loader = use_signal(ListLoader::default);
    let task = use_signal(|| None::<Task>);

    use_effect(move || {
        let catalog = catalog.clone();
        restart_fetch(loader, task, "trending", move |_| async move {
            catalog.trending().await
        });
    });

    let current = use_route::<Route>().to_string();
    let state = loader.read().state();
    let movies = loader.read().data().clone();

    rsx! {
        main { class: "home",
            h1 { "Trending today" }
            if state.is_loading() {
                Loader {}
            }
            if state.is_error() {
                ErrorMessage { message: LOAD_ERROR_MESSAGE.to_string() }
            }
            MovieList { movies, from: current }
        }
    }
}
