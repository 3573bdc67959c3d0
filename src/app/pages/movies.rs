//! Movie search page. The query lives in the URL so results survive a
//! back navigation from a details page.

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::app::catalog_context::use_catalog;
use crate::app::components::{ErrorMessage, Loader, MovieList};
use crate::app::fetch::{reset_fetch, restart_fetch};
use crate::app::Route;
use crate::details::{ListLoader, LoadState, LOAD_ERROR_MESSAGE};

#[component]
pub fn Movies(query: String) -> Element {
    let catalog = use_catalog();
    let loader = use_signal(ListLoader::default);
    let task = use_signal(|| None::<Task>);
    let mut input = use_signal(|| query.clone());

    use_effect(use_reactive((&query,), move |(query,)| {
        let query = query.trim().to_string();
        if query.is_empty() {
            reset_fetch(loader, task);
            return;
        }
        let catalog = catalog.clone();
        restart_fetch(loader, task, &query, move |query| async move {
            catalog.search(&query).await
        });
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = input().trim().to_string();
        navigator().push(Route::Movies { query });
    };

    let current = use_route::<Route>().to_string();
    let state = loader.read().state();
    let movies = loader.read().data().clone();
    let searched = !query.trim().is_empty();

    rsx! {
        main { class: "movies",
            form { class: "search", onsubmit: on_submit,
                input {
                    r#type: "text",
                    name: "query",
                    placeholder: "Search movies",
                    autocomplete: "off",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button { r#type: "submit", "Search" }
            }
            if state.is_loading() {
                Loader {}
            }
            if state.is_error() {
                ErrorMessage { message: LOAD_ERROR_MESSAGE.to_string() }
            }
            if searched && state == LoadState::Ready && movies.is_empty() {
                p { class: "empty", "No movies found for \"{query}\"." }
            }
            MovieList { movies, from: current }
        }
    }
}
