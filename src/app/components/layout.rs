//! Application shell wrapping every page.

use dioxus::prelude::*;

use super::loader::Loader;
use super::nav::Navigation;
use crate::app::Route;

const STYLES: &str = r#"
.nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid #ddd; }
.nav .link { color: inherit; text-decoration: none; font-weight: 600; }
.nav .link.active { color: #e50914; }
.loader { padding: 1rem; color: #888; }
.error-msg { color: #c0392b; font-weight: 600; }
.details { padding: 1rem 2rem; }
.details .container { display: flex; gap: 2rem; }
.more-info { display: flex; gap: 1rem; list-style: none; padding: 0; }
"#;

/// Navigation bar above whatever page is routed.
#[component]
pub fn Shell() -> Element {
    let version = env!("MOVIE_FINDER_VERSION");

    rsx! {
        document::Title { "Movie Finder" }
        document::Style { {STYLES} }

        header { Navigation {} }
        SuspenseBoundary {
            fallback: |_| rsx! { Loader {} },
            Outlet::<Route> {}
        }
        footer { class: "footer",
            small { "Movie Finder v{version} - data from TMDB" }
        }
    }
}
