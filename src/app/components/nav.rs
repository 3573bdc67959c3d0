//! Navigation component for the web UI.

use dioxus::prelude::*;

use crate::app::Route;

const LINK_CLASS: &str = "link";
const ACTIVE_CLASS: &str = "active";

/// Top-level navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Movies,
}

impl NavLink {
    pub const ALL: [NavLink; 2] = [NavLink::Home, NavLink::Movies];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Movies => "Movies",
        }
    }

    pub fn target(self) -> Route {
        match self {
            NavLink::Home => Route::Home {},
            NavLink::Movies => Route::Movies {
                query: String::new(),
            },
        }
    }

    /// "/" matches only itself; "/movies" also matches everything below it.
    pub fn is_active(self, current: &Route) -> bool {
        match self {
            NavLink::Home => matches!(current, Route::Home {}),
            NavLink::Movies => matches!(
                current,
                Route::Movies { .. }
                    | Route::MovieOverview { .. }
                    | Route::MovieCast { .. }
                    | Route::MovieReviews { .. }
                    | Route::MovieVideos { .. }
            ),
        }
    }
}

pub fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", LINK_CLASS, ACTIVE_CLASS)
    } else {
        LINK_CLASS.to_string()
    }
}

/// Navigation bar with the active entry highlighted.
#[component]
pub fn Navigation() -> Element {
    let current = use_route::<Route>();

    rsx! {
        nav { class: "nav",
            {NavLink::ALL.into_iter().map(|link| {
                let label = link.label();
                rsx! {
                    Link {
                        key: "{label}",
                        to: link.target(),
                        class: link_class(link.is_active(&current)),
                        "{label}"
                    }
                }
            })}
        }
    }
}
