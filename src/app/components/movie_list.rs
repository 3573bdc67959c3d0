//! List of movies linking to their details pages.

use dioxus::prelude::*;

use super::state_link::StateLink;
use crate::app::Route;
use crate::catalog::MovieSummary;
use crate::details::{format_score, NavigationState};

/// Movie titles linking to details, remembering `from` for the back link.
#[component]
pub fn MovieList(movies: Vec<MovieSummary>, from: String) -> Element {
    rsx! {
        ul { class: "movie-list",
            {movies.into_iter().map(|movie| {
                let id = movie.id;
                let title = movie.title;
                let year = release_year(movie.release_date.as_deref()).map(str::to_string);
                let score = movie.vote_average.map(|v| format_score(Some(v)));
                rsx! {
                    li { key: "{id}",
                        StateLink {
                            to: Route::movie(id),
                            state: NavigationState::arriving_from(&from),
                            "{title}"
                        }
                        if let Some(year) = year {
                            small { " ({year})" }
                        }
                        if let Some(score) = score {
                            small { class: "score", " ★ {score}" }
                        }
                    }
                }
            })}
        }
    }
}

fn release_year(release_date: Option<&str>) -> Option<&str> {
    release_date
        .and_then(|d| d.get(..4))
        .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
}
