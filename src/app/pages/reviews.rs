//! Reviews section of a details page.

use dioxus::prelude::*;

use super::movie_details::DetailsContext;
use crate::app::navigation::use_navigation;
use crate::app::Route;
use crate::catalog::Review;
use crate::details::{resolve_section, Section, SectionPayload};

#[component]
pub fn MovieReviews(movie_id: String) -> Element {
    let navigation = use_navigation();
    let details = use_context::<DetailsContext>();

    let incoming = navigation.incoming(&use_route::<Route>());
    let reviews: Vec<Review> = match resolve_section(
        Section::Reviews,
        &movie_id,
        incoming.as_ref(),
        details.loader.read().data(),
    ) {
        Some(SectionPayload::Reviews(reviews)) => reviews,
        _ => Vec::new(),
    };

    if reviews.is_empty() {
        return rsx! {
            p { class: "empty", "We don't have any reviews for this movie." }
        };
    }

    rsx! {
        ul { class: "review-list",
            {reviews.into_iter().map(|review| rsx! {
                li { key: "{review.id}", class: "review-item",
                    h3 { class: "author", "Author: {review.author}" }
                    p { class: "content", "{review.content}" }
                }
            })}
        }
    }
}
