//! Cast section of a details page.

use dioxus::prelude::*;

use super::movie_details::DetailsContext;
use crate::app::navigation::use_navigation;
use crate::app::Route;
use crate::catalog::CastMember;
use crate::details::{resolve_section, PresentationSettings, Section, SectionPayload};

#[component]
pub fn MovieCast(movie_id: String) -> Element {
    let navigation = use_navigation();
    let details = use_context::<DetailsContext>();
    let settings = use_context::<PresentationSettings>();

    let incoming = navigation.incoming(&use_route::<Route>());
    let cast: Vec<CastMember> = match resolve_section(
        Section::Cast,
        &movie_id,
        incoming.as_ref(),
        details.loader.read().data(),
    ) {
        Some(SectionPayload::Cast(cast)) => cast,
        _ => Vec::new(),
    };

    if cast.is_empty() {
        return rsx! {
            p { class: "empty", "We don't have any cast information for this movie." }
        };
    }

    rsx! {
        ul { class: "cast-list",
            {cast.into_iter().map(|member| {
                let photo = settings.profile_url(member.profile_path.as_deref());
                let character = member.character.unwrap_or_default();
                rsx! {
                    li { key: "{member.id}", class: "cast-item",
                        img { src: "{photo}", alt: "{member.name}", width: "120" }
                        p { class: "name", "{member.name}" }
                        if !character.is_empty() {
                            p { class: "character", "Character: {character}" }
                        }
                    }
                }
            })}
        }
    }
}
