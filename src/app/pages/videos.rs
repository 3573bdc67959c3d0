//! Videos section of a details page.

use dioxus::prelude::*;

use super::movie_details::DetailsContext;
use crate::app::navigation::use_navigation;
use crate::app::Route;
use crate::catalog::Video;
use crate::details::{resolve_section, Section, SectionPayload};

#[component]
pub fn MovieVideos(movie_id: String) -> Element {
    let navigation = use_navigation();
    let details = use_context::<DetailsContext>();

    let incoming = navigation.incoming(&use_route::<Route>());
    let videos: Vec<(Video, String)> = match resolve_section(
        Section::Videos,
        &movie_id,
        incoming.as_ref(),
        details.loader.read().data(),
    ) {
        Some(SectionPayload::Videos(videos)) => videos
            .into_iter()
            .filter_map(|v| v.embed_url().map(|url| (v, url)))
            .collect(),
        _ => Vec::new(),
    };

    if videos.is_empty() {
        return rsx! {
            p { class: "empty", "We don't have any videos for this movie." }
        };
    }

    rsx! {
        ul { class: "video-list",
            {videos.into_iter().map(|(video, url)| rsx! {
                li { key: "{video.id}", class: "video-item",
                    h3 { "{video.name}" }
                    iframe {
                        src: "{url}",
                        title: "{video.name}",
                        width: "560",
                        height: "315",
                        allowfullscreen: true,
                    }
                }
            })}
        }
    }
}
