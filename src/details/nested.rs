//! Nested sections of a details page and the navigation state that carries
//! already-fetched data into them.

use crate::catalog::{CastMember, MovieDetails, Review, Video};

use super::BackLink;

/// A nested route under a movie's details page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Cast,
    Reviews,
    Videos,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Cast, Section::Reviews, Section::Videos];

    /// Relative path segment below the details page.
    pub fn segment(self) -> &'static str {
        match self {
            Section::Cast => "cast",
            Section::Reviews => "reviews",
            Section::Videos => "videos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Cast => "Cast",
            Section::Reviews => "Reviews",
            Section::Videos => "Video",
        }
    }
}

/// A snapshot of one sub-collection of a loaded record.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionPayload {
    Cast(Vec<CastMember>),
    Reviews(Vec<Review>),
    Videos(Vec<Video>),
}

impl SectionPayload {
    /// Slice `section`'s collection out of `record`; `None` if the record
    /// does not carry it (not loaded yet, or not expanded).
    pub fn from_record(section: Section, record: &MovieDetails) -> Option<Self> {
        match section {
            Section::Cast => record.cast().map(|c| SectionPayload::Cast(c.to_vec())),
            Section::Reviews => record
                .review_list()
                .map(|r| SectionPayload::Reviews(r.to_vec())),
            Section::Videos => record
                .video_list()
                .map(|v| SectionPayload::Videos(v.to_vec())),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            SectionPayload::Cast(_) => Section::Cast,
            SectionPayload::Reviews(_) => Section::Reviews,
            SectionPayload::Videos(_) => Section::Videos,
        }
    }
}

/// Transient data attached to a route transition. Not part of the URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    /// Location the user came from, for the back link
    pub from: Option<String>,
    /// Movie the payload belongs to
    pub movie_id: Option<String>,
    pub payload: Option<SectionPayload>,
}

impl NavigationState {
    pub fn arriving_from(location: &str) -> Self {
        Self {
            from: Some(location.to_string()),
            ..Self::default()
        }
    }
}

/// A link to a nested section with the state it carries.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLink {
    pub section: Section,
    pub state: NavigationState,
}

/// Links for every section, each carrying its slice of `record` and the
/// page's back link so the nested route renders without a second fetch.
pub fn section_links(movie_id: &str, record: &MovieDetails, back_link: &BackLink) -> Vec<SectionLink> {
    Section::ALL
        .iter()
        .map(|&section| SectionLink {
            section,
            state: NavigationState {
                from: Some(back_link.target().to_string()),
                movie_id: Some(movie_id.to_string()),
                payload: SectionPayload::from_record(section, record),
            },
        })
        .collect()
}

/// Pick the data a nested section renders.
///
/// Navigation state wins when it was produced for this movie and section.
/// Otherwise (deep link, page reload) the parent's record is used, which is
/// already loaded or loading; either way nothing is fetched here.
pub fn resolve_section(
    section: Section,
    movie_id: &str,
    incoming: Option<&NavigationState>,
    parent: &MovieDetails,
) -> Option<SectionPayload> {
    let carried = incoming
        .filter(|state| state.movie_id.as_deref() == Some(movie_id))
        .and_then(|state| state.payload.as_ref())
        .filter(|payload| payload.section() == section);

    match carried {
        Some(payload) => Some(payload.clone()),
        None => SectionPayload::from_record(section, parent),
    }
}
