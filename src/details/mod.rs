//! Movie details loading and presentation, independent of the UI toolkit.

mod back_link;
mod loader;
mod nested;
mod view;

pub use back_link::BackLink;
pub use loader::{FetchTicket, LoadState, Loader, Settlement};
pub use nested::{
    resolve_section, section_links, NavigationState, Section, SectionLink, SectionPayload,
};
pub use view::{format_score, DetailsView, PresentationSettings, LOAD_ERROR_MESSAGE};

use crate::catalog::{MovieDetails, MovieSummary};

pub type DetailsLoader = Loader<MovieDetails>;
pub type ListLoader = Loader<Vec<MovieSummary>>;
