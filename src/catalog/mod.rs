//! Movie catalog access.
//!
//! The UI only ever talks to a [`CatalogApi`]. In the browser that is the
//! [`crate::app::api::ProxyCatalog`], which goes through the server's
//! `/api/movies` routes; the server itself talks to TMDB through
//! [`TmdbClient`].

pub mod models;
#[cfg(feature = "server")]
mod tmdb;

use async_trait::async_trait;

pub use models::{
    CastMember, Credits, MovieDetails, MovieList, MovieSummary, Named, Page, Review, Video,
};
#[cfg(feature = "server")]
pub use tmdb::TmdbClient;

/// Why a catalog request failed.
///
/// The UI collapses every variant into a single failed state; the detail is
/// kept for logs and for the HTTP status the proxy answers with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed catalog payload: {0}")]
    Decode(String),
}

/// Sub-resources that can be appended to a details request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    Credits,
    Reviews,
    Videos,
}

impl Expansion {
    pub fn as_str(self) -> &'static str {
        match self {
            Expansion::Credits => "credits",
            Expansion::Reviews => "reviews",
            Expansion::Videos => "videos",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "credits" => Some(Expansion::Credits),
            "reviews" => Some(Expansion::Reviews),
            "videos" => Some(Expansion::Videos),
            _ => None,
        }
    }
}

/// What the details page asks for.
pub const DETAIL_EXPANSIONS: &[Expansion] =
    &[Expansion::Credits, Expansion::Reviews, Expansion::Videos];

/// Render expansions as TMDB's `append_to_response` value.
pub fn append_to_response(expand: &[Expansion]) -> String {
    expand
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse an `append_to_response` value, dropping unknown entries.
pub fn parse_append_to_response(value: &str) -> Vec<Expansion> {
    value.split(',').filter_map(Expansion::parse).collect()
}

/// Catalog operations used by the pages.
///
/// `?Send` because the browser implementation holds JS futures.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Fetch one movie, expanded with the given sub-resources.
    async fn fetch_details(
        &self,
        movie_id: &str,
        expand: &[Expansion],
    ) -> Result<MovieDetails, CatalogError>;

    /// Movies trending today.
    async fn trending(&self) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Movies matching a free-text title query.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError>;
}
