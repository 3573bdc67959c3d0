//! What the details page renders, derived from loader state.

use crate::catalog::{MovieDetails, Named};

use super::{LoadState, Loader};

/// TMDB image CDN, 500px wide posters
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// TMDB image CDN, 200px wide profile pictures
pub const PROFILE_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";
pub const DEFAULT_POSTER_URL: &str = "https://ranobehub.org/img/ranobe/posters/default.jpg";
pub const DEFAULT_PROFILE_URL: &str =
    "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&s=200";
pub const FALLBACK_BACK_LINK: &str = "/movies";
pub const POSTER_WIDTH: u32 = 360;
pub const LOAD_ERROR_MESSAGE: &str = "Error, try again, please.";

/// Fixed presentation values, provided to the UI as context.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationSettings {
    pub poster_base_url: String,
    pub profile_base_url: String,
    pub default_poster_url: String,
    pub default_profile_url: String,
    pub fallback_back_link: String,
    pub poster_width: u32,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            poster_base_url: POSTER_BASE_URL.to_string(),
            profile_base_url: PROFILE_BASE_URL.to_string(),
            default_poster_url: DEFAULT_POSTER_URL.to_string(),
            default_profile_url: DEFAULT_PROFILE_URL.to_string(),
            fallback_back_link: FALLBACK_BACK_LINK.to_string(),
            poster_width: POSTER_WIDTH,
        }
    }
}

impl PresentationSettings {
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        image_url(&self.poster_base_url, poster_path, &self.default_poster_url)
    }

    pub fn profile_url(&self, profile_path: Option<&str>) -> String {
        image_url(&self.profile_base_url, profile_path, &self.default_profile_url)
    }
}

fn image_url(base: &str, path: Option<&str>, fallback: &str) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}", base, path),
        _ => fallback.to_string(),
    }
}

/// Text and flags for one render of the details page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsView {
    pub show_loader: bool,
    pub error_message: Option<&'static str>,
    pub poster_url: String,
    pub poster_alt: String,
    pub title: String,
    pub release_date: String,
    /// Vote average with one decimal, empty when unknown
    pub user_score: String,
    pub overview: String,
    pub genres: String,
    pub original_language: String,
    pub production_countries: String,
}

impl DetailsView {
    /// The record's fields are shown whatever the load state is.
    pub fn new(loader: &Loader<MovieDetails>, settings: &PresentationSettings) -> Self {
        let record = loader.data();
        let state = loader.state();

        Self {
            show_loader: state == LoadState::Loading,
            error_message: state.is_error().then_some(LOAD_ERROR_MESSAGE),
            poster_url: settings.poster_url(record.poster_path.as_deref()),
            poster_alt: format!("poster {}", record.title),
            title: record.title.clone(),
            release_date: record.release_date.clone(),
            user_score: format_score(record.vote_average),
            overview: record.overview.clone(),
            genres: join_names(&record.genres),
            original_language: record.original_language.clone(),
            production_countries: join_names(&record.production_countries),
        }
    }
}

/// One decimal, with exact ties rounded away from zero (8.25 -> "8.3").
///
/// `{:.1}` rounds the exact binary value and breaks ties to even. A tie is
/// only possible for multiples of 0.25, where scaling by ten is exact.
pub fn format_score(vote_average: Option<f64>) -> String {
    vote_average
        .map(|v| {
            let scaled = v * 10.0;
            if (v * 4.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
                format!("{:.1}", scaled.round() / 10.0)
            } else {
                format!("{:.1}", v)
            }
        })
        .unwrap_or_default()
}

fn join_names(entries: &[Named]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
