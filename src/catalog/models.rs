//! TMDB payload types.
//!
//! Every field carries a serde default so that a record missing optional
//! parts still decodes, and so that an empty record can stand in before the
//! first load completes.

use serde::{Deserialize, Serialize};

/// A `{ "name": ... }` entry, used for genres and production countries.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Named {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Video {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    /// Hosting site, e.g. "YouTube"
    #[serde(default)]
    pub site: String,
    /// e.g. "Trailer", "Teaser", "Clip"
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Video {
    /// Embeddable player URL, when the hosting site is one we can embed.
    pub fn embed_url(&self) -> Option<String> {
        if self.site.eq_ignore_ascii_case("youtube") && !self.key.is_empty() {
            Some(format!("https://www.youtube.com/embed/{}", self.key))
        } else {
            None
        }
    }
}

/// A `{ "results": [...] }` page as returned by list endpoints and
/// appended sub-resources.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_results: i64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Full movie record from `GET /movie/{id}`, optionally expanded with
/// `credits`, `reviews` and `videos`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    /// Required: anything without an id is not a movie record
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub production_countries: Vec<Named>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Page<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Page<Video>>,
}

impl MovieDetails {
    pub fn cast(&self) -> Option<&[CastMember]> {
        self.credits.as_ref().map(|c| c.cast.as_slice())
    }

    pub fn review_list(&self) -> Option<&[Review]> {
        self.reviews.as_ref().map(|r| r.results.as_slice())
    }

    pub fn video_list(&self) -> Option<&[Video]> {
        self.videos.as_ref().map(|v| v.results.as_slice())
    }
}

/// Movie entry in trending and search listings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

pub type MovieList = Page<MovieSummary>;
