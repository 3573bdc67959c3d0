//! Page components.
//!
//! Pages load through the [`crate::details::Loader`] state machine via
//! [`crate::app::fetch::restart_fetch`]; nested details sections never fetch.

mod cast;
mod home;
mod movie_details;
mod movies;
mod not_found;
mod reviews;
mod videos;

pub use cast::MovieCast;
pub use home::Home;
pub use movie_details::{DetailsContext, MovieDetailsPage, MovieOverview};
pub use movies::Movies;
pub use not_found::NotFound;
pub use reviews::MovieReviews;
pub use videos::MovieVideos;
