//! Shared UI components for the web UI.

pub mod back_link;
pub mod error_message;
pub mod layout;
pub mod loader;
pub mod movie_list;
pub mod nav;
pub mod state_link;

pub use back_link::BackLinkButton;
pub use error_message::ErrorMessage;
pub use layout::Shell;
pub use loader::Loader;
pub use movie_list::MovieList;
pub use nav::Navigation;
pub use state_link::StateLink;
