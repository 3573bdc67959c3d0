//! Mock servers for integration testing
//!
//! Simulates the remote catalog so the TMDB client and the proxy routes can
//! be tested without network access or credentials.

pub mod tmdb;

pub use tmdb::MockTmdbServer;
