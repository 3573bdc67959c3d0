//! Movie Finder
//!
//! A browser UI for browsing the TMDB movie catalog.
//!
//! This library provides:
//! - Catalog types and clients (TMDB over HTTP, browser proxy client)
//! - The details loading/presentation state machine
//! - Dioxus web UI (navigation, search, details with cast/reviews/videos)
//! - HTTP proxy that keeps TMDB credentials server-side (`server` feature)

#[cfg(feature = "server")]
pub mod api;
pub mod app;
pub mod catalog;
#[cfg(feature = "server")]
pub mod config;
pub mod details;
