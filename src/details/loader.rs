//! Keyed fetch state machine.
//!
//! A [`Loader`] owns the data for whatever key (movie id, search query) the
//! page currently shows. Every [`Loader::begin`] hands out a [`FetchTicket`]
//! stamped with a fresh generation; [`Loader::settle`] only applies a result
//! whose ticket is still the newest one, so a slow response for a key the
//! user has already left can never overwrite the current page.

use std::fmt::Display;

/// Where a page's fetch currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Error,
    Ready,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        self == LoadState::Loading
    }

    pub fn is_error(self) -> bool {
        self == LoadState::Error
    }
}

/// Identifies one issued request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    key: String,
}

impl FetchTicket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of handing a result to [`Loader::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The result was applied and the loader is now in this state.
    Applied(LoadState),
    /// The ticket was superseded; the result was dropped.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Loader<T> {
    state: LoadState,
    data: T,
    key: Option<String>,
    generation: u64,
}

impl<T: Default> Loader<T> {
    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Key of the most recent [`Loader::begin`].
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Start loading `key`, superseding any outstanding ticket.
    ///
    /// Data belonging to a different key is dropped so the page never shows
    /// one movie's fields under another movie's id. Restarting the same key
    /// keeps the current data on screen until the new result lands.
    pub fn begin(&mut self, key: &str) -> FetchTicket {
        self.generation += 1;
        if self.key.as_deref() != Some(key) {
            self.data = T::default();
            self.key = Some(key.to_string());
        }
        self.state = LoadState::Loading;
        tracing::debug!(key, generation = self.generation, "load started");

        FetchTicket {
            generation: self.generation,
            key: key.to_string(),
        }
    }

    /// Apply the result of `ticket`'s request, unless a newer one was issued.
    pub fn settle<E: Display>(&mut self, ticket: &FetchTicket, result: Result<T, E>) -> Settlement {
        if ticket.generation != self.generation || !self.state.is_loading() {
            tracing::debug!(
                key = ticket.key.as_str(),
                generation = ticket.generation,
                current = self.generation,
                "discarding superseded load result"
            );
            return Settlement::Stale;
        }

        match result {
            Ok(data) => {
                self.data = data;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::warn!(key = ticket.key.as_str(), "load failed: {}", e);
                self.state = LoadState::Error;
            }
        }
        Settlement::Applied(self.state)
    }
}
