//! Navigation state context.
//!
//! The router only knows URLs. Data that should travel with a transition
//! without being part of the URL (the back-link origin, an already-fetched
//! sub-collection) is parked here right before the navigation happens and
//! read by the destination when it mounts.
//!
//! Parked state is stamped with the route it was sent to. Arriving anywhere
//! else (navigation bar, browser history, typed URL) finds nothing.

use dioxus::prelude::*;

use crate::details::NavigationState;

use super::Route;

#[derive(Clone, Debug, PartialEq)]
struct Parked {
    target: Route,
    state: NavigationState,
}

#[derive(Clone, Copy)]
pub struct NavigationContext {
    parked: Signal<Option<Parked>>,
}

impl NavigationContext {
    /// State carried to `at` by the most recent [`NavigationContext::push`],
    /// read without subscribing.
    pub fn incoming(&self, at: &Route) -> Option<NavigationState> {
        self.parked
            .peek()
            .as_ref()
            .filter(|parked| &parked.target == at)
            .map(|parked| parked.state.clone())
    }

    /// Attach `state` to the next arrival at `target`.
    pub fn park(&self, target: Route, state: NavigationState) {
        let mut slot = self.parked;
        slot.set(Some(Parked { target, state }));
    }

    /// Navigate to `target`, carrying `state` along.
    pub fn push(&self, target: Route, state: NavigationState) {
        self.park(target.clone(), state);
        navigator().push(target);
    }
}

/// Initialize navigation state context - call once at app root
pub fn use_navigation_provider() -> NavigationContext {
    let parked = use_signal(|| None::<Parked>);
    use_context_provider(|| NavigationContext { parked })
}

/// Get navigation state context - use in any component
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>()
}
