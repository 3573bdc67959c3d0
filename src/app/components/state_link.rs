//! Link that carries navigation state.

use dioxus::prelude::*;

use crate::app::navigation::use_navigation;
use crate::app::Route;
use crate::details::NavigationState;

/// Anchor to `to` that parks `state` in the navigation context on click.
///
/// The href stays a real URL so opening in a new tab still works; that
/// path simply arrives without state.
#[component]
pub fn StateLink(
    to: Route,
    state: NavigationState,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let navigation = use_navigation();
    let href = to.to_string();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigation.push(to.clone(), state.clone());
            },
            {children}
        }
    }
}
