//! Fetch failure message.

use dioxus::prelude::*;

/// Static error text shown when a page's fetch failed.
#[component]
pub fn ErrorMessage(
    /// The message to display
    message: String,
) -> Element {
    rsx! {
        p { class: "error-msg", role: "alert", "{message}" }
    }
}
