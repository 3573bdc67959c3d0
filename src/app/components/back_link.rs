use dioxus::prelude::*;

/// "Go back" link to a captured location.
#[component]
pub fn BackLinkButton(to: String) -> Element {
    rsx! {
        Link { class: "back-link", to: to, "← Go back" }
    }
}
