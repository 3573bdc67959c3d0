use dioxus::prelude::*;

/// Loading indicator.
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status", "aria-busy": "true", "Loading..." }
    }
}
