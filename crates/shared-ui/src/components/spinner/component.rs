use dioxus::prelude::*;

/// Centered loading indicator.
#[component]
pub fn Spinner(#[props(default = "Wird geladen…".to_string())] label: String) -> Element {
    rsx! {
        div { class: "spinner-container", role: "status", "aria-busy": "true",
            div { class: "spinner" }
            span { class: "sr-only", "{label}" }
        }
    }
}
