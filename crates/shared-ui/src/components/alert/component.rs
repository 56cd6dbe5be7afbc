use dioxus::prelude::*;

/// Visible error region announced to assistive technology.
#[component]
pub fn Alert(
    /// Bold lead-in, e.g. "Fehler!".
    title: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "alert", role: "alert",
            strong { class: "alert-title", "{title}" }
            span { class: "alert-message", " ", {children} }
        }
    }
}
