use dioxus::prelude::*;

/// Page title with an optional subtitle and right-aligned actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "page-header",
            div {
                h2 { class: "page-title", "{title}" }
                if let Some(description) = description {
                    p { class: "page-description", "{description}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
