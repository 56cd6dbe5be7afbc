use dioxus::prelude::*;
use shared_ui::PageHeader;

/// Landing page of the sales area. Content is still to come.
#[component]
pub fn Sales() -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Vertrieb" }
        }
    }
}
