use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for paths outside the dashboard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Seite nicht gefunden" }
            p { class: "not-found-message",
                "Die Seite "
                code { "{path}" }
                " existiert nicht."
            }
            Link { to: Route::Profile {}, class: "not-found-link", "Zurück zum Profil" }
        }
    }
}
