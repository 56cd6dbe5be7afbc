pub mod not_found;
pub mod profile;
pub mod sales;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdUser};
use dioxus_free_icons::Icon;

use not_found::NotFound;
use profile::Profile;
use sales::Sales;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::Profile {})]
    #[route("/profile")]
    Profile {},
    #[route("/sales")]
    Sales {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    fn title(&self) -> &'static str {
        match self {
            Route::Profile {} => "Profil",
            Route::Sales {} => "Vertrieb",
            Route::NotFound { .. } => "Nicht gefunden",
        }
    }
}

/// Page shell: navigation on the left, the active page on the right.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();

    rsx! {
        document::Title { "{route.title()} · LeanX" }
        div { class: "app-shell",
            nav { class: "app-nav",
                div { class: "app-brand", "LeanX" }
                Link {
                    to: Route::Profile {},
                    class: "nav-link",
                    active_class: "active",
                    Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                    "Profil"
                }
                Link {
                    to: Route::Sales {},
                    class: "nav-link",
                    active_class: "active",
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                    "Vertrieb"
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
