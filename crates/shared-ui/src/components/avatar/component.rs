use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Round profile badge showing the person's initials.
#[component]
pub fn ProfileAvatar(
    /// e.g. "AM".
    initials: String,
) -> Element {
    rsx! {
        div { class: "avatar-frame",
            prim::Avatar { class: "avatar",
                prim::AvatarFallback { class: "avatar-fallback", "{initials}" }
            }
        }
    }
}
