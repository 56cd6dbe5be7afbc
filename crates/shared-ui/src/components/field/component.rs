use dioxus::prelude::*;

/// Labelled, read-only text input showing one profile value.
///
/// Empty values render as an empty input rather than a placeholder, so the
/// field never suggests data that is not there. `multiline` switches to a
/// textarea for list-like text.
#[component]
pub fn ReadOnlyField(
    /// Visible label, e.g. "Vorname".
    label: String,
    #[props(default)] value: String,
    /// DOM id linking label and input.
    id: String,
    #[props(default = false)] multiline: bool,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: "{id}", "{label}" }
            if multiline {
                textarea {
                    class: "textarea",
                    id: "{id}",
                    value: "{value}",
                    readonly: true,
                }
            } else {
                input {
                    class: "input",
                    id: "{id}",
                    r#type: "text",
                    value: "{value}",
                    readonly: true,
                }
            }
        }
    }
}
