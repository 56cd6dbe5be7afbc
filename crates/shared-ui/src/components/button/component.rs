use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default = false)]
    pub disabled: bool,
    /// Native tooltip, used to explain why a button is disabled.
    #[props(default)]
    pub title: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Page action button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![Attribute::new("class", "button", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        button {
            r#type: "button",
            disabled: props.disabled,
            title: props.title,
            ..merged,
            {props.children}
        }
    }
}
