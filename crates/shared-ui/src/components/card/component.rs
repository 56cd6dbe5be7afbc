use dioxus::prelude::*;

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Framed section of a dashboard page.
///
/// `outlined` draws the heavy border used on profile cards.
#[component]
pub fn Card(
    #[props(default = false)] outlined: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card", attributes);

    rsx! {
        section {
            "data-outlined": if outlined { "true" } else { "false" },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-header", attributes);

    rsx! {
        header { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-title", attributes);

    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-description", attributes);

    rsx! {
        p { ..merged, {children} }
    }
}

/// Body of a card; lays out fields in a two-column grid when `grid` is set.
#[component]
pub fn CardContent(
    #[props(default = false)] grid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-content", attributes);

    rsx! {
        div { ..merged,
            if grid {
                div { class: "field-grid", {children} }
            } else {
                {children}
            }
        }
    }
}
