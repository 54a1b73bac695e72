use crate::prelude::*;

use crate::utils::CCStr;

#[component]
pub fn TextTooltip(tooltip_text: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "contents", title: "{tooltip_text}", {children} }
    }
}

/// Collapsible panel, open when first displayed
#[component]
pub fn Panel(title: CCStr, subtitle: Option<CCStr>, children: Element) -> Element {
    rsx! {
        details { class: "panel", open: true,
            summary { class: "panel-title",
                "{title}"
                if let Some(subtitle) = subtitle {
                    span { class: "panel-subtitle", "{subtitle}" }
                }
            }
            div { class: "segment", {children} }
        }
    }
}

/// Dimming layer over its sibling content
///
/// Always part of the tree, `active` only toggles its visibility.
#[component]
pub fn LoadingOverlay(active: bool) -> Element {
    rsx! {
        div { class: "dimmer", class: if active { "active" },
            div { class: "loader", "Loading" }
        }
    }
}
