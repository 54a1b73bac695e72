use crate::prelude::*;

use crate::components::{badge::UIOutputBadges, property_table::PropertyTable};

#[component]
pub fn ItemView(resource: Option<OutputResource>) -> Element {
    let Some(resource) = resource else {
        return rsx! {};
    };
    log::debug!("ItemView Rendered: {}", resource.name);

    rsx! {
        div { class: "item-group",
            div { class: "item",
                div { class: "item-content",
                    div { class: "item-header",
                        span { class: "item-name", "{resource.name}" }
                        UIOutputBadges { enabled: resource.enabled, tags: resource.tags.clone() }
                    }
                    div { class: "item-description", "{resource.desc}" }
                    PropertyTable { properties: resource.props.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_resource_renders_nothing() {
        let resource: Option<OutputResource> = None;
        let html = dioxus_ssr::render_element(rsx! {
            ItemView { resource }
        });
        assert!(!html.contains("item"));
    }

    #[test]
    fn shows_name_description_and_properties() {
        let resource: OutputResource = serde_json::from_str(
            r#"{"name": "stdout", "desc": "Print to stdout", "props": {"format": "json"}}"#,
        )
        .unwrap();
        let html = dioxus_ssr::render_element(rsx! {
            ItemView { resource: Some(resource) }
        });
        assert!(html.contains(r#"<span class="item-name">stdout</span>"#));
        assert!(html.contains(r#"<div class="item-description">Print to stdout</div>"#));
        assert!(html.contains(r#"<td class="label-cell">format</td><td class="content-cell">json</td>"#));
    }

    #[test]
    fn no_table_without_props() {
        let resource: OutputResource = serde_json::from_str(r#"{"name": "stdout"}"#).unwrap();
        let html = dioxus_ssr::render_element(rsx! {
            ItemView { resource: Some(resource) }
        });
        assert!(html.contains("stdout"));
        assert!(!html.contains("<table"));
    }
}
