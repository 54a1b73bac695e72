use crate::prelude::*;

/// Two columns table, property name as a label cell then its value
#[component]
pub fn PropertyTable(properties: Option<OutputProperties>) -> Element {
    let Some(properties) = properties else {
        return rsx! {};
    };

    rsx! {
        div { class: "item-extra",
            table { class: "table table-definition",
                tbody {
                    for (label , content) in properties.rows() {
                        tr { key: "prop-{label}",
                            td { class: "label-cell", "{label}" }
                            td { class: "content-cell", "{content}" }
                        }
                    }
                }
            }
        }
    }
}
