use crate::prelude::*;

pub const ERROR_BANNER_HEADER: &str = "An error occurred";

/// Negative banner explaining why the output could not be loaded
#[component]
pub fn ErrorBanner(error: Option<FetchError>) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };
    log::debug!("ErrorBanner Rendered: {error:?}");

    rsx! {
        div { role: "alert", class: "alert alert-error",
            div { class: "alert-header", {ERROR_BANNER_HEADER} }
            p { class: "alert-body", "{error}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(error: Option<FetchError>) -> String {
        dioxus_ssr::render_element(rsx! {
            ErrorBanner { error }
        })
    }

    #[test]
    fn absent_error_renders_nothing() {
        let html = render(None);
        assert!(!html.contains(ERROR_BANNER_HEADER));
        assert!(!html.contains("alert"));
    }

    #[test]
    fn shows_header_and_extracted_message() {
        for (payload, expected) in [
            (json!({"message": "a"}), "a"),
            (json!({"detail": "b"}), "b"),
            (json!({"Msg": "c"}), "c"),
            (json!({}), "{}"),
        ] {
            let html = render(Some(FetchError::from_payload(payload)));
            assert!(html.contains(ERROR_BANNER_HEADER));
            assert!(
                html.contains(&format!(">{expected}</p>")),
                "{expected} not found in {html}"
            );
        }
    }
}
