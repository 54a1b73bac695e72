use crate::prelude::*;

use crate::{components::misc::TextTooltip, utils::CCStr};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UIBadgeStyle {
    Tag,
    Enabled,
    Disabled,
}
impl UIBadgeStyle {
    fn classes(self) -> &'static str {
        match self {
            UIBadgeStyle::Tag => "badge-tag",
            UIBadgeStyle::Enabled => "badge-success",
            UIBadgeStyle::Disabled => "badge-neutral",
        }
    }
}

#[component]
pub fn UIBadge(text: CCStr, badge_style: UIBadgeStyle, tooltip: CCStr) -> Element {
    rsx! {
        TextTooltip { tooltip_text: tooltip,
            span { class: "badge {badge_style.classes()}", "{text}" }
        }
    }
}

/// Status and tags of an output, beside its header
#[component]
pub fn UIOutputBadges(enabled: Option<bool>, tags: Vec<CCStr>) -> Element {
    rsx! {
        span { class: "badges",
            match enabled {
                Some(true) => rsx! {
                    UIBadge {
                        text: CCStr::from("enabled"),
                        badge_style: UIBadgeStyle::Enabled,
                        tooltip: CCStr::from("New articles are sent to this output"),
                    }
                },
                Some(false) => rsx! {
                    UIBadge {
                        text: CCStr::from("disabled"),
                        badge_style: UIBadgeStyle::Disabled,
                        tooltip: CCStr::from("This output is ignored by the aggregator"),
                    }
                },
                None => rsx! {},
            }
            for tag in tags {
                UIBadge {
                    key: "{tag}",
                    text: tag.clone(),
                    badge_style: UIBadgeStyle::Tag,
                    tooltip: CCStr::from("Only articles with this tag are sent"),
                }
            }
        }
    }
}
