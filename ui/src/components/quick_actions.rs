use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::context::use_dispatch;
use crate::core::language::Language;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuickAction {
    AddField,
    RunPrediction,
    ScanDisease,
    ViewFieldMap,
}

impl QuickAction {
    const ALL: [QuickAction; 4] = [
        QuickAction::AddField,
        QuickAction::RunPrediction,
        QuickAction::ScanDisease,
        QuickAction::ViewFieldMap,
    ];

    fn icon(self) -> &'static str {
        match self {
            QuickAction::AddField => "➕",
            QuickAction::RunPrediction => "📈",
            QuickAction::ScanDisease => "📷",
            QuickAction::ViewFieldMap => "🗺️",
        }
    }

    fn label(self, lang: Language) -> String {
        match self {
            QuickAction::AddField => t!(lang, "quick-add-field"),
            QuickAction::RunPrediction => t!(lang, "quick-run-prediction"),
            QuickAction::ScanDisease => t!(lang, "quick-scan-disease"),
            QuickAction::ViewFieldMap => t!(lang, "quick-view-field-map"),
        }
    }

    fn command(self) -> PortalCommand {
        match self {
            QuickAction::AddField => PortalCommand::AddField,
            QuickAction::RunPrediction => PortalCommand::RunPrediction,
            QuickAction::ScanDisease => PortalCommand::ScanDisease,
            QuickAction::ViewFieldMap => PortalCommand::ViewFieldMap,
        }
    }
}

#[component]
pub fn QuickActions(language: Language) -> Element {
    let dispatch = use_dispatch();
    let lang = language;

    rsx! {
        section { class: "card quick-actions",
            div { class: "card__header",
                h3 { class: "card__title", {t!(lang, "quick-actions-title")} }
            }
            div { class: "quick-actions__grid",
                for action in QuickAction::ALL {
                    button {
                        key: "{action:?}",
                        r#type: "button",
                        class: "button button--outline touch-button quick-actions__button",
                        onclick: move |_| dispatch.call(action.command()),
                        span { class: "quick-actions__icon", aria_hidden: "true", "{action.icon()}" }
                        span { {action.label(lang)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_maps_to_its_own_command() {
        let commands: Vec<_> = QuickAction::ALL.iter().map(|a| a.command()).collect();
        assert_eq!(
            commands,
            vec![
                PortalCommand::AddField,
                PortalCommand::RunPrediction,
                PortalCommand::ScanDisease,
                PortalCommand::ViewFieldMap,
            ]
        );
    }

    #[test]
    fn labels_follow_the_language() {
        assert_eq!(QuickAction::AddField.label(Language::En), "Add Field");
        assert_eq!(QuickAction::AddField.label(Language::Hi), "खेत जोड़ें");
    }
}
