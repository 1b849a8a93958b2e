use api::alerts::{Alert, AlertKind, PANEL_LIMIT};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{StatusChip, Tone};
use crate::context::use_dispatch;
use crate::core::language::Language;
use crate::t;

fn kind_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => "⚠️",
        AlertKind::Danger => "🚨",
        AlertKind::Info => "ℹ️",
        AlertKind::Success => "✅",
    }
}

fn kind_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Warning => "alert-item alert-item--warning",
        AlertKind::Danger => "alert-item alert-item--danger",
        AlertKind::Info => "alert-item alert-item--info",
        AlertKind::Success => "alert-item alert-item--success",
    }
}

/// Alerts that make it into the panel, in fixture order.
pub fn visible_alerts(alerts: &[Alert]) -> &[Alert] {
    &alerts[..alerts.len().min(PANEL_LIMIT)]
}

#[component]
pub fn AlertsPanel(language: Language, alerts: Vec<Alert>) -> Element {
    let dispatch = use_dispatch();
    let lang = language;
    let shown = visible_alerts(&alerts).to_vec();

    rsx! {
        section { class: "card alerts-panel",
            div { class: "card__header card__header--row",
                h3 { class: "card__title", {t!(lang, "alerts-title")} }
                button {
                    r#type: "button",
                    class: "button button--link",
                    onclick: move |_| dispatch.call(PortalCommand::ViewAllAlerts),
                    {t!(lang, "alerts-view-all")}
                }
            }

            if shown.is_empty() {
                p { class: "alerts-panel__empty", {t!(lang, "alerts-empty")} }
            } else {
                ul { class: "alerts-panel__list",
                    for alert in shown {
                        li { key: "{alert.id}", class: kind_class(alert.kind),
                            span { class: "alert-item__icon", aria_hidden: "true", "{kind_icon(alert.kind)}" }
                            div { class: "alert-item__body",
                                div { class: "alert-item__row",
                                    span { class: "alert-item__title", "{lang.pick(&alert.title)}" }
                                    if alert.urgent {
                                        StatusChip { tone: Tone::Danger, label: t!(lang, "alerts-urgent") }
                                    }
                                }
                                p { class: "alert-item__description", "{lang.pick(&alert.description)}" }
                                div { class: "alert-item__footer",
                                    span { class: "alert-item__time", "{alert.timestamp}" }
                                    if let Some(action) = alert.action {
                                        button {
                                            r#type: "button",
                                            class: "button button--small button--outline",
                                            onclick: move |_| dispatch.call(PortalCommand::Alert(action)),
                                            "{lang.pick(&action.label())}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
