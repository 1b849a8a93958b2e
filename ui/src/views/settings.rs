use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{PageHeader, StatusChip, Tone};
use crate::context::{use_dispatch, use_portal};
use crate::core::language::Language;
use crate::t;

/// Crate version shown under "About".
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotificationKind {
    Weather,
    CropCare,
    MarketPrices,
    System,
}

impl NotificationKind {
    const ALL: [NotificationKind; 4] = [
        NotificationKind::Weather,
        NotificationKind::CropCare,
        NotificationKind::MarketPrices,
        NotificationKind::System,
    ];

    /// Market prices start switched off; everything else is on.
    fn enabled_by_default(self) -> bool {
        !matches!(self, NotificationKind::MarketPrices)
    }

    fn title(self, lang: Language) -> String {
        match self {
            NotificationKind::Weather => t!(lang, "settings-weather-alerts"),
            NotificationKind::CropCare => t!(lang, "settings-crop-reminders"),
            NotificationKind::MarketPrices => t!(lang, "settings-market-updates"),
            NotificationKind::System => t!(lang, "settings-system-alerts"),
        }
    }

    fn description(self, lang: Language) -> String {
        match self {
            NotificationKind::Weather => t!(lang, "settings-weather-alerts-hint"),
            NotificationKind::CropCare => t!(lang, "settings-crop-reminders-hint"),
            NotificationKind::MarketPrices => t!(lang, "settings-market-updates-hint"),
            NotificationKind::System => t!(lang, "settings-system-alerts-hint"),
        }
    }
}

#[component]
fn Switch(checked: bool, label: String, on_toggle: EventHandler<()>) -> Element {
    let class = if checked { "switch switch--on" } else { "switch" };
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            class,
            aria_checked: "{checked}",
            aria_label: "{label}",
            onclick: move |_| on_toggle.call(()),
            span { class: "switch__thumb" }
        }
    }
}

#[component]
fn NotificationRow(language: Language, kind: NotificationKind) -> Element {
    let lang = language;
    let mut enabled = use_signal(|| kind.enabled_by_default());
    let title = kind.title(lang);

    let (tone, badge) = if enabled() {
        (Tone::Success, t!(lang, "settings-enabled"))
    } else {
        (Tone::Neutral, t!(lang, "settings-disabled"))
    };

    rsx! {
        div { class: "setting-row",
            div { class: "setting-row__text",
                p { class: "setting-row__title", "{title}" }
                p { class: "setting-row__hint", {kind.description(lang)} }
            }
            div { class: "setting-row__control",
                Switch {
                    checked: enabled(),
                    label: title.clone(),
                    on_toggle: move |_| enabled.toggle(),
                }
                StatusChip { tone, label: badge }
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut shell = use_portal().shell;
    let dispatch = use_dispatch();
    let lang = shell.read().language();
    let mut offline = use_signal(|| true);
    let offline_label = t!(lang, "settings-offline-mode");

    rsx! {
        section { class: "page page-settings",
            PageHeader {
                title: t!(lang, "settings-title"),
                subtitle: t!(lang, "settings-subtitle"),
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", "🔔 " {t!(lang, "settings-notifications")} }
                }
                for kind in NotificationKind::ALL {
                    NotificationRow { key: "{kind:?}", language: lang, kind }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", "🌐 " {t!(lang, "settings-language")} }
                }
                div { class: "setting-row",
                    div { class: "setting-row__text",
                        p { class: "setting-row__title", {t!(lang, "settings-current-language")} }
                        p { class: "setting-row__hint", "{lang.native_name()}" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--small button--outline",
                        onclick: move |_| {
                            let next = shell.peek().language().toggled();
                            shell.write().select_language(next);
                        },
                        {t!(lang, "settings-change-language")}
                    }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", "📶 " {t!(lang, "settings-offline")} }
                }
                div { class: "setting-row",
                    div { class: "setting-row__text",
                        p { class: "setting-row__title", "{offline_label}" }
                        p { class: "setting-row__hint", {t!(lang, "settings-offline-mode-hint")} }
                    }
                    Switch {
                        checked: offline(),
                        label: offline_label.clone(),
                        on_toggle: move |_| offline.toggle(),
                    }
                }
                div { class: "stat-grid stat-grid--two",
                    div { class: "stat-grid__cell",
                        span { class: "stat-grid__label", {t!(lang, "settings-last-sync")} }
                        span { class: "stat-grid__value", {t!(lang, "settings-last-sync-value")} }
                    }
                    div { class: "stat-grid__cell",
                        span { class: "stat-grid__label", {t!(lang, "settings-data-usage")} }
                        span { class: "stat-grid__value", "45 MB" }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--outline button--block touch-button",
                    onclick: move |_| dispatch.call(PortalCommand::SyncNow),
                    "⬇️ "
                    {t!(lang, "settings-sync-now")}
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", "❓ " {t!(lang, "settings-help")} }
                }
                div { class: "button-stack",
                    button {
                        r#type: "button",
                        class: "button button--outline button--block button--start touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::OpenHelpCenter),
                        "❓ "
                        {t!(lang, "settings-help-center")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--block button--start touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::OpenTutorial),
                        "📱 "
                        {t!(lang, "settings-tutorial")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--block button--start touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::ContactSupport),
                        "🔔 "
                        {t!(lang, "settings-contact-support")}
                    }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", {t!(lang, "settings-about")} }
                }
                div { class: "setting-row",
                    div { class: "setting-row__text",
                        p { class: "setting-row__title", {t!(lang, "settings-version")} }
                        p { class: "setting-row__hint", "{APP_VERSION}" }
                    }
                    StatusChip { tone: Tone::Info, label: t!(lang, "settings-latest") }
                }
            }
        }
    }
}
