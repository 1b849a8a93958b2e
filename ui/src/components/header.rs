use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::LanguageToggle;
use crate::context::{use_dispatch, use_portal};
use crate::t;

/// Number shown on the notification bell.
const UNREAD_NOTIFICATIONS: u32 = 3;

#[component]
pub fn AppHeader() -> Element {
    let mut shell = use_portal().shell;
    let dispatch = use_dispatch();

    let (lang, compact, menu_open) = {
        let state = shell.read();
        (state.language(), state.is_compact(), state.is_menu_open())
    };

    let toggle_label = t!(lang, "header-toggle-menu");
    let notifications_label = t!(lang, "header-notifications");
    let profile_label = t!(lang, "header-profile");

    rsx! {
        header { class: "portal-header",
            div { class: "portal-header__inner",
                div { class: "portal-header__start",
                    if compact {
                        button {
                            r#type: "button",
                            class: "button button--ghost touch-button portal-header__menu",
                            aria_label: "{toggle_label}",
                            aria_expanded: "{menu_open}",
                            onclick: move |_| shell.write().toggle_mobile_menu(),
                            if menu_open { "✕" } else { "☰" }
                        }
                    }
                    div { class: "portal-header__brand",
                        span { class: "portal-header__logo", aria_hidden: "true", "🌾" }
                        div { class: "portal-header__titles",
                            h1 { class: "portal-header__title", {t!(lang, "header-title")} }
                            p { class: "portal-header__subtitle", {t!(lang, "header-subtitle")} }
                        }
                    }
                }

                div { class: "portal-header__end",
                    LanguageToggle {
                        current: lang,
                        on_change: move |code: String| {
                            shell.write().set_language(&code);
                        },
                    }

                    button {
                        r#type: "button",
                        class: "button button--ghost touch-button portal-header__bell",
                        aria_label: "{notifications_label}",
                        onclick: move |_| dispatch.call(PortalCommand::OpenNotifications),
                        span { aria_hidden: "true", "🔔" }
                        span { class: "badge badge--danger portal-header__badge", "{UNREAD_NOTIFICATIONS}" }
                    }

                    button {
                        r#type: "button",
                        class: "button button--ghost touch-button portal-header__profile",
                        aria_label: "{profile_label}",
                        onclick: move |_| dispatch.call(PortalCommand::OpenProfile),
                        span { class: "portal-header__avatar", aria_hidden: "true", "👤" }
                        span { class: "portal-header__farmer",
                            span { class: "portal-header__farmer-name", {t!(lang, "header-farmer-name")} }
                            span { class: "portal-header__farmer-location", {t!(lang, "header-farmer-location")} }
                        }
                    }
                }
            }
        }
    }
}
