use dioxus::prelude::*;

use crate::components::{AppHeader, BottomNav, SideNav};
use crate::context::use_portal;
use crate::core::shell::LayoutMode;

/// Shared theme. Web and mobile link it; desktop inlines the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Header, navigation and content region, arranged for the current layout.
///
/// - Desktop: persistent sidebar.
/// - Compact: bottom bar, plus the sidebar as an overlay while the menu is open.
#[component]
pub fn AppShell(children: Element) -> Element {
    let mut shell = use_portal().shell;
    let (lang, layout) = {
        let state = shell.read();
        (state.language(), state.layout())
    };
    let compact = layout != LayoutMode::Desktop;
    let main_class = if compact {
        "shell__main shell__main--compact"
    } else {
        "shell__main"
    };

    let layout_attr = match layout {
        LayoutMode::Desktop => "desktop",
        LayoutMode::CompactMenuClosed => "compact",
        LayoutMode::CompactMenuOpen => "compact-menu-open",
    };

    rsx! {
        div { class: "shell", lang: "{lang.code()}", "data-layout": "{layout_attr}",
            AppHeader {}

            div { class: "shell__body",
                if layout == LayoutMode::Desktop {
                    aside { class: "shell__sidebar",
                        SideNav { language: lang }
                    }
                }

                if layout == LayoutMode::CompactMenuOpen {
                    div { class: "menu-overlay",
                        div {
                            class: "menu-overlay__backdrop",
                            onclick: move |_| shell.write().close_mobile_menu(),
                        }
                        div { class: "menu-overlay__panel",
                            SideNav {
                                language: lang,
                                on_navigate: move |_| shell.write().close_mobile_menu(),
                            }
                        }
                    }
                }

                main { class: main_class,
                    {children}
                }
            }

            if compact {
                BottomNav { language: lang }
            }
        }
    }
}
