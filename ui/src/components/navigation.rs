use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::core::language::Language;
use crate::t;

/// Pages reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Crops,
    Soil,
    PlantDisease,
    CropPrediction,
    Admin,
    Settings,
}

/// The compact bottom bar only has room for the first few entries.
pub const BOTTOM_BAR_ITEMS: usize = 5;

impl NavItem {
    pub const ALL: [NavItem; 7] = [
        NavItem::Dashboard,
        NavItem::Crops,
        NavItem::Soil,
        NavItem::PlantDisease,
        NavItem::CropPrediction,
        NavItem::Admin,
        NavItem::Settings,
    ];

    /// URL path the platform route for this item must serve.
    pub fn path(self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Crops => "/crops",
            NavItem::Soil => "/soil",
            NavItem::PlantDisease => "/plant-disease",
            NavItem::CropPrediction => "/crop-prediction",
            NavItem::Admin => "/admin",
            NavItem::Settings => "/settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavItem::Dashboard => "🏠",
            NavItem::Crops => "🌾",
            NavItem::Soil => "⛰",
            NavItem::PlantDisease => "📷",
            NavItem::CropPrediction => "📈",
            NavItem::Admin => "📊",
            NavItem::Settings => "⚙",
        }
    }

    pub fn label(self, lang: Language) -> String {
        match self {
            NavItem::Dashboard => t!(lang, "nav-dashboard"),
            NavItem::Crops => t!(lang, "nav-crops"),
            NavItem::Soil => t!(lang, "nav-soil"),
            NavItem::PlantDisease => t!(lang, "nav-plant-disease"),
            NavItem::CropPrediction => t!(lang, "nav-crop-prediction"),
            NavItem::Admin => t!(lang, "nav-admin"),
            NavItem::Settings => t!(lang, "nav-settings"),
        }
    }
}

/// Platforms register a `NavBuilder` so `ui` never needs their `Route` enum.
///
/// The builder wraps the supplied contents (icon + localized label) in a
/// router `Link` for `item`, using `class` as the link's base class. The
/// platform should set `active_class: "nav-link--active"` so the current
/// page is highlighted.
///
/// ```ignore
/// fn nav_link(item: NavItem, class: &'static str, contents: Element) -> Element {
///     let to = match item { NavItem::Dashboard => Route::Dashboard {}, /* ... */ };
///     rsx!(Link { class, active_class: "nav-link--active", to, {contents} })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
pub struct NavBuilder {
    pub link: fn(item: NavItem, class: &'static str, contents: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub(crate) fn nav_link(item: NavItem, class: &'static str, contents: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(item, class, contents),
        // Without a registered router, fall back to plain anchors.
        None => rsx! {
            a { class, href: item.path(), {contents} }
        },
    }
}

/// Full sidebar: every page, icon and label side by side.
#[component]
pub fn SideNav(language: Language, on_navigate: Option<EventHandler<()>>) -> Element {
    let aria = t!(language, "nav-aria-primary");
    rsx! {
        nav { class: "side-nav", aria_label: "{aria}",
            ul { class: "side-nav__list",
                for item in NavItem::ALL {
                    li {
                        key: "{item.path()}",
                        class: "side-nav__item",
                        onclick: move |_| {
                            if let Some(handler) = on_navigate {
                                handler.call(());
                            }
                        },
                        {nav_link(item, "nav-link nav-link--side", rsx! {
                            span { class: "nav-link__icon", aria_hidden: "true", "{item.icon()}" }
                            span { class: "nav-link__label", "{item.label(language)}" }
                        })}
                    }
                }
            }
        }
    }
}

/// Compact bottom bar: icon over label.
#[component]
pub fn BottomNav(language: Language) -> Element {
    let aria = t!(language, "nav-aria-primary");
    rsx! {
        nav { class: "bottom-nav", aria_label: "{aria}",
            for item in NavItem::ALL.into_iter().take(BOTTOM_BAR_ITEMS) {
                {nav_link(item, "nav-link nav-link--bottom", rsx! {
                    span { class: "nav-link__icon", aria_hidden: "true", "{item.icon()}" }
                    span { class: "nav-link__label", "{item.label(language)}" }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = NavItem::ALL.iter().map(|i| i.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NavItem::ALL.len());
    }

    #[test]
    fn bottom_bar_skips_admin_and_settings() {
        let shown: Vec<_> = NavItem::ALL.into_iter().take(BOTTOM_BAR_ITEMS).collect();
        assert!(!shown.contains(&NavItem::Admin));
        assert!(!shown.contains(&NavItem::Settings));
        assert_eq!(shown.last(), Some(&NavItem::CropPrediction));
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(NavItem::PlantDisease.label(Language::En), "Plant Disease");
        assert_eq!(NavItem::PlantDisease.label(Language::Hi), "पौधे की बीमारी");
    }
}
