use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder, NavItem, THEME_CSS};
use ui::views::{Admin, CropPrediction, Crops, Dashboard, NotFound, PlantDisease, Settings, Soil};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
    #[route("/")]
    Dashboard {},
    #[route("/crops")]
    Crops {},
    #[route("/soil")]
    Soil {},
    #[route("/plant-disease")]
    PlantDisease {},
    #[route("/crop-prediction")]
    CropPrediction {},
    #[route("/admin")]
    Admin {},
    #[route("/settings")]
    Settings {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn route_for(item: NavItem) -> Route {
    match item {
        NavItem::Dashboard => Route::Dashboard {},
        NavItem::Crops => Route::Crops {},
        NavItem::Soil => Route::Soil {},
        NavItem::PlantDisease => Route::PlantDisease {},
        NavItem::CropPrediction => Route::CropPrediction {},
        NavItem::Admin => Route::Admin {},
        NavItem::Settings => Route::Settings {},
    }
}

fn nav_link(item: NavItem, class: &'static str, contents: Element) -> Element {
    rsx!(Link {
        class: "{class}",
        active_class: "nav-link--active",
        to: route_for(item),
        {contents}
    })
}

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });
    ui::use_portal_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// Wraps every route in the shared shell so `ui` never needs this `Route`.
#[component]
fn MobileShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/does/not/exist".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["does".into(), "not".into(), "exist".into()]
            })
        );
    }

    #[test]
    fn every_nav_item_has_a_matching_route() {
        for item in NavItem::ALL {
            assert_eq!(item.path().parse::<Route>().ok(), Some(route_for(item)), "{item:?}");
            assert_eq!(route_for(item).to_string(), item.path());
        }
    }
}
