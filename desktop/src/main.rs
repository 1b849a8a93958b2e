#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder, NavItem};
use ui::views::{Admin, CropPrediction, Crops, Dashboard, NotFound, PlantDisease, Settings, Soil};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

fn init_logging() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Agricultural Portal – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1280.0, 800.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
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

#[component]
fn App() -> Element {
    register_nav(NavBuilder { link: nav_link });
    ui::use_portal_provider();

    rsx! {
        // Always inline the theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop wrapper placing every route inside the shared shell.
#[component]
fn DesktopShell() -> Element {
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
    fn unknown_path_renders_not_found() {
        assert_eq!(
            "/unknown".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["unknown".into()]
            })
        );
    }

    #[test]
    fn nav_items_round_trip_through_routes() {
        for item in NavItem::ALL {
            assert_eq!(route_for(item).to_string(), item.path(), "{item:?}");
        }
    }
}
