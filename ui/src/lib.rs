//! Shared UI crate for the Agricultural Portal. The shell, pages and all
//! cross-platform state live here; platform crates only add routing and
//! launch.

pub mod commands;
pub mod context;
pub mod core;
pub mod i18n;
pub mod tasks;
pub mod views;

pub mod components {
    // Shell chrome
    pub mod header;
    pub mod language_toggle;
    pub mod navigation;
    pub mod shell;
    pub use header::AppHeader;
    pub use language_toggle::LanguageToggle;
    pub use navigation::{register_nav, BottomNav, NavBuilder, NavItem, SideNav};
    pub use shell::{AppShell, THEME_CSS};

    // Page widgets
    pub mod alerts_panel;
    pub mod crop_timeline;
    pub mod kpi_card;
    pub mod page_header;
    pub mod quick_actions;
    pub mod status_chip;
    pub use alerts_panel::AlertsPanel;
    pub use crop_timeline::CropTimeline;
    pub use kpi_card::{KpiCard, Trend};
    pub use page_header::PageHeader;
    pub use quick_actions::QuickActions;
    pub use status_chip::{StatusChip, Tone};
}

pub use context::{use_portal, use_portal_provider, Portal};
