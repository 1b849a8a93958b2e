use api::crops::CropKind;
use dioxus::prelude::*;

use crate::components::{AlertsPanel, CropTimeline, KpiCard, PageHeader, QuickActions, Trend};
use crate::context::use_language;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let lang = use_language();
    tracing::debug!(language = %lang, "dashboard render");

    rsx! {
        section { class: "page page-dashboard",
            PageHeader {
                title: t!(lang, "dashboard-title"),
                subtitle: t!(lang, "dashboard-subtitle"),
            }

            div { class: "kpi-grid",
                KpiCard {
                    title: t!(lang, "kpi-predicted-yield"),
                    value: "4.2",
                    unit: t!(lang, "kpi-yield-unit"),
                    trend: Trend::Up,
                    trend_value: "+8.5%".to_string(),
                    icon: "🌾",
                    caption: t!(lang, "kpi-predicted-yield-caption"),
                }
                KpiCard {
                    title: t!(lang, "kpi-next-action"),
                    value: t!(lang, "kpi-next-action-value"),
                    icon: "💧",
                    caption: t!(lang, "kpi-next-action-caption"),
                }
                KpiCard {
                    title: t!(lang, "kpi-soil-moisture"),
                    value: "35",
                    unit: "%".to_string(),
                    trend: Trend::Down,
                    trend_value: "-5%".to_string(),
                    icon: "🌡️",
                    caption: t!(lang, "kpi-soil-moisture-caption"),
                }
                KpiCard {
                    title: t!(lang, "kpi-market-price"),
                    value: "₹22,500",
                    unit: t!(lang, "kpi-per-tonne"),
                    trend: Trend::Up,
                    trend_value: "+2.1%".to_string(),
                    icon: "💰",
                    caption: t!(lang, "kpi-market-price-caption"),
                }
            }

            div { class: "dashboard-grid",
                div { class: "dashboard-grid__main",
                    CropTimeline { language: lang, crop: CropKind::Wheat }
                    QuickActions { language: lang }
                }
                div { class: "dashboard-grid__side",
                    AlertsPanel { language: lang, alerts: api::alerts::recent() }
                }
            }
        }
    }
}
