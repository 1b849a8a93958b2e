use api::fields::{self, SoilStatus};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{KpiCard, PageHeader, StatusChip, Tone};
use crate::context::{use_dispatch, use_language};
use crate::core::language::Language;
use crate::t;

fn soil_chip(lang: Language, status: SoilStatus) -> (Tone, String) {
    match status {
        SoilStatus::Good => (Tone::Success, t!(lang, "soil-status-good")),
        SoilStatus::NeedsWater => (Tone::Warning, t!(lang, "soil-status-needs-water")),
        SoilStatus::Optimal => (Tone::Info, t!(lang, "soil-status-optimal")),
    }
}

#[component]
pub fn Soil() -> Element {
    let lang = use_language();
    let dispatch = use_dispatch();
    let overview = fields::overview();

    rsx! {
        section { class: "page page-soil",
            PageHeader {
                title: t!(lang, "soil-title"),
                subtitle: t!(lang, "soil-subtitle"),
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: "button button--primary touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::RequestSoilTest),
                        {t!(lang, "soil-request-test")}
                    }
                },
            }

            div { class: "kpi-grid kpi-grid--three",
                KpiCard {
                    title: t!(lang, "soil-total-fields"),
                    value: "{overview.total_fields}",
                    icon: "🗺️",
                }
                KpiCard {
                    title: t!(lang, "soil-average-ph"),
                    value: format!("{:.1}", overview.average_ph),
                    icon: "🧪",
                }
                KpiCard {
                    title: t!(lang, "soil-average-moisture"),
                    value: "{overview.average_moisture_pct}",
                    unit: "%".to_string(),
                    icon: "💧",
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", {t!(lang, "soil-fields-title")} }
                }
                ul { class: "field-list",
                    for field in fields::fields() {
                        {
                            let id = field.id;
                            let (tone, status) = soil_chip(lang, field.status);
                            rsx! {
                                li { key: "{id.value()}", class: "field-list__item",
                                    div { class: "field-list__head",
                                        span { class: "field-list__name", "{lang.pick(&field.name)}" }
                                        StatusChip { tone, label: status }
                                    }
                                    dl { class: "facts facts--inline",
                                        div { class: "facts__row",
                                            dt { {t!(lang, "soil-area")} }
                                            dd { "{field.area_hectares:.1} ha" }
                                        }
                                        div { class: "facts__row",
                                            dt { "pH" }
                                            dd { "{field.ph:.1}" }
                                        }
                                        div { class: "facts__row",
                                            dt { {t!(lang, "soil-moisture")} }
                                            dd { "{field.moisture_pct}%" }
                                        }
                                        div { class: "facts__row",
                                            dt { {t!(lang, "soil-last-test")} }
                                            dd { "{field.last_test}" }
                                        }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "button button--link",
                                        onclick: move |_| dispatch.call(PortalCommand::ViewFieldDetails(id)),
                                        {t!(lang, "soil-view-details")}
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
