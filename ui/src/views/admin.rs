use api::admin::{self, ActivityStatus};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{KpiCard, PageHeader, StatusChip, Tone};
use crate::context::{use_dispatch, use_language};
use crate::t;

fn activity_tone(status: ActivityStatus) -> Tone {
    match status {
        ActivityStatus::Success => Tone::Success,
        ActivityStatus::Info => Tone::Info,
        ActivityStatus::Warning => Tone::Warning,
    }
}

#[component]
pub fn Admin() -> Element {
    let lang = use_language();
    let dispatch = use_dispatch();
    let totals = admin::totals();
    let model = admin::model();

    rsx! {
        section { class: "page page-admin",
            PageHeader {
                title: t!(lang, "admin-title"),
                subtitle: t!(lang, "admin-subtitle"),
            }

            div { class: "kpi-grid",
                KpiCard { title: t!(lang, "admin-farmers"), value: "{totals.farmers_onboarded}", icon: "👥" }
                KpiCard { title: t!(lang, "admin-models"), value: "{totals.models_active}", icon: "🧠" }
                KpiCard { title: t!(lang, "admin-alerts"), value: "{totals.alerts_today}", icon: "🔔" }
                KpiCard { title: t!(lang, "admin-uptime"), value: "{totals.uptime}", icon: "🖥️" }
            }

            div { class: "split-grid split-grid--even",
                section { class: "card",
                    div { class: "card__header",
                        h3 { class: "card__title", {t!(lang, "admin-model-management")} }
                    }
                    dl { class: "facts",
                        div { class: "facts__row",
                            dt { {t!(lang, "admin-current-version")} }
                            dd { "{model.version}" }
                        }
                        div { class: "facts__row",
                            dt { {t!(lang, "admin-last-retrained")} }
                            dd { "{model.last_retrained}" }
                        }
                        div { class: "facts__row",
                            dt { {t!(lang, "admin-accuracy")} }
                            dd { class: "facts__value--good", "{model.accuracy}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary button--block touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::TriggerRetrain),
                        "🔄 "
                        {t!(lang, "admin-trigger-retrain")}
                    }
                }

                section { class: "card",
                    div { class: "card__header",
                        h3 { class: "card__title", {t!(lang, "admin-recent-activity")} }
                    }
                    ul { class: "activity-list",
                        for activity in admin::recent_activity() {
                            li { key: "{activity.id}", class: "activity-list__item",
                                StatusChip {
                                    tone: activity_tone(activity.status),
                                    label: "●",
                                }
                                div {
                                    p { class: "activity-list__action", "{lang.pick(&activity.action)}" }
                                    p { class: "activity-list__time", "{activity.timestamp}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", {t!(lang, "admin-system-stats")} }
                }
                div { class: "stat-grid",
                    div { class: "stat-grid__cell",
                        span { class: "stat-grid__value", "{totals.total_predictions}" }
                        span { class: "stat-grid__label", {t!(lang, "admin-total-predictions")} }
                    }
                    div { class: "stat-grid__cell",
                        span { class: "stat-grid__value", "{totals.disease_scans}" }
                        span { class: "stat-grid__label", {t!(lang, "admin-disease-scans")} }
                    }
                    div { class: "stat-grid__cell",
                        span { class: "stat-grid__value", "{totals.advisories_sent}" }
                        span { class: "stat-grid__label", {t!(lang, "admin-advisories-sent")} }
                    }
                }
            }
        }
    }
}
