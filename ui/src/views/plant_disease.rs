use api::disease::{self, DiseaseScan, Severity};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{PageHeader, StatusChip, Tone};
use crate::context::{use_dispatch, use_language};
use crate::core::language::Language;
use crate::t;
use crate::tasks::{MockOperation, OperationState};

fn severity_chip(lang: Language, severity: Severity) -> (Tone, String) {
    match severity {
        Severity::Low => (Tone::Success, t!(lang, "severity-low")),
        Severity::Medium => (Tone::Warning, t!(lang, "severity-medium")),
        Severity::High => (Tone::Danger, t!(lang, "severity-high")),
    }
}

#[component]
pub fn PlantDisease() -> Element {
    let lang = use_language();
    let dispatch = use_dispatch();
    let mut scan = use_signal(MockOperation::<DiseaseScan>::default);

    // Photo capture is simulated: both buttons start the same scan.
    let mut start_scan = move || {
        let Some(ticket) = scan.write().trigger() else {
            tracing::debug!("scan already running; ignoring trigger");
            return;
        };
        spawn(async move {
            let result = disease::scan_plant_image().await;
            if !scan.write().complete(ticket, result) {
                tracing::debug!("dropping stale scan result");
            }
        });
    };

    let body = match scan.read().state().clone() {
        OperationState::Idle => rsx! {
            div { class: "scan-card__prompt",
                span { class: "scan-card__camera", aria_hidden: "true", "📷" }
                p { class: "scan-card__lead", {t!(lang, "disease-prompt")} }
                p { class: "scan-card__hint", {t!(lang, "disease-prompt-hint")} }
                div { class: "button-row",
                    button {
                        r#type: "button",
                        class: "button button--primary touch-button",
                        onclick: move |_| start_scan(),
                        "📷 "
                        {t!(lang, "disease-take-photo")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline touch-button",
                        onclick: move |_| start_scan(),
                        "⬆️ "
                        {t!(lang, "disease-upload")}
                    }
                }
            }
        },
        OperationState::Pending => rsx! {
            div { class: "scan-card__pending", role: "status",
                div { class: "spinner", aria_hidden: "true" }
                p { {t!(lang, "disease-scanning")} }
            }
        },
        OperationState::Complete(result) => rsx! {
            div { class: "scan-card__result",
                div { class: "result-box result-box--success",
                    h4 { class: "result-box__title", "⚠️ " {t!(lang, "disease-detected")} }
                    p { class: "result-box__value", "{lang.pick(&result.disease)}" }
                    p { class: "result-box__meta",
                        {t!(lang, "disease-confidence", value = result.confidence)}
                    }
                }
                div { class: "result-box result-box--info",
                    h4 { class: "result-box__title", {t!(lang, "disease-treatment-title")} }
                    p { "{lang.pick(&result.treatment)}" }
                }
                div { class: "button-row",
                    button {
                        r#type: "button",
                        class: "button button--outline touch-button",
                        onclick: move |_| scan.write().reset(),
                        {t!(lang, "disease-scan-another")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary touch-button",
                        onclick: move |_| dispatch.call(PortalCommand::ConsultExpert),
                        "📞 "
                        {t!(lang, "disease-consult-expert")}
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page page-disease",
            PageHeader {
                title: t!(lang, "disease-title"),
                subtitle: t!(lang, "disease-subtitle"),
            }

            div { class: "split-grid",
                section { class: "card scan-card",
                    div { class: "card__header",
                        h3 { class: "card__title", {t!(lang, "disease-scan-title")} }
                    }
                    div { class: "scan-card__area", {body} }
                }

                section { class: "card disease-library",
                    div { class: "card__header",
                        h3 { class: "card__title", "📖 " {t!(lang, "disease-library-title")} }
                    }
                    ul { class: "disease-library__list",
                        for entry in disease::library() {
                            {
                                let id = entry.id;
                                let (tone, severity) = severity_chip(lang, entry.severity);
                                rsx! {
                                    li { key: "{id}", class: "disease-library__item",
                                        div { class: "disease-library__head",
                                            div {
                                                h4 { class: "disease-library__name", "{lang.pick(&entry.name)}" }
                                                p { class: "disease-library__crop", "{lang.pick(&entry.crop)}" }
                                            }
                                            StatusChip { tone, label: severity }
                                        }
                                        p { class: "disease-library__description", "{lang.pick(&entry.description)}" }
                                        button {
                                            r#type: "button",
                                            class: "button button--small button--outline button--block",
                                            onclick: move |_| dispatch.call(PortalCommand::ViewTreatment(id)),
                                            {t!(lang, "disease-view-treatment")}
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
}
