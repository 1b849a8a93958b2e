use api::crops::CropKind;
use api::fields::FieldId;
use api::prediction::{self, Horizon, PredictionRequest, YieldPrediction};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::PageHeader;
use crate::context::{use_dispatch, use_language};
use crate::core::language::Language;
use crate::t;
use crate::tasks::{MockOperation, OperationState};

fn field_label(lang: Language, field: FieldId) -> String {
    match field {
        FieldId::A => t!(lang, "prediction-field-a"),
        FieldId::B => t!(lang, "prediction-field-b"),
        FieldId::C => t!(lang, "prediction-field-c"),
    }
}

fn impact_class(positive: bool) -> &'static str {
    if positive {
        "impact impact--positive"
    } else {
        "impact impact--negative"
    }
}

fn horizon_label(lang: Language, horizon: Horizon) -> String {
    t!(lang, "prediction-horizon-months", count = horizon.months())
}

#[component]
pub fn CropPrediction() -> Element {
    let lang = use_language();
    let mut form = use_signal(PredictionRequest::default);
    let mut run = use_signal(MockOperation::<YieldPrediction>::default);
    let pending = run.read().is_pending();

    let submit = move |_: MouseEvent| {
        let Some(ticket) = run.write().trigger() else {
            return;
        };
        let request = form.read().clone();
        spawn(async move {
            let forecast = prediction::run_crop_prediction(request).await;
            if !run.write().complete(ticket, forecast) {
                tracing::debug!("dropping stale prediction");
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        section { class: "page page-prediction",
            PageHeader {
                title: t!(lang, "prediction-title"),
                subtitle: t!(lang, "prediction-subtitle"),
            }

            div { class: "split-grid",
                section { class: "card prediction-form",
                    div { class: "card__header",
                        h3 { class: "card__title", {t!(lang, "prediction-input-title")} }
                    }
                    div { class: "form",
                        label { class: "form__field",
                            span { class: "form__label", {t!(lang, "prediction-select-field")} }
                            select {
                                class: "input",
                                value: "{current.field.value()}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(field) = FieldId::from_value(&evt.value()) {
                                        form.write().field = field;
                                    }
                                },
                                for field in FieldId::ALL {
                                    option {
                                        key: "{field.value()}",
                                        value: "{field.value()}",
                                        selected: field == current.field,
                                        {field_label(lang, field)}
                                    }
                                }
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", {t!(lang, "prediction-select-crop")} }
                            select {
                                class: "input",
                                value: "{current.crop.value()}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(crop) = CropKind::from_value(&evt.value()) {
                                        form.write().crop = crop;
                                    }
                                },
                                for crop in CropKind::ALL {
                                    option {
                                        key: "{crop.value()}",
                                        value: "{crop.value()}",
                                        selected: crop == current.crop,
                                        "{lang.pick(&crop.name())}"
                                    }
                                }
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", {t!(lang, "prediction-sowing-date")} }
                            input {
                                class: "input",
                                r#type: "date",
                                value: "{current.sowing_date}",
                                oninput: move |evt: FormEvent| form.write().sowing_date = evt.value(),
                            }
                        }
                        label { class: "form__field",
                            span { class: "form__label", {t!(lang, "prediction-horizon")} }
                            select {
                                class: "input",
                                value: "{current.horizon.value()}",
                                oninput: move |evt: FormEvent| {
                                    if let Some(horizon) = Horizon::from_value(&evt.value()) {
                                        form.write().horizon = horizon;
                                    }
                                },
                                for horizon in Horizon::ALL {
                                    option {
                                        key: "{horizon.value()}",
                                        value: "{horizon.value()}",
                                        selected: horizon == current.horizon,
                                        {horizon_label(lang, horizon)}
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary button--block touch-button",
                            disabled: pending,
                            onclick: submit,
                            if pending {
                                {t!(lang, "prediction-loading")}
                            } else {
                                {t!(lang, "prediction-run")}
                            }
                        }
                    }
                }

                PredictionResults { language: lang, state: run.read().state().clone() }
            }
        }
    }
}

#[component]
fn PredictionResults(language: Language, state: OperationState<YieldPrediction>) -> Element {
    let lang = language;
    let dispatch = use_dispatch();

    let body = match state {
        OperationState::Idle => rsx! {
            div { class: "empty-state",
                span { class: "empty-state__icon", aria_hidden: "true", "📊" }
                p { class: "empty-state__title", {t!(lang, "prediction-empty-title")} }
                p { {t!(lang, "prediction-empty-hint")} }
            }
        },
        OperationState::Pending => rsx! {
            div { class: "scan-card__pending", role: "status",
                div { class: "spinner", aria_hidden: "true" }
                p { {t!(lang, "prediction-loading")} }
            }
        },
        OperationState::Complete(forecast) => rsx! {
            div { class: "prediction-result",
                div { class: "prediction-result__headline",
                    span { class: "prediction-result__label", {t!(lang, "prediction-yield")} }
                    span { class: "prediction-result__value", "{forecast.yield_value}" }
                    span { class: "prediction-result__unit", "{forecast.unit}" }
                    p { class: "prediction-result__confidence",
                        {t!(lang, "prediction-confidence")}
                        ": {forecast.confidence}"
                    }
                }

                h4 { class: "section-title", {t!(lang, "prediction-factors")} }
                ul { class: "factor-list",
                    for factor in forecast.factors.iter() {
                        li { key: "{factor.factor.en}", class: "factor-list__item",
                            div {
                                p { class: "factor-list__name", "{lang.pick(&factor.factor)}" }
                                p { class: "factor-list__description", "{lang.pick(&factor.description)}" }
                            }
                            span { class: impact_class(factor.is_positive()), "{factor.impact_label()}" }
                        }
                    }
                }

                h4 { class: "section-title", {t!(lang, "prediction-recommendations")} }
                ul { class: "recommendation-list",
                    for (index, rec) in forecast.recommendations.iter().enumerate() {
                        li { key: "{index}", class: "recommendation-list__item",
                            div {
                                p { class: "recommendation-list__action", "{lang.pick(&rec.action)}" }
                                p { class: "recommendation-list__timing", "{lang.pick(&rec.timing)}" }
                            }
                            button {
                                r#type: "button",
                                class: "button button--small button--outline",
                                onclick: move |_| dispatch.call(PortalCommand::ApplyRecommendation(index)),
                                {t!(lang, "prediction-apply")}
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "card prediction-results",
            div { class: "card__header",
                h3 { class: "card__title", {t!(lang, "prediction-results-title")} }
            }
            {body}
        }
    }
}
