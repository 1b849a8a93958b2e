use api::crops::CropKind;
use api::timeline::{self, StageStatus};
use dioxus::prelude::*;

use crate::components::{StatusChip, Tone};
use crate::core::language::Language;
use crate::t;

fn stage_tone(status: StageStatus) -> Tone {
    match status {
        StageStatus::Completed => Tone::Success,
        StageStatus::Current => Tone::Info,
        StageStatus::Upcoming => Tone::Neutral,
    }
}

fn stage_class(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Completed => "timeline__stage timeline__stage--completed",
        StageStatus::Current => "timeline__stage timeline__stage--current",
        StageStatus::Upcoming => "timeline__stage timeline__stage--upcoming",
    }
}

fn status_label(lang: Language, status: StageStatus) -> String {
    match status {
        StageStatus::Completed => t!(lang, "timeline-status-completed"),
        StageStatus::Current => t!(lang, "timeline-status-current"),
        StageStatus::Upcoming => t!(lang, "timeline-status-upcoming"),
    }
}

/// Growth stages of `crop`, with an advisory under the current one.
#[component]
pub fn CropTimeline(language: Language, crop: CropKind) -> Element {
    let lang = language;
    let crop_name = lang.pick(&crop.name());
    let subtitle = t!(lang, "timeline-subtitle", crop = crop_name);

    rsx! {
        section { class: "card timeline",
            div { class: "card__header",
                h3 { class: "card__title", {t!(lang, "timeline-title")} }
                p { class: "card__subtitle", "{subtitle}" }
            }
            ol { class: "timeline__stages",
                for stage in timeline::stages() {
                    li { key: "{stage.id}", class: stage_class(stage.status),
                        span { class: "timeline__icon", aria_hidden: "true", "{stage.icon}" }
                        div { class: "timeline__body",
                            div { class: "timeline__row",
                                span { class: "timeline__name", "{lang.pick(&stage.name)}" }
                                StatusChip {
                                    tone: stage_tone(stage.status),
                                    label: status_label(lang, stage.status),
                                }
                            }
                            div { class: "timeline__meta",
                                span { "{stage.date}" }
                                span { " · {stage.duration}" }
                            }
                            if stage.status == StageStatus::Current {
                                p { class: "timeline__advisory", {t!(lang, "timeline-advisory")} }
                            }
                        }
                    }
                }
            }
        }
    }
}
