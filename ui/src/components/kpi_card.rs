use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Neutral => "",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Trend::Up => "kpi-card__trend kpi-card__trend--up",
            Trend::Down => "kpi-card__trend kpi-card__trend--down",
            Trend::Neutral => "kpi-card__trend",
        }
    }
}

/// Headline metric tile.
///
/// `trend_value` is shown next to the arrow; it is omitted entirely for a
/// neutral trend without a value.
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    unit: Option<String>,
    #[props(default)] trend: Trend,
    trend_value: Option<String>,
    icon: &'static str,
    caption: Option<String>,
) -> Element {
    let show_trend = trend != Trend::Neutral || trend_value.is_some();

    rsx! {
        div { class: "card kpi-card",
            div { class: "kpi-card__head",
                span { class: "kpi-card__title", "{title}" }
                span { class: "kpi-card__icon", aria_hidden: "true", "{icon}" }
            }
            div { class: "kpi-card__value",
                span { class: "kpi-card__number", "{value}" }
                if let Some(unit) = unit {
                    span { class: "kpi-card__unit", "{unit}" }
                }
            }
            if show_trend {
                div { class: trend.class(),
                    span { aria_hidden: "true", "{trend.arrow()}" }
                    if let Some(delta) = trend_value {
                        span { " {delta}" }
                    }
                }
            }
            if let Some(caption) = caption {
                p { class: "kpi-card__caption", "{caption}" }
            }
        }
    }
}
