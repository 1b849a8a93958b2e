use dioxus::prelude::*;

/// Colour family of a badge. Maps to `badge--{tone}` in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "badge badge--success",
            Tone::Warning => "badge badge--warning",
            Tone::Danger => "badge badge--danger",
            Tone::Info => "badge badge--info",
            Tone::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn StatusChip(tone: Tone, label: String) -> Element {
    rsx! {
        span { class: tone.class(), "{label}" }
    }
}
