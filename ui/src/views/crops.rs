use api::crops::{self, CropProfile, CropStatus, Season};
use dioxus::prelude::*;

use crate::commands::PortalCommand;
use crate::components::{PageHeader, StatusChip, Tone};
use crate::context::{use_dispatch, use_language};
use crate::core::language::Language;
use crate::t;

/// Season filter on the crops page. `All` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(Season),
}

impl SeasonFilter {
    /// All → Rabi → Kharif → Both → All
    pub fn next(self) -> Self {
        match self {
            SeasonFilter::All => SeasonFilter::Only(Season::Rabi),
            SeasonFilter::Only(Season::Rabi) => SeasonFilter::Only(Season::Kharif),
            SeasonFilter::Only(Season::Kharif) => SeasonFilter::Only(Season::Both),
            SeasonFilter::Only(Season::Both) => SeasonFilter::All,
        }
    }

    fn accepts(self, season: Season) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(wanted) => wanted == season,
        }
    }

    fn label(self, lang: Language) -> String {
        match self {
            SeasonFilter::All => t!(lang, "crops-filter-all"),
            SeasonFilter::Only(season) => season_label(lang, season),
        }
    }
}

fn season_label(lang: Language, season: Season) -> String {
    match season {
        Season::Rabi => t!(lang, "season-rabi"),
        Season::Kharif => t!(lang, "season-kharif"),
        Season::Both => t!(lang, "season-both"),
    }
}

fn status_chip(lang: Language, status: CropStatus) -> (Tone, String) {
    match status {
        CropStatus::InSeason => (Tone::Success, t!(lang, "crop-status-in-season")),
        CropStatus::OffSeason => (Tone::Neutral, t!(lang, "crop-status-off-season")),
        CropStatus::Available => (Tone::Info, t!(lang, "crop-status-available")),
    }
}

/// Crops whose English or Hindi name contains `query` and whose season
/// passes `filter`.
pub fn filter_crops(catalogue: &[CropProfile], query: &str, filter: SeasonFilter) -> Vec<CropProfile> {
    catalogue
        .iter()
        .filter(|crop| crop.kind.name().matches(query) && filter.accepts(crop.season))
        .cloned()
        .collect()
}

#[component]
pub fn Crops() -> Element {
    let lang = use_language();
    let dispatch = use_dispatch();
    let mut query = use_signal(String::new);
    let mut season = use_signal(SeasonFilter::default);

    let visible = filter_crops(&crops::catalogue(), &query.read(), season());
    let search_placeholder = t!(lang, "crops-search-placeholder");

    rsx! {
        section { class: "page page-crops",
            PageHeader {
                title: t!(lang, "crops-title"),
                subtitle: t!(lang, "crops-subtitle"),
            }

            div { class: "toolbar",
                input {
                    class: "input toolbar__search",
                    r#type: "search",
                    placeholder: "{search_placeholder}",
                    aria_label: "{search_placeholder}",
                    value: "{query}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--outline touch-button",
                    onclick: move |_| season.set(season().next()),
                    span { aria_hidden: "true", "⏷ " }
                    {t!(lang, "crops-filter-label", season = season().label(lang))}
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", {t!(lang, "crops-empty")} }
            }

            div { class: "card-grid",
                for crop in visible {
                    {
                        let kind = crop.kind;
                        let (tone, status) = status_chip(lang, crop.status);
                        rsx! {
                            article { key: "{kind.value()}", class: "card crop-card",
                                div { class: "card__header card__header--row",
                                    div {
                                        h3 { class: "card__title", "{lang.pick(&kind.name())}" }
                                        p { class: "card__subtitle", {season_label(lang, crop.season)} }
                                    }
                                    StatusChip { tone, label: status }
                                }
                                dl { class: "facts",
                                    div { class: "facts__row",
                                        dt { {t!(lang, "crops-typical-yield")} }
                                        dd { "{crop.typical_yield}" }
                                    }
                                    div { class: "facts__row",
                                        dt { {t!(lang, "crops-sowing-window")} }
                                        dd { "{crop.sowing_window}" }
                                    }
                                }
                                div { class: "card__actions",
                                    button {
                                        r#type: "button",
                                        class: "button button--outline touch-button",
                                        onclick: move |_| dispatch.call(PortalCommand::ViewCropDetails(kind)),
                                        {t!(lang, "crops-view-details")}
                                    }
                                    button {
                                        r#type: "button",
                                        class: "button button--primary touch-button",
                                        onclick: move |_| dispatch.call(PortalCommand::SimulateCrop(kind)),
                                        {t!(lang, "crops-simulate")}
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

#[cfg(test)]
mod tests {
    use super::*;
    use api::crops::CropKind;

    fn kinds(list: &[CropProfile]) -> Vec<CropKind> {
        list.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn blank_query_and_all_seasons_show_everything() {
        let all = filter_crops(&crops::catalogue(), "", SeasonFilter::All);
        assert_eq!(kinds(&all), CropKind::ALL.to_vec());
    }

    #[test]
    fn search_matches_either_language() {
        let cat = crops::catalogue();
        assert_eq!(kinds(&filter_crops(&cat, "whe", SeasonFilter::All)), vec![CropKind::Wheat]);
        assert_eq!(kinds(&filter_crops(&cat, "RICE", SeasonFilter::All)), vec![CropKind::Rice]);
        assert_eq!(kinds(&filter_crops(&cat, "मक्का", SeasonFilter::All)), vec![CropKind::Maize]);
        assert!(filter_crops(&cat, "barley", SeasonFilter::All).is_empty());
    }

    #[test]
    fn season_filter_cycles_through_every_option() {
        let mut f = SeasonFilter::All;
        let mut seen = vec![f];
        for _ in 0..4 {
            f = f.next();
            seen.push(f);
        }
        assert_eq!(
            seen,
            vec![
                SeasonFilter::All,
                SeasonFilter::Only(Season::Rabi),
                SeasonFilter::Only(Season::Kharif),
                SeasonFilter::Only(Season::Both),
                SeasonFilter::All,
            ]
        );
    }

    #[test]
    fn season_filter_is_exact() {
        let cat = crops::catalogue();
        let kharif = filter_crops(&cat, "", SeasonFilter::Only(Season::Kharif));
        assert_eq!(kinds(&kharif), vec![CropKind::Rice]);
        let both = filter_crops(&cat, "", SeasonFilter::Only(Season::Both));
        assert_eq!(kinds(&both), vec![CropKind::Maize]);
    }

    #[test]
    fn query_and_season_combine() {
        let cat = crops::catalogue();
        assert!(filter_crops(&cat, "wheat", SeasonFilter::Only(Season::Kharif)).is_empty());
    }
}
