use dioxus::prelude::*;

use crate::components::navigation::{nav_link, NavItem};
use crate::context::use_language;
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = use_language();
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            div { class: "card not-found",
                span { class: "not-found__code", "404" }
                h2 { class: "not-found__title", {t!(lang, "not-found-title")} }
                p { class: "not-found__message", {t!(lang, "not-found-message", path = path.clone())} }
                {nav_link(
                    NavItem::Dashboard,
                    "button button--primary touch-button",
                    rsx! { {t!(lang, "not-found-back")} },
                )}
            }
        }
    }
}
