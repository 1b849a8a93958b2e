use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, subtitle: String, actions: Option<Element>) -> Element {
    rsx! {
        div { class: "page-header",
            div { class: "page-header__text",
                h2 { class: "page-header__title", "{title}" }
                p { class: "page-header__subtitle", "{subtitle}" }
            }
            if let Some(actions) = actions {
                div { class: "page-header__actions", {actions} }
            }
        }
    }
}
