use dioxus::prelude::*;

use crate::core::language::Language;
use crate::t;

/// Language picker. Emits the raw selected code; the shell decides whether
/// it is acceptable.
#[component]
pub fn LanguageToggle(current: Language, on_change: EventHandler<String>) -> Element {
    let label = t!(current, "header-language-label");

    rsx! {
        div { class: "language-toggle",
            label { class: "visually-hidden", r#for: "language-select", "{label}" }
            span { class: "language-toggle__globe", aria_hidden: "true", "🌐" }
            select {
                id: "language-select",
                class: "language-toggle__select",
                value: "{current.code()}",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
                for lang in Language::ALL {
                    option {
                        key: "{lang.code()}",
                        value: "{lang.code()}",
                        selected: lang == current,
                        "{lang.native_name()}"
                    }
                }
            }
        }
    }
}
