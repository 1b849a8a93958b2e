//! Internationalization (i18n) support for `agri-portal-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + negotiation)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/agri-portal-ui.ftl   (fallback/reference)
//!   hi-IN/agri-portal-ui.ftl
//! ```
//!
//! Unlike a single global loader switched at runtime, each [`Language`] owns
//! its own loader. Lookups are then a pure function of `(language, key)`, and
//! the current language travels through the component tree as a value.
//!
//! ```ignore
//! use crate::t;
//! let title = t!(lang, "dashboard-title");
//! let subtitle = t!(lang, "timeline-subtitle", crop = "Wheat");
//! ```
//!
//! Keys are checked against the English file at compile time; the Hindi file
//! is checked for completeness by `tests/i18n_missing_keys.rs`.

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::language::Language;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translate `key` for an explicit language.
/// Usage:
///     t!(lang, "nav-dashboard")
///     t!(lang, "timeline-subtitle", crop = name)
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "agri-portal-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::En));
static HINDI: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Hi));

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK);
    let wanted = lang.langid().to_string();
    if !available_locales().contains(&wanted) {
        tracing::warn!(locale = %wanted, "no embedded catalogue for language");
    }
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.langid()]) {
        tracing::warn!(%err, language = %lang, "failed loading translations; using fallback");
    }
    // Plain substitutions: no bidi isolation marks around interpolated values.
    loader.set_use_isolating(false);
    loader
}

/// The loader holding `lang`'s bundle (with English behind it).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::En => &*ENGLISH,
        Language::Hi => &*HINDI,
    }
}

/// List embedded locale folders.
pub fn available_locales() -> Vec<String> {
    let mut locales = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}
