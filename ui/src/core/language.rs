//! The two portal languages.

use std::fmt;
use std::str::FromStr;

use api::Bilingual;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::{langid, LanguageIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{0}` (expected `en` or `hi`)")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// The persisted two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Exact match on the persisted code; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Name of the language written in that language (for the picker).
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
        }
    }

    /// Fluent locale folder backing this language.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Language::En => langid!("en-US"),
            Language::Hi => langid!("hi-IN"),
        }
    }

    /// Choose the rendition of a fixture string.
    pub fn pick(self, text: &Bilingual) -> &'static str {
        match self {
            Language::En => text.en,
            Language::Hi => text.hi,
        }
    }

    /// The other language; used by the settings page's change button.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
