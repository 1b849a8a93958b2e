//! Language preference and responsive layout state for the portal shell.
//!
//! Three flags live here: the current [`Language`], the [`ViewportClass`]
//! and whether the compact overlay menu is open. The one coupling rule is
//! that the menu flag only means something while the viewport is compact:
//! leaving compact mode always closes it, and toggling outside compact mode
//! does nothing.
//!
//! ```text
//!            width < 768                    toggle
//!   Desktop ─────────────▶ CompactMenuClosed ◀──────▶ CompactMenuOpen
//!      ▲                          │                          │
//!      └──────────────────────────┴──────── width ≥ 768 ─────┘
//! ```

use std::fmt;
use std::rc::Rc;

use super::language::Language;
use super::storage::KeyValueStore;
use super::viewport::ViewportClass;

/// Storage key holding the two-letter language code.
pub const LANGUAGE_STORAGE_KEY: &str = "agricultural-portal-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    CompactMenuClosed,
    CompactMenuOpen,
}

pub struct ShellController {
    language: Language,
    viewport: ViewportClass,
    menu_open: bool,
    store: Rc<dyn KeyValueStore>,
}

impl fmt::Debug for ShellController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellController")
            .field("language", &self.language)
            .field("viewport", &self.viewport)
            .field("menu_open", &self.menu_open)
            .finish_non_exhaustive()
    }
}

impl ShellController {
    /// Restore the persisted language (if any) and classify the starting width.
    pub fn initialize(store: Rc<dyn KeyValueStore>, width_px: f64) -> Self {
        let language = match store.read(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Some(lang) => {
                    tracing::info!(language = %lang, "restored language preference");
                    lang
                }
                None => {
                    tracing::debug!(stored = %code, "ignoring unrecognized stored language");
                    Language::default()
                }
            },
            Ok(None) => Language::default(),
            Err(err) => {
                tracing::warn!(%err, "could not read language preference; using default");
                Language::default()
            }
        };

        Self {
            language,
            viewport: ViewportClass::classify(width_px),
            menu_open: false,
            store,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    /// Menu state as the UI should see it; always closed outside compact mode.
    pub fn is_menu_open(&self) -> bool {
        self.is_compact() && self.menu_open
    }

    pub fn layout(&self) -> LayoutMode {
        match (self.is_compact(), self.is_menu_open()) {
            (false, _) => LayoutMode::Desktop,
            (true, false) => LayoutMode::CompactMenuClosed,
            (true, true) => LayoutMode::CompactMenuOpen,
        }
    }

    /// Switch language from a raw code. Anything other than `en`/`hi` is
    /// ignored and `false` is returned.
    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.select_language(lang);
                true
            }
            None => {
                tracing::debug!(code, "ignoring unsupported language code");
                false
            }
        }
    }

    /// Switch language and write it through to storage. A failed write keeps
    /// the new language for this session only.
    pub fn select_language(&mut self, lang: Language) {
        self.language = lang;
        if let Err(err) = self.store.write(LANGUAGE_STORAGE_KEY, lang.code()) {
            tracing::warn!(%err, language = %lang, "language preference not saved");
        }
    }

    /// Reclassify after a resize. Returns whether the layout changed.
    pub fn on_viewport_change(&mut self, width_px: f64) -> bool {
        let before = self.layout();
        self.viewport = ViewportClass::classify(width_px);
        if !self.viewport.is_compact() {
            self.menu_open = false;
        }
        before != self.layout()
    }

    pub fn toggle_mobile_menu(&mut self) {
        if self.is_compact() {
            self.menu_open = !self.menu_open;
        }
    }

    pub fn close_mobile_menu(&mut self) {
        self.menu_open = false;
    }
}
