/// A fixture string carried in both portal languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bilingual {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// True if either rendition contains `needle` (case-insensitive for English).
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        if needle.is_empty() {
            return true;
        }
        self.en.to_lowercase().contains(&needle.to_lowercase()) || self.hi.contains(needle)
    }
}
