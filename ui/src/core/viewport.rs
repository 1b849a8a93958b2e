//! Viewport classification. Derived from the current width, never stored.

/// Widths strictly below this are laid out for phones.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Width assumed before the first measurement arrives on platforms that
/// cannot measure synchronously.
pub const ASSUMED_WIDTH_PX: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    #[default]
    Wide,
    Compact,
}

impl ViewportClass {
    pub fn classify(width_px: f64) -> Self {
        if width_px < COMPACT_BREAKPOINT_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, ViewportClass::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(ViewportClass::classify(767.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::classify(767.9), ViewportClass::Compact);
        assert_eq!(ViewportClass::classify(768.0), ViewportClass::Wide);
    }

    #[test]
    fn compact_iff_below_breakpoint() {
        for w in (0..2000).step_by(7) {
            let w = w as f64;
            assert_eq!(ViewportClass::classify(w).is_compact(), w < 768.0, "width {w}");
        }
    }

    #[test]
    fn assumed_width_is_wide() {
        assert_eq!(ViewportClass::classify(ASSUMED_WIDTH_PX), ViewportClass::Wide);
    }
}
