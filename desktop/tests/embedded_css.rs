#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present & non‑trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`. An accidental
//! truncation or path break would only show up at *runtime* as an unstyled
//! window, so fail the test run instead.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    let significant = EMBEDDED_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        significant > 4000,
        "Embedded CSS looks truncated ({significant} non-whitespace chars)."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        "--color-bg",
        "--color-primary",
        "body {",
        ".button--primary",
        ".touch-button",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn compact_breakpoint_matches_the_shell() {
    // The shell switches to compact below 768px; the stylesheet must agree.
    assert!(
        EMBEDDED_CSS.contains("@media (max-width: 767.98px)"),
        "compact media query missing or moved off the 768px breakpoint"
    );
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in theme CSS");
}
