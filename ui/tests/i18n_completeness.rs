use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "agri-portal-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Simple parser: extract message IDs from a Fluent file.
/// Any line that starts (after optional whitespace) with `<identifier> =`
/// counts as a message definition. Comments, terms and blank lines are
/// ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Pull the key out of one `t!(` call site: `t!(lang, "key"...`.
///
/// Only a literal second argument is recognized; the language expression
/// in front of it must not contain a string or a nested call.
fn key_after_macro(rest: &str) -> Option<&str> {
    let comma = rest.find(',')?;
    let lang_expr = &rest[..comma];
    if lang_expr.contains('"') || lang_expr.contains('(') {
        return None;
    }
    let after = rest[comma + 1..].trim_start();
    let body = after.strip_prefix('"')?;
    let end = body.find('"')?;
    let key = &body[..end];
    key.chars().all(valid_key_char).then_some(key)
}

/// Extract every `t!(lang, "...")` key from source files under `src/`.
///
/// Will not catch direct `fl!` usage or dynamically built IDs; the
/// compile-time check in `fl!` covers the fallback file anyway.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, _) in content.match_indices("t!(") {
            if let Some(key) = key_after_macro(&content[idx + 3..]) {
                found.insert(key.to_string());
            }
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|rd| {
            rd.flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn scanner_reads_the_key_after_the_language() {
    assert_eq!(key_after_macro(r#"lang, "nav-soil")"#), Some("nav-soil"));
    assert_eq!(
        key_after_macro(r#"Language::Hi, "timeline-subtitle", crop = x)"#),
        Some("timeline-subtitle")
    );
    assert_eq!(key_after_macro(r#""not-a-lang", "x")"#), None);
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Fallback locale (en-US) must exist
    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    // 2. Gather all referenced keys in Rust sources.
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced_keys.contains("nav-dashboard"),
        "scanner found no navigation keys; is the t! pattern still `t!(lang, \"key\")`?"
    );

    // 3. Every referenced key must exist in every locale.
    let locales = collect_locale_dirs(&i18n_root);
    assert_eq!(locales, vec!["en-US", "hi-IN"]);

    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Locale {locale} missing {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let mut missing: Vec<_> = referenced_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        missing.sort();
        assert!(
            missing.is_empty(),
            "Referenced translation keys missing in {locale} ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }

    // 4. Unused fallback keys are reported, not failed.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources:\n{}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn fluent_domain_matches_catalogue_file_names() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = fs::read_to_string(crate_root.join("i18n.toml")).expect("read i18n.toml");

    // `fl!` falls back to the package name (underscored) when no domain is set.
    let domain = config
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("domain"))
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"').to_string())
        .expect("i18n.toml must pin a fluent domain");

    assert_eq!(format!("{domain}.ftl"), FTL_FILENAME);
    for locale in ["en-US", "hi-IN"] {
        let path = crate_root.join(I18N_DIR).join(locale).join(format!("{domain}.ftl"));
        assert!(path.is_file(), "missing catalogue {path:?}");
    }
}
