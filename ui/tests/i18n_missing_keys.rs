use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures the Hindi locale provides *at least* the keys present in the
/// fallback (en-US) `agri-portal-ui.ftl`, and that neither file defines a
/// key twice.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
#[test]
fn hindi_has_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/agri-portal-ui.ftl");
    const HI_IN: &str = include_str!("../i18n/hi-IN/agri-portal-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");
    assert_no_dup_keys(HI_IN, "hi-IN");

    let keys = extract_keys(HI_IN);
    let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "hi-IN is missing {} key(s):\n  {}",
        missing.len(),
        missing.into_iter().collect::<Vec<_>>().join("\n  ")
    );

    let extra: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();
    assert!(
        extra.is_empty(),
        "hi-IN defines keys unknown to en-US:\n  {}",
        extra.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

/// Placeables must survive translation, otherwise `fl!` arguments are lost.
#[test]
fn hindi_keeps_the_same_variables() {
    const EN_US: &str = include_str!("../i18n/en-US/agri-portal-ui.ftl");
    const HI_IN: &str = include_str!("../i18n/hi-IN/agri-portal-ui.ftl");

    let en = variables_by_key(EN_US);
    let hi = variables_by_key(HI_IN);
    for (key, vars) in &en {
        let translated = hi
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        assert_eq!(&translated, vars, "variables differ for `{key}`");
    }
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let valid = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@');
    valid.then_some(key)
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(message_key)
        .map(str::to_string)
        .collect()
}

fn variables_by_key(src: &str) -> Vec<(String, BTreeSet<String>)> {
    src.lines()
        .filter_map(|line| {
            let key = message_key(line)?;
            let vars = line
                .split("{ $")
                .skip(1)
                .filter_map(|rest| rest.split_whitespace().next())
                .map(|v| v.trim_end_matches('}').to_string())
                .collect();
            Some((key.to_string(), vars))
        })
        .collect()
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{line}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
