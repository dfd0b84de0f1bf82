//! Input normalization
//!
//! Outer layers (forms, wire payloads) routinely hand over empty strings and
//! empty language maps where they mean "no value". Composites run every such
//! input through these helpers before the first primitive, so stores only
//! ever hold absent or non-empty values. Both helpers are idempotent.

use modelgraph_core::LanguageString;

/// Collapse an empty string to an absent value
pub fn normalize_string(value: Option<String>) -> Option<String> {
    match value {
        Some(text) if text.is_empty() => {
            tracing::warn!("empty string treated as absent value");
            None
        }
        other => other,
    }
}

/// Drop empty texts from a language map and collapse an empty map to an
/// absent value
pub fn normalize_language_string(value: Option<LanguageString>) -> Option<LanguageString> {
    let mut map = value?;
    let before = map.len();
    map.retain(|_, text| !text.is_empty());
    if map.len() < before {
        tracing::warn!("empty language texts treated as absent values");
    }
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_string_becomes_absent() {
        assert_eq!(normalize_string(Some(String::new())), None);
        assert_eq!(normalize_string(None), None);
        assert_eq!(
            normalize_string(Some("name".to_string())),
            Some("name".to_string())
        );
    }

    #[test]
    fn test_empty_language_map_becomes_absent() {
        assert_eq!(normalize_language_string(Some(LanguageString::new())), None);

        let mut map = LanguageString::new();
        map.insert("en".to_string(), String::new());
        assert_eq!(normalize_language_string(Some(map)), None);

        let mut map = LanguageString::new();
        map.insert("en".to_string(), "Person".to_string());
        map.insert("cs".to_string(), String::new());
        let mut expected = LanguageString::new();
        expected.insert("en".to_string(), "Person".to_string());
        assert_eq!(normalize_language_string(Some(map)), Some(expected));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut map = LanguageString::new();
        map.insert("en".to_string(), "Person".to_string());
        map.insert("cs".to_string(), String::new());

        let once = normalize_language_string(Some(map));
        let twice = normalize_language_string(once.clone());
        assert_eq!(once, twice);

        let once = normalize_string(Some("name".to_string()));
        assert_eq!(normalize_string(once.clone()), once);
    }
}
