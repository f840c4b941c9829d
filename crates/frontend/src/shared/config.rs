use contracts::domain::StoreConfig;

/// Id of the optional `<script type="application/json">` override in index.html.
pub const CONFIG_ELEMENT_ID: &str = "store-config";

/// Read the store config from the host page, falling back to the built-in one.
pub fn load_store_config() -> StoreConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_store_config(raw.as_deref())
}

pub fn parse_store_config(raw: Option<&str>) -> StoreConfig {
    match raw.map(str::trim) {
        None | Some("") => StoreConfig::default(),
        Some(raw) => StoreConfig::from_json(raw).unwrap_or_else(|err| {
            log::warn!("{:#}; using built-in store config", err);
            StoreConfig::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_override_uses_defaults() {
        assert_eq!(parse_store_config(None), StoreConfig::default());
        assert_eq!(parse_store_config(Some("  \n ")), StoreConfig::default());
    }

    #[test]
    fn test_override_is_applied() {
        let config = parse_store_config(Some(r#"{"fallbackSlug": "curso-reaper-15"}"#));
        assert_eq!(config.fallback_slug, "curso-reaper-15");
        assert_eq!(config.base_url, StoreConfig::default().base_url);
    }

    #[test]
    fn test_broken_override_is_ignored() {
        assert_eq!(parse_store_config(Some("{")), StoreConfig::default());
    }
}
