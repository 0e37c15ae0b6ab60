use super::store::PresetCatalog;

/// Presets shipped with every server installation, as (key, display name)
pub const DEFAULT_PRESETS: [(&str, &str); 7] = [
    ("1_heavy_fog", "Heavy Fog"),
    ("2_light_fog", "Light Fog"),
    ("3_clear", "Clear"),
    ("4_mid_clear", "Mid Clear"),
    ("5_light_clouds", "Light Clouds"),
    ("6_mid_clouds", "Mid Clouds"),
    ("7_heavy_clouds", "Heavy Clouds"),
];

/// Build a fresh catalog holding only the built-in presets.
///
/// Every call returns a new value, so callers may mutate the result freely.
#[must_use]
pub fn default_catalog() -> PresetCatalog {
    DEFAULT_PRESETS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("1_heavy_fog"), Some("Heavy Fog"));
        assert_eq!(catalog.get("7_heavy_clouds"), Some("Heavy Clouds"));
    }

    #[test]
    fn test_default_catalog_is_independent() {
        let mut first = default_catalog();
        first.insert("3_clear", "Overridden");
        first.remove("1_heavy_fog");

        let second = default_catalog();
        assert_eq!(second.get("3_clear"), Some("Clear"));
        assert!(second.contains("1_heavy_fog"));
    }
}
