//! Explorer settings embedded from `explorer.toml`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

const EXPLORER_TOML: &str = include_str!("../explorer.toml");

static CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();

/// Which stories are listed.
///
/// An empty `include` lists everything not excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoryFilter {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl StoryFilter {
    pub fn allows(&self, key: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|k| k == key);
        included && !self.exclude.iter().any(|k| k == key)
    }
}

/// Optional explorer panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Addons {
    #[serde(default = "enabled")]
    pub essentials: bool,
    #[serde(default = "enabled")]
    pub theming: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Addons {
    fn default() -> Self {
        Self {
            essentials: true,
            theming: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub stories: StoryFilter,
    #[serde(default)]
    pub addons: Addons,
}

impl ExplorerConfig {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// The embedded configuration, parsed once. A broken file falls back to defaults.
pub fn explorer_config() -> &'static ExplorerConfig {
    CONFIG.get_or_init(|| match ExplorerConfig::parse(EXPLORER_TOML) {
        Ok(config) => {
            tracing::info!(
                essentials = config.addons.essentials,
                theming = config.addons.theming,
                excluded = config.stories.exclude.len(),
                "explorer config loaded"
            );
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "explorer.toml is invalid, using defaults");
            ExplorerConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = ExplorerConfig::parse(EXPLORER_TOML).unwrap();
        assert!(config.addons.essentials);
        assert!(config.addons.theming);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = ExplorerConfig::parse("").unwrap();
        assert_eq!(config, ExplorerConfig::default());
        assert!(config.stories.allows("forms"));
    }

    #[test]
    fn partial_addons_keep_other_defaults() {
        let config = ExplorerConfig::parse("[addons]\ntheming = false\n").unwrap();
        assert!(config.addons.essentials);
        assert!(!config.addons.theming);
    }

    #[test]
    fn filter_applies_include_then_exclude() {
        let filter = StoryFilter {
            include: vec!["forms".into(), "menus".into()],
            exclude: vec!["menus".into()],
        };
        assert!(filter.allows("forms"));
        assert!(!filter.allows("menus"));
        assert!(!filter.allows("leaves"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ExplorerConfig::parse("[addons]\nessentials = \"yes\"").is_err());
    }
}
