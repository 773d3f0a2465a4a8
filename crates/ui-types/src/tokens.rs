//! Design tokens: color scale, radii, and animation timing.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

const BUILTIN_TOKENS: &str = include_str!("../tokens.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Radius {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

impl Default for Radius {
    fn default() -> Self {
        Self {
            sm: "0.25rem".into(),
            md: "0.5rem".into(),
            lg: "0.75rem".into(),
            full: "9999px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Animation {
    pub enter_ms: u32,
    pub exit_ms: u32,
    pub easing: String,
    #[serde(default)]
    pub keyframes: BTreeMap<String, String>,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            enter_ms: 300,
            exit_ms: 200,
            easing: "ease-out".into(),
            keyframes: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignTokens {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub radius: Radius,
    #[serde(default)]
    pub animation: Animation,
}

fn is_css_ident(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl DesignTokens {
    /// Tokens compiled into the crate.
    pub fn builtin() -> Result<Self, UiError> {
        Self::from_toml(BUILTIN_TOKENS)
    }

    pub fn from_toml(source: &str) -> Result<Self, UiError> {
        let tokens: DesignTokens =
            toml::from_str(source).map_err(|e| UiError::Tokens(e.to_string()))?;
        tokens.validate()?;
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<(), UiError> {
        for (name, value) in &self.colors {
            if !is_css_ident(name) {
                return Err(UiError::Tokens(format!("color name `{name}` is not a css identifier")));
            }
            if value.trim().is_empty() {
                return Err(UiError::Tokens(format!("color `{name}` has no value")));
            }
        }
        if let Some(name) = self.animation.keyframes.keys().find(|n| !is_css_ident(n)) {
            return Err(UiError::Tokens(format!("keyframes name `{name}` is not a css identifier")));
        }
        Ok(())
    }

    /// Render the tokens as custom properties on `selector` plus keyframe blocks.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();
        let _ = writeln!(css, "{selector} {{");
        for (name, value) in &self.colors {
            let _ = writeln!(css, "  --color-{name}: {value};");
        }
        let _ = writeln!(css, "  --radius-sm: {};", self.radius.sm);
        let _ = writeln!(css, "  --radius-md: {};", self.radius.md);
        let _ = writeln!(css, "  --radius-lg: {};", self.radius.lg);
        let _ = writeln!(css, "  --radius-full: {};", self.radius.full);
        let _ = writeln!(css, "  --duration-enter: {}ms;", self.animation.enter_ms);
        let _ = writeln!(css, "  --duration-exit: {}ms;", self.animation.exit_ms);
        let _ = writeln!(css, "  --ease-panel: {};", self.animation.easing);
        css.push_str("}\n");
        for (name, body) in &self.animation.keyframes {
            let _ = writeln!(css, "@keyframes {name} {{ {body} }}");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_tokens_parse() {
        let tokens = DesignTokens::builtin().unwrap();
        assert_eq!(tokens.colors.get("primary").map(String::as_str), Some("#6d5dfc"));
        assert_eq!(tokens.animation.enter_ms, 300);
        assert!(tokens.animation.keyframes.contains_key("scale-in"));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let tokens = DesignTokens::from_toml("").unwrap();
        assert!(tokens.colors.is_empty());
        assert_eq!(tokens.radius, Radius::default());
    }

    #[test]
    fn renders_custom_properties_and_keyframes() {
        let tokens = DesignTokens::from_toml(
            r##"
            [colors]
            primary = "#123456"

            [animation]
            enter-ms = 250
            exit-ms = 150
            easing = "linear"

            [animation.keyframes]
            fade-in = "from { opacity: 0; } to { opacity: 1; }"
            "##,
        )
        .unwrap();
        let css = tokens.to_css(":root");
        assert!(css.starts_with(":root {\n  --color-primary: #123456;\n"));
        assert!(css.contains("  --duration-enter: 250ms;\n"));
        assert!(css.contains("  --ease-panel: linear;\n"));
        assert!(css.ends_with("@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }\n"));
    }

    #[test]
    fn rejects_bad_names() {
        let err = DesignTokens::from_toml(
            r#"
            [colors]
            "Primary Blue" = "blue"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "tokens");
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(DesignTokens::from_toml("[colors\nx=").is_err());
    }
}
