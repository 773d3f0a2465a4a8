use dioxus::prelude::*;
use ui_types::DesignTokens;

/// Theme families shipped with the kit.
///
/// Each family provides a dark variant, a light variant, or both.
/// Families with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Neutral,
    Solar,
    Ocean,
    /// Dark-only high-contrast theme.
    Midnight,
    /// Light-only print-like theme.
    Paper,
}

/// All theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Neutral,
    ThemeFamily::Solar,
    ThemeFamily::Ocean,
    ThemeFamily::Midnight,
    ThemeFamily::Paper,
];

impl ThemeFamily {
    /// Key used for storage and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Neutral => "neutral",
            ThemeFamily::Solar => "solar",
            ThemeFamily::Ocean => "ocean",
            ThemeFamily::Midnight => "midnight",
            ThemeFamily::Paper => "paper",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Neutral => "Neutral",
            ThemeFamily::Solar => "Solarized",
            ThemeFamily::Ocean => "Ocean",
            ThemeFamily::Midnight => "Midnight",
            ThemeFamily::Paper => "Paper",
        }
    }

    /// Parse a family key, falling back to Neutral.
    pub fn from_key(s: &str) -> Self {
        match s {
            "solar" => ThemeFamily::Solar,
            "ocean" => ThemeFamily::Ocean,
            "midnight" => ThemeFamily::Midnight,
            "paper" => ThemeFamily::Paper,
            _ => ThemeFamily::Neutral,
        }
    }

    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Paper)
    }

    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Resolve to the `data-theme` attribute value.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Neutral, true) => "dark",
            (ThemeFamily::Neutral, false) => "light",
            (ThemeFamily::Solar, true) => "solar",
            (ThemeFamily::Solar, false) => "solar-light",
            (ThemeFamily::Ocean, true) => "ocean",
            (ThemeFamily::Ocean, false) => "ocean-light",
            (ThemeFamily::Midnight, _) => "midnight",
            (ThemeFamily::Paper, _) => "paper",
        }
    }
}

/// Theme selection shared through context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        set_theme(family.resolve(*self.is_dark.read()));
    }
}

/// Apply the persisted theme on startup. Render once near the root.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var theme = null;
                try { theme = window.localStorage.getItem('ui-kit-theme'); } catch (e) {}
                document.documentElement.setAttribute('data-theme', theme || 'dark');
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme and remember it for the next visit.
pub fn set_theme(theme: &str) {
    tracing::debug!(theme, "applying theme");
    document::eval(&format!(
        r#"
        (function() {{
            try {{ window.localStorage.setItem('ui-kit-theme', '{theme}'); }} catch (e) {{}}
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

/// CSS custom properties for the built-in design tokens.
pub fn token_css() -> String {
    match DesignTokens::builtin() {
        Ok(tokens) => tokens.to_css(":root"),
        Err(err) => {
            tracing::warn!(error = %err, "design tokens unavailable, using stylesheet defaults");
            String::new()
        }
    }
}

/// Inject the design tokens as a `<style>` block.
#[component]
pub fn TokenStyles() -> Element {
    let css = use_hook(token_css);

    rsx! {
        document::Style { {css} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_family_is_neutral() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Neutral);
    }

    #[test]
    fn keys_parse_back() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
        assert_eq!(ThemeFamily::from_key("cyan"), ThemeFamily::Neutral);
    }

    #[test]
    fn single_mode_families_ignore_is_dark() {
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
        assert_eq!(ThemeFamily::Paper.resolve(true), "paper");
        assert!(!ThemeFamily::Midnight.has_light());
        assert!(!ThemeFamily::Paper.has_dark());
    }

    #[test]
    fn dual_mode_families_switch() {
        assert_eq!(ThemeFamily::Ocean.resolve(true), "ocean");
        assert_eq!(ThemeFamily::Ocean.resolve(false), "ocean-light");
    }

    #[test]
    fn builtin_tokens_render_root_variables() {
        let css = token_css();
        assert!(css.starts_with(":root"));
        assert!(css.contains("--radius-md"));
    }
}
