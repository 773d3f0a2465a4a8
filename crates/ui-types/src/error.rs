use thiserror::Error;

/// Errors produced by the renderer-independent UI logic.
///
/// Contract violations inside a mounted component are not routed through
/// this type at runtime: the component panics with the error's message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    #[error("unknown sheet side `{0}` (expected top, right, bottom or left)")]
    UnknownSide(String),

    #[error("`open` was supplied without `on_open_change`; a controlled component needs both")]
    ControlledWithoutSetter,

    #[error("unknown menu family `{0}` (expected dropdown, context or menubar)")]
    UnknownMenuFamily(String),

    #[error("invalid design tokens: {0}")]
    Tokens(String),

    #[error("invalid menu configuration: {0}")]
    MenuConfig(String),

    #[error("field `{0}` is not registered with the form")]
    UnknownField(String),
}

impl UiError {
    /// Short machine-readable category, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            UiError::UnknownSide(_) => "unknown_side",
            UiError::ControlledWithoutSetter => "controlled_without_setter",
            UiError::UnknownMenuFamily(_) => "unknown_menu_family",
            UiError::Tokens(_) => "tokens",
            UiError::MenuConfig(_) => "menu_config",
            UiError::UnknownField(_) => "unknown_field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            UiError::UnknownSide("middle".into()).to_string(),
            "unknown sheet side `middle` (expected top, right, bottom or left)"
        );
        assert!(UiError::UnknownField("email".into())
            .to_string()
            .contains("`email`"));
    }

    #[test]
    fn kind_is_stable() {
        assert_eq!(UiError::ControlledWithoutSetter.kind(), "controlled_without_setter");
        assert_eq!(UiError::Tokens("x".into()).kind(), "tokens");
    }
}
