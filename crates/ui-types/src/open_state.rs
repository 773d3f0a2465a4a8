use crate::error::UiError;

/// Who owns an interactive component's open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// The parent passes `open` and is told about changes.
    Controlled(bool),
    /// The component keeps its own flag, seeded from `default_open`.
    Uncontrolled(bool),
}

impl OpenMode {
    /// Validate a controlled/uncontrolled prop combination.
    ///
    /// Supplying `open` without a change handler would leave the component
    /// unable to close itself, so it is rejected.
    pub fn resolve(open: Option<bool>, has_setter: bool, default_open: bool) -> Result<Self, UiError> {
        match (open, has_setter) {
            (Some(_), false) => Err(UiError::ControlledWithoutSetter),
            (Some(open), true) => Ok(OpenMode::Controlled(open)),
            (None, _) => Ok(OpenMode::Uncontrolled(default_open)),
        }
    }

    pub fn is_open(&self) -> bool {
        match self {
            OpenMode::Controlled(open) | OpenMode::Uncontrolled(open) => *open,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, OpenMode::Controlled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn controlled_requires_setter() {
        assert_eq!(
            OpenMode::resolve(Some(true), false, false),
            Err(UiError::ControlledWithoutSetter)
        );
        assert_eq!(
            OpenMode::resolve(Some(true), true, false),
            Ok(OpenMode::Controlled(true))
        );
    }

    #[test]
    fn uncontrolled_uses_default() {
        let mode = OpenMode::resolve(None, false, true).unwrap();
        assert!(mode.is_open());
        assert!(!mode.is_controlled());
        // a setter alone is just a change listener
        assert_eq!(
            OpenMode::resolve(None, true, false),
            Ok(OpenMode::Uncontrolled(false))
        );
    }
}
