use dioxus::prelude::*;
use ui_types::OpenMode;

/// Open flag of an interactive component, either owned locally or by a parent.
#[derive(Clone, Copy, PartialEq)]
pub struct OpenHandle {
    mode: OpenMode,
    local: Signal<bool>,
    on_change: Option<EventHandler<bool>>,
}

impl OpenHandle {
    pub fn is_open(&self) -> bool {
        match self.mode {
            OpenMode::Controlled(open) => open,
            OpenMode::Uncontrolled(_) => *self.local.read(),
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.mode.is_controlled()
    }

    /// Request a new open state. Controlled owners decide; uncontrolled ones
    /// apply it. Requests matching the current state are dropped so owners
    /// hear about each change once.
    pub fn set(&self, open: bool) {
        match self.mode {
            OpenMode::Controlled(current) if current == open => return,
            OpenMode::Controlled(_) => {}
            OpenMode::Uncontrolled(_) => {
                let mut local = self.local;
                if *local.peek() == open {
                    return;
                }
                local.set(open);
            }
        }
        if let Some(handler) = &self.on_change {
            handler.call(open);
        }
    }

    pub fn toggle(&self) {
        self.set(!self.is_open());
    }
}

/// Resolve the `open` / `on_open_change` / `default_open` prop trio.
///
/// # Panics
///
/// When `open` is supplied without `on_open_change`: the component could
/// never close itself, which is a wiring mistake in the caller.
pub fn use_open_state(
    open: Option<bool>,
    on_open_change: Option<EventHandler<bool>>,
    default_open: bool,
) -> OpenHandle {
    let mode = match OpenMode::resolve(open, on_open_change.is_some(), default_open) {
        Ok(mode) => mode,
        Err(err) => panic!("{err}"),
    };
    let local = use_signal(|| default_open);

    OpenHandle {
        mode,
        local,
        on_change: on_open_change,
    }
}
