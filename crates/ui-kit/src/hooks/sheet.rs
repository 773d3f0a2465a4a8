use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use ui_types::{Point, SheetEffect, SheetEvent, SheetMachine, Side};

use super::frame::{next_frame, now_ms};
use super::viewport::use_viewport;

/// Dioxus binding for a [`SheetMachine`]: feeds it pointer events and
/// animation frames and reports dismissal back to the owner.
#[derive(Clone, Copy, PartialEq)]
pub struct SheetHandle {
    machine: Signal<SheetMachine>,
    running: Signal<bool>,
    on_dismiss: EventHandler<()>,
    panel_id: Signal<String>,
    pointer: Signal<Option<i32>>,
}

static NEXT_PANEL: AtomicUsize = AtomicUsize::new(0);

impl SheetHandle {
    fn dispatch(&self, reduce: impl FnOnce(&mut SheetMachine) -> Vec<SheetEffect>) {
        let mut machine = self.machine;
        let effects = reduce(&mut machine.write());
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<SheetEffect>) {
        for effect in effects {
            match effect {
                SheetEffect::Dismissed { generation } => {
                    tracing::debug!(generation, "sheet dismissed");
                    self.on_dismiss.call(());
                }
                SheetEffect::Settled => tracing::trace!("sheet settled open"),
                SheetEffect::CapturePointer => self.set_capture(true),
                SheetEffect::ReleasePointer => self.set_capture(false),
            }
        }
        self.ensure_running();
    }

    /// Pin the active pointer to the panel so moves and the release reach it
    /// even outside the window.
    fn set_capture(&self, capture: bool) {
        let Some(pointer) = *self.pointer.peek() else {
            return;
        };
        if !capture {
            let mut slot = self.pointer;
            slot.set(None);
        }
        document::eval(&capture_script(&self.panel_id.peek(), pointer, capture));
    }

    /// Start the frame loop if an animation is pending and no loop is alive.
    ///
    /// A loop drives one animation generation. When the machine starts a
    /// newer one, the loop stops without touching it and a fresh loop takes over.
    fn ensure_running(&self) {
        let mut running = self.running;
        if *running.peek() || !self.machine.peek().is_animating() {
            return;
        }
        running.set(true);

        let handle = *self;
        let generation = self.machine.peek().generation();
        spawn(async move {
            let mut superseded = false;
            while handle.machine.peek().is_animating() {
                if !next_frame().await {
                    break;
                }
                let mut machine = handle.machine;
                let effects = machine.write().frame_for(generation, now_ms());
                match effects {
                    Some(effects) => handle.apply(effects),
                    None => {
                        tracing::trace!(generation, "frame loop superseded");
                        superseded = true;
                        break;
                    }
                }
            }
            let mut running = handle.running;
            running.set(false);
            if superseded {
                handle.ensure_running();
            }
        });
    }

    /// Id of the panel element; pointer capture targets it.
    pub fn panel_id(&self) -> String {
        self.panel_id.read().clone()
    }

    pub fn pointer_down(&self, position: Point, pointer_id: i32) {
        let mut pointer = self.pointer;
        pointer.set(Some(pointer_id));
        self.dispatch(|m| {
            m.update(SheetEvent::PointerDown {
                position,
                now: now_ms(),
            })
        });
    }

    pub fn pointer_move(&self, position: Point) {
        if !self.machine.peek().is_dragging() {
            return;
        }
        self.dispatch(|m| {
            m.update(SheetEvent::PointerMove {
                position,
                now: now_ms(),
            })
        });
    }

    pub fn pointer_up(&self, position: Point) {
        if !self.machine.peek().is_dragging() {
            return;
        }
        self.dispatch(|m| {
            m.update(SheetEvent::PointerUp {
                position,
                now: now_ms(),
            })
        });
    }

    /// Programmatic or backdrop dismissal.
    pub fn close(&self) {
        self.dispatch(|m| m.update(SheetEvent::Close { now: now_ms() }));
    }

    /// Report the rendered panel size along the drag axis.
    pub fn measure(&self, panel_size: f64) {
        if !panel_size.is_finite() || panel_size <= 0.0 {
            return;
        }
        let current = self.machine.peek().geometry().panel_size;
        if (current - panel_size).abs() < 0.5 {
            return;
        }
        let viewport = self.machine.peek().viewport();
        self.dispatch(|m| {
            m.update(SheetEvent::Resize {
                viewport,
                panel_size,
            })
        });
    }

    pub fn is_visible(&self) -> bool {
        self.machine.read().is_visible()
    }

    pub fn is_dragging(&self) -> bool {
        self.machine.read().is_dragging()
    }

    pub fn side(&self) -> Side {
        self.machine.read().geometry().side
    }

    pub fn phase_name(&self) -> &'static str {
        self.machine.read().phase().name()
    }

    pub fn backdrop_opacity(&self) -> f64 {
        self.machine.read().backdrop_opacity()
    }

    /// Inline style for the panel element.
    pub fn panel_style(&self) -> String {
        format!("transform: {};", self.machine.read().transform())
    }
}

fn capture_script(panel_id: &str, pointer: i32, capture: bool) -> String {
    let method = if capture {
        "setPointerCapture"
    } else {
        "releasePointerCapture"
    };
    format!(
        r#"
        (function() {{
            var panel = document.getElementById('{panel_id}');
            try {{ if (panel) panel.{method}({pointer}); }} catch (_) {{}}
        }})();
        "#
    )
}

/// Drive a drag-to-dismiss panel from a controlled `open` flag.
///
/// `on_dismiss` fires once the close animation has finished, whether the
/// close came from a drag, the backdrop or the owner flipping `open`.
pub fn use_sheet(side: Side, open: bool, on_dismiss: EventHandler<()>) -> SheetHandle {
    let viewport = use_viewport();
    let machine = use_signal(|| {
        let viewport = viewport.peek().unwrap_or_default();
        // until measured, assume the panel spans the viewport so it starts off-screen
        let mut machine = SheetMachine::new(side, viewport.extent(side.axis()), viewport);
        // an initially open panel mounts already heading open
        machine.sync_open(open, now_ms());
        machine
    });
    let running = use_signal(|| false);
    let panel_id = use_signal(|| format!("sheet-panel-{}", NEXT_PANEL.fetch_add(1, Ordering::Relaxed)));
    let pointer = use_signal(|| None);

    let handle = SheetHandle {
        machine,
        running,
        on_dismiss,
        panel_id,
        pointer,
    };

    use_effect(use_reactive((&open,), move |(open,)| {
        handle.dispatch(|m| m.sync_open(open, now_ms()));
    }));

    use_effect(move || {
        let Some(viewport) = viewport() else {
            return;
        };
        let panel_size = machine.peek().geometry().panel_size;
        handle.dispatch(|m| {
            m.update(SheetEvent::Resize {
                viewport,
                panel_size,
            })
        });
    });

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_script_targets_the_panel_and_pointer() {
        let script = capture_script("sheet-panel-3", 7, true);
        assert!(script.contains("getElementById('sheet-panel-3')"), "{script}");
        assert!(script.contains("panel.setPointerCapture(7)"), "{script}");

        let script = capture_script("sheet-panel-3", 7, false);
        assert!(script.contains("panel.releasePointerCapture(7)"), "{script}");
    }
}
