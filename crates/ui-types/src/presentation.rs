/// Widths below this use the draggable sheet rendering of a dialog.
pub const SMALL_SCREEN_BREAKPOINT: f64 = 640.0;

/// How a responsive dialog is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPresentation {
    /// Bottom sheet with drag-to-dismiss, used on small screens.
    Sheet,
    /// Centered modal that fades and scales, no drag support.
    #[default]
    Modal,
}

impl DialogPresentation {
    pub fn for_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width < breakpoint {
            DialogPresentation::Sheet
        } else {
            DialogPresentation::Modal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DialogPresentation::Sheet => "sheet",
            DialogPresentation::Modal => "modal",
        }
    }
}

/// Keeps the presentation chosen when a dialog opened.
///
/// The choice survives the close so the exit animation plays in the same
/// rendering; it is recomputed on the next closed-to-open edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PresentationLatch {
    current: Option<DialogPresentation>,
    open: bool,
}

impl PresentationLatch {
    /// Feed the dialog's open flag and the viewport width observed now.
    ///
    /// `None` means the viewport has not been measured yet. An opening dialog
    /// then stays unlatched (and unrendered) until a width arrives.
    pub fn observe(
        &mut self,
        open: bool,
        viewport_width: Option<f64>,
        breakpoint: f64,
    ) -> Option<DialogPresentation> {
        if open && !self.open {
            let Some(width) = viewport_width else {
                return None;
            };
            self.current = Some(DialogPresentation::for_width(width, breakpoint));
        }
        self.open = open;
        self.current
    }

    pub fn current(&self) -> Option<DialogPresentation> {
        self.current
    }
}
