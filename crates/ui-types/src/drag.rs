use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Fraction of the viewport extent a panel must be dragged past to dismiss.
pub const CLOSE_DISTANCE_RATIO: f64 = 0.75;

/// Release speed (px/ms, in the closing direction) that dismisses regardless of distance.
pub const CLOSE_VELOCITY: f64 = 10.0;

/// Which edge of the screen a draggable panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

/// Axis a panel moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

pub const ALL_SIDES: &[Side] = &[Side::Top, Side::Right, Side::Bottom, Side::Left];

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Vertical for top/bottom sheets, horizontal for left/right drawers.
    pub fn axis(&self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Y,
            Side::Left | Side::Right => Axis::X,
        }
    }

    /// Sign of the off-screen direction along [`Side::axis`].
    pub fn direction(&self) -> f64 {
        match self {
            Side::Bottom | Side::Right => 1.0,
            Side::Top | Side::Left => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "right" => Ok(Side::Right),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            other => Err(UiError::UnknownSide(other.to_string())),
        }
    }
}

/// A 2D pointer or layout position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Visible viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}

/// Bounds a drag offset may take along the panel's axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConstraint {
    pub min: f64,
    pub max: f64,
}

impl DragConstraint {
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min, self.max)
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.min && offset <= self.max
    }
}

/// Resolved drag configuration for a panel anchored to one side.
///
/// Offsets are measured from the fully-open resting position; positive
/// values point toward the bottom/right of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub side: Side,
    pub axis: Axis,
    pub panel_size: f64,
    pub open_offset: f64,
    pub closed_offset: f64,
    pub constraint: DragConstraint,
}

impl SheetGeometry {
    /// # Panics
    ///
    /// Panics when `panel_size` is negative or not finite. A panel without a
    /// measurable size cannot be positioned, so this is a caller bug.
    pub fn new(side: Side, panel_size: f64) -> Self {
        assert!(
            panel_size.is_finite() && panel_size >= 0.0,
            "sheet panel size must be a finite, non-negative pixel value (got {panel_size})"
        );

        let direction = side.direction();
        let constraint = if direction > 0.0 {
            DragConstraint {
                min: 0.0,
                max: f64::INFINITY,
            }
        } else {
            DragConstraint {
                min: f64::NEG_INFINITY,
                max: 0.0,
            }
        };

        Self {
            side,
            axis: side.axis(),
            panel_size,
            open_offset: 0.0,
            closed_offset: direction * panel_size,
            constraint,
        }
    }

    /// Signed distance travelled in the closing direction.
    pub fn closing_distance(&self, offset: f64) -> f64 {
        self.side.direction() * (offset - self.open_offset)
    }

    /// Whether a drag released at `offset` with `velocity` (px/ms) dismisses the panel.
    pub fn should_close(&self, offset: f64, velocity: f64, viewport: Viewport) -> bool {
        let distance = self.closing_distance(offset);
        let speed = self.side.direction() * velocity;
        distance > CLOSE_DISTANCE_RATIO * viewport.extent(self.axis) || speed > CLOSE_VELOCITY
    }

    /// Backdrop opacity for the current offset: 1 fully open, 0 fully closed.
    pub fn backdrop_opacity(&self, offset: f64) -> f64 {
        if self.panel_size == 0.0 {
            return if self.closing_distance(offset) > 0.0 { 0.0 } else { 1.0 };
        }
        let progress = self.closing_distance(offset) / self.panel_size;
        (1.0 - progress).clamp(0.0, 1.0)
    }

    /// CSS transform placing the panel at `offset`.
    pub fn transform(&self, offset: f64) -> String {
        match self.axis {
            Axis::X => format!("translateX({offset:.2}px)"),
            Axis::Y => format!("translateY({offset:.2}px)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bottom_sheet() -> SheetGeometry {
        SheetGeometry::new(Side::Bottom, 300.0)
    }

    fn tall_viewport() -> Viewport {
        Viewport::new(400.0, 800.0)
    }

    #[test]
    fn axis_follows_side() {
        assert_eq!(Side::Top.axis(), Axis::Y);
        assert_eq!(Side::Bottom.axis(), Axis::Y);
        assert_eq!(Side::Left.axis(), Axis::X);
        assert_eq!(Side::Right.axis(), Axis::X);
    }

    #[test]
    fn closed_offset_points_off_screen() {
        assert_eq!(SheetGeometry::new(Side::Bottom, 300.0).closed_offset, 300.0);
        assert_eq!(SheetGeometry::new(Side::Right, 250.0).closed_offset, 250.0);
        assert_eq!(SheetGeometry::new(Side::Top, 300.0).closed_offset, -300.0);
        assert_eq!(SheetGeometry::new(Side::Left, 250.0).closed_offset, -250.0);
        for side in ALL_SIDES {
            assert_eq!(SheetGeometry::new(*side, 120.0).open_offset, 0.0);
        }
    }

    #[test]
    fn into_screen_drag_is_clamped_at_flush() {
        for side in ALL_SIDES {
            let geometry = SheetGeometry::new(*side, 200.0);
            let into_screen = -side.direction() * 500.0;
            assert_eq!(geometry.constraint.clamp(into_screen), 0.0, "{side}");

            let out_of_screen = side.direction() * 500.0;
            assert_eq!(geometry.constraint.clamp(out_of_screen), out_of_screen, "{side}");
        }
    }

    #[test]
    fn closes_past_three_quarters_of_viewport() {
        assert!(bottom_sheet().should_close(650.0, 0.0, tall_viewport()));
        assert!(!bottom_sheet().should_close(600.0, 0.0, tall_viewport()));
    }

    #[test]
    fn closes_on_fast_release() {
        assert!(bottom_sheet().should_close(100.0, 15.0, tall_viewport()));
    }

    #[test]
    fn slow_short_release_snaps_back() {
        assert!(!bottom_sheet().should_close(100.0, 2.0, tall_viewport()));
    }

    #[test]
    fn velocity_toward_open_never_closes() {
        assert!(!bottom_sheet().should_close(100.0, -40.0, tall_viewport()));
    }

    #[test]
    fn negative_sides_mirror_the_predicate() {
        let top = SheetGeometry::new(Side::Top, 300.0);
        assert!(top.should_close(-650.0, 0.0, tall_viewport()));
        assert!(top.should_close(-10.0, -12.0, tall_viewport()));
        assert!(!top.should_close(-10.0, 12.0, tall_viewport()));

        let left = SheetGeometry::new(Side::Left, 280.0);
        // horizontal sheets measure against the viewport width
        assert!(left.should_close(-301.0, 0.0, tall_viewport()));
        assert!(!left.should_close(-299.0, 0.0, tall_viewport()));
    }

    #[test]
    fn backdrop_opacity_is_linear_in_offset() {
        let geometry = bottom_sheet();
        assert_eq!(geometry.backdrop_opacity(0.0), 1.0);
        assert_eq!(geometry.backdrop_opacity(150.0), 0.5);
        assert_eq!(geometry.backdrop_opacity(300.0), 0.0);
        assert_eq!(geometry.backdrop_opacity(900.0), 0.0);

        let left = SheetGeometry::new(Side::Left, 200.0);
        assert_eq!(left.backdrop_opacity(-100.0), 0.5);
    }

    #[test]
    fn transform_uses_the_drag_axis() {
        assert_eq!(bottom_sheet().transform(12.5), "translateY(12.50px)");
        assert_eq!(
            SheetGeometry::new(Side::Right, 10.0).transform(-3.0),
            "translateX(-3.00px)"
        );
    }

    #[test]
    fn side_parses_from_config_strings() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!(
            "diagonal".parse::<Side>(),
            Err(UiError::UnknownSide("diagonal".into()))
        );
        for side in ALL_SIDES {
            assert_eq!(side.as_str().parse::<Side>(), Ok(*side));
        }
    }

    #[test]
    #[should_panic(expected = "finite, non-negative")]
    fn nan_panel_size_is_a_contract_violation() {
        SheetGeometry::new(Side::Bottom, f64::NAN);
    }
}
