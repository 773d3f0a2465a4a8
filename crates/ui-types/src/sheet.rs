//! Drag-to-dismiss state machine shared by every draggable panel.
//!
//! The machine is a plain value updated through [`SheetMachine::update`];
//! components feed it pointer events and animation frames and react to the
//! returned [`SheetEffect`]s. Nothing here knows about rendering.

use crate::drag::{Point, SheetGeometry, Side, Viewport};
use crate::motion::{Easing, Spring, SpringMotion, Tween, VelocityTracker, PANEL_TWEEN_MS};

/// An in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    /// Pointer position along the drag axis when the gesture began.
    pub origin: f64,
    /// Panel offset when the gesture began.
    pub start_offset: f64,
    pub tracker: VelocityTracker,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetPhase {
    Closed,
    Opening(Tween),
    Open,
    Dragging(DragGesture),
    Closing(Tween),
    SnappingBack(SpringMotion),
}

impl SheetPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SheetPhase::Closed => "closed",
            SheetPhase::Opening(_) => "opening",
            SheetPhase::Open => "open",
            SheetPhase::Dragging(_) => "dragging",
            SheetPhase::Closing(_) => "closing",
            SheetPhase::SnappingBack(_) => "snapping-back",
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self,
            SheetPhase::Opening(_) | SheetPhase::Closing(_) | SheetPhase::SnappingBack(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// Trigger activated, or the controlled `open` prop became true.
    Open { now: f64 },
    /// Programmatic close, backdrop click, escape, or `open` became false.
    Close { now: f64 },
    PointerDown { position: Point, now: f64 },
    PointerMove { position: Point, now: f64 },
    PointerUp { position: Point, now: f64 },
    /// One animation frame.
    Frame { now: f64 },
    /// Viewport or measured panel size changed.
    Resize { viewport: Viewport, panel_size: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEffect {
    /// Route further pointer events to the panel until released.
    CapturePointer,
    ReleasePointer,
    /// The close animation finished; the owner should clear its open flag and unmount.
    Dismissed { generation: u64 },
    /// The panel came to rest fully open.
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetMachine {
    geometry: SheetGeometry,
    viewport: Viewport,
    phase: SheetPhase,
    offset: f64,
    generation: u64,
    pending_open: bool,
    /// The owner's controlled flag is false; a close it started cannot be grabbed back.
    owner_closed: bool,
}

impl SheetMachine {
    pub fn new(side: Side, panel_size: f64, viewport: Viewport) -> Self {
        let geometry = SheetGeometry::new(side, panel_size);
        Self {
            offset: geometry.closed_offset,
            geometry,
            viewport,
            phase: SheetPhase::Closed,
            generation: 0,
            pending_open: false,
            owner_closed: false,
        }
    }

    pub fn phase(&self) -> &SheetPhase {
        &self.phase
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bumped whenever an animation starts or is cancelled.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the panel should be mounted.
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, SheetPhase::Closed)
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SheetPhase::Dragging(_))
    }

    /// Whether the machine is heading toward (or resting in) the open position.
    pub fn wants_open(&self) -> bool {
        match self.phase {
            SheetPhase::Closed => false,
            SheetPhase::Closing(_) => self.pending_open,
            _ => true,
        }
    }

    pub fn backdrop_opacity(&self) -> f64 {
        self.geometry.backdrop_opacity(self.offset)
    }

    pub fn transform(&self) -> String {
        self.geometry.transform(self.offset)
    }

    /// Align the machine with a controlled `open` flag. Repeated calls with
    /// the same value are no-ops, so a prop echo never restarts an animation.
    pub fn sync_open(&mut self, open: bool, now: f64) -> Vec<SheetEffect> {
        self.owner_closed = !open;
        if open == self.wants_open() {
            return Vec::new();
        }
        if open {
            self.update(SheetEvent::Open { now })
        } else {
            self.update(SheetEvent::Close { now })
        }
    }

    /// Advance the animation that started as `generation`. Returns `None`
    /// once a newer animation (or a drag) has replaced it, so a frame loop
    /// started for an older animation never drives or dismisses a newer one.
    pub fn frame_for(&mut self, generation: u64, now: f64) -> Option<Vec<SheetEffect>> {
        if generation != self.generation {
            return None;
        }
        Some(self.update(SheetEvent::Frame { now }))
    }

    pub fn update(&mut self, event: SheetEvent) -> Vec<SheetEffect> {
        match event {
            SheetEvent::Open { now } => self.on_open(now),
            SheetEvent::Close { now } => self.on_close(now),
            SheetEvent::PointerDown { position, now } => self.on_pointer_down(position, now),
            SheetEvent::PointerMove { position, now } => {
                self.track(position, now);
                Vec::new()
            }
            SheetEvent::PointerUp { position, now } => self.on_pointer_up(position, now),
            SheetEvent::Frame { now } => self.on_frame(now),
            SheetEvent::Resize {
                viewport,
                panel_size,
            } => {
                self.on_resize(viewport, panel_size);
                Vec::new()
            }
        }
    }

    fn transition(&mut self, phase: SheetPhase) {
        tracing::debug!(
            side = %self.geometry.side,
            from = self.phase.name(),
            to = phase.name(),
            offset = self.offset,
            "sheet phase change"
        );
        self.phase = phase;
    }

    fn start_animation(&mut self, phase: SheetPhase) {
        self.generation += 1;
        self.transition(phase);
    }

    fn closing_tween(&self, now: f64) -> Tween {
        Tween::new(
            self.offset,
            self.geometry.closed_offset,
            now,
            PANEL_TWEEN_MS,
            Easing::EaseIn,
        )
    }

    fn on_open(&mut self, now: f64) -> Vec<SheetEffect> {
        self.owner_closed = false;
        match self.phase {
            SheetPhase::Closed => {
                self.offset = self.geometry.closed_offset;
                let tween = Tween::new(
                    self.offset,
                    self.geometry.open_offset,
                    now,
                    PANEL_TWEEN_MS,
                    Easing::EaseOut,
                );
                self.start_animation(SheetPhase::Opening(tween));
            }
            SheetPhase::Closing(_) => {
                tracing::debug!("open requested during close, queued");
                self.pending_open = true;
            }
            _ => {}
        }
        Vec::new()
    }

    fn on_close(&mut self, now: f64) -> Vec<SheetEffect> {
        let mut effects = Vec::new();
        match self.phase {
            SheetPhase::Closed => {}
            SheetPhase::Closing(_) => self.pending_open = false,
            _ => {
                if self.is_dragging() {
                    effects.push(SheetEffect::ReleasePointer);
                }
                self.pending_open = false;
                let tween = self.closing_tween(now);
                self.start_animation(SheetPhase::Closing(tween));
            }
        }
        effects
    }

    fn on_pointer_down(&mut self, position: Point, now: f64) -> Vec<SheetEffect> {
        match self.phase {
            SheetPhase::Closed | SheetPhase::Dragging(_) => Vec::new(),
            SheetPhase::Closing(_) if self.owner_closed => {
                tracing::debug!("owner closed the panel, drag ignored");
                Vec::new()
            }
            _ => {
                // take over the animated value where it currently is
                self.advance(now);
                let origin = position.along(self.geometry.axis);
                let mut tracker = VelocityTracker::new();
                tracker.push(now, origin);
                self.pending_open = false;
                self.generation += 1;
                self.transition(SheetPhase::Dragging(DragGesture {
                    origin,
                    start_offset: self.offset,
                    tracker,
                }));
                vec![SheetEffect::CapturePointer]
            }
        }
    }

    fn track(&mut self, position: Point, now: f64) {
        let axis = self.geometry.axis;
        let constraint = self.geometry.constraint;
        if let SheetPhase::Dragging(gesture) = &mut self.phase {
            let pointer = position.along(axis);
            gesture.tracker.push(now, pointer);
            self.offset = constraint.clamp(gesture.start_offset + (pointer - gesture.origin));
        }
    }

    fn on_pointer_up(&mut self, position: Point, now: f64) -> Vec<SheetEffect> {
        if !self.is_dragging() {
            return Vec::new();
        }
        self.track(position, now);
        let velocity = match &self.phase {
            SheetPhase::Dragging(gesture) => gesture.tracker.velocity(),
            _ => 0.0,
        };

        let mut effects = vec![SheetEffect::ReleasePointer];
        if self.geometry.should_close(self.offset, velocity, self.viewport) {
            let tween = self.closing_tween(now);
            self.start_animation(SheetPhase::Closing(tween));
        } else if self.offset == self.geometry.open_offset {
            self.transition(SheetPhase::Open);
            effects.push(SheetEffect::Settled);
        } else {
            let spring = SpringMotion::new(
                Spring::SNAP_BACK,
                self.offset,
                self.geometry.open_offset,
                velocity,
                now,
            );
            self.start_animation(SheetPhase::SnappingBack(spring));
        }
        effects
    }

    /// Move the animated offset to its value at `now`; reports completion.
    fn advance(&mut self, now: f64) -> bool {
        let (value, done) = match &self.phase {
            SheetPhase::Opening(tween) | SheetPhase::Closing(tween) => tween.sample(now),
            SheetPhase::SnappingBack(spring) => spring.sample(now),
            _ => return false,
        };
        self.offset = match self.phase {
            SheetPhase::SnappingBack(_) => self.geometry.constraint.clamp(value),
            _ => value,
        };
        done
    }

    fn on_frame(&mut self, now: f64) -> Vec<SheetEffect> {
        if !self.advance(now) {
            return Vec::new();
        }
        match self.phase {
            SheetPhase::Opening(_) | SheetPhase::SnappingBack(_) => {
                self.transition(SheetPhase::Open);
                vec![SheetEffect::Settled]
            }
            SheetPhase::Closing(_) if self.pending_open => {
                self.pending_open = false;
                let tween = Tween::new(
                    self.offset,
                    self.geometry.open_offset,
                    now,
                    PANEL_TWEEN_MS,
                    Easing::EaseOut,
                );
                self.start_animation(SheetPhase::Opening(tween));
                Vec::new()
            }
            SheetPhase::Closing(_) => {
                self.transition(SheetPhase::Closed);
                vec![SheetEffect::Dismissed {
                    generation: self.generation,
                }]
            }
            _ => Vec::new(),
        }
    }

    fn on_resize(&mut self, viewport: Viewport, panel_size: f64) {
        self.viewport = viewport;
        self.geometry = SheetGeometry::new(self.geometry.side, panel_size);
        match &mut self.phase {
            SheetPhase::Closed => self.offset = self.geometry.closed_offset,
            SheetPhase::Closing(tween) => tween.to = self.geometry.closed_offset,
            SheetPhase::Opening(tween) => tween.from = self.geometry.closed_offset,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn machine() -> SheetMachine {
        SheetMachine::new(Side::Bottom, 300.0, Viewport::new(400.0, 800.0))
    }

    fn at(y: f64) -> Point {
        Point::new(200.0, y)
    }

    /// Pump frames every 16ms until the machine stops animating.
    fn run(machine: &mut SheetMachine, mut now: f64) -> (f64, Vec<SheetEffect>) {
        let mut effects = Vec::new();
        while machine.is_animating() {
            now += 16.0;
            effects.extend(machine.update(SheetEvent::Frame { now }));
            assert!(now < 20_000.0, "animation never settled");
        }
        (now, effects)
    }

    fn opened() -> (SheetMachine, f64) {
        let mut m = machine();
        m.update(SheetEvent::Open { now: 0.0 });
        let (now, _) = run(&mut m, 0.0);
        (m, now)
    }

    /// Drag from y=100 to y=100+distance over `duration` ms and release.
    fn drag(m: &mut SheetMachine, now: f64, distance: f64, duration: f64) -> (f64, Vec<SheetEffect>) {
        let mut effects = m.update(SheetEvent::PointerDown {
            position: at(100.0),
            now,
        });
        let steps = 4.0;
        for i in 1..=4 {
            let f = i as f64 / steps;
            m.update(SheetEvent::PointerMove {
                position: at(100.0 + distance * f),
                now: now + duration * f,
            });
        }
        let end = now + duration;
        effects.extend(m.update(SheetEvent::PointerUp {
            position: at(100.0 + distance),
            now: end,
        }));
        (end, effects)
    }

    #[test]
    fn opens_from_closed_offset_and_settles() {
        let mut m = machine();
        assert!(!m.is_visible());
        assert_eq!(m.offset(), 300.0);

        m.update(SheetEvent::Open { now: 0.0 });
        assert_eq!(m.phase().name(), "opening");
        assert!(m.is_visible());

        let (_, effects) = run(&mut m, 0.0);
        assert_eq!(m.phase(), &SheetPhase::Open);
        assert_eq!(m.offset(), 0.0);
        assert_eq!(effects, vec![SheetEffect::Settled]);
    }

    #[test]
    fn far_drag_dismisses() {
        let (mut m, now) = opened();
        let (now, effects) = drag(&mut m, now, 650.0, 2000.0);
        assert_eq!(effects, vec![SheetEffect::CapturePointer, SheetEffect::ReleasePointer]);
        assert_eq!(m.phase().name(), "closing");

        let (_, effects) = run(&mut m, now);
        assert_eq!(m.phase(), &SheetPhase::Closed);
        assert_eq!(m.offset(), 300.0);
        assert!(matches!(effects.as_slice(), [SheetEffect::Dismissed { .. }]));
    }

    #[test]
    fn fast_flick_dismisses() {
        let (mut m, now) = opened();
        // 100px in 6ms is well above the velocity threshold
        drag(&mut m, now, 100.0, 6.0);
        assert_eq!(m.phase().name(), "closing");
    }

    #[test]
    fn slow_short_drag_snaps_back() {
        let (mut m, now) = opened();
        let (now, _) = drag(&mut m, now, 100.0, 200.0);
        assert_eq!(m.phase().name(), "snapping-back");
        assert_eq!(m.offset(), 100.0);

        let (_, effects) = run(&mut m, now);
        assert_eq!(m.phase(), &SheetPhase::Open);
        assert_eq!(m.offset(), 0.0);
        assert_eq!(effects, vec![SheetEffect::Settled]);
    }

    #[test]
    fn cannot_overdrag_past_open() {
        let (mut m, now) = opened();
        m.update(SheetEvent::PointerDown {
            position: at(400.0),
            now,
        });
        m.update(SheetEvent::PointerMove {
            position: at(100.0),
            now: now + 50.0,
        });
        assert_eq!(m.offset(), 0.0);
        assert_eq!(m.backdrop_opacity(), 1.0);
    }

    #[test]
    fn backdrop_tracks_drag_synchronously() {
        let (mut m, now) = opened();
        m.update(SheetEvent::PointerDown {
            position: at(100.0),
            now,
        });
        m.update(SheetEvent::PointerMove {
            position: at(250.0),
            now: now + 500.0,
        });
        assert_eq!(m.offset(), 150.0);
        assert_eq!(m.backdrop_opacity(), 0.5);
    }

    #[test]
    fn release_at_rest_position_settles_immediately() {
        let (mut m, now) = opened();
        let (_, effects) = drag(&mut m, now, 0.0, 100.0);
        assert_eq!(m.phase(), &SheetPhase::Open);
        assert_eq!(effects.last(), Some(&SheetEffect::Settled));
    }

    #[test]
    fn controlled_open_fires_once() {
        let mut m = machine();
        m.sync_open(true, 0.0);
        let generation = m.generation();
        assert_eq!(m.phase().name(), "opening");
        m.sync_open(true, 5.0);
        assert_eq!(m.generation(), generation);

        let (now, _) = run(&mut m, 5.0);
        m.sync_open(true, now);
        assert_eq!(m.phase(), &SheetPhase::Open);

        m.sync_open(false, now);
        assert_eq!(m.phase().name(), "closing");
        let closing_generation = m.generation();
        assert_eq!(closing_generation, generation + 1);
        m.sync_open(false, now + 1.0);
        assert_eq!(m.generation(), closing_generation);
    }

    #[test]
    fn open_during_close_is_queued_until_close_finishes() {
        let (mut m, now) = opened();
        m.update(SheetEvent::Close { now });
        m.update(SheetEvent::Frame { now: now + 100.0 });
        m.update(SheetEvent::Open { now: now + 100.0 });
        assert_eq!(m.phase().name(), "closing");
        assert!(m.wants_open());

        let mut t = now + 100.0;
        let mut dismissed = false;
        while m.phase().name() == "closing" {
            t += 16.0;
            dismissed |= m
                .update(SheetEvent::Frame { now: t })
                .iter()
                .any(|e| matches!(e, SheetEffect::Dismissed { .. }));
        }
        assert!(!dismissed);
        assert_eq!(m.phase().name(), "opening");
        assert_eq!(m.offset(), 300.0);

        run(&mut m, t);
        assert_eq!(m.phase(), &SheetPhase::Open);
    }

    #[test]
    fn close_cancels_a_queued_open() {
        let (mut m, now) = opened();
        m.update(SheetEvent::Close { now });
        m.update(SheetEvent::Open { now: now + 10.0 });
        m.update(SheetEvent::Close { now: now + 20.0 });
        assert!(!m.wants_open());
        let (_, effects) = run(&mut m, now + 20.0);
        assert!(matches!(effects.as_slice(), [SheetEffect::Dismissed { .. }]));
    }

    #[test]
    fn pointer_down_interrupts_snap_back() {
        let (mut m, now) = opened();
        let (now, _) = drag(&mut m, now, 120.0, 300.0);
        assert_eq!(m.phase().name(), "snapping-back");
        let before = m.generation();

        m.update(SheetEvent::Frame { now: now + 32.0 });
        let mid = m.offset();
        let effects = m.update(SheetEvent::PointerDown {
            position: at(500.0),
            now: now + 32.0,
        });
        assert_eq!(effects, vec![SheetEffect::CapturePointer]);
        assert!(m.is_dragging());
        assert!(m.generation() > before);
        assert_eq!(m.offset(), mid);
    }

    #[test]
    fn owner_close_cannot_be_grabbed_back() {
        let mut m = machine();
        m.sync_open(true, 0.0);
        let (now, _) = run(&mut m, 0.0);
        m.sync_open(false, now);
        m.update(SheetEvent::Frame { now: now + 32.0 });

        let (now, effects) = drag(&mut m, now + 32.0, 5.0, 40.0);
        assert!(effects.is_empty());
        assert_eq!(m.phase().name(), "closing");

        let (_, effects) = run(&mut m, now);
        assert!(!m.is_visible());
        assert!(!m.wants_open());
        assert!(matches!(effects.as_slice(), [SheetEffect::Dismissed { .. }]));
    }

    #[test]
    fn backdrop_close_can_still_be_grabbed_back() {
        let mut m = machine();
        m.sync_open(true, 0.0);
        let (now, _) = run(&mut m, 0.0);
        m.update(SheetEvent::Close { now });
        m.update(SheetEvent::Frame { now: now + 32.0 });

        let (now, effects) = drag(&mut m, now + 32.0, -5.0, 400.0);
        assert_eq!(effects.first(), Some(&SheetEffect::CapturePointer));
        run(&mut m, now);
        assert_eq!(m.phase(), &SheetPhase::Open);
        assert!(m.wants_open());
    }

    #[test]
    fn frames_from_a_replaced_animation_are_refused() {
        let (mut m, now) = opened();
        m.update(SheetEvent::Close { now });
        let closing = m.generation();
        assert!(m.frame_for(closing, now + 16.0).is_some());

        m.update(SheetEvent::PointerDown {
            position: at(100.0),
            now: now + 20.0,
        });
        let offset = m.offset();
        assert_eq!(m.frame_for(closing, now + 300.0), None);
        assert_eq!(m.offset(), offset);
        assert!(m.is_dragging());
    }

    #[test]
    fn queued_reopen_hands_frames_to_a_new_generation() {
        let (mut m, now) = opened();
        m.update(SheetEvent::Close { now });
        m.update(SheetEvent::Open { now: now + 10.0 });
        let closing = m.generation();

        let mut t = now + 10.0;
        while m.phase().name() == "closing" {
            t += 16.0;
            let effects = m.frame_for(closing, t).unwrap_or_default();
            assert!(effects.is_empty());
        }
        assert_eq!(m.phase().name(), "opening");
        assert_eq!(m.frame_for(closing, t + 16.0), None);
        assert!(m.frame_for(m.generation(), t + 16.0).is_some());
    }

    #[test]
    fn close_while_dragging_releases_pointer() {
        let (mut m, now) = opened();
        m.update(SheetEvent::PointerDown {
            position: at(100.0),
            now,
        });
        let effects = m.update(SheetEvent::Close { now: now + 10.0 });
        assert_eq!(effects, vec![SheetEffect::ReleasePointer]);
        assert_eq!(m.phase().name(), "closing");
    }

    #[test]
    fn pointer_events_ignored_while_closed() {
        let mut m = machine();
        assert!(m
            .update(SheetEvent::PointerDown {
                position: at(10.0),
                now: 0.0
            })
            .is_empty());
        assert!(m
            .update(SheetEvent::PointerUp {
                position: at(10.0),
                now: 1.0
            })
            .is_empty());
        assert_eq!(m.phase(), &SheetPhase::Closed);
    }

    #[test]
    fn resize_moves_the_closed_position() {
        let mut m = machine();
        m.update(SheetEvent::Resize {
            viewport: Viewport::new(400.0, 900.0),
            panel_size: 420.0,
        });
        assert_eq!(m.offset(), 420.0);
        assert_eq!(m.viewport().height, 900.0);
    }

    #[test]
    fn left_drawer_drags_horizontally() {
        let mut m = SheetMachine::new(Side::Left, 280.0, Viewport::new(1000.0, 700.0));
        m.update(SheetEvent::Open { now: 0.0 });
        let (now, _) = run(&mut m, 0.0);
        m.update(SheetEvent::PointerDown {
            position: Point::new(250.0, 300.0),
            now,
        });
        m.update(SheetEvent::PointerMove {
            position: Point::new(150.0, 900.0),
            now: now + 400.0,
        });
        assert_eq!(m.offset(), -100.0);
        assert_eq!(m.transform(), "translateX(-100.00px)");
    }
}
