//! Interaction state machine driving the goo widget.

use std::rc::Rc;

use gooey_animation::Tween;
use gooey_graphics::{distance_between, Circle, Point, Size};

use crate::config::GooConfig;
use crate::input::{PointerEvent, PointerEventKind};
use crate::radius::stick_radius;
use crate::scene::GooScene;

/// Gesture phase of the band.
///
/// `Normal` and `OutOfRange` flow into each other during a gesture;
/// `Disappeared` is terminal for the current drag cycle and only a fresh
/// press leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// Band intact: drag circle, stick circle and band are all drawn.
    Normal,
    /// Band snapped mid-drag: only the drag circle is drawn.
    OutOfRange,
    /// Dismissed: nothing but the range ring is drawn.
    Disappeared,
}

/// The interaction engine.
///
/// Feed it pointer events, size events and frame timestamps; read back
/// the current [`GooScene`]. `on_disappear` and `on_reset` fire at most
/// once per gesture.
pub struct GooEngine {
    config: GooConfig,
    drag_center: Point,
    stick_center: Point,
    farthest_distance: f32,
    state: DragState,
    reset_animation: Option<Tween<Point>>,
    redraw_requested: bool,
    on_disappear: Option<Rc<dyn Fn()>>,
    on_reset: Option<Rc<dyn Fn(bool)>>,
}

impl GooEngine {
    pub fn new(config: GooConfig) -> Self {
        Self {
            config,
            drag_center: Point::ZERO,
            stick_center: Point::ZERO,
            farthest_distance: 0.0,
            state: DragState::Normal,
            reset_animation: None,
            redraw_requested: false,
            on_disappear: None,
            on_reset: None,
        }
    }

    pub fn config(&self) -> &GooConfig {
        &self.config
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn farthest_distance(&self) -> f32 {
        self.farthest_distance
    }

    /// The circle tracking the pointer.
    pub fn drag_circle(&self) -> Circle {
        Circle::new(self.drag_center, self.config.drag_radius)
    }

    /// The anchored circle with its distance-shrunk radius.
    pub fn stick_circle(&self) -> Circle {
        let radius = stick_radius(
            self.drag_center,
            self.stick_center,
            self.config.stick_radius,
            self.config.min_stick_radius(),
            self.farthest_distance,
        );
        Circle::new(self.stick_center, radius)
    }

    /// Whether a snap-back animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.reset_animation.is_some()
    }

    /// Called when the band snaps and the bubble is dismissed.
    pub fn set_on_disappear(&mut self, handler: impl Fn() + 'static) {
        self.on_disappear = Some(Rc::new(handler));
    }

    /// Called when the drag circle is back at the anchor. The flag is
    /// `true` when the gesture had left the allowed range first.
    pub fn set_on_reset(&mut self, handler: impl Fn(bool) + 'static) {
        self.on_reset = Some(Rc::new(handler));
    }

    /// Layout event: centers both circles in the container and derives the
    /// farthest drag distance from the width.
    pub fn set_size(&mut self, size: Size) {
        if size.width <= 0.0 {
            log::warn!("goo engine laid out with degenerate width {}", size.width);
        }
        let center = size.center();
        self.drag_center = center;
        self.stick_center = center;
        self.farthest_distance = size.width / 3.0;
        self.request_redraw();
    }

    /// Dispatch a pointer event to the matching gesture handler.
    ///
    /// `Cancel` is deliberately ignored: the gesture keeps its state and
    /// the next press starts a fresh cycle.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.press(event.position),
            PointerEventKind::Move => self.drag(event.position),
            PointerEventKind::Up => self.release(),
            PointerEventKind::Cancel => {}
        }
    }

    /// Pointer down: a fresh press restarts the gesture cycle, clearing
    /// any stale out-of-range or dismissed flag and cancelling an
    /// in-flight snap-back.
    pub fn press(&mut self, position: Point) {
        self.reset_animation = None;
        self.state = DragState::Normal;
        self.update_drag_center(position);
    }

    /// Pointer move: track the pointer and snap the band once the anchor
    /// distance exceeds the farthest distance. No callback fires here;
    /// the verdict waits for the release.
    pub fn drag(&mut self, position: Point) {
        self.update_drag_center(position);
        if self.state == DragState::Disappeared {
            return;
        }
        let distance = distance_between(self.drag_center, self.stick_center);
        if distance > self.farthest_distance {
            if self.state != DragState::OutOfRange {
                log::debug!("band snapped at distance {distance}");
            }
            self.state = DragState::OutOfRange;
        }
    }

    /// Pointer up: resolve the gesture.
    ///
    /// Out of range and still beyond the farthest distance dismisses the
    /// bubble; out of range but dragged back inside snaps home without
    /// animation; in range starts the overshoot snap-back driven by
    /// [`GooEngine::on_frame`].
    pub fn release(&mut self) {
        match self.state {
            DragState::OutOfRange => {
                let distance = distance_between(self.drag_center, self.stick_center);
                if distance > self.farthest_distance {
                    self.state = DragState::Disappeared;
                    self.request_redraw();
                    log::debug!("bubble dismissed at distance {distance}");
                    if let Some(on_disappear) = &self.on_disappear {
                        on_disappear();
                    }
                } else {
                    self.state = DragState::Normal;
                    self.update_drag_center(self.stick_center);
                    if let Some(on_reset) = &self.on_reset {
                        on_reset(true);
                    }
                }
            }
            DragState::Normal => {
                self.reset_animation = Some(Tween::new(
                    self.drag_center,
                    self.stick_center,
                    self.config.reset_spec(),
                ));
            }
            // Stray release without a preceding press; the cycle is over.
            DragState::Disappeared => {}
        }
    }

    /// Advance the snap-back animation to `frame_time_nanos`.
    ///
    /// Returns `true` while further frames are needed. On the completing
    /// frame the drag center lands exactly on the anchor and
    /// `on_reset(false)` fires once.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(animation) = self.reset_animation.as_mut() else {
            return false;
        };
        let position = animation.value_at(frame_time_nanos);
        let finished = animation.is_finished(frame_time_nanos);
        log::trace!("snap-back frame at {frame_time_nanos}: {position:?}");
        self.update_drag_center(position);
        if finished {
            self.reset_animation = None;
            if let Some(on_reset) = &self.on_reset {
                on_reset(false);
            }
        }
        !finished
    }

    /// Take the latched advisory redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Assemble the drawable primitives for the current state.
    pub fn scene(&self) -> GooScene {
        GooScene::assemble(
            self.state,
            self.drag_circle(),
            self.stick_circle(),
            self.farthest_distance,
        )
    }

    fn update_drag_center(&mut self, position: Point) {
        self.drag_center = position;
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

impl Default for GooEngine {
    fn default() -> Self {
        Self::new(GooConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
