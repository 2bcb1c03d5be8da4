//! Pointer input consumed by the engine.

use gooey_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event.
///
/// Positions are in the same coordinate space as the circle centers; the
/// host is responsible for any screen-to-local translation before
/// forwarding events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }
}
