//! Per-frame render output.
//!
//! Every redraw derives a fresh [`GeometrySnapshot`] from the current
//! circle pair instead of mutating cached point arrays; a snapshot is
//! replaced wholesale, never edited in place.

use gooey_graphics::{intersection_points, middle_point, Circle, Path, Point};

use crate::engine::DragState;

/// The four attachment points and the bezier control point of the band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    /// Attachment points on the drag circle; index pairs with
    /// `stick_points`.
    pub drag_points: [Point; 2],
    /// Attachment points on the stick circle.
    pub stick_points: [Point; 2],
    /// Control point of both quadratic band edges.
    pub control_point: Point,
}

impl GeometrySnapshot {
    /// Solve the band geometry for the current circle pair.
    ///
    /// Both circles are solved against the same center-to-center slope so
    /// the point pairing stays consistent. Coincident x coordinates (and
    /// therefore coincident centers) route through the vertical-line
    /// branch of the solver; nothing here can divide by zero.
    pub fn solve(drag: Circle, stick: Circle) -> Self {
        let x_offset = stick.center.x - drag.center.x;
        let y_offset = stick.center.y - drag.center.y;
        let line_k = if x_offset != 0.0 {
            Some(y_offset / x_offset)
        } else {
            None
        };

        Self {
            drag_points: intersection_points(drag.center, drag.radius, line_k),
            stick_points: intersection_points(stick.center, stick.radius, line_k),
            control_point: middle_point(drag.center, stick.center),
        }
    }

    /// The closed band outline: curve out along one flank, straight across
    /// the drag circle, and curve back along the other flank.
    pub fn band_outline(&self) -> Path {
        let mut path = Path::new();
        path.move_to(self.stick_points[0]);
        path.quad_to(self.control_point, self.drag_points[0]);
        path.line_to(self.drag_points[1]);
        path.quad_to(self.control_point, self.stick_points[1]);
        path.close();
        path
    }
}

/// Everything a renderer needs for one frame.
///
/// The presentation layer owns colors, fills and labels; this is geometry
/// only.
#[derive(Clone, Debug, PartialEq)]
pub struct GooScene {
    /// Reference ring at the farthest drag distance, drawn in every state.
    pub range_ring: Circle,
    /// The circle under the pointer; absent once dismissed.
    pub drag_circle: Option<Circle>,
    /// The anchored circle with its law-derived radius; only while the
    /// band is intact.
    pub stick_circle: Option<Circle>,
    /// Closed band outline; only while the band is intact.
    pub band: Option<Path>,
    /// The solved attachment geometry backing `band`, for hosts that want
    /// to draw the attachment points themselves.
    pub geometry: Option<GeometrySnapshot>,
}

impl GooScene {
    pub(crate) fn assemble(
        state: DragState,
        drag: Circle,
        stick: Circle,
        farthest_distance: f32,
    ) -> Self {
        let range_ring = Circle::new(stick.center, farthest_distance);
        match state {
            DragState::Disappeared => Self {
                range_ring,
                drag_circle: None,
                stick_circle: None,
                band: None,
                geometry: None,
            },
            DragState::OutOfRange => Self {
                range_ring,
                drag_circle: Some(drag),
                stick_circle: None,
                band: None,
                geometry: None,
            },
            DragState::Normal => {
                let geometry = GeometrySnapshot::solve(drag, stick);
                Self {
                    range_ring,
                    drag_circle: Some(drag),
                    stick_circle: Some(stick),
                    band: Some(geometry.band_outline()),
                    geometry: Some(geometry),
                }
            }
        }
    }
}
