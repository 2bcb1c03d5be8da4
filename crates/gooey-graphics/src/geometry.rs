//! Geometric primitives: Point, Size, Circle and the tangent-point solver.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Geometric center of a rectangle of this size anchored at the origin.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies inside or on the circle.
    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Euclidean distance between two points.
pub fn distance_between(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Arithmetic mean of two points.
pub fn middle_point(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Linear interpolation from `a` to `b` by `fraction`.
///
/// The fraction is deliberately unclamped: the snap-back easing overshoots
/// past 1.0 and extrapolation must produce the point beyond `b`.
pub fn point_by_fraction(a: Point, b: Point, fraction: f32) -> Point {
    Point::new(a.x + fraction * (b.x - a.x), a.y + fraction * (b.y - a.y))
}

/// The two points at distance `radius` from `center` on the line
/// perpendicular to a line of slope `line_k` through `center`.
///
/// `line_k` is the slope of the line joining the two circle centers;
/// `None` means that line is vertical (the centers share an x coordinate),
/// in which case the perpendicular degenerates to horizontal and the
/// points are `(x - r, y)` then `(x + r, y)`.
///
/// The first returned point always takes the `+` offset along the
/// perpendicular. Both circles of a band must be solved with the same
/// slope so that point 0 of one pairs with point 0 of the other.
pub fn intersection_points(center: Point, radius: f32, line_k: Option<f32>) -> [Point; 2] {
    match line_k {
        None => [
            Point::new(center.x - radius, center.y),
            Point::new(center.x + radius, center.y),
        ],
        Some(k) => {
            let radian = (-1.0 / k).atan();
            let x_offset = radian.cos() * radius;
            let y_offset = radian.sin() * radius;
            [
                Point::new(center.x + x_offset, center.y + y_offset),
                Point::new(center.x - x_offset, center.y - y_offset),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_close(distance_between(a, b), 5.0);
        assert_close(distance_between(a, a), 0.0);
    }

    #[test]
    fn middle_point_is_arithmetic_mean() {
        let mid = middle_point(Point::new(0.0, 10.0), Point::new(4.0, -2.0));
        assert_eq!(mid, Point::new(2.0, 4.0));
    }

    #[test]
    fn point_by_fraction_endpoints_are_exact() {
        let a = Point::new(3.5, -1.25);
        let b = Point::new(-7.0, 42.0);
        assert_eq!(point_by_fraction(a, b, 0.0), a);
        assert_eq!(point_by_fraction(a, b, 1.0), b);
    }

    #[test]
    fn point_by_fraction_extrapolates() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(point_by_fraction(a, b, 1.5), Point::new(15.0, 0.0));
        assert_eq!(point_by_fraction(a, b, -0.5), Point::new(-5.0, 0.0));
    }

    #[test]
    fn intersection_points_lie_on_the_circle() {
        let center = Point::new(100.0, 100.0);
        let radius = 12.0;
        for k in [0.5f32, -0.5, 2.0, -2.0, 0.001, 1000.0] {
            let points = intersection_points(center, radius, Some(k));
            for point in points {
                assert_close(distance_between(center, point), radius);
            }
        }
    }

    #[test]
    fn intersection_points_are_perpendicular_to_the_line() {
        let center = Point::new(50.0, -20.0);
        for k in [0.75f32, -3.0, 0.1] {
            let [p0, p1] = intersection_points(center, 9.0, Some(k));
            // The chord p0-p1 must be perpendicular to a direction (1, k).
            let chord_x = p0.x - p1.x;
            let chord_y = p0.y - p1.y;
            let dot = chord_x + chord_y * k;
            assert!(dot.abs() < 1e-2, "chord not perpendicular for k={k}: {dot}");
        }
    }

    #[test]
    fn vertical_line_offsets_horizontally() {
        let [p0, p1] = intersection_points(Point::new(10.0, 20.0), 4.0, None);
        assert_eq!(p0, Point::new(6.0, 20.0));
        assert_eq!(p1, Point::new(14.0, 20.0));
    }

    #[test]
    fn horizontal_line_offsets_vertically() {
        let [p0, p1] = intersection_points(Point::new(0.0, 0.0), 5.0, Some(0.0));
        // Slope zero has a vertical perpendicular; no NaN, points above/below.
        assert_close(p0.x, 0.0);
        assert_close(p1.x, 0.0);
        assert_close((p0.y - p1.y).abs(), 10.0);
    }

    #[test]
    fn circle_contains_includes_the_boundary() {
        let circle = Circle::new(Point::new(0.0, 0.0), 2.0);
        assert!(circle.contains(Point::new(2.0, 0.0)));
        assert!(circle.contains(Point::new(1.0, 1.0)));
        assert!(!circle.contains(Point::new(1.5, 1.5)));
    }

    #[test]
    fn size_center_is_half_extent() {
        assert_eq!(Size::new(240.0, 200.0).center(), Point::new(120.0, 100.0));
    }
}
