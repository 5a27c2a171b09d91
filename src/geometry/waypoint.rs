use crate::math::segment_2d::scalar_projection;
use crate::math::{Point2, Vector2};

/// A retained path vertex with distances precomputed against its
/// predecessor and the path origin.
///
/// Also used as the shape of a steering target returned by
/// [`Path::target_point`](super::Path::target_point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WayPoint {
    point: Point2,
    delta_from_previous: Vector2,
    distance_from_previous: f64,
    distance_from_start: f64,
}

impl WayPoint {
    /// Creates a new waypoint.
    #[must_use]
    pub fn new(
        point: Point2,
        delta_from_previous: Vector2,
        distance_from_previous: f64,
        distance_from_start: f64,
    ) -> Self {
        Self {
            point,
            delta_from_previous,
            distance_from_previous,
            distance_from_start,
        }
    }

    /// Creates the first waypoint of a path: no predecessor, all distances zero.
    #[must_use]
    pub fn origin(point: Point2) -> Self {
        Self::new(point, Vector2::zeros(), 0.0, 0.0)
    }

    /// Returns the vertex location.
    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    /// Returns `point - previous point`, or zero for the first waypoint.
    #[must_use]
    pub fn delta_from_previous(&self) -> &Vector2 {
        &self.delta_from_previous
    }

    /// Returns the distance to the previous point, or zero for the first waypoint.
    #[must_use]
    pub fn distance_from_previous(&self) -> f64 {
        self.distance_from_previous
    }

    /// Returns the straight-line distance from the path's first point.
    ///
    /// This is not arc length along the path.
    #[must_use]
    pub fn distance_from_start(&self) -> f64 {
        self.distance_from_start
    }

    /// How far ahead of `agent` this waypoint lies along the path's local
    /// heading (the direction of `delta_from_previous`).
    ///
    /// Positive means the agent has not reached the waypoint yet. A waypoint
    /// without a heading (the first one) always yields `0.0`.
    #[must_use]
    pub fn component_along_path(&self, agent: &Point2) -> f64 {
        scalar_projection(&(self.point - agent), &self.delta_from_previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn heading_east() -> WayPoint {
        WayPoint::new(Point2::new(10.0, 0.0), Vector2::new(10.0, 0.0), 10.0, 10.0)
    }

    #[test]
    fn origin_has_zero_distances() {
        let wp = WayPoint::origin(Point2::new(2.0, 3.0));
        assert_eq!(*wp.delta_from_previous(), Vector2::zeros());
        assert!(wp.distance_from_previous().abs() < TOL);
        assert!(wp.distance_from_start().abs() < TOL);
    }

    #[test]
    fn component_ahead_of_agent() {
        let c = heading_east().component_along_path(&Point2::new(4.0, 7.0));
        assert!((c - 6.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn component_behind_agent() {
        let c = heading_east().component_along_path(&Point2::new(12.0, -1.0));
        assert!((c + 2.0).abs() < TOL, "c={c}");
    }

    #[test]
    fn component_of_origin_is_zero() {
        let wp = WayPoint::origin(Point2::new(5.0, 5.0));
        assert!(wp.component_along_path(&Point2::new(0.0, 0.0)).abs() < TOL);
    }
}
