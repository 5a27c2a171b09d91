use crate::error::{PursuitError, Result};
use crate::math::Point2;
use crate::operations::creation::MakePath;
use crate::operations::query::TargetPoint;

use super::WayPoint;

/// An immutable polyline of waypoints, ready for lookahead queries.
///
/// Always holds at least two waypoints, no two consecutive ones equal.
/// Built through [`Path::build`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    way_points: Vec<WayPoint>,
    total_distance: f64,
}

impl Path {
    /// Builds a path from raw points, collapsing consecutive duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`](crate::error::PathError) if fewer than two
    /// points are given, fewer than two distinct points remain after
    /// deduplication, or a coordinate is not finite.
    pub fn build(points: &[Point2]) -> Result<Self> {
        MakePath::new(points.to_vec()).execute()
    }

    /// Wraps already validated waypoints.
    pub(crate) fn from_way_points(way_points: Vec<WayPoint>) -> Self {
        let total_distance = way_points
            .iter()
            .map(WayPoint::distance_from_previous)
            .sum();
        Self {
            way_points,
            total_distance,
        }
    }

    /// Returns the ordered waypoints.
    #[must_use]
    pub fn way_points(&self) -> &[WayPoint] {
        &self.way_points
    }

    /// Returns the number of waypoints (always at least two).
    #[must_use]
    pub fn way_point_count(&self) -> usize {
        self.way_points.len()
    }

    /// Returns the sum of all segment lengths.
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns the first waypoint.
    #[must_use]
    pub fn start(&self) -> &WayPoint {
        &self.way_points[0]
    }

    /// Returns the last waypoint.
    #[must_use]
    pub fn end(&self) -> &WayPoint {
        &self.way_points[self.way_points.len() - 1]
    }

    /// Returns the point an agent at `agent` should steer toward.
    ///
    /// The result is a fresh [`WayPoint`] whose delta and distances are
    /// measured from the forward waypoint; it is not part of the path.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError`](crate::error::TargetError) if the agent has
    /// passed the path or no waypoint lies beyond `look_ahead`.
    pub fn target_point(&self, agent: &Point2, look_ahead: f64) -> Result<WayPoint> {
        TargetPoint::new(*agent, look_ahead).execute(self)
    }
}

impl TryFrom<&[Point2]> for Path {
    type Error = PursuitError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        Self::build(points)
    }
}

impl TryFrom<Vec<Point2>> for Path {
    type Error = PursuitError;

    fn try_from(points: Vec<Point2>) -> Result<Self> {
        MakePath::new(points).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PathError;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2> {
        raw.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn build_two_points() {
        let path = Path::build(&pts(&[(0.0, 0.0), (3.0, 4.0)])).unwrap();
        assert_eq!(path.way_point_count(), 2);
        assert_relative_eq!(path.total_distance(), 5.0, epsilon = 1e-5);
    }

    #[test]
    fn start_and_end() {
        let path = Path::build(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 2.0)])).unwrap();
        assert_eq!(*path.start().point(), Point2::new(0.0, 0.0));
        assert_eq!(*path.end().point(), Point2::new(1.0, 2.0));
        assert_relative_eq!(path.end().distance_from_start(), 5.0_f64.sqrt());
    }

    #[test]
    fn try_from_slice_and_vec_agree() {
        let raw = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let a = Path::try_from(raw.as_slice()).unwrap();
        let b = Path::try_from(raw).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn try_from_rejects_single_point() {
        let err = Path::try_from(pts(&[(1.0, 1.0)])).unwrap_err();
        assert_eq!(err, PursuitError::Path(PathError::TooFewPoints { count: 1 }));
    }

    #[test]
    fn path_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Path>();
    }
}
