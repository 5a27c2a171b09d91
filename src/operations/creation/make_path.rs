use tracing::debug;

use crate::error::{PathError, Result};
use crate::geometry::{Path, WayPoint};
use crate::math::Point2;

/// Creates a [`Path`] from a sequence of 2D points.
///
/// Points equal to their immediate predecessor in the input are dropped.
/// A point repeated later, non-adjacent, is kept.
pub struct MakePath {
    points: Vec<Point2>,
}

impl MakePath {
    /// Creates a new `MakePath` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the operation, returning the validated path.
    ///
    /// Each retained waypoint measures its delta and distance against the
    /// preceding *input* point, and its start distance against input point 0.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooFewPoints`] for fewer than two input points,
    /// [`PathError::NonFinitePoint`] for a NaN or infinite coordinate, and
    /// [`PathError::ZeroLength`] when all points collapse into one.
    pub fn execute(&self) -> Result<Path> {
        let points = &self.points;
        if points.len() < 2 {
            return Err(PathError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(PathError::NonFinitePoint { index }.into());
        }

        let first = points[0];
        let mut way_points = Vec::with_capacity(points.len());
        way_points.push(WayPoint::origin(first));

        for pair in points.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            if current == previous {
                continue;
            }
            way_points.push(WayPoint::new(
                current,
                current - previous,
                nalgebra::distance(&current, &previous),
                nalgebra::distance(&current, &first),
            ));
        }

        if way_points.len() == 1 {
            return Err(PathError::ZeroLength.into());
        }

        let path = Path::from_way_points(way_points);
        debug!(
            input = points.len(),
            retained = path.way_point_count(),
            total_distance = path.total_distance(),
            "built path"
        );
        Ok(path)
    }
}
