use crate::error::Result;
use crate::geometry::{Path, WayPoint};
use crate::math::Point2;

/// Pure pursuit settings applied to every target query.
///
/// A larger lookahead gives smoother but looser tracking; a smaller one
/// follows the path more tightly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pursuit {
    /// Lookahead distance, in path units.
    pub look_ahead: f64,
}

impl Pursuit {
    /// Creates a new `Pursuit` with the given lookahead distance.
    #[must_use]
    pub fn new(look_ahead: f64) -> Self {
        Self { look_ahead }
    }

    /// Returns the point on `path` to steer toward from `agent`.
    ///
    /// # Errors
    ///
    /// Same as [`Path::target_point`].
    pub fn target(&self, path: &Path, agent: &Point2) -> Result<WayPoint> {
        path.target_point(agent, self.look_ahead)
    }
}
