use tracing::trace;

use crate::geometry::Path;
use crate::math::Point2;

/// Result of a forward waypoint query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardWaypointResult {
    /// Index of the waypoint within [`Path::way_points`].
    pub index: usize,
    /// How far ahead of the agent the waypoint lies along the path heading.
    pub projection: f64,
}

/// Finds the first waypoint the agent has not yet passed.
pub struct ForwardWaypoint {
    agent: Point2,
}

impl ForwardWaypoint {
    /// Creates a new `ForwardWaypoint` query.
    #[must_use]
    pub fn new(agent: Point2) -> Self {
        Self { agent }
    }

    /// Executes the query.
    ///
    /// Scans from the start of the path and returns the first waypoint
    /// whose [`component_along_path`](crate::geometry::WayPoint::component_along_path)
    /// is strictly positive, or `None` if the agent is beyond every waypoint.
    #[must_use]
    pub fn execute(&self, path: &Path) -> Option<ForwardWaypointResult> {
        let found = path
            .way_points()
            .iter()
            .enumerate()
            .map(|(index, wp)| ForwardWaypointResult {
                index,
                projection: wp.component_along_path(&self.agent),
            })
            .find(|r| r.projection > 0.0);
        trace!(agent = ?self.agent, ?found, "forward waypoint");
        found
    }
}
