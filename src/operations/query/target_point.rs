use tracing::{debug, trace};

use crate::error::{Result, TargetError};
use crate::geometry::{Path, WayPoint};
use crate::math::segment_2d::divide_segment;
use crate::math::Point2;

use super::{ForwardWaypoint, LookaheadEnd};

/// Computes the steering target for an agent following a path.
pub struct TargetPoint {
    agent: Point2,
    look_ahead: f64,
}

impl TargetPoint {
    /// Creates a new `TargetPoint` query.
    #[must_use]
    pub fn new(agent: Point2, look_ahead: f64) -> Self {
        Self { agent, look_ahead }
    }

    /// Executes the query.
    ///
    /// Finds the forward waypoint, then the lookahead end waypoint, and
    /// returns the midpoint of the segment between them. The returned
    /// waypoint's delta and distances are measured from the forward
    /// waypoint.
    ///
    /// # Errors
    ///
    /// - [`TargetError::PathPassed`] if the agent is beyond every waypoint.
    /// - [`TargetError::LookaheadBeyondEnd`] if no waypoint lies far enough
    ///   ahead. An infinite or NaN `look_ahead` always ends up here.
    pub fn execute(&self, path: &Path) -> Result<WayPoint> {
        let Some(forward) = ForwardWaypoint::new(self.agent).execute(path) else {
            debug!(agent = ?self.agent, "no target: path passed");
            return Err(TargetError::PathPassed.into());
        };
        let Some(end) =
            LookaheadEnd::new(forward.index, forward.projection, self.look_ahead).execute(path)
        else {
            debug!(
                agent = ?self.agent,
                look_ahead = self.look_ahead,
                "no target: lookahead beyond path end"
            );
            return Err(TargetError::LookaheadBeyondEnd {
                look_ahead: self.look_ahead,
            }
            .into());
        };

        let wps = path.way_points();
        let divisions = divide_segment(wps[forward.index].point(), wps[end].point(), 2);
        let (from, target) = (divisions[0], divisions[1]);
        let delta = target - from;
        let distance = delta.norm();
        trace!(?target, from = forward.index, to = end, "target point");
        Ok(WayPoint::new(target, delta, distance, distance))
    }
}
