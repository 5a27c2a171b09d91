use tracing::trace;

use crate::geometry::Path;

/// Finds the waypoint that closes the lookahead segment.
///
/// Walks forward from the waypoint at `start`, adding each segment length
/// to `initial_offset`. Every waypoint at which the running sum exceeds
/// `look_ahead` replaces the previous candidate, so the result is the
/// *last* such waypoint, not the first.
pub struct LookaheadEnd {
    start: usize,
    initial_offset: f64,
    look_ahead: f64,
}

impl LookaheadEnd {
    /// Creates a new `LookaheadEnd` query.
    #[must_use]
    pub fn new(start: usize, initial_offset: f64, look_ahead: f64) -> Self {
        Self {
            start,
            initial_offset,
            look_ahead,
        }
    }

    /// Executes the query, returning the index of the end waypoint.
    ///
    /// Returns `None` if `start` is the last waypoint (or out of range) or
    /// the running sum never exceeds the lookahead distance.
    #[must_use]
    pub fn execute(&self, path: &Path) -> Option<usize> {
        let mut distance = self.initial_offset;
        let mut end = None;
        for (index, wp) in path
            .way_points()
            .iter()
            .enumerate()
            .skip(self.start.saturating_add(1))
        {
            distance += wp.distance_from_previous();
            if distance > self.look_ahead {
                end = Some(index);
            }
        }
        trace!(
            start = self.start,
            look_ahead = self.look_ahead,
            reached = distance,
            ?end,
            "lookahead end"
        );
        end
    }
}
