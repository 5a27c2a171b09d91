mod forward_waypoint;
mod lookahead_end;
mod target_point;

pub use forward_waypoint::{ForwardWaypoint, ForwardWaypointResult};
pub use lookahead_end::LookaheadEnd;
pub use target_point::TargetPoint;
