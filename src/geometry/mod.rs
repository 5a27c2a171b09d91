pub mod path;
pub mod waypoint;

pub use path::Path;
pub use waypoint::WayPoint;
