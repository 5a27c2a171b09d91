pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pursuit;

pub use error::{PursuitError, Result};
pub use geometry::{Path, WayPoint};
pub use math::Point2;
pub use pursuit::Pursuit;
