use thiserror::Error;

/// Top-level error type for the pursuit path tracker.
#[derive(Debug, Error, PartialEq)]
pub enum PursuitError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Target(#[from] TargetError),
}

/// Errors raised while building a path from raw points.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("path requires at least two points, got {count}")]
    TooFewPoints { count: usize },

    #[error("path must have at least two different points")]
    ZeroLength,

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },
}

/// Errors raised when no steering target can be produced.
#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error("agent has passed the end of the path")]
    PathPassed,

    #[error("no waypoint lies beyond lookahead distance {look_ahead}")]
    LookaheadBeyondEnd { look_ahead: f64 },
}

/// Convenience type alias for results using [`PursuitError`].
pub type Result<T> = std::result::Result<T, PursuitError>;
