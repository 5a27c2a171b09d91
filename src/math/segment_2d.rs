use super::{Point2, Vector2};

/// Divides the segment `a → b` into `parts` equal pieces.
///
/// Returns `parts + 1` points, starting at `a` and ending at `b`.
/// `parts = 0` is treated as a single piece.
#[must_use]
pub fn divide_segment(a: &Point2, b: &Point2, parts: u32) -> Vec<Point2> {
    let parts = parts.max(1);
    let step = (b - a) / f64::from(parts);
    (0..=parts)
        .map(|i| {
            if i == parts {
                // Land exactly on `b` instead of accumulating rounding error.
                *b
            } else {
                a + step * f64::from(i)
            }
        })
        .collect()
}

/// Signed length of the projection of `v` onto `dir`.
///
/// Returns `0.0` when `dir` is the zero vector.
#[must_use]
pub fn scalar_projection(v: &Vector2, dir: &Vector2) -> f64 {
    let len = dir.norm();
    if len == 0.0 {
        return 0.0;
    }
    v.dot(dir) / len
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn divide_into_halves_gives_midpoint() {
        let pts = divide_segment(&Point2::new(0.0, 0.0), &Point2::new(4.0, 2.0), 2);
        assert_eq!(pts.len(), 3);
        assert!((pts[1].x - 2.0).abs() < TOL);
        assert!((pts[1].y - 1.0).abs() < TOL);
        assert_eq!(pts[2], Point2::new(4.0, 2.0));
    }

    #[test]
    fn divide_endpoints_are_exact() {
        let a = Point2::new(0.1, 0.2);
        let b = Point2::new(0.7, -0.3);
        let pts = divide_segment(&a, &b, 3);
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], a);
        assert_eq!(pts[3], b);
    }

    #[test]
    fn divide_zero_parts_is_one_piece() {
        let pts = divide_segment(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 0);
        assert_eq!(pts, vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
    }

    #[test]
    fn projection_along_direction() {
        // (3, 4) onto the x axis, direction not normalized.
        let p = scalar_projection(&Vector2::new(3.0, 4.0), &Vector2::new(2.0, 0.0));
        assert!((p - 3.0).abs() < TOL, "p={p}");
    }

    #[test]
    fn projection_behind_is_negative() {
        let p = scalar_projection(&Vector2::new(-1.0, 5.0), &Vector2::new(0.0, -1.0));
        assert!((p + 5.0).abs() < TOL, "p={p}");
    }

    #[test]
    fn projection_onto_tiny_direction() {
        // Short but non-zero headings still count.
        let p = scalar_projection(&Vector2::new(1.0, 0.0), &Vector2::new(1e-11, 0.0));
        assert!((p - 1.0).abs() < TOL, "p={p}");
    }

    #[test]
    fn projection_onto_zero_direction() {
        let p = scalar_projection(&Vector2::new(1.0, 1.0), &Vector2::zeros());
        assert!(p.abs() < TOL);
    }
}
