//! Joint angle calculation using atan2 bearings
//!
//! Calculates the angle at a vertex joint (knee, elbow, hip) from the
//! bearings of the two adjoining limb segments.

use nalgebra::Point2;

/// Calculate the joint angle at `b` in degrees
///
/// Uses the difference of two bearings: atan2(c - b) - atan2(a - b).
/// Reflex readings are folded back so the result stays within 0-180:
/// - 180° = limb fully straight
/// - 90° = limb bent at a right angle
///
/// Returns 0.0 when any point is missing. Callers treat 0.0 as
/// "no reliable reading", never as a fully bent joint.
pub fn calculate_angle(
    a: Option<Point2<f32>>,
    b: Option<Point2<f32>>,
    c: Option<Point2<f32>>,
) -> f32 {
    let (a, b, c) = match (a, b, c) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return 0.0,
    };

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle
}

/// Planar distance between two landmarks (normalized screen units)
pub fn distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}
