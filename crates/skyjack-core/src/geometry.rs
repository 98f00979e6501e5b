//! Vector helpers for steering and path blocking.
//!
//! Pure functions over stage coordinates; no simulation state.

use glam::DVec2;

use crate::types::Position;

/// Advance `from` by `step` along the unit vector toward `to`.
///
/// Snaps to `to` when the remaining distance is within one step, which
/// also covers the `from == to` case without dividing by zero.
pub fn steer_towards(from: Position, to: Position, step: f64) -> Position {
    let delta = to.vec2() - from.vec2();
    let dist = delta.length();
    if dist <= step {
        return to;
    }
    Position::from_vec2(from.vec2() + delta / dist * step)
}

/// Whether the segment `from`→`to` intersects the circle at `center`
/// with the given `radius`.
///
/// Solves the quadratic for `from + t * (to - from)` against the circle
/// and reports true iff a real root lies in `t ∈ [0, 1]`. Callers add
/// any clearance buffer to `radius` before calling.
pub fn segment_intersects_circle(
    from: Position,
    to: Position,
    center: Position,
    radius: f64,
) -> bool {
    let d = to.vec2() - from.vec2();
    let f = from.vec2() - center.vec2();

    let a = d.dot(d);
    if a == 0.0 {
        // Degenerate segment: a point on the circle edge or inside.
        return f.length() <= radius;
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);

    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Unit vector from `from` toward `to`, falling back to +x when the
/// points coincide.
pub fn direction_or_x(from: Position, to: Position) -> DVec2 {
    let delta = to.vec2() - from.vec2();
    let unit = delta.normalize_or_zero();
    if unit == DVec2::ZERO {
        DVec2::X
    } else {
        unit
    }
}
