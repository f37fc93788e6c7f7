//! Coordinate helpers shared by both pattern engines.
//!
//! Dot and cell layouts are generated in a flat coordinate system first; the
//! pulley engine then maps circumferential offsets onto rotation angles.
//! Both helpers are pure functions of their arguments.

use csgrs::float_types::Real;

/// Ordered positions for `count` features spaced `pitch` apart, symmetric
/// about `center`.
///
/// Position `i` is `center + pitch * (i - (count - 1) / 2)`, so adjacent
/// values differ by exactly `pitch` and the mean of the sequence is
/// `center`. `count = 0` yields an empty vector, `count = 1` yields
/// `[center]`.
///
/// # Example
/// ```
/// use braillecad::spacing::evenly_space;
///
/// assert_eq!(evenly_space(3, 2.0, 0.0), vec![-2.0, 0.0, 2.0]);
/// assert_eq!(evenly_space(2, 2.5, 10.0), vec![8.75, 11.25]);
/// ```
pub fn evenly_space(count: usize, pitch: Real, center: Real) -> Vec<Real> {
    let half_span = (count as Real - 1.0) / 2.0;
    (0..count)
        .map(|i| center + pitch * (i as Real - half_span))
        .collect()
}

/// Convert a distance along a circle's circumference into degrees of
/// rotation about its axis.
///
/// Purely linear, `offset / circumference * 360`. The offset may be negative
/// (spacing sequences are centered on zero) and no wraparound is applied;
/// callers add the owning cell's base angle. Every dot's final angle is
/// computed from its own absolute offset, never by incremental rotation, so
/// floating error does not accumulate across cells.
pub fn circumference_to_degrees(offset: Real, circumference: Real) -> Real {
    offset / circumference * 360.0
}
