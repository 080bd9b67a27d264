use crate::constants::G;
use nalgebra as na;

/// Newtonian attraction on the body at `pos1` toward the body at `pos2`.
///
/// Coincident positions yield the zero vector instead of an infinite force.
pub fn gravitational_force(
    mass1: f64,
    mass2: f64,
    pos1: &na::Vector2<f64>,
    pos2: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    attraction(G, mass1, mass2, pos1, pos2)
}

/// Same as [`gravitational_force`] with an explicit gravitational constant.
pub fn attraction(
    gravitational_constant: f64,
    mass1: f64,
    mass2: f64,
    pos1: &na::Vector2<f64>,
    pos2: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    let separation = pos2 - pos1;
    let r: f64 = separation.magnitude();
    if r == 0.0 {
        return na::Vector2::zeros();
    }
    let force_magnitude: f64 = gravitational_constant * mass1 * mass2 / (r * r);
    (separation / r) * force_magnitude
}
