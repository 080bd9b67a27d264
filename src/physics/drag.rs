use super::environment::{Atmosphere, Environment};
use crate::models::spacecraft::{Satellite, SpacecraftProperties};
use nalgebra as na;

/// Drag on the default satellite in the default atmosphere.
pub fn atmospheric_drag(
    velocity: &na::Vector2<f64>,
    position: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    drag_force(&Satellite::default(), &Atmosphere::default(), position, velocity)
}

/// Quadratic drag opposing `velocity`.
///
/// Zero below the atmosphere's reference radius and for a body at rest.
pub fn drag_force<T: SpacecraftProperties>(
    spacecraft: &T,
    atmosphere: &Atmosphere,
    position: &na::Vector2<f64>,
    velocity: &na::Vector2<f64>,
) -> na::Vector2<f64> {
    let environment = Environment::new(position, atmosphere);
    let v_po: f64 = velocity.magnitude();
    if environment.is_below_surface() || v_po == 0.0 {
        return na::Vector2::zeros();
    }

    let force_magnitude: f64 = 0.5
        * environment.density
        * spacecraft.drag_coefficient()
        * spacecraft.reference_area()
        * v_po.powi(2);
    -(velocity / v_po) * force_magnitude
}
