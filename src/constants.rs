pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6371e3; // Radius of Earth (m)
pub const M_MOON: f64 = 7.348e22; // Mass of Moon (kg)
pub const R_MOON: f64 = 384400e3; // Earth-Moon distance (m)

// Exponential atmosphere
pub const ATM_DENSITY: f64 = 1.2; // Sea-level density (kg/m³)
pub const ATM_SCALE_HEIGHT: f64 = 8500.0; // Scale height (m)

// Satellite properties
pub const C_D: f64 = 2.2;
pub const CROSS_SECTIONAL_AREA: f64 = 4.0; // m²
pub const SATELLITE_MASS: f64 = 500.0; // kg
