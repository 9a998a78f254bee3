//! # Structural Engineering Equations
//!
//! The closed-form formulas the solvers chain together, kept apart from the
//! solvers so each one can be checked against its reference by hand.
//!
//! ## Modules
//!
//! - [`cantilever`] - Pole stress and tip deflection
//! - [`foundation`] - Drilled pier overturning, bearing and embedment
//!
//! ## Sign Conventions
//!
//! - **Wind**: Positive in the direction of the applied pressure
//! - **Moment**: Positive overturning at grade
//! - **Deflection**: Positive in the direction of the wind

pub mod cantilever;
pub mod foundation;

pub use cantilever::{bending_stress_ksi, deflection_ratio, shear_stress_ksi, tip_deflection_in};
pub use foundation::{
    concrete_volume_cy,
    dead_load_resisting_moment_kipft,
    footing_area_sqft,
    footing_section_modulus_ft3,
    lateral_bearing_required_depth_ft,
    passive_resisting_moment_kipft,
    soil_bearing_pressure_psf,
};
