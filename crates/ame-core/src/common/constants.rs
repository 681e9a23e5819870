//! Physical constants used by the mass arithmetic.
//!
//! Masses in the table are stored in micro-u; mass excesses are in keV.

/// Conversion from atomic mass units to keV.
pub const MASS_EXCESS_SCALE_KEV: f64 = 931_494.061_f64;
pub const ELECTRON_MASS_MICRO_U: f64 = 548.579_909_46_f64;
pub const ELECTRON_MASS_UNCERTAINTY_MICRO_U: f64 = 0.000_000_22_f64;
pub const MICRO_U_PER_U: f64 = 1.0e6_f64;
pub const U_PER_MICRO_U: f64 = 1.0e-6_f64;

#[cfg(test)]
mod tests {
    use super::{
        ELECTRON_MASS_MICRO_U, ELECTRON_MASS_UNCERTAINTY_MICRO_U, MASS_EXCESS_SCALE_KEV,
        MICRO_U_PER_U, U_PER_MICRO_U,
    };

    #[test]
    fn unit_factors_are_reciprocal() {
        assert!((MICRO_U_PER_U * U_PER_MICRO_U - 1.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn electron_mass_is_consistent_with_scale() {
        // m_e c^2 = 510.999 keV
        let rest_energy = ELECTRON_MASS_MICRO_U * U_PER_MICRO_U * MASS_EXCESS_SCALE_KEV;
        assert!((rest_energy - 510.999).abs() < 1.0e-3);
        assert!(ELECTRON_MASS_UNCERTAINTY_MICRO_U > 0.0);
    }
}
