pub mod distance_units;
pub mod energy_units;
pub mod mass_units;

/// Reduced Planck constant in J s.
pub const HBAR_SI: f64 = 1.054571817e-34;

/// Trait for units that can be converted to atomic units.
pub trait Unit: Copy + Clone {
    const TO_AU_MUL: f64;

    fn to_au(&self, value: f64) -> f64 {
        value * Self::TO_AU_MUL
    }
}

/// Hartree atomic units, in which the reduced Planck constant is 1.
#[derive(Debug, Copy, Clone)]
pub struct Au;

impl Unit for Au {
    const TO_AU_MUL: f64 = 1.0;
}
