use super::{Au, Unit};

pub trait EnergyUnit: Unit {}

/// Struct for representing energy unit values
/// # Examples
/// ```
/// use quantum::units::energy_units::{Energy, Joule, MeV};
/// let barrier = Energy(5e-14, Joule);
/// let barrier_mev = barrier.to(MeV);
/// assert!(barrier_mev.value() > 0.31 && barrier_mev.value() < 0.32);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Energy<U: EnergyUnit>(pub f64, pub U);

impl<U: EnergyUnit> Energy<U> {
    pub fn to_au(&self) -> f64 {
        self.1.to_au(self.0)
    }

    pub fn to<V: EnergyUnit>(&self, unit: V) -> Energy<V> {
        Energy(self.1.to_au(self.0) / unit.to_au(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

impl EnergyUnit for Au {}

#[derive(Debug, Copy, Clone)]
pub struct Joule;

impl Unit for Joule {
    const TO_AU_MUL: f64 = 2.2937122783963e17;
}
impl EnergyUnit for Joule {}

#[derive(Debug, Copy, Clone)]
pub struct MeV;

impl Unit for MeV {
    const TO_AU_MUL: f64 = 3.6749322175655e4;
}
impl EnergyUnit for MeV {}
