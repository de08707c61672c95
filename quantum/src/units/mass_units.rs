use super::{Au, Unit};

pub trait MassUnit: Unit {}

/// Struct for representing mass unit values
/// # Examples
/// ```
/// use quantum::units::{Au, mass_units::{Dalton, Kilogram, Mass}};
/// let proton = Mass(1.67e-27, Kilogram);
/// let proton_dalton = proton.to(Dalton);
/// assert!(proton_dalton.value() > 1.0 && proton_dalton.value() < 1.01);
/// assert_eq!(proton.to_au(), proton.to(Au).value());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Mass<U: MassUnit>(pub f64, pub U);

impl<U: MassUnit> Mass<U> {
    pub fn to_au(&self) -> f64 {
        self.1.to_au(self.0)
    }

    pub fn to<V: MassUnit>(&self, unit: V) -> Mass<V> {
        Mass(self.1.to_au(self.0) / unit.to_au(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

impl MassUnit for Au {}

#[derive(Debug, Copy, Clone)]
pub struct Dalton;

impl Unit for Dalton {
    const TO_AU_MUL: f64 = 1822.88839;
}
impl MassUnit for Dalton {}

#[derive(Debug, Copy, Clone)]
pub struct Kilogram;

impl Unit for Kilogram {
    const TO_AU_MUL: f64 = 1.0977691057577e30;
}
impl MassUnit for Kilogram {}
