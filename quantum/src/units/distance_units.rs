use super::{Au, Unit};

pub trait DistanceUnit: Unit {}

/// Struct for representing distance unit values
/// # Examples
/// ```
/// use quantum::units::{Au, distance_units::{Distance, Femtometer, Meter}};
/// let width = Distance(10.0, Femtometer);
/// let width_m = width.to(Meter);
/// assert!((width_m.value() - 1e-14).abs() < 1e-20);
/// assert!(width.to_au() == width.to(Au).value());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Distance<U: DistanceUnit>(pub f64, pub U);

impl<U: DistanceUnit> Distance<U> {
    pub fn to_au(&self) -> f64 {
        self.1.to_au(self.0)
    }

    pub fn to<V: DistanceUnit>(&self, unit: V) -> Distance<V> {
        Distance(self.1.to_au(self.0) / unit.to_au(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

impl DistanceUnit for Au {}

#[derive(Debug, Copy, Clone)]
pub struct Meter;

impl Unit for Meter {
    const TO_AU_MUL: f64 = 1.8897261246257702e10;
}
impl DistanceUnit for Meter {}

#[derive(Debug, Copy, Clone)]
pub struct Femtometer;

impl Unit for Femtometer {
    const TO_AU_MUL: f64 = 1.8897261246257702e-5;
}
impl DistanceUnit for Femtometer {}
