use quantum::units::{
    distance_units::{Distance, DistanceUnit},
    energy_units::{Energy, EnergyUnit},
    mass_units::{Mass, MassUnit},
};
use serde::Serialize;

use crate::{
    error::{TunnellingError, ensure_finite, ensure_positive},
    grid::{Curve, Grid},
    potentials::{potential::SimplePotential, potential_factory::create_double_hump},
};

/// Rectangular barrier crossed by a particle of given mass.
///
/// All quantities must be given in one consistent unit system,
/// e.g. SI with `hbar = 1.054e-34` or atomic units with `hbar = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarrierParameters {
    barrier_height: f64,
    barrier_width: f64,
    particle_mass: f64,
    hbar: f64,
}

impl BarrierParameters {
    pub fn new(
        barrier_height: f64,
        barrier_width: f64,
        particle_mass: f64,
        hbar: f64,
    ) -> Result<Self, TunnellingError> {
        Ok(Self {
            barrier_height: ensure_finite("barrier_height", barrier_height)?,
            barrier_width: ensure_positive("barrier_width", barrier_width)?,
            particle_mass: ensure_positive("particle_mass", particle_mass)?,
            hbar: ensure_positive("hbar", hbar)?,
        })
    }

    /// Creates barrier parameters in atomic units, where `hbar = 1`.
    pub fn from_units(
        barrier_height: Energy<impl EnergyUnit>,
        barrier_width: Distance<impl DistanceUnit>,
        particle_mass: Mass<impl MassUnit>,
    ) -> Result<Self, TunnellingError> {
        Self::new(
            barrier_height.to_au(),
            barrier_width.to_au(),
            particle_mass.to_au(),
            1.0,
        )
    }

    /// WKB tunnelling probability `exp(-2 a sqrt(2 m (V0 - E)) / hbar)`.
    ///
    /// Energies at or above the barrier are floored to `V0 - E = 0`
    /// and give a transmission of exactly 1. When the exponential underflows
    /// for thick or high barriers the result is `f64::MIN_POSITIVE`, never 0.
    pub fn transmission(&self, energy: f64) -> f64 {
        let delta = (self.barrier_height - energy).max(0.0);
        let exponent =
            -2.0 * self.barrier_width * (2.0 * self.particle_mass * delta).sqrt() / self.hbar;

        exponent.exp().max(f64::MIN_POSITIVE)
    }
}

/// Tunnelling probability for every energy of the grid.
pub fn compute_transmission(
    energies: &Grid,
    barrier: &BarrierParameters,
) -> Result<Curve, TunnellingError> {
    energies.validate()?;

    let transmission = energies.evaluate(|energy| barrier.transmission(energy));
    log::debug!(
        "computed transmission over {} energies for barrier {:?}",
        energies.len(),
        barrier
    );

    Ok(transmission)
}

/// Double hump barrier profile drawn next to the wave packet curves.
pub fn compute_composite_potential(
    positions: &Grid,
    peak_height: f64,
    width: f64,
) -> Result<Curve, TunnellingError> {
    ensure_finite("peak_height", peak_height)?;
    ensure_positive("width", width)?;
    positions.validate()?;

    let potential = create_double_hump(peak_height, width);

    Ok(positions.evaluate(|x| potential.value(x)))
}
