//! Toy wave packet "leakage" picture.
//!
//! Nothing here solves the Schrödinger equation. The initial curve is a fixed
//! Gaussian and the later curve is the same Gaussian damped by an ad hoc factor
//! `exp(-(x / 25)^2 / (decay_steps / reference_steps))`. The only property of
//! the factor is that more steps give a slower falloff, i.e. less apparent
//! leakage in the drawing. It is a teaching proxy, do not replace it with a
//! physical propagator.

use serde::Serialize;

use crate::{
    error::{TunnellingError, ensure_finite, ensure_nonzero_steps, ensure_positive},
    grid::{Curve, Grid},
    potentials::{gaussian_bump::GaussianBump, potential::SimplePotential},
};

/// Length scale of the decay factor.
pub const LEAKAGE_SCALE: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeakageParameters {
    initial_width: f64,
    offset: f64,
    decay_steps: u32,
    reference_steps: u32,
}

impl LeakageParameters {
    pub fn new(
        initial_width: f64,
        offset: f64,
        decay_steps: u32,
        reference_steps: u32,
    ) -> Result<Self, TunnellingError> {
        Ok(Self {
            initial_width: ensure_positive("initial_width", initial_width)?,
            offset: ensure_finite("offset", offset)?,
            decay_steps: ensure_nonzero_steps("decay_steps", decay_steps)?,
            reference_steps: ensure_nonzero_steps("reference_steps", reference_steps)?,
        })
    }

    pub fn with_decay_steps(&self, decay_steps: u32) -> Result<Self, TunnellingError> {
        Self::new(
            self.initial_width,
            self.offset,
            decay_steps,
            self.reference_steps,
        )
    }

    fn packet(&self) -> GaussianBump {
        GaussianBump::new(1.0, self.offset, self.initial_width)
    }

    fn decay_factor(&self, x: f64) -> f64 {
        let ratio = self.decay_steps as f64 / self.reference_steps as f64;

        (-(x / LEAKAGE_SCALE).powi(2) / ratio).exp()
    }
}

/// Raw, unnormalized initial and later curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeakagePair {
    pub initial: Curve,
    pub later: Curve,
}

impl LeakagePair {
    /// Ratio of the area under the later curve to the area under the initial one.
    pub fn retained_fraction(&self) -> Option<f64> {
        let initial: f64 = self.initial.iter().sum();
        let later: f64 = self.later.iter().sum();

        (initial > 0.0).then(|| later / initial)
    }
}

pub fn compute_leakage_pair(
    positions: &Grid,
    parameters: &LeakageParameters,
) -> Result<LeakagePair, TunnellingError> {
    positions.validate()?;

    let packet = parameters.packet();
    let initial = positions.evaluate(|x| packet.value(x));
    let later = Curve::from(
        positions
            .iter()
            .zip(initial.iter())
            .map(|(&x, &psi)| psi * parameters.decay_factor(x))
            .collect::<Vec<f64>>(),
    );
    log::debug!(
        "computed leakage pair over {} positions for {:?}",
        positions.len(),
        parameters
    );

    Ok(LeakagePair { initial, later })
}
