//! Curves prepared for drawing, one struct per page of the demonstration.
//!
//! Scenes normalize the raw model curves the way they are displayed and
//! write them as `.dat` tables and `.json` documents for external plotting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    barrier_model::{BarrierParameters, compute_composite_potential, compute_transmission},
    config::{FissionConfig, FusionConfig},
    controls::{SimulationParameters, SliderRange},
    error::TunnellingError,
    grid::{Curve, Grid},
    output::{OutputError, save_data, save_serialize},
    wave_packet::{LeakageParameters, compute_leakage_pair},
};

pub const FUSION_PLOT_FILE: &str = "fusion_te_plot";
pub const FISSION_VIEW_FILE: &str = "fission_toy_model";
pub const FISSION_FRAMES_FILE: &str = "fission_demo_frames";

/// Tunnelling probability versus particle energy.
#[derive(Debug, Clone, Serialize)]
pub struct FusionPlot {
    pub barrier: BarrierParameters,
    pub energies: Grid,
    /// Energies multiplied by the display scale
    pub scaled_energies: Curve,
    pub transmission: Curve,
}

impl FusionPlot {
    pub fn new(config: &FusionConfig) -> Result<Self, TunnellingError> {
        let barrier = config.barrier()?;
        let energies = config.energy_grid();
        let transmission = compute_transmission(&energies, &barrier)?;
        let scaled_energies = energies.evaluate(|energy| energy * config.energy_display_scale);

        Ok(Self {
            barrier,
            energies,
            scaled_energies,
            transmission,
        })
    }

    pub fn save(&self, dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
        let header = "scaled energy\ttunnelling probability";
        let data = [self.scaled_energies.values(), self.transmission.values()];

        Ok(vec![
            save_data(dir, FUSION_PLOT_FILE, header, &data)?,
            save_serialize(dir, FUSION_PLOT_FILE, self)?,
        ])
    }
}

/// Initial and later packet over the scaled double hump barrier.
#[derive(Debug, Clone, Serialize)]
pub struct FissionView {
    pub parameters: SimulationParameters,
    pub positions: Grid,
    pub initial: Curve,
    pub later: Curve,
    pub barrier: Curve,
    pub retained_fraction: Option<f64>,
}

impl FissionView {
    pub fn new(
        config: &FissionConfig,
        parameters: SimulationParameters,
    ) -> Result<Self, TunnellingError> {
        let positions = config.position_grid();
        let barrier = barrier_curve(config, &positions, &parameters)?;

        let leakage = leakage_parameters(config, parameters.steps)?;
        let pair = compute_leakage_pair(&positions, &leakage)?;
        let norm = 1.0 / display_peak(&pair.initial);

        Ok(Self {
            parameters,
            initial: pair.initial.scaled(norm),
            later: pair.later.scaled(norm),
            retained_fraction: pair.retained_fraction(),
            positions,
            barrier,
        })
    }

    pub fn save(&self, dir: &Path) -> Result<Vec<PathBuf>, OutputError> {
        let header = "position\tinitial\tlater\tbarrier";
        let data = [
            self.positions.points(),
            self.initial.values(),
            self.later.values(),
            self.barrier.values(),
        ];

        Ok(vec![
            save_data(dir, FISSION_VIEW_FILE, header, &data)?,
            save_serialize(dir, FISSION_VIEW_FILE, self)?,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationFrame {
    pub steps: u32,
    pub later: Curve,
}

/// Later curves for a sequence of step counts, rendered into an animation elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct FissionFrames {
    pub parameters: SimulationParameters,
    pub positions: Grid,
    pub initial: Curve,
    pub barrier: Curve,
    pub frames: Vec<AnimationFrame>,
}

impl FissionFrames {
    pub fn new(
        config: &FissionConfig,
        parameters: SimulationParameters,
        steps: &[u32],
    ) -> Result<Self, TunnellingError> {
        let positions = config.position_grid();
        let barrier = barrier_curve(config, &positions, &parameters)?;

        let leakage = leakage_parameters(config, parameters.steps)?;
        let initial = compute_leakage_pair(&positions, &leakage)?.initial;
        let norm = 1.0 / display_peak(&initial);

        let frames = steps
            .iter()
            .map(|&steps| -> Result<AnimationFrame, TunnellingError> {
                let pair = compute_leakage_pair(&positions, &leakage.with_decay_steps(steps)?)?;

                Ok(AnimationFrame {
                    steps,
                    later: pair.later.scaled(norm),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("computed {} animation frames", frames.len());

        Ok(Self {
            parameters,
            initial: initial.scaled(norm),
            positions,
            barrier,
            frames,
        })
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf, OutputError> {
        save_serialize(dir, FISSION_FRAMES_FILE, self)
    }
}

/// Step counts from the slider minimum to its maximum, one per slider step.
pub fn frame_steps(range: &SliderRange) -> Vec<u32> {
    let step = range
        .step
        .filter(|step| *step > 0.0)
        .unwrap_or(range.max - range.min);

    if step <= 0.0 {
        return vec![range.min.round() as u32];
    }

    let count = ((range.max - range.min) / step + 1e-9).floor() as usize + 1;

    (0..count)
        .map(|i| (range.min + i as f64 * step).round() as u32)
        .collect()
}

/// Barrier drawn relative to the normalized packet, `V / max(V) * scale`.
/// A profile without a positive peak is drawn unscaled.
pub fn scale_barrier(potential: &Curve, display_scale: f64) -> Curve {
    match potential.max() {
        Some(max) if max > 0.0 => potential.scaled(display_scale / max),
        _ => {
            log::warn!("barrier profile has no positive peak, drawing it unscaled");
            potential.clone()
        }
    }
}

fn barrier_curve(
    config: &FissionConfig,
    positions: &Grid,
    parameters: &SimulationParameters,
) -> Result<Curve, TunnellingError> {
    let potential = compute_composite_potential(
        positions,
        parameters.barrier_height,
        parameters.barrier_width,
    )?;

    Ok(scale_barrier(&potential, config.barrier_display_scale))
}

fn leakage_parameters(
    config: &FissionConfig,
    steps: u32,
) -> Result<LeakageParameters, TunnellingError> {
    LeakageParameters::new(
        config.packet_width,
        config.packet_offset,
        steps,
        config.reference_steps,
    )
}

fn display_peak(curve: &Curve) -> f64 {
    curve.max().filter(|max| *max > 0.0).unwrap_or(1.0)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::controls::FissionControls;

    use super::*;

    #[test]
    fn fusion_plot() {
        let plot = FusionPlot::new(&FusionConfig::default()).unwrap();

        assert_eq!(plot.transmission.len(), 400);
        assert_eq!(plot.scaled_energies.len(), 400);
        assert_relative_eq!(plot.scaled_energies[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(plot.scaled_energies[399], 8.0, max_relative = 1e-12);
        assert_eq!(plot.transmission[399], 1.0);
        assert!(plot.transmission[0] < 0.1);
    }

    #[test]
    fn fission_view() {
        let config = FissionConfig::default();
        let parameters = FissionControls::default().defaults();
        let view = FissionView::new(&config, parameters).unwrap();

        assert_eq!(view.positions.len(), 800);
        assert_relative_eq!(view.initial.max().unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(view.barrier.max().unwrap(), 1.2, max_relative = 1e-12);
        assert!(view.later.iter().zip(view.initial.iter()).all(|(l, i)| l <= i));

        let fraction = view.retained_fraction.unwrap();
        assert!(fraction > 0.0 && fraction < 1.0);
    }

    #[test]
    fn invalid_view() {
        let parameters = SimulationParameters {
            barrier_height: 6.0,
            barrier_width: 0.0,
            steps: 400,
        };
        assert!(FissionView::new(&FissionConfig::default(), parameters).is_err());
    }

    #[test]
    fn unscaled_barrier() {
        let potential = Curve::from(vec![-3.0, -1.0]);
        assert_eq!(scale_barrier(&potential, 1.2), potential);

        let scaled = scale_barrier(&Curve::from(vec![-3.0, 2.0]), 1.2);
        assert_relative_eq!(scaled[0], -1.8, max_relative = 1e-12);
        assert_relative_eq!(scaled[1], 1.2, max_relative = 1e-12);
    }

    #[test]
    fn frames_match_view() {
        let config = FissionConfig::default();
        let controls = FissionControls::default();
        let parameters = controls.defaults();

        let steps = frame_steps(&controls.steps);
        assert_eq!(steps, vec![100, 200, 300, 400, 500, 600, 700, 800]);

        let frames = FissionFrames::new(&config, parameters, &steps).unwrap();
        let view = FissionView::new(&config, parameters).unwrap();

        assert_eq!(frames.frames.len(), 8);
        assert_eq!(frames.initial, view.initial);
        assert_eq!(frames.barrier, view.barrier);
        assert_eq!(frames.frames[3].steps, 400);
        assert_eq!(frames.frames[3].later, view.later);

        assert!(FissionFrames::new(&config, parameters, &[0]).is_err());
    }

    #[test]
    fn frame_steps_without_step() {
        assert_eq!(frame_steps(&SliderRange::new(100.0, 800.0, 400.0)), vec![100, 800]);
        assert_eq!(frame_steps(&SliderRange::new(300.0, 300.0, 300.0)), vec![300]);
    }

    #[test]
    fn save_scenes() {
        let dir = std::env::temp_dir().join(format!("tunnelling-scenes-{}", std::process::id()));

        let plot = FusionPlot::new(&FusionConfig::default()).unwrap();
        let paths = plot.save(&dir).unwrap();
        assert_eq!(paths, vec![dir.join("fusion_te_plot.dat"), dir.join("fusion_te_plot.json")]);

        let table = std::fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(table.lines().count(), 401);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths[1]).unwrap()).unwrap();
        assert_eq!(json["transmission"].as_array().unwrap().len(), 400);
        assert_eq!(json["barrier"]["barrier_height"], 5e-14);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
