use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Slider inputs of the fission page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    pub barrier_height: f64,
    pub barrier_width: f64,
    pub steps: u32,
}

/// Allowed range of a single slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    #[serde(default)]
    pub step: Option<f64>,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self {
            min,
            max,
            default,
            step: None,
        }
    }

    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);

        self
    }

    /// Checks that the bounds are finite and ordered, the step is positive
    /// and the default lies inside the range.
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            name: name.to_string(),
            reason,
        };

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid(format!("bounds [{}, {}] must be finite", self.min, self.max)));
        }
        if self.min > self.max {
            return Err(invalid(format!("min {} is above max {}", self.min, self.max)));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(invalid(format!(
                "default {} is outside of [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        if let Some(step) = self.step {
            if !(step.is_finite() && step > 0.0) {
                return Err(invalid(format!("step {} must be positive", step)));
            }
        }

        Ok(())
    }

    /// Clamps `value` into the range and snaps it to the step,
    /// a missing value takes the default.
    /// Unvalidated bounds never panic, an inverted range resolves to `max`.
    pub fn resolve(&self, name: &str, value: Option<f64>) -> f64 {
        let Some(value) = value else {
            return self.default;
        };

        if !value.is_finite() {
            log::warn!("{} = {} is not a number, using default {}", name, value, self.default);
            return self.default;
        }

        let mut resolved = value.max(self.min).min(self.max);
        if let Some(step) = self.step.filter(|step| *step > 0.0) {
            resolved = (self.min + ((resolved - self.min) / step).round() * step).min(self.max);
        }

        if resolved != value {
            log::warn!(
                "{} = {} outside of slider [{}, {}], using {}",
                name,
                value,
                self.min,
                self.max,
                resolved
            );
        }

        resolved
    }
}

/// Slider ranges of the fission page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FissionControls {
    pub barrier_height: SliderRange,
    pub barrier_width: SliderRange,
    pub steps: SliderRange,
}

impl Default for FissionControls {
    fn default() -> Self {
        Self {
            barrier_height: SliderRange::new(2.0, 10.0, 6.0),
            barrier_width: SliderRange::new(5.0, 25.0, 12.0),
            steps: SliderRange::new(100.0, 800.0, 400.0).with_step(100.0),
        }
    }
}

impl FissionControls {
    pub fn resolve(
        &self,
        barrier_height: Option<f64>,
        barrier_width: Option<f64>,
        steps: Option<f64>,
    ) -> SimulationParameters {
        let steps = self.steps.resolve("steps", steps).round().max(1.0);

        SimulationParameters {
            barrier_height: self.barrier_height.resolve("barrier_height", barrier_height),
            barrier_width: self.barrier_width.resolve("barrier_width", barrier_width),
            steps: steps as u32,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.barrier_height.validate("controls.barrier_height")?;
        self.barrier_width.validate("controls.barrier_width")?;
        self.steps.validate("controls.steps")
    }

    pub fn defaults(&self) -> SimulationParameters {
        self.resolve(None, None, None)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let parameters = FissionControls::default().defaults();

        assert_eq!(
            parameters,
            SimulationParameters {
                barrier_height: 6.0,
                barrier_width: 12.0,
                steps: 400
            }
        );
    }

    #[test]
    fn clamp_and_snap() {
        let controls = FissionControls::default();
        let parameters = controls.resolve(Some(12.0), Some(1.0), Some(430.0));

        assert_eq!(parameters.barrier_height, 10.0);
        assert_eq!(parameters.barrier_width, 5.0);
        assert_eq!(parameters.steps, 400);

        assert_eq!(controls.resolve(None, None, Some(5000.0)).steps, 800);
        assert_eq!(controls.resolve(None, None, Some(160.0)).steps, 200);
        assert_eq!(controls.resolve(Some(7.25), None, None).barrier_height, 7.25);
        assert_eq!(controls.resolve(Some(f64::NAN), None, None).barrier_height, 6.0);
    }

    #[test]
    fn validation() {
        assert!(FissionControls::default().validate().is_ok());
        assert!(SliderRange::new(300.0, 300.0, 300.0).validate("steps").is_ok());

        let invalid = [
            SliderRange::new(10.0, 2.0, 6.0),
            SliderRange::new(f64::NAN, 10.0, 6.0),
            SliderRange::new(2.0, f64::INFINITY, 6.0),
            SliderRange::new(2.0, 10.0, 12.0),
            SliderRange::new(100.0, 800.0, 400.0).with_step(0.0),
            SliderRange::new(100.0, 800.0, 400.0).with_step(-100.0),
        ];
        for range in invalid {
            assert!(
                matches!(range.validate("slider"), Err(ConfigError::Invalid { .. })),
                "{range:?}"
            );
        }
    }

    #[test]
    fn inverted_range_resolves() {
        let inverted = SliderRange::new(10.0, 2.0, 6.0);
        assert_eq!(inverted.resolve("barrier_height", Some(5.0)), 2.0);
        assert_eq!(inverted.resolve("barrier_height", None), 6.0);

        let unbounded = SliderRange::new(f64::NAN, f64::NAN, 6.0);
        assert_eq!(unbounded.resolve("barrier_height", Some(5.0)), 5.0);
    }
}
