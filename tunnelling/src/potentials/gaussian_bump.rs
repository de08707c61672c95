use super::potential::{Potential, SubPotential};

/// Gaussian bump `strength * exp(-((x - center) / width)^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBump {
    strength: f64,
    center: f64,
    width: f64,
}

impl GaussianBump {
    /// Creates new Gaussian bump with given strength, center position and width
    pub fn new(strength: f64, center: f64, width: f64) -> Self {
        Self {
            strength,
            center,
            width,
        }
    }
}

impl Potential for GaussianBump {
    type Space = f64;

    fn value_inplace(&self, r: f64, value: &mut Self::Space) {
        *value = self.strength * (-((r - self.center) / self.width).powi(2)).exp()
    }
}

impl SubPotential for GaussianBump {
    fn value_add(&self, r: f64, value: &mut Self::Space) {
        *value += self.strength * (-((r - self.center) / self.width).powi(2)).exp()
    }
}
