use super::potential::{Potential, SubPotential};

/// Sum of sub potentials of the same type.
#[derive(Debug, Clone)]
pub struct Composite<P: SubPotential> {
    potentials: Vec<P>,
}

impl<P: SubPotential> Composite<P> {
    pub fn from_vec(potentials: Vec<P>) -> Self {
        Self { potentials }
    }
}

impl<P: SubPotential<Space = f64>> Potential for Composite<P> {
    type Space = f64;

    fn value_inplace(&self, r: f64, value: &mut Self::Space) {
        *value = 0.;
        for potential in &self.potentials {
            potential.value_add(r, value)
        }
    }
}

impl<P: SubPotential<Space = f64>> SubPotential for Composite<P> {
    fn value_add(&self, r: f64, value: &mut Self::Space) {
        for potential in &self.potentials {
            potential.value_add(r, value)
        }
    }
}
