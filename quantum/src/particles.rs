use crate::units::{
    Au,
    mass_units::{Dalton, Mass, MassUnit},
};

/// Struct to hold information about a tunnelling particle.
/// To create a predefined nuclide use [`create_nuclide`].
#[derive(Debug, Clone)]
pub struct Particle {
    name: String,
    mass: Mass<Au>,
}

impl Particle {
    /// Creates new particle with given name and mass
    pub fn new(name: &str, mass: Mass<impl MassUnit>) -> Self {
        Particle {
            name: name.to_string(),
            mass: mass.to(Au),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> Mass<Au> {
        self.mass
    }
}

/// Creates a light nuclide that takes part in fusion or alpha decay.
pub fn create_nuclide(name: &str) -> Option<Particle> {
    let mass = match name {
        "n" => Mass(1.00866491595, Dalton),
        "p" => Mass(1.007276466621, Dalton),
        "d" => Mass(2.013553212745, Dalton),
        "t" => Mass(3.01550071621, Dalton),
        "He3" => Mass(3.014932247175, Dalton),
        "alpha" => Mass(4.001506179127, Dalton),
        _ => return None,
    };

    Some(Particle::new(name, mass))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::units::mass_units::Kilogram;

    use super::*;

    #[test]
    fn nuclide() {
        let proton = create_nuclide("p");
        assert!(proton.is_some());
        let proton = proton.unwrap();

        assert_eq!(proton.name(), "p");
        assert_relative_eq!(proton.mass().to(Kilogram).value(), 1.6726e-27, max_relative = 1e-4);

        assert!(create_nuclide("Non existing nuclide").is_none());
    }
}
