pub mod composite_potential;
pub mod gaussian_bump;
pub mod potential;
pub mod potential_factory;

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::potentials::{
        composite_potential::Composite,
        gaussian_bump::GaussianBump,
        potential::{Potential, SimplePotential, SubPotential},
        potential_factory::create_double_hump,
    };

    #[test]
    fn test_gaussian() {
        let bump = GaussianBump::new(2., 1., 0.5);
        assert_eq!(bump.value(1.), 2.);
        assert_relative_eq!(bump.value(1.5), 2. * (-1.0f64).exp());
        assert_relative_eq!(bump.value(0.5), bump.value(1.5));

        let mut value = 1.;
        bump.value_add(1., &mut value);
        assert_eq!(value, 3.);
    }

    #[test]
    fn test_composite() {
        let composite = Composite::from_vec(vec![
            GaussianBump::new(1., -1., 1.),
            GaussianBump::new(-0.5, 1., 1.),
        ]);

        let expected = (-1.0f64).exp() - 0.5 * (-1.0f64).exp();
        assert_relative_eq!(composite.value(0.), expected);

        let mut value = 10.;
        composite.value_inplace(0., &mut value);
        assert_relative_eq!(value, expected);

        composite.value_add(0., &mut value);
        assert_relative_eq!(value, 2. * expected);
    }

    #[test]
    fn test_double_hump() {
        let potential = create_double_hump(6., 12.);

        let g = |x: f64, center: f64, width: f64| (-((x - center) / width).powi(2)).exp();
        let expected = 6. * g(0., -25., 12.) + 4.5 * g(0., 25., 12.) - 3.;
        assert_relative_eq!(potential.value(0.), expected, max_relative = 1e-14);
        assert_relative_eq!(potential.value(0.), -2.8631, epsilon = 1e-3);

        // inner hump is the higher one
        assert!(potential.value(-25.) > potential.value(25.));
    }
}
