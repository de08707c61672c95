use super::{composite_potential::Composite, gaussian_bump::GaussianBump};

/// Centers of the two humps of [`create_double_hump`].
pub const HUMP_CENTER: f64 = 25.0;
/// Drop of the outer hump relative to the inner one.
pub const OUTER_HUMP_DROP: f64 = 1.5;
pub const WELL_DEPTH: f64 = 3.0;
pub const WELL_WIDTH: f64 = 8.0;

/// Creates the double hump nuclear barrier shape with a central well.
///
/// The shape is only meant to look like a fission barrier when drawn,
/// it carries no physical meaning:
/// `V(x) = h g(x, -25, w) + (h - 1.5) g(x, 25, w) - 3 g(x, 0, 8)`.
pub fn create_double_hump(peak_height: f64, width: f64) -> Composite<GaussianBump> {
    Composite::from_vec(vec![
        GaussianBump::new(peak_height, -HUMP_CENTER, width),
        GaussianBump::new(peak_height - OUTER_HUMP_DROP, HUMP_CENTER, width),
        GaussianBump::new(-WELL_DEPTH, 0.0, WELL_WIDTH),
    ])
}
