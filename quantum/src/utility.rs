use crate::units::{
    Au,
    energy_units::{Energy, EnergyUnit},
};

/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let mut result = Vec::with_capacity(n);
    let step = (end - start) / (n as f64 - 1.0);

    for i in 0..n {
        result.push(start + (i as f64) * step);
    }

    result
}

pub fn unit_linspace<U: EnergyUnit>(start: Energy<U>, end: Energy<U>, n: usize) -> Vec<Energy<U>> {
    let start_au = start.to_au();
    let end_au = end.to_au();

    linspace(start_au, end_au, n)
        .into_iter()
        .map(|x| Energy(x, Au).to(start.unit()))
        .collect()
}

/// Largest finite value of the slice, `None` if there is none.
pub fn max_finite(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .reduce(f64::max)
}
