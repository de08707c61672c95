use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TunnellingError {
    #[error("invalid parameter `{name}` = {value}: must be {requirement}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("invalid grid point at index {index}: {value} is not finite")]
    NonFiniteGrid { index: usize, value: f64 },
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, TunnellingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TunnellingError::InvalidParameter {
            name,
            value,
            requirement: "positive and finite",
        })
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, TunnellingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TunnellingError::InvalidParameter {
            name,
            value,
            requirement: "finite",
        })
    }
}

pub(crate) fn ensure_nonzero_steps(name: &'static str, steps: u32) -> Result<u32, TunnellingError> {
    if steps > 0 {
        Ok(steps)
    } else {
        Err(TunnellingError::InvalidParameter {
            name,
            value: 0.0,
            requirement: "at least one step",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let err = ensure_positive("barrier_width", -1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `barrier_width` = -1: must be positive and finite"
        );

        assert!(ensure_positive("hbar", f64::NAN).is_err());
        assert!(ensure_finite("barrier_height", -3.0).is_ok());
        assert!(ensure_finite("barrier_height", f64::INFINITY).is_err());
        assert_eq!(ensure_nonzero_steps("steps", 400), Ok(400));
        assert!(ensure_nonzero_steps("steps", 0).is_err());
    }
}
