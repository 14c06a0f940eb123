use ik_kernel::Vec3;
use thiserror::Error;

/// Problems with solver inputs, reported by the `validate` methods.
///
/// The solvers themselves never fail; hosts that want to reject bad input call
/// `validate` first.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} has a non-finite component: {value:?}")]
    NonFiniteVector { field: &'static str, value: Vec3 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("stretch strength {value} is outside [0, 1]")]
    StretchOutOfRange { value: f64 },
}

pub(crate) fn check_scalar(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFinite { field, value })
    }
}

pub(crate) fn check_length(field: &'static str, value: f64) -> Result<(), InputError> {
    check_scalar(field, value)?;
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

pub(crate) fn check_vector(field: &'static str, value: Vec3) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFiniteVector { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert!(check_length("edge_a", 3.0).is_ok());
        assert!(check_length("edge_a", 0.0).is_ok());
        assert_eq!(
            check_length("edge_a", -1.0),
            Err(InputError::Negative {
                field: "edge_a",
                value: -1.0
            })
        );
        assert!(matches!(
            check_length("edge_b", f64::INFINITY),
            Err(InputError::NonFinite { field: "edge_b", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = check_vector("target", Vec3::new(1.0, f64::NAN, 0.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "target has a non-finite component: Vec3 { x: 1.0, y: NaN, z: 0.0 }"
        );
        let err = InputError::StretchOutOfRange { value: 1.5 };
        assert_eq!(err.to_string(), "stretch strength 1.5 is outside [0, 1]");
    }
}
