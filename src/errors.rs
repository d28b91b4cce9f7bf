//! Error types produced while validating element parameters.

use std::fmt;

use thiserror::Error;

/// Scalar input accepted by the stiffness calculators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// Element length.
    Length,
    /// Elastic modulus `E`.
    ElasticModulus,
    /// Second moment of area `I`.
    MomentOfInertia,
    /// Cross-sectional area `A`.
    Area,
    /// Flexural rigidity `EI` of a beam.
    FlexuralRigidity,
    /// Orientation of a frame member in degrees.
    Angle,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Length => "length",
            Self::ElasticModulus => "elastic modulus",
            Self::MomentOfInertia => "moment of inertia",
            Self::Area => "area",
            Self::FlexuralRigidity => "flexural rigidity",
            Self::Angle => "angle",
        };
        f.write_str(name)
    }
}

/// Error returned when the inputs of a stiffness computation are rejected.
///
/// Every formula divides by powers of the element length, so the length is
/// checked before any entry is evaluated. Zero section properties are accepted
/// and simply produce a degenerate element.
///
/// # Examples
///
/// ```
/// use stiffx::{compute_beam_matrix, InvalidParameterError};
///
/// let error = compute_beam_matrix(0.0).expect_err("zero length is rejected");
/// assert_eq!(error, InvalidParameterError::NonPositiveLength { length: 0.0 });
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidParameterError {
    /// Returned when the length is zero or negative.
    #[error("length must be positive (received {length})")]
    NonPositiveLength {
        /// Rejected length.
        length: f64,
    },
    /// Returned when the length is positive but too small to divide by.
    #[error("length {length} is below the minimum of {minimum}")]
    DegenerateLength {
        /// Rejected length.
        length: f64,
        /// Smallest accepted length.
        minimum: f64,
    },
    /// Returned when a section or material property is negative.
    #[error("{parameter} must not be negative (received {value})")]
    NegativeProperty {
        /// The offending input.
        parameter: Parameter,
        /// Rejected value.
        value: f64,
    },
    /// Returned when an input is NaN or infinite.
    #[error("{parameter} must be a finite number (received {value})")]
    NonFinite {
        /// The offending input.
        parameter: Parameter,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a direction vector has no usable length.
    #[error("direction ({x}, {y}) does not define an orientation")]
    UndefinedDirection {
        /// Horizontal component.
        x: f64,
        /// Vertical component.
        y: f64,
    },
}

/// Smallest element length accepted by the calculators.
pub const MIN_LENGTH: f64 = 1.0e-10;

/// Reject lengths that would blow up the `1/L` terms.
pub(crate) fn check_length(length: f64) -> Result<f64, InvalidParameterError> {
    let length = check_finite(Parameter::Length, length)?;
    if length <= 0.0 {
        return Err(InvalidParameterError::NonPositiveLength { length });
    }
    if length < MIN_LENGTH {
        return Err(InvalidParameterError::DegenerateLength {
            length,
            minimum: MIN_LENGTH,
        });
    }
    Ok(length)
}

/// Reject negative or non-finite section and material properties.
pub(crate) fn check_property(
    parameter: Parameter,
    value: f64,
) -> Result<f64, InvalidParameterError> {
    let value = check_finite(parameter, value)?;
    if value < 0.0 {
        return Err(InvalidParameterError::NegativeProperty { parameter, value });
    }
    Ok(value)
}

/// Reject NaN and infinities.
pub(crate) fn check_finite(parameter: Parameter, value: f64) -> Result<f64, InvalidParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidParameterError::NonFinite { parameter, value })
    }
}
