//! Orientation of a planar member relative to the global axes.

use nalgebra::{Rotation2, Vector2};

use crate::errors::{check_finite, InvalidParameterError, Parameter};

/// Direction cosines of a member axis measured counter-clockwise from global X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Cosine of the member angle, `lambda`.
    pub lambda: f64,
    /// Sine of the member angle, `mu`.
    pub mu: f64,
}

impl Orientation {
    /// Orientation of a member lying along global X.
    pub const HORIZONTAL: Self = Self {
        lambda: 1.0,
        mu: 0.0,
    };

    /// Build the direction cosines for an angle given in degrees.
    ///
    /// The angle is reduced to `[0, 360)` first. Multiples of 90 degrees map
    /// onto exact cosines so axis-aligned members carry no round-off residue.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::NonFinite`] for NaN or infinite angles.
    ///
    /// # Examples
    /// ```
    /// use stiffx::Orientation;
    ///
    /// let vertical = Orientation::from_degrees(90.0).expect("finite angle");
    /// assert_eq!(vertical.lambda, 0.0);
    /// assert_eq!(vertical.mu, 1.0);
    /// ```
    pub fn from_degrees(angle_degrees: f64) -> Result<Self, InvalidParameterError> {
        let angle = check_finite(Parameter::Angle, angle_degrees)?.rem_euclid(360.0);
        let orientation = match angle {
            a if a == 0.0 => Self::HORIZONTAL,
            a if a == 90.0 => Self::new(0.0, 1.0),
            a if a == 180.0 => Self::new(-1.0, 0.0),
            a if a == 270.0 => Self::new(0.0, -1.0),
            a => {
                let (mu, lambda) = a.to_radians().sin_cos();
                Self::new(lambda, mu)
            }
        };
        Ok(orientation)
    }

    /// Create an [`Orientation`] from explicit direction cosines.
    #[must_use]
    pub const fn new(lambda: f64, mu: f64) -> Self {
        Self { lambda, mu }
    }

    /// Unit vector along the member axis.
    #[must_use]
    pub fn axis(self) -> Vector2<f64> {
        Vector2::new(self.lambda, self.mu)
    }

    /// Rotation taking local member axes onto global axes.
    #[must_use]
    pub fn rotation(self) -> Rotation2<f64> {
        Rotation2::from_matrix_unchecked(nalgebra::Matrix2::new(
            self.lambda,
            -self.mu,
            self.mu,
            self.lambda,
        ))
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::HORIZONTAL
    }
}

/// Normalizes the vector; zero, NaN or infinite vectors are rejected.
impl TryFrom<Vector2<f64>> for Orientation {
    type Error = InvalidParameterError;

    fn try_from(value: Vector2<f64>) -> Result<Self, Self::Error> {
        let norm = value.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(InvalidParameterError::UndefinedDirection {
                x: value.x,
                y: value.y,
            });
        }
        Ok(Self::new(value.x / norm, value.y / norm))
    }
}
