//! Euler-Bernoulli beam element with two nodes and four degrees of freedom.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{check_length, check_property, InvalidParameterError, Parameter};
use crate::matrix::{BeamMatrix, SIGNIFICANT_DIGITS};

/// Degree-of-freedom labels in matrix order: transverse displacement and rotation per node.
pub const BEAM_DOFS: [&str; 4] = ["v1", "θ1", "v2", "θ2"];

/// Raw inputs describing a beam element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamParameters {
    /// Element length.
    pub length: f64,
    /// Flexural rigidity `EI`. `None` keeps `EI = 1` and leaves it as a symbolic factor.
    pub flexural_rigidity: Option<f64>,
}

impl Default for BeamParameters {
    fn default() -> Self {
        Self {
            length: 10.0,
            flexural_rigidity: None,
        }
    }
}

impl BeamParameters {
    /// Parameters for a beam of the given length with unit flexural rigidity.
    #[must_use]
    pub const fn with_length(length: f64) -> Self {
        Self {
            length,
            flexural_rigidity: None,
        }
    }
}

/// Validated beam element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamElement {
    /// Element length, strictly positive.
    length: f64,
    /// Flexural rigidity, non-negative.
    flexural_rigidity: f64,
    /// Whether `EI` was left symbolic.
    unit_rigidity: bool,
}

impl BeamElement {
    /// Validate the parameters of a beam element.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] when the length is not strictly positive
    /// or the flexural rigidity is negative. Non-finite inputs are rejected too.
    ///
    /// # Examples
    /// ```
    /// use stiffx::{BeamElement, BeamParameters};
    ///
    /// let beam = BeamElement::new(BeamParameters::with_length(4.0)).expect("valid beam");
    /// assert!(beam.has_unit_rigidity());
    /// ```
    pub fn new(parameters: BeamParameters) -> Result<Self, InvalidParameterError> {
        let length = check_length(parameters.length)?;
        let (flexural_rigidity, unit_rigidity) = match parameters.flexural_rigidity {
            Some(rigidity) => (check_property(Parameter::FlexuralRigidity, rigidity)?, false),
            None => (1.0, true),
        };
        Ok(Self {
            length,
            flexural_rigidity,
            unit_rigidity,
        })
    }

    /// Element length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Flexural rigidity used in the formula.
    #[must_use]
    pub const fn flexural_rigidity(&self) -> f64 {
        self.flexural_rigidity
    }

    /// `true` when `EI` is carried as a symbolic factor instead of a number.
    #[must_use]
    pub const fn has_unit_rigidity(&self) -> bool {
        self.unit_rigidity
    }

    /// Full-precision stiffness matrix.
    ///
    /// Each entry is evaluated from its own closed-form term.
    #[must_use]
    pub fn stiffness(&self) -> BeamMatrix {
        let ei = self.flexural_rigidity;
        let l = self.length;
        let l2 = l * l;
        let l3 = l2 * l;

        #[rustfmt::skip]
        let entries = [
             12.0 * ei / l3,   6.0 * ei / l2, -12.0 * ei / l3,   6.0 * ei / l2,
              6.0 * ei / l2,   4.0 * ei / l,   -6.0 * ei / l2,   2.0 * ei / l,
            -12.0 * ei / l3,  -6.0 * ei / l2,  12.0 * ei / l3,  -6.0 * ei / l2,
              6.0 * ei / l2,   2.0 * ei / l,   -6.0 * ei / l2,   4.0 * ei / l,
        ];
        BeamMatrix::from_row_slice(&entries)
    }
}

/// Stiffness matrix of a beam with unit flexural rigidity, to three significant figures.
///
/// The true `EI` is a symbolic factor applied when the matrix is displayed.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when `length` is not a finite, strictly
/// positive number.
///
/// # Examples
/// ```
/// use stiffx::compute_beam_matrix;
///
/// let matrix = compute_beam_matrix(10.0).expect("positive length");
/// assert_eq!(matrix[(0, 0)], 0.012);
/// assert_eq!(matrix[(0, 1)], 0.06);
/// ```
pub fn compute_beam_matrix(length: f64) -> Result<BeamMatrix, InvalidParameterError> {
    beam_stiffness(BeamParameters::with_length(length))
}

/// Stiffness matrix of a beam described by `parameters`, to three significant figures.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when the parameters are rejected by
/// [`BeamElement::new`].
pub fn beam_stiffness(parameters: BeamParameters) -> Result<BeamMatrix, InvalidParameterError> {
    let element = BeamElement::new(parameters)?;
    debug!(
        "beam stiffness: length = {}, EI = {}",
        element.length, element.flexural_rigidity
    );
    Ok(element.stiffness().to_significant_figures(SIGNIFICANT_DIGITS))
}
