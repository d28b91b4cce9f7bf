use log::info;
use serde::Serialize;
use stiffx::{
    BeamElement, BeamMatrix, BeamParameters, FrameElement, FrameMatrix, FrameParameters,
    InvalidParameterError, BEAM_DOFS, FRAME_DOFS, SIGNIFICANT_DIGITS, UNIT_RIGIDITY_FACTOR,
};

use crate::cli::ElementRequest;

/// Result of one stiffness computation, ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "lowercase")]
pub enum AnalysisSummary {
    /// Beam element result.
    Beam {
        /// Inputs that produced the matrix.
        parameters: BeamParameters,
        /// Symbolic factor in front of the matrix, present when `EI` was not given.
        multiplier: Option<&'static str>,
        /// Degree-of-freedom labels in matrix order.
        dofs: [&'static str; 4],
        /// Stiffness matrix rounded to three significant figures.
        matrix: BeamMatrix,
    },
    /// Frame element result.
    Frame {
        /// Inputs that produced the matrix.
        parameters: FrameParameters,
        /// Degree-of-freedom labels in matrix order.
        dofs: [&'static str; 6],
        /// Stiffness matrix rounded to three significant figures.
        matrix: FrameMatrix,
    },
}

/// Evaluate the requested element.
///
/// The beam and frame stiffness formulas are the standard results of the
/// direct stiffness method, see
/// <https://en.wikipedia.org/wiki/Direct_stiffness_method>.
pub fn run_analysis(request: &ElementRequest) -> Result<AnalysisSummary, InvalidParameterError> {
    match *request {
        ElementRequest::Beam(parameters) => {
            let element = BeamElement::new(parameters)?;
            info!("evaluating beam element of length {}", element.length());
            Ok(AnalysisSummary::Beam {
                parameters,
                multiplier: element
                    .has_unit_rigidity()
                    .then_some(UNIT_RIGIDITY_FACTOR),
                dofs: BEAM_DOFS,
                matrix: element.stiffness().to_significant_figures(SIGNIFICANT_DIGITS),
            })
        }
        ElementRequest::Frame(parameters) => {
            let element = FrameElement::new(parameters)?;
            info!(
                "evaluating frame element of length {} at {} degrees",
                element.length(),
                parameters.angle_degrees
            );
            Ok(AnalysisSummary::Frame {
                parameters,
                dofs: FRAME_DOFS,
                matrix: element.stiffness().to_significant_figures(SIGNIFICANT_DIGITS),
            })
        }
    }
}
