//! Planar frame element with axial, shear and bending stiffness.

use log::debug;
use nalgebra::SMatrix;
use serde::{Deserialize, Serialize};

use crate::errors::{check_length, check_property, InvalidParameterError, Parameter};
use crate::geometry::Orientation;
use crate::matrix::{FrameMatrix, SIGNIFICANT_DIGITS};

/// Degree-of-freedom labels in matrix order: global X, global Y and rotation per node.
pub const FRAME_DOFS: [&str; 6] = ["u1", "v1", "θ1", "u2", "v2", "θ2"];

/// Raw inputs describing a frame member.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameParameters {
    /// Elastic modulus `E`.
    pub elastic_modulus: f64,
    /// Second moment of area `I`.
    pub moment_of_inertia: f64,
    /// Cross-sectional area `A`.
    pub area: f64,
    /// Member length.
    pub length: f64,
    /// Angle from global X to the member axis, counter-clockwise, in degrees.
    pub angle_degrees: f64,
}

impl Default for FrameParameters {
    fn default() -> Self {
        Self {
            elastic_modulus: 20_000_000.0,
            moment_of_inertia: 5_000.0,
            area: 0.3,
            length: 6.0,
            angle_degrees: 0.0,
        }
    }
}

/// Validated frame member.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameElement {
    /// Elastic modulus, non-negative.
    elastic_modulus: f64,
    /// Second moment of area, non-negative.
    moment_of_inertia: f64,
    /// Cross-sectional area, non-negative.
    area: f64,
    /// Member length, strictly positive.
    length: f64,
    /// Direction cosines of the member axis.
    orientation: Orientation,
}

/// Stiffness terms shared by every entry of the frame matrix.
#[derive(Clone, Copy, Debug)]
struct SectionTerms {
    /// `E*A/L`
    ea_l: f64,
    /// `E*I/L`
    ei_l: f64,
    /// `E*I/L^2`
    ei_l2: f64,
    /// `E*I/L^3`
    ei_l3: f64,
}

impl FrameElement {
    /// Validate the parameters of a frame member.
    ///
    /// Zero `E`, `I` or `A` are accepted and produce a member without the
    /// corresponding stiffness.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] when the length is not strictly
    /// positive, when `E`, `I` or `A` is negative, or when any input is not finite.
    pub fn new(parameters: FrameParameters) -> Result<Self, InvalidParameterError> {
        let length = check_length(parameters.length)?;
        Ok(Self {
            elastic_modulus: check_property(Parameter::ElasticModulus, parameters.elastic_modulus)?,
            moment_of_inertia: check_property(
                Parameter::MomentOfInertia,
                parameters.moment_of_inertia,
            )?,
            area: check_property(Parameter::Area, parameters.area)?,
            length,
            orientation: Orientation::from_degrees(parameters.angle_degrees)?,
        })
    }

    /// Member length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Direction cosines of the member axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Evaluate `EA/L` and the powers of `EI/L`.
    fn section_terms(&self) -> SectionTerms {
        let ea = self.elastic_modulus * self.area;
        let ei = self.elastic_modulus * self.moment_of_inertia;
        let l = self.length;
        SectionTerms {
            ea_l: ea / l,
            ei_l: ei / l,
            ei_l2: ei / (l * l),
            ei_l3: ei / (l * l * l),
        }
    }

    /// Full-precision stiffness matrix in global axes.
    ///
    /// Every entry is written out from the closed-form expression so the
    /// symmetry of the result can be checked rather than assumed.
    #[must_use]
    pub fn stiffness(&self) -> FrameMatrix {
        let SectionTerms {
            ea_l,
            ei_l,
            ei_l2,
            ei_l3,
        } = self.section_terms();
        let Orientation { lambda, mu } = self.orientation;

        let xx = ea_l * lambda * lambda + 12.0 * ei_l3 * mu * mu;
        let yy = ea_l * mu * mu + 12.0 * ei_l3 * lambda * lambda;
        let xy = (ea_l - 12.0 * ei_l3) * lambda * mu;
        let mx = 6.0 * ei_l2 * mu;
        let my = 6.0 * ei_l2 * lambda;
        let near = 4.0 * ei_l;
        let far = 2.0 * ei_l;

        #[rustfmt::skip]
        let entries = [
             xx,  xy, -mx,   -xx, -xy, -mx,
             xy,  yy,  my,   -xy, -yy,  my,
            -mx,  my,  near,  mx, -my,  far,
            -xx, -xy,  mx,    xx,  xy,  mx,
            -xy, -yy, -my,    xy,  yy, -my,
            -mx,  my,  far,   mx, -my,  near,
        ];
        FrameMatrix::from_row_slice(&entries)
    }

    /// Stiffness matrix in the member's own axes, before rotation.
    #[must_use]
    pub fn local_stiffness(&self) -> FrameMatrix {
        Self {
            orientation: Orientation::HORIZONTAL,
            ..*self
        }
        .stiffness()
    }

    /// Matrix mapping global displacements onto member axes, `d_local = T * d_global`.
    #[must_use]
    pub fn transformation_matrix(&self) -> SMatrix<f64, 6, 6> {
        let block = self.orientation.rotation().matrix().transpose();
        let mut transformation = SMatrix::<f64, 6, 6>::zeros();
        for node in 0..2 {
            let base = node * 3;
            transformation
                .fixed_view_mut::<2, 2>(base, base)
                .copy_from(&block);
            transformation[(base + 2, base + 2)] = 1.0;
        }
        transformation
    }
}

/// Stiffness matrix of a planar frame member in global axes, to three significant figures.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when `length` is not strictly positive,
/// when `E`, `I` or `A` is negative, or when an input is not finite.
///
/// # Examples
/// ```
/// use stiffx::compute_frame_matrix;
///
/// let matrix = compute_frame_matrix(2.0e7, 5000.0, 0.3, 6.0, 0.0).expect("valid member");
/// assert_eq!(matrix[(0, 0)], 1_000_000.0);
/// // 4 * E * I / L
/// assert_eq!(matrix[(2, 2)], 66_700_000_000.0);
/// ```
pub fn compute_frame_matrix(
    elastic_modulus: f64,
    moment_of_inertia: f64,
    area: f64,
    length: f64,
    angle_degrees: f64,
) -> Result<FrameMatrix, InvalidParameterError> {
    frame_stiffness(FrameParameters {
        elastic_modulus,
        moment_of_inertia,
        area,
        length,
        angle_degrees,
    })
}

/// Stiffness matrix of the frame member described by `parameters`, to three significant figures.
///
/// # Errors
///
/// Returns [`InvalidParameterError`] when the parameters are rejected by
/// [`FrameElement::new`].
pub fn frame_stiffness(parameters: FrameParameters) -> Result<FrameMatrix, InvalidParameterError> {
    let element = FrameElement::new(parameters)?;
    debug!(
        "frame stiffness: E = {}, I = {}, A = {}, L = {}, angle = {} deg (lambda = {}, mu = {})",
        element.elastic_modulus,
        element.moment_of_inertia,
        element.area,
        element.length,
        parameters.angle_degrees,
        element.orientation.lambda,
        element.orientation.mu
    );
    Ok(element.stiffness().to_significant_figures(SIGNIFICANT_DIGITS))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn element(angle_degrees: f64) -> FrameElement {
        FrameElement::new(FrameParameters {
            angle_degrees,
            ..FrameParameters::default()
        })
        .expect("valid member")
    }

    #[test]
    fn horizontal_member_uses_local_form() {
        let matrix = compute_frame_matrix(2.0e7, 5000.0, 0.3, 6.0, 0.0).expect("valid member");
        assert_eq!(matrix[(0, 0)], 1_000_000.0);
        assert_eq!(matrix[(0, 3)], -1_000_000.0);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(0, 2)], 0.0);
        assert_relative_eq!(matrix[(2, 2)], 6.67e10, max_relative = 1.0e-12);
        assert_relative_eq!(matrix[(2, 5)], 3.33e10, max_relative = 1.0e-12);
        // 12 * E * I / L^3 = 12 * 1e11 / 216
        assert_relative_eq!(matrix[(1, 1)], 5.56e9, max_relative = 1.0e-12);
        assert!(matrix.is_symmetric(0.0));
    }

    #[test]
    fn closed_form_matches_rotated_local_matrix() {
        for angle in [0.0, 30.0, 45.0, 90.0, 135.0, 210.0, 270.0, 333.0] {
            let member = element(angle);
            let t = member.transformation_matrix();
            let rotated = t.transpose() * member.local_stiffness().as_matrix() * t;
            let closed_form = member.stiffness();
            let tolerance = closed_form.max_abs() * 1.0e-12;
            assert_relative_eq!(*closed_form.as_matrix(), rotated, epsilon = tolerance);
        }
    }

    #[test]
    fn transformation_is_orthogonal() {
        let t = element(60.0).transformation_matrix();
        assert_relative_eq!(t * t.transpose(), SMatrix::<f64, 6, 6>::identity(), epsilon = 1.0e-12);
    }

    #[test]
    fn vertical_member_moves_axial_stiffness_to_y() {
        let matrix = compute_frame_matrix(2.0e7, 5000.0, 0.3, 6.0, 90.0).expect("valid member");
        assert_eq!(matrix[(1, 1)], 1_000_000.0);
        assert_eq!(matrix[(1, 4)], -1_000_000.0);
        assert_relative_eq!(matrix[(0, 0)], 5.56e9, max_relative = 1.0e-12);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(1, 2)], 0.0);
        assert_relative_eq!(matrix[(0, 2)], -1.67e10, max_relative = 1.0e-12);
    }

    #[test]
    fn full_turn_matches_zero_angle() {
        let zero = element(0.0).stiffness();
        let full = element(360.0).stiffness();
        assert_relative_eq!(*zero.as_matrix(), *full.as_matrix(), epsilon = 1.0e-6);
    }

    #[test]
    fn weightless_member_has_no_stiffness() {
        for angle in [0.0, 37.5, 90.0, 359.0] {
            let matrix = compute_frame_matrix(0.0, 0.0, 0.0, 3.0, angle).expect("valid member");
            assert!(matrix.is_zero(), "angle {angle}");
        }
    }

    #[test]
    fn zero_area_keeps_only_bending() {
        let matrix = compute_frame_matrix(2.0e7, 5000.0, 0.0, 6.0, 0.0).expect("valid member");
        assert_eq!(matrix[(0, 0)], 0.0);
        assert_eq!(matrix[(0, 3)], 0.0);
        assert!(matrix[(1, 1)] > 0.0);
    }

    #[test]
    fn zero_inertia_keeps_only_axial() {
        let matrix = compute_frame_matrix(2.0e7, 0.0, 0.3, 6.0, 0.0).expect("valid member");
        assert_eq!(matrix[(0, 0)], 1_000_000.0);
        for (row, col) in [(1, 1), (1, 2), (2, 2), (2, 5), (4, 5)] {
            assert_eq!(matrix[(row, col)], 0.0, "entry ({row}, {col})");
        }
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(
            compute_frame_matrix(2.0e7, 5000.0, 0.3, 0.0, 0.0),
            Err(InvalidParameterError::NonPositiveLength { length: 0.0 })
        );
        assert_eq!(
            compute_frame_matrix(2.0e7, 5000.0, 0.3, -6.0, 0.0),
            Err(InvalidParameterError::NonPositiveLength { length: -6.0 })
        );
        assert_eq!(
            compute_frame_matrix(-1.0, 5000.0, 0.3, 6.0, 0.0),
            Err(InvalidParameterError::NegativeProperty {
                parameter: Parameter::ElasticModulus,
                value: -1.0,
            })
        );
        assert!(matches!(
            compute_frame_matrix(2.0e7, 5000.0, 0.3, 6.0, f64::NAN),
            Err(InvalidParameterError::NonFinite {
                parameter: Parameter::Angle,
                ..
            })
        ));
    }

    #[test]
    fn parameters_default_to_form_values() {
        let parameters: FrameParameters =
            serde_json::from_str(r#"{ "angle_degrees": 45.0 }"#).expect("valid json");
        assert_eq!(parameters.elastic_modulus, 20_000_000.0);
        assert_eq!(parameters.length, 6.0);
        assert_eq!(parameters.angle_degrees, 45.0);
    }
}
