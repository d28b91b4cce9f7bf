#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use stiffx::{
    compute_frame_matrix, frame_stiffness, FrameElement, FrameMatrix, FrameParameters,
    InvalidParameterError,
};

#[derive(Debug, Clone, Copy)]
struct PortalMember {
    elastic_modulus: f64,
    moment_of_inertia: f64,
    area: f64,
    length: f64,
}

impl Default for PortalMember {
    fn default() -> Self {
        Self {
            elastic_modulus: 2.0e7,
            moment_of_inertia: 5_000.0,
            area: 0.3,
            length: 6.0,
        }
    }
}

impl PortalMember {
    fn at(self, angle_degrees: f64) -> FrameMatrix {
        compute_frame_matrix(
            self.elastic_modulus,
            self.moment_of_inertia,
            self.area,
            self.length,
            angle_degrees,
        )
        .expect("portal member is valid")
    }

    fn ea_over_l(self) -> f64 {
        self.elastic_modulus * self.area / self.length
    }

    fn ei_over_l(self) -> f64 {
        self.elastic_modulus * self.moment_of_inertia / self.length
    }
}

#[test]
fn frame_matrix_is_symmetric_at_any_angle() {
    let member = PortalMember::default();
    for angle in [0.0, 15.0, 45.0, 90.0, 120.0, 180.0, 233.3, 270.0, 300.0, 360.0] {
        assert!(member.at(angle).is_symmetric(0.0), "angle {angle}");
    }
}

#[test]
fn horizontal_member_matches_hand_calculation() {
    let member = PortalMember::default();
    let matrix = member.at(0.0);

    assert_eq!(matrix.dimension(), 6);
    assert_relative_eq!(member.ea_over_l(), 1_000_000.0, max_relative = 1.0e-12);
    assert_eq!(matrix[(0, 0)], 1_000_000.0);
    assert_eq!(matrix[(3, 3)], 1_000_000.0);
    assert_eq!(matrix[(0, 3)], -1_000_000.0);
    assert_relative_eq!(matrix[(2, 2)], 4.0 * member.ei_over_l(), max_relative = 5.0e-3);
    assert_relative_eq!(matrix[(2, 5)], 2.0 * member.ei_over_l(), max_relative = 5.0e-3);

    // No axial/transverse coupling without rotation.
    for (row, col) in [(0, 1), (0, 2), (0, 4), (0, 5), (3, 4), (3, 5)] {
        assert_eq!(matrix[(row, col)], 0.0, "entry ({row}, {col})");
    }
}

#[test]
fn vertical_members_carry_axial_stiffness_in_y() {
    let member = PortalMember::default();
    for angle in [90.0, 270.0] {
        let matrix = member.at(angle);
        assert_eq!(matrix[(1, 1)], 1_000_000.0, "angle {angle}");
        assert_eq!(matrix[(4, 4)], 1_000_000.0, "angle {angle}");
        assert_eq!(matrix[(0, 1)], 0.0, "angle {angle}");
        assert_eq!(matrix[(3, 4)], 0.0, "angle {angle}");
        assert_eq!(matrix[(1, 2)], 0.0, "angle {angle}");
    }
    // The shear-moment coupling flips with the member direction.
    assert_eq!(member.at(90.0)[(0, 2)], -member.at(270.0)[(0, 2)]);
}

#[test]
fn full_turn_is_equivalent_to_no_rotation() {
    let member = PortalMember::default();
    assert_relative_eq!(
        *member.at(360.0).as_matrix(),
        *member.at(0.0).as_matrix(),
        epsilon = 1.0e-6
    );
}

#[test]
fn opposite_directions_share_translational_stiffness() {
    let parameters = FrameParameters {
        angle_degrees: 30.0,
        ..FrameParameters::default()
    };
    let forward = FrameElement::new(parameters).expect("valid member").stiffness();
    let backward = FrameElement::new(FrameParameters {
        angle_degrees: 210.0,
        ..parameters
    })
    .expect("valid member")
    .stiffness();
    for (row, col) in [(0, 0), (0, 1), (1, 1), (2, 2), (2, 5)] {
        assert_relative_eq!(
            forward[(row, col)],
            backward[(row, col)],
            max_relative = 1.0e-9
        );
    }
}

#[test]
fn rigid_body_translation_produces_no_force() {
    let element = FrameElement::new(FrameParameters {
        angle_degrees: 40.0,
        ..FrameParameters::default()
    })
    .expect("valid member");
    let stiffness = element.stiffness();
    let shift = nalgebra::SVector::<f64, 6>::from_row_slice(&[0.3, -0.7, 0.0, 0.3, -0.7, 0.0]);
    let forces = stiffness.as_matrix() * shift;
    assert_relative_eq!(forces.norm(), 0.0, epsilon = stiffness.max_abs() * 1.0e-12);
}

#[test]
fn weightless_member_is_all_zero() {
    for angle in [0.0, 45.0, 90.0, 180.0, 275.0] {
        let matrix = compute_frame_matrix(0.0, 0.0, 0.0, 4.0, angle).expect("zero properties");
        assert!(matrix.is_zero(), "angle {angle}");
    }
}

#[test]
fn subnormal_stiffness_terms_stay_finite() {
    let matrix = compute_frame_matrix(1.0e-300, 1.0e-10, 0.0, 1.0, 30.0).expect("tiny modulus");
    assert!(matrix.as_matrix().iter().all(|value| value.is_finite()));
    assert!(!matrix.is_zero());
    assert!(matrix.is_symmetric(0.0));
}

#[test]
fn zero_length_is_rejected_but_zero_properties_are_not() {
    assert_eq!(
        compute_frame_matrix(2.0e7, 5_000.0, 0.3, 0.0, 0.0),
        Err(InvalidParameterError::NonPositiveLength { length: 0.0 })
    );
    assert_eq!(
        compute_frame_matrix(2.0e7, 5_000.0, 0.3, -6.0, 45.0),
        Err(InvalidParameterError::NonPositiveLength { length: -6.0 })
    );
    assert!(frame_stiffness(FrameParameters {
        elastic_modulus: 0.0,
        ..FrameParameters::default()
    })
    .is_ok());
}
