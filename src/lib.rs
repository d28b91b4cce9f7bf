#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod beam;
mod errors;
mod frame;
mod geometry;
mod matrix;
mod render;

pub use beam::{beam_stiffness, compute_beam_matrix, BeamElement, BeamParameters, BEAM_DOFS};
pub use errors::{InvalidParameterError, Parameter, MIN_LENGTH};
pub use frame::{
    compute_frame_matrix, frame_stiffness, FrameElement, FrameParameters, FRAME_DOFS,
};
pub use geometry::Orientation;
pub use matrix::{
    round_to_significant, BeamMatrix, FrameMatrix, StiffnessMatrix, SIGNIFICANT_DIGITS,
};
pub use render::{
    format_significant, render_latex, render_plain, Notation, RenderedExpression,
    UNIT_RIGIDITY_FACTOR,
};
