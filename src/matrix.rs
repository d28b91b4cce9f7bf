//! Square element stiffness matrices and their numeric precision.

use std::ops::Index;

use nalgebra::SMatrix;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Number of significant figures carried by computed stiffness entries.
pub const SIGNIFICANT_DIGITS: u32 = 3;

/// Symmetric stiffness matrix of an element with `N` degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StiffnessMatrix<const N: usize> {
    /// Entries ordered by the element's degrees of freedom.
    entries: SMatrix<f64, N, N>,
}

/// Stiffness matrix of a two-node beam element.
pub type BeamMatrix = StiffnessMatrix<4>;

/// Stiffness matrix of a two-node planar frame element.
pub type FrameMatrix = StiffnessMatrix<6>;

impl<const N: usize> StiffnessMatrix<N> {
    /// Wrap an algebraic matrix.
    #[must_use]
    pub const fn new(entries: SMatrix<f64, N, N>) -> Self {
        Self { entries }
    }

    /// Build a matrix from its entries listed row by row.
    ///
    /// # Panics
    ///
    /// Panics when `rows` does not hold exactly `N * N` values.
    #[must_use]
    pub fn from_row_slice(rows: &[f64]) -> Self {
        Self::new(SMatrix::from_row_slice(rows))
    }

    /// Number of degrees of freedom.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Entry at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.entries.get((row, col)).copied()
    }

    /// Borrow the underlying algebraic matrix.
    #[must_use]
    pub const fn as_matrix(&self) -> &SMatrix<f64, N, N> {
        &self.entries
    }

    /// Consume the wrapper and return the algebraic matrix.
    #[must_use]
    pub fn into_inner(self) -> SMatrix<f64, N, N> {
        self.entries
    }

    /// Copy the entries into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.entries
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Multiply every entry by a scalar.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.entries * factor)
    }

    /// Round every entry to `digits` significant figures.
    ///
    /// # Examples
    /// ```
    /// use stiffx::StiffnessMatrix;
    ///
    /// let matrix = StiffnessMatrix::<2>::from_row_slice(&[2.0 / 3.0, 0.0, 0.0, 12345.0]);
    /// let rounded = matrix.to_significant_figures(3);
    /// assert_eq!(rounded[(0, 0)], 0.667);
    /// assert_eq!(rounded[(1, 1)], 12300.0);
    /// ```
    #[must_use]
    pub fn to_significant_figures(&self, digits: u32) -> Self {
        Self::new(self.entries.map(|value| round_to_significant(value, digits)))
    }

    /// Check `K[i][j] == K[j][i]` within an absolute tolerance.
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..N).all(|row| {
            (row + 1..N).all(|col| {
                (self.entries[(row, col)] - self.entries[(col, row)]).abs() <= tolerance
            })
        })
    }

    /// Check whether every entry is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|value| *value == 0.0)
    }

    /// Largest entry magnitude, used to pick tolerances.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.entries.amax()
    }
}

impl<const N: usize> Index<(usize, usize)> for StiffnessMatrix<N> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.entries[index]
    }
}

impl<const N: usize> From<SMatrix<f64, N, N>> for StiffnessMatrix<N> {
    fn from(value: SMatrix<f64, N, N>) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<StiffnessMatrix<N>> for SMatrix<f64, N, N> {
    fn from(value: StiffnessMatrix<N>) -> Self {
        value.into_inner()
    }
}

/// Serialized as a list of rows.
impl<const N: usize> Serialize for StiffnessMatrix<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(N))?;
        for row in self.entries.row_iter() {
            let values: Vec<f64> = row.iter().copied().collect();
            rows.serialize_element(&values)?;
        }
        rows.end()
    }
}

/// Round a value to `digits` significant figures.
///
/// Zero and non-finite values are returned unchanged.
///
/// # Examples
/// ```
/// use stiffx::round_to_significant;
///
/// assert_eq!(round_to_significant(0.012, 3), 0.012);
/// assert_eq!(round_to_significant(66_666_666.7, 3), 66_700_000.0);
/// ```
#[must_use]
pub fn round_to_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    let exponent = decimal_exponent(value);
    let shift = i32::try_from(digits).unwrap_or(i32::MAX).saturating_sub(1) - exponent;
    let rounded = scale_by_power_of_ten(scale_by_power_of_ten(value, shift).round(), -shift);
    // Rounding up next to f64::MAX can overflow.
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Largest power of ten applied in a single scaling step; `10^300` is finite.
const MAX_SCALE_STEP: i32 = 300;

/// `value * 10^exponent` without overflowing the intermediate power of ten.
///
/// Negative exponents divide by an exact power of ten: 120.0 / 1e4 is 0.012,
/// 120.0 * 1e-4 is not.
pub(crate) fn scale_by_power_of_ten(mut value: f64, mut exponent: i32) -> f64 {
    while exponent > MAX_SCALE_STEP {
        value *= 10f64.powi(MAX_SCALE_STEP);
        exponent -= MAX_SCALE_STEP;
    }
    while exponent < -MAX_SCALE_STEP {
        value /= 10f64.powi(MAX_SCALE_STEP);
        exponent += MAX_SCALE_STEP;
    }
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

/// Power of ten of the leading digit, `floor(log10(|value|))`.
pub(crate) fn decimal_exponent(value: f64) -> i32 {
    let magnitude = value.abs();
    let candidate = magnitude.log10().floor() as i32;
    // log10 can land a hair off an exact power of ten.
    if magnitude >= power_of_ten(candidate + 1) {
        candidate + 1
    } else if magnitude < power_of_ten(candidate) {
        candidate - 1
    } else {
        candidate
    }
}

/// `10^exponent`, matching the decimal literal for negative exponents down to
/// the subnormal range.
pub(crate) fn power_of_ten(exponent: i32) -> f64 {
    scale_by_power_of_ten(1.0, exponent)
}
