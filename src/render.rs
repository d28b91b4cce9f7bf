//! Typeset rendering of stiffness matrices.
//!
//! Numbers are printed with a fixed count of significant figures. Values whose
//! leading digit sits between `10^-4` and `10^(digits - 1)` are written in
//! fixed notation keeping trailing zeros (`0.0120`, `12.0`, `120.`); anything
//! else is written as a mantissa times a power of ten.

use std::fmt;

use crate::matrix::{
    decimal_exponent, round_to_significant, scale_by_power_of_ten, StiffnessMatrix,
};

/// Symbolic factor shown in front of a beam matrix computed with `EI = 1`.
pub const UNIT_RIGIDITY_FACTOR: &str = "1/EI";

/// Smallest decimal exponent still written in fixed notation.
const MIN_FIXED_EXPONENT: i32 = -4;

/// Output flavour for numbers and matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Notation {
    /// LaTeX math, e.g. `6.67 \cdot 10^{10}`.
    #[default]
    Latex,
    /// Plain text, e.g. `6.67e+10`.
    Plain,
}

/// Format `value` with `digits` significant figures.
///
/// # Examples
/// ```
/// use stiffx::{format_significant, Notation};
///
/// assert_eq!(format_significant(0.012, 3, Notation::Latex), "0.0120");
/// assert_eq!(format_significant(66_666_666_666.7, 3, Notation::Latex), r"6.67 \cdot 10^{10}");
/// assert_eq!(format_significant(66_666_666_666.7, 3, Notation::Plain), "6.67e+10");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: u32, notation: Notation) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);
    let rounded = round_to_significant(value, digits);
    let exponent = decimal_exponent(rounded);
    let significant = i32::try_from(digits).unwrap_or(i32::MAX);

    if (MIN_FIXED_EXPONENT..significant).contains(&exponent) {
        let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
        let mut text = format!("{rounded:.decimals$}");
        if decimals == 0 {
            text.push('.');
        }
        return text;
    }

    let decimals = usize::try_from(significant - 1).unwrap_or(0);
    let mantissa = scale_by_power_of_ten(rounded, -exponent);
    match notation {
        Notation::Latex => format!(r"{mantissa:.decimals$} \cdot 10^{{{exponent}}}"),
        Notation::Plain => format!("{mantissa:.decimals$}e{exponent:+}"),
    }
}

/// A matrix in typeset form with an optional scalar factor in front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedExpression {
    /// Factor written before the matrix, e.g. `1/EI`.
    pub multiplier: Option<String>,
    /// The rendered matrix.
    pub body: String,
}

impl RenderedExpression {
    /// Render `matrix` with `digits` significant figures.
    ///
    /// # Examples
    /// ```
    /// use stiffx::{compute_beam_matrix, Notation, RenderedExpression, UNIT_RIGIDITY_FACTOR};
    ///
    /// let matrix = compute_beam_matrix(10.0).expect("positive length");
    /// let rendered = RenderedExpression::matrix(&matrix, 3, Notation::Latex)
    ///     .with_multiplier(UNIT_RIGIDITY_FACTOR);
    /// assert!(rendered.to_string().starts_with(r"1/EI \left[\begin{matrix}0.0120 & 0.0600"));
    /// ```
    #[must_use]
    pub fn matrix<const N: usize>(
        matrix: &StiffnessMatrix<N>,
        digits: u32,
        notation: Notation,
    ) -> Self {
        let body = match notation {
            Notation::Latex => render_latex(matrix, digits),
            Notation::Plain => render_plain(matrix, digits),
        };
        Self {
            multiplier: None,
            body,
        }
    }

    /// Attach a scalar factor.
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: impl Into<String>) -> Self {
        self.multiplier = Some(multiplier.into());
        self
    }

    /// Wrap the expression in `$$` display-math delimiters.
    #[must_use]
    pub fn display_math(&self) -> String {
        format!("$$ {self} $$")
    }
}

impl fmt::Display for RenderedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.multiplier {
            Some(multiplier) => write!(f, "{multiplier} {}", self.body),
            None => f.write_str(&self.body),
        }
    }
}

/// Render a matrix as a LaTeX `matrix` environment in square brackets.
#[must_use]
pub fn render_latex<const N: usize>(matrix: &StiffnessMatrix<N>, digits: u32) -> String {
    let rows: Vec<String> = formatted_rows(matrix, digits, Notation::Latex)
        .into_iter()
        .map(|row| row.join(" & "))
        .collect();
    format!(
        r"\left[\begin{{matrix}}{}\end{{matrix}}\right]",
        rows.join(r"\\")
    )
}

/// Render a matrix as right-aligned plain-text columns, one row per line.
#[must_use]
pub fn render_plain<const N: usize>(matrix: &StiffnessMatrix<N>, digits: u32) -> String {
    let rows = formatted_rows(matrix, digits, Notation::Plain);
    let width = rows
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
            format!("[ {} ]", cells.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format every entry of `matrix`, row by row.
fn formatted_rows<const N: usize>(
    matrix: &StiffnessMatrix<N>,
    digits: u32,
    notation: Notation,
) -> Vec<Vec<String>> {
    matrix
        .as_matrix()
        .row_iter()
        .map(|row| {
            row.iter()
                .map(|value| format_significant(*value, digits, notation))
                .collect()
        })
        .collect()
}
