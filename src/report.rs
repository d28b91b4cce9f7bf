use std::fmt::Write;

use stiffx::{Notation, RenderedExpression, StiffnessMatrix, SIGNIFICANT_DIGITS};

use crate::analysis::AnalysisSummary;
use crate::cli::OutputFormat;

/// Render the computed matrix in the requested format.
///
/// LaTeX output reproduces the display-math block a notebook or web page
/// would typeset; plain output labels the degrees of freedom so the rows can
/// be read directly in a terminal.
pub fn render_summary(
    summary: &AnalysisSummary,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary),
        OutputFormat::Latex => Ok(render_text(summary, Notation::Latex)),
        OutputFormat::Plain => Ok(render_text(summary, Notation::Plain)),
    }
}

/// Heading, matrix and caption for the text formats.
fn render_text(summary: &AnalysisSummary, notation: Notation) -> String {
    let mut output = String::new();
    match summary {
        AnalysisSummary::Beam {
            multiplier,
            dofs,
            matrix,
            ..
        } => {
            write_section(
                &mut output,
                "4x4 local beam matrix",
                dofs,
                matrix,
                *multiplier,
                notation,
            );
            if multiplier.is_some() {
                output.push_str("EI is assumed constant.\n");
            }
        }
        AnalysisSummary::Frame { dofs, matrix, .. } => {
            write_section(
                &mut output,
                "6x6 local frame matrix (global axes)",
                dofs,
                matrix,
                None,
                notation,
            );
        }
    }
    output
}

/// Write one titled matrix block.
fn write_section<const N: usize>(
    output: &mut String,
    title: &str,
    dofs: &[&str],
    matrix: &StiffnessMatrix<N>,
    multiplier: Option<&str>,
    notation: Notation,
) {
    let mut rendered = RenderedExpression::matrix(matrix, SIGNIFICANT_DIGITS, notation);
    if let Some(multiplier) = multiplier {
        rendered = rendered.with_multiplier(multiplier);
    }
    match notation {
        Notation::Latex => {
            writeln!(output, "### {title}").expect("writing to string cannot fail");
            writeln!(output, "{}", rendered.display_math())
                .expect("writing to string cannot fail");
        }
        Notation::Plain => {
            writeln!(output, "{title}").expect("writing to string cannot fail");
            writeln!(output, "DOFs: {}", dofs.join(", ")).expect("writing to string cannot fail");
            if let Some(multiplier) = &rendered.multiplier {
                writeln!(output, "{multiplier} x").expect("writing to string cannot fail");
            }
            writeln!(output, "{}", rendered.body).expect("writing to string cannot fail");
        }
    }
}
