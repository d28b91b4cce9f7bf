use stiffx::{compute_beam_matrix, Notation, RenderedExpression, UNIT_RIGIDITY_FACTOR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 10 m beam with constant flexural rigidity
    let matrix = compute_beam_matrix(10.0)?;

    // Typeset the matrix with EI kept as a symbolic factor
    let rendered = RenderedExpression::matrix(&matrix, 3, Notation::Latex)
        .with_multiplier(UNIT_RIGIDITY_FACTOR);
    println!("{}", rendered.display_math());

    // The same matrix as plain text
    println!("{}", RenderedExpression::matrix(&matrix, 3, Notation::Plain));

    Ok(())
}
