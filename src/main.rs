mod analysis;
mod cli;
mod report;

use analysis::run_analysis;
use clap::Parser;
use cli::Cli;
use report::render_summary;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Collect the element parameters from the flags or from a JSON file.
    let cli = Cli::parse();
    let request = cli.element.request()?;

    // Evaluate the closed-form stiffness matrix. Invalid lengths or negative
    // section properties surface here as an error message.
    let summary = run_analysis(&request)?;

    // Typeset the result for the chosen output format.
    let report = render_summary(&summary, cli.format)?;
    println!("{report}");

    Ok(())
}
