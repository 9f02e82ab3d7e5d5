//! CLI logic for the Maquette workspace generator.

pub mod acquiring;

mod args;

pub use args::Args;

use log::info;

use maquette::MaquetteError;

/// Run the workspace generator.
///
/// Builds the acquiring workspace from scratch and persists it to the
/// output path, merging layout positions from any previous file there.
///
/// # Errors
///
/// Returns `MaquetteError` for model or view construction errors and for
/// failures while writing the output file. A missing or unreadable
/// previous file is not an error; it just means no layout is merged.
pub fn run(args: &Args) -> Result<(), MaquetteError> {
    info!(output_path = args.output; "Generating workspace");

    let mut workspace = acquiring::build()?;
    workspace.persist(&args.output)?;

    info!(output_path = args.output; "Workspace written");

    Ok(())
}
