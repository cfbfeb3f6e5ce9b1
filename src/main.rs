//! Kickstart's main application entry point and orchestration logic.
//! Parses command-line arguments, confirms overwrites of populated
//! destinations, and hands a finished configuration to the scaffold engine.

use std::path::Path;

use dialoguer::Confirm;
use kickstart::{
    cli::{config_from_args, get_args, Args},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    safety::is_non_empty_dir,
    scaffold::{scaffold_from_tree, scaffold_project},
    source::DiskTree,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Maps flags onto a scaffold configuration
/// 2. Asks for confirmation when the destination is populated
/// 3. Scaffolds from the embedded bundle, or from `--template DIR`
fn run(args: Args) -> Result<()> {
    let cfg = config_from_args(&args)?;
    if let Ok(dump) = serde_json::to_string_pretty(&cfg) {
        log::debug!("Resolved configuration: {}", dump);
    }

    let mut allow_overwrite = args.force;
    if !allow_overwrite && is_non_empty_dir(Path::new(&cfg.destination))? {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Destination {} is not empty. Existing files may be overwritten. Continue?",
                cfg.destination
            ))
            .default(false)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        if !confirmed {
            return Err(Error::ValidationError("cancelled".to_string()));
        }
        allow_overwrite = true;
    }

    match &args.template {
        Some(template_dir) => {
            let source = DiskTree::new(template_dir)?;
            scaffold_from_tree(&cfg, allow_overwrite, &source, None)?;
        }
        None => scaffold_project(&cfg, allow_overwrite)?,
    }

    println!("Project generated successfully in {}.", cfg.destination);
    Ok(())
}
