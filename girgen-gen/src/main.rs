use anyhow::{Context, Result};
use std::path::PathBuf;

use clap::Parser;
use girgen_extract::{OverrideRegistry, Repository};
use girgen_util::{init_log, GenConfig};
use girgen_write::{write_output, Generator};
use log::*;

/// Generate GtkAda packages from a GIR file.
///
/// The output goes to generated/tmp.ada unless a JSON config named by the GIRGEN_CONFIG environment variable says
/// otherwise. Constructs that cannot be bound are listed on standard output.
#[derive(Parser)]
#[clap(version)]
struct Args {
    /// The GIR introspection document, e.g. /usr/share/gir-1.0/Gtk-2.0.gir
    #[clap(value_parser)]
    gir: PathBuf,

    /// The override database
    #[clap(value_parser)]
    overrides: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_log();

    let config = GenConfig::from_env().context("Failed to load the generator config")?;

    let repository = Repository::load(&args.gir)?;
    let overrides = OverrideRegistry::load(&args.overrides)?;
    info!(
        "loaded {} classes from namespace {}",
        repository.num_classes(),
        repository.namespace()
    );

    let output = Generator::new(&repository, &overrides, &config)?.generate()?;
    for diagnostic in &output.diagnostics {
        println!("{diagnostic}");
    }

    write_output(&config.output_path, &output.text)?;
    info!(
        "wrote {} packages to {}",
        output.num_packages,
        config.output_path.display()
    );

    Ok(())
}
