//! Girder diagram generator
//!
//! Reads the bridge tables and the results dataset, then writes the 2D
//! central girder diagram and the 3D moment and shear diagrams as HTML.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use girder_diagrams::config::{DiagramOptions, GirderLayout};
use girder_diagrams::error::GirderError;
use girder_diagrams::{io, pipeline};

#[derive(Debug, Parser)]
#[command(name = "girder-diagrams", version, about = "Bending moment and shear force diagrams for bridge girders")]
struct Cli {
    /// Node coordinate table (JSON: id -> [x, y, z])
    #[arg(long)]
    nodes: PathBuf,

    /// Element connectivity table (JSON: id -> [i_node, j_node])
    #[arg(long)]
    members: PathBuf,

    /// Results dataset (JSON: elements, components, forces)
    #[arg(long)]
    forces: PathBuf,

    /// Girder layout; the built-in five-girder deck when omitted
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Output directory for the HTML files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Vertical scale of the 3D ribbons
    #[arg(long)]
    scale: Option<f64>,

    /// Fail on girder paths that are not a continuous chain
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// 2D moment and shear diagram of the central girder
    TwoD,
    /// 3D moment and shear diagrams of every girder
    ThreeD,
    /// Both (default)
    All,
}

/// Context for a failed diagram stage
fn failure_context(stage: &str, err: &GirderError) -> String {
    if err.is_lookup() {
        format!("{} failed: the input tables do not cover the girder layout", stage)
    } else {
        format!("{} failed", stage)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let model = io::load_model(&cli.nodes, &cli.members)
        .with_context(|| format!("loading {} and {}", cli.nodes.display(), cli.members.display()))?;
    let forces = io::load_forces(&cli.forces)
        .with_context(|| format!("loading {}", cli.forces.display()))?;
    let layout = match &cli.layout {
        Some(path) => io::load_layout(path).with_context(|| format!("loading {}", path.display()))?,
        None => GirderLayout::default(),
    };

    let mut options = DiagramOptions {
        output_dir: cli.out_dir.clone(),
        strict_contiguity: cli.strict,
        ..DiagramOptions::default()
    };
    if let Some(scale) = cli.scale {
        options.ribbon_scale = scale;
    }

    std::fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("creating {}", options.output_dir.display()))?;

    let command = cli.command.unwrap_or(Command::All);

    if matches!(command, Command::TwoD | Command::All) {
        let path = pipeline::write_2d(&model, &forces, &layout, &options)
            .map_err(|err| {
                let context = failure_context("2D diagram", &err);
                anyhow::Error::new(err).context(context)
            })?;
        log::info!("Successfully created {}", path.display());
    }

    if matches!(command, Command::ThreeD | Command::All) {
        let paths = pipeline::write_3d(&model, &forces, &layout, &options)
            .map_err(|err| {
                let context = failure_context("3D diagrams", &err);
                anyhow::Error::new(err).context(context)
            })?;
        for path in paths {
            log::info!("Successfully created {}", path.display());
        }
    }

    Ok(())
}
