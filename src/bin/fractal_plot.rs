use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use plotty_fractals::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Render a RON scene file to an SVG ready for the plotter.
#[derive(Parser, Debug)]
#[command(name = "fractal-plot")]
#[command(about = "Draw a Koch or Sierpinski scene to SVG")]
struct Args {
    /// Scene file (see scenes/)
    scene: PathBuf,

    /// Output path; defaults to the scene path with an .svg extension
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let args = Args::parse();

    let plot = Plot::load(&args.scene)
        .with_context(|| format!("loading {}", args.scene.display()))?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.scene.with_extension("svg"));
    tracing::info!(scene = plot.scene.name(), out = %out.display(), "plot");

    let instructions = plot.scene.instructions()?;
    let mut turtle = Turtle::new();
    render(&instructions, &mut turtle);
    tracing::info!(
        instructions = instructions.len(),
        strokes = turtle.to_multiline().0.len(),
        dots = turtle.dots().0.len(),
        "generated"
    );

    let document = turtle.to_svg(&plot.arrangement(), &plot.style)?;
    svg::save(&out, &document).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "saved");
    Ok(())
}
