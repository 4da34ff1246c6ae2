use anyhow::{anyhow, Context};
use clap::Parser;
use layer_gallery::prelude::*;
use layer_gallery_examples::{init_tracing, render_preview_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Render a flat PNG preview of one gallery example.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Category label, e.g. "Geo Layers".
    #[arg(long, default_value = "Geo Layers")]
    category: String,

    /// Example label, e.g. "TripsLayer".
    #[arg(long, default_value = "TripsLayer")]
    example: String,

    /// Control values as name=value; repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Reject control values off the step grid or out of range instead of clamping.
    #[arg(long)]
    reject: bool,

    /// Advance every control by this many steps before rendering.
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Seed for randomized properties.
    #[arg(long, default_value_t = 2025)]
    seed: u64,

    /// Image width and height in pixels.
    #[arg(long, default_value_t = 800)]
    size: u32,

    /// Output path.
    #[arg(long, default_value = "gallery-preview.png")]
    out: String,
}

fn parse_assignment(raw: &str) -> anyhow::Result<(&str, f64)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{raw}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid number in '{raw}'"))?;
    Ok((name.trim(), value))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let catalog = catalog();
    let mut selection = Selection::new(catalog, &args.category, &args.example)?;
    let policy = if args.reject {
        ControlPolicy::Reject
    } else {
        ControlPolicy::Clamp
    };

    for raw in &args.set {
        let (name, value) = parse_assignment(raw)?;
        let stored = selection.set_control(name, value, policy)?;
        info!("Control '{}' = {}.", name, stored);
    }

    let names: Vec<String> = selection
        .controls()
        .iter()
        .map(|(name, _)| name.to_owned())
        .collect();
    for _ in 0..args.ticks {
        for name in &names {
            selection.tick(name)?;
        }
    }

    let descriptor = selection.descriptor(catalog)?;
    let config = RenderConfig::new((args.size, args.size));
    let mut rng = StdRng::seed_from_u64(args.seed);
    render_preview_to_png(
        descriptor,
        selection.controls(),
        &config,
        &mut rng,
        &args.out,
    )?;

    Ok(())
}
