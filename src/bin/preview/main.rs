// ember-preview - Render an ember field offline to PNG snapshots
//
// Runs the same frame loop the browser does, against a software raster,
// and writes every Nth frame to disk.
//
// Usage: cargo run --bin ember-preview -- [--width 800] [--height 600]
//            [--frames 240] [--every 60] [--seed N] [--resize 400x300@120]

mod args;

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use ember_field::{Animator, FrameOutcome, Raster};
use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use args::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut animator = Animator::new(
        Raster::new(args.width, args.height),
        args.width,
        args.height,
        SmallRng::seed_from_u64(seed),
    );
    println!(
        "Rendering {} frames at {}x{} ({} particles, seed {})...",
        args.frames,
        args.width,
        args.height,
        animator.field().len(),
        seed
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let mut respawns = 0;
    let mut written = 0;
    for frame in 1..=args.frames {
        if let Some(r) = args.resize.filter(|r| r.at == frame) {
            animator.resize(r.width, r.height);
        }

        match animator.frame() {
            FrameOutcome::Drawn { respawned } => respawns += respawned,
            FrameOutcome::Stopped => break,
        }

        if args.every > 0 && frame % args.every == 0 {
            let path = args.out.join(format!("frame_{frame:05}.png"));
            let raster = animator.surface();
            let img = RgbaImage::from_raw(raster.width(), raster.height(), raster.as_raw().to_vec())
                .context("raster size does not match its buffer")?;
            img.save(&path).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
            written += 1;
        }
    }

    println!("Done: {written} snapshots, {respawns} respawns.");
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
