// args.rs - Command line for ember-preview

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ember-preview", about = "Render an ember particle field to PNG snapshots")]
pub struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Frames to simulate
    #[arg(long, default_value_t = 240)]
    pub frames: u32,

    /// Save every Nth frame (0 = none)
    #[arg(long, default_value_t = 60)]
    pub every: u32,

    /// RNG seed; defaults to the clock
    #[arg(long)]
    pub seed: Option<u64>,

    /// Resize the viewport mid-run, e.g. `400x300@120`
    #[arg(long)]
    pub resize: Option<ResizeAt>,

    /// Output directory
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,
}

/// `WxH@FRAME`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAt {
    pub width: u32,
    pub height: u32,
    pub at: u32,
}

impl FromStr for ResizeAt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || format!("expected WxH@FRAME, got `{s}`");
        let (size, at) = s.split_once('@').ok_or_else(bad)?;
        let (w, h) = size.split_once('x').ok_or_else(bad)?;
        Ok(Self {
            width: w.trim().parse().map_err(|_| bad())?,
            height: h.trim().parse().map_err(|_| bad())?,
            at: at.trim().parse().map_err(|_| bad())?,
        })
    }
}
