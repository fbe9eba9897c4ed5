//! Debug HUD demo
//!
//! Runs a scripted producer for a number of frames against an off-screen
//! canvas and writes the final frame as a PNG.

mod demo;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use debug_hud_core::{HudConfig, HudConfigExt};
use debug_hud_overlay::DebugOverlay;

#[derive(Parser)]
#[command(version, about = "Render the debug HUD off-screen")]
struct Cli {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 120)]
    frames: u64,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Where to write the last frame
    #[arg(short, long, default_value = "hud.png")]
    output: PathBuf,

    /// HUD config file (TOML). Defaults to the user config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append log lines every N frames (0 disables logging)
    #[arg(long, default_value_t = 30)]
    log_every: u64,
}

fn main() -> Result<(), String> {
    logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HudConfig::load_path(path).map_err(|e| e.to_string())?,
        None => HudConfig::load(),
    };

    let mut hud = DebugOverlay::new(&config, cli.width, cli.height).map_err(|e| e.to_string())?;
    hud.set_background([30, 30, 30, 255]);

    let timer = Instant::now();
    let mut drawn = 0;
    for frame in 0..cli.frames {
        demo::post_frame(hud.store_mut(), frame, cli.log_every);
        drawn = hud.render_frame();
    }
    tracing::info!(
        frames = cli.frames,
        last_frame_labels = drawn,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Simulation finished"
    );

    hud.canvas()
        .write_png(&cli.output)
        .map_err(|e| e.to_string())?;
    println!("wrote {}", cli.output.display());

    Ok(())
}
