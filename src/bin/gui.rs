use std::path::PathBuf;

use clap::Parser;
use mandelbrot_explorer::{SessionArgs, SnapshotDirectory, run_gui};

/// Explore the Mandelbrot set: drag with the left button to zoom into a
/// rectangle, scroll to zoom about the cursor, drag with the right button to
/// pan. Press R to reset the view and S to save a snapshot.
#[derive(Debug, Parser)]
#[command(version)]
struct GuiArgs {
    #[command(flatten)]
    session: SessionArgs,
    /// Directory that S saves numbered PPM snapshots into
    #[arg(long, default_value = "output")]
    snapshot_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GuiArgs::parse();
    let config = args.session.to_config()?;

    run_gui(config, SnapshotDirectory::new(&args.snapshot_dir))?;

    Ok(())
}
