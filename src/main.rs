//! Smile detection application for real-time webcam annotation.

use anyhow::Result;
use clap::Parser;
use log::info;
use smile_detection::app::SmileApp;
use smile_detection::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use (overrides the config file)
    #[arg(long)]
    cam: Option<i32>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Smile Detection");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    if let Some(cam) = args.cam {
        config.camera.index = cam;
    }

    config.validate()?;

    // Create and run application
    let mut app = SmileApp::new(&config)?;
    let stats = app.run()?;

    info!(
        "Done: {} frame(s) displayed, {} dropped",
        stats.frames_displayed, stats.frames_dropped
    );

    Ok(())
}
