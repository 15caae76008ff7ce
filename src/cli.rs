//! `tilekit` command line.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tilekit_core::units::{format_currency, format_feet};
use tilekit_designer::TileVisualizer;
use tilekit_settings::{Config, FileStorage, MemoryStorage, RecordStorage};

#[derive(Debug, Parser)]
#[command(
    name = "tilekit",
    about = "Tile pattern visualizer and flooring material estimator",
    version
)]
pub struct Cli {
    /// Configuration file (JSON or TOML). Defaults to the platform config dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print material quantities and costs.
    Estimate(DesignArgs),

    /// Render the floor and write a PNG snapshot.
    Export(ExportArgs),

    /// Store the design as the saved record.
    Save(DesignArgs),

    /// Print the saved design and its estimate.
    Load,
}

/// Design options shared by the commands. Unset options keep the defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct DesignArgs {
    /// Room size in feet, WIDTHxLENGTH (e.g. 8x10)
    #[arg(long)]
    pub room: Option<String>,

    /// Tile preset name or WIDTHxHEIGHT in inches (e.g. 12x24, "3x6 subway")
    #[arg(long)]
    pub tile: Option<String>,

    /// Grout width in inches (e.g. 1/8, 0.25)
    #[arg(long)]
    pub grout: Option<String>,

    /// Grout color, hex or swatch name
    #[arg(long)]
    pub grout_color: Option<String>,

    /// Tile color, hex or swatch name
    #[arg(long)]
    pub tile_color: Option<String>,

    /// Layout pattern
    #[arg(long)]
    pub pattern: Option<String>,

    /// Tile price per square foot
    #[arg(long)]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    /// Zoom factor (0.5 to 3.0)
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    /// Output directory (defaults to the configured export directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Estimate(args) => {
            let mut visualizer = scratch_visualizer(&config);
            apply_design_args(&mut visualizer, &args)?;
            print!("{}", describe(&visualizer));
            Ok(())
        }
        Commands::Export(args) => {
            let mut visualizer = scratch_visualizer(&config);
            apply_design_args(&mut visualizer, &args.design)?;
            visualizer.set_zoom(args.zoom);
            if let Some(dir) = args.out_dir {
                visualizer.set_export_dir(dir);
            }
            match visualizer.export_snapshot() {
                Some(path) => {
                    println!("{}", path.display());
                    Ok(())
                }
                None => bail!(latest_notice(&visualizer)),
            }
        }
        Commands::Save(args) => {
            let mut visualizer = stored_visualizer(&config);
            apply_design_args(&mut visualizer, &args)?;
            if !visualizer.save() {
                bail!(latest_notice(&visualizer));
            }
            println!("{}", latest_notice(&visualizer));
            Ok(())
        }
        Commands::Load => {
            let mut visualizer = stored_visualizer(&config);
            if !visualizer.load() {
                bail!(latest_notice(&visualizer));
            }
            print!("{}", describe(&visualizer));
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("loading config from {}", path.display())),
            Err(e) => {
                tracing::debug!(error = %e, "No config directory, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Visualizer that starts from defaults and never touches the saved record.
fn scratch_visualizer(config: &Config) -> TileVisualizer<MemoryStorage> {
    TileVisualizer::new(MemoryStorage::new(), config, SmallRng::from_os_rng())
}

fn stored_visualizer(config: &Config) -> TileVisualizer<FileStorage> {
    TileVisualizer::new(
        FileStorage::new(&config.storage.directory),
        config,
        SmallRng::from_os_rng(),
    )
}

/// Splits `AxB` into two numbers.
pub fn parse_pair(input: &str) -> Result<(String, String)> {
    let lower = input.trim().to_ascii_lowercase();
    let Some((a, b)) = lower.split_once('x') else {
        bail!("expected WIDTHxLENGTH, got '{}'", input);
    };
    Ok((a.trim().to_string(), b.trim().to_string()))
}

/// Applies every option that was given; any rejected value is an error.
pub fn apply_design_args<S: RecordStorage>(
    visualizer: &mut TileVisualizer<S>,
    args: &DesignArgs,
) -> Result<()> {
    if let Some(room) = &args.room {
        let (width, length) = parse_pair(room)?;
        if !visualizer.set_room_width_input(&width) || !visualizer.set_room_length_input(&length)
        {
            bail!("invalid room size '{}'", room);
        }
    }
    if let Some(tile) = &args.tile {
        if !visualizer.select_tile_preset(tile) {
            let (width, height) = parse_pair(tile)?;
            if !visualizer.set_custom_tile_input(&width, &height) {
                bail!("invalid tile size '{}'", tile);
            }
        }
    }
    if let Some(grout) = &args.grout {
        if !visualizer.set_grout_width_input(grout) {
            bail!("invalid grout width '{}'", grout);
        }
    }
    if let Some(color) = &args.grout_color {
        if !visualizer.set_grout_color_input(color) {
            bail!("invalid grout color '{}'", color);
        }
    }
    if let Some(color) = &args.tile_color {
        if !visualizer.set_tile_color_input(color) {
            bail!("invalid tile color '{}'", color);
        }
    }
    if let Some(pattern) = &args.pattern {
        if !visualizer.set_pattern_input(pattern) {
            bail!("unknown pattern '{}'", pattern);
        }
    }
    if let Some(price) = &args.price {
        if !visualizer.set_tile_price_input(price) {
            bail!("invalid tile price '{}'", price);
        }
    }
    Ok(())
}

fn latest_notice<S: RecordStorage>(visualizer: &TileVisualizer<S>) -> String {
    visualizer
        .notices()
        .latest()
        .map(|notice| notice.text.clone())
        .unwrap_or_default()
}

/// Design summary followed by the quantities.
pub fn describe<S: RecordStorage>(visualizer: &TileVisualizer<S>) -> String {
    let design = visualizer.design();
    format!(
        "Room:              {} x {}\n\
         Tile:              {}\" x {}\"\n\
         Grout:             {} {}\n\
         Tile color:        {}\n\
         Pattern:           {}\n\
         Tile price:        {}\n\
         \n\
         {}",
        format_feet(design.room.width()),
        format_feet(design.room.length()),
        design.tile.width(),
        design.tile.height(),
        design.grout.width,
        design.grout.color,
        design.tile_color,
        design.pattern.title(),
        format_currency(design.tile_price()),
        visualizer.quantities(),
    )
}
