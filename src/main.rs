//! Headless front end for the cubit block editor core.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use cubit_blocks::Palette;
use cubit_edit::{BlockCaster, EditorCamera, EditorConfig, PickOrder};
use cubit_geom::Vec3i;
use cubit_world::Grid;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Voxel block editor core: build, pick and inspect block worlds")]
struct Args {
    /// Editor config (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Block palette (TOML); overrides the palette named in the config
    #[arg(long)]
    palette: Option<PathBuf>,

    /// More log output (-v debug, -vv trace); RUST_LOG still wins
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the default world and report blocks and faces per shape
    Stats,
    /// Cast a ray from the configured camera through a screen pixel
    Pick {
        #[arg(long)]
        x: f32,
        #[arg(long)]
        y: f32,
        /// Keep the farthest hit instead of the nearest
        #[arg(long)]
        farthest: bool,
    },
    /// Print the synthesized faces of one cell of the default world
    Faces {
        #[arg(long)]
        x: i32,
        #[arg(long)]
        y: i32,
        #[arg(long)]
        z: i32,
    },
    /// List palette presets with their face counts
    Palette,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn default_world(config: &EditorConfig) -> Result<Grid, Box<dyn Error>> {
    let w = &config.world;
    Ok(Grid::default_world(w.width, w.height, w.depth)?)
}

fn stats(config: &EditorConfig) -> Result<(), Box<dyn Error>> {
    let grid = default_world(config)?;
    let mut per_shape: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
    for block in grid.iter() {
        let entry = per_shape
            .entry(block.properties().shape().name())
            .or_default();
        entry.0 += 1;
        entry.1 += block.faces().len();
    }
    log::info!(
        target: "edit",
        "{} grid holds {} blocks",
        grid.dims(),
        grid.occupied_count()
    );
    for (shape, (blocks, faces)) in &per_shape {
        println!("{shape:<14} blocks={blocks:<4} faces={faces}");
    }
    let mut free = BTreeMap::<i32, usize>::new();
    for c in grid.vacant() {
        *free.entry(c.y).or_default() += 1;
    }
    for (y, count) in &free {
        println!("layer {y:<3} free={count}");
    }
    Ok(())
}

fn pick(config: &EditorConfig, x: f32, y: f32, farthest: bool) -> Result<(), Box<dyn Error>> {
    let grid = default_world(config)?;
    let camera = EditorCamera::from_config(&config.camera);
    let ray = camera
        .screen_ray(x, y)
        .ok_or("camera projection is not invertible")?;
    let order = PickOrder::from_shift(farthest);
    match BlockCaster::new(config.pick_epsilon).cast(&ray, &grid, camera.position, order) {
        Some(c) => println!("hit {c}"),
        None => println!("miss"),
    }
    Ok(())
}

fn faces(config: &EditorConfig, c: Vec3i) -> Result<(), Box<dyn Error>> {
    let grid = default_world(config)?;
    let Some(block) = grid.get(c)? else {
        println!("{c}: empty");
        return Ok(());
    };
    let props = block.properties();
    println!(
        "{c}: {} {:?} heights {}..{}",
        props.shape().name(),
        props.orientation(),
        props.height_low(),
        props.height_high()
    );
    for face in block.faces() {
        println!(
            "  {:?} normal={:?} corners={:?}",
            face.side,
            face.normal(),
            face.positions()
        );
    }
    Ok(())
}

fn list_palette(palette: &Palette) {
    for name in palette.names() {
        let Some(props) = palette.get(name) else {
            continue;
        };
        match cubit_mesh::synthesize(&props) {
            Ok(faces) => println!("{name:<12} {:<14} faces={}", props.shape().name(), faces.len()),
            Err(e) => println!("{name:<12} {e}"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let palette_path = args
        .palette
        .clone()
        .or_else(|| config.palette.clone().map(PathBuf::from));
    let palette = match palette_path {
        Some(path) => Palette::load(&path)?,
        None => Palette::builtin()?,
    };
    log::debug!(target: "edit", "palette has {} presets", palette.len());

    match args.command {
        Command::Stats => stats(&config),
        Command::Pick { x, y, farthest } => pick(&config, x, y, farthest),
        Command::Faces { x, y, z } => faces(&config, Vec3i::new(x, y, z)),
        Command::Palette => {
            list_palette(&palette);
            Ok(())
        }
    }
}
