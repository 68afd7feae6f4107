use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use autoline_core::{load_scene_file, Rect};
use autoline_layout::{FlowLayout, FlowLayoutEngine, IntrinsicMeasurer, LayoutConfig};

#[derive(Parser)]
#[command(name = "autoline")]
#[command(author, version, about = "Lay out a scene of boxes in wrapping rows", long_about = None)]
struct Args {
    /// Path to the JSON scene file
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Container width, padding included. Overrides the value in the scene.
    #[arg(long)]
    width: Option<i32>,

    /// Fixed row height; 0 computes each row from its content. Overrides the scene attributes.
    #[arg(long)]
    row_height: Option<i32>,

    /// Align boxes to their top margin instead of centering them in the row
    #[arg(long)]
    no_center: bool,

    /// Print the placement as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    size: IVec2,
    boxes: Vec<BoxReport<'a>>,
}

#[derive(Serialize)]
struct BoxReport<'a> {
    id: &'a str,
    row: usize,
    rect: Rect,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.debug { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Validate file path
    if !args.scene.exists() {
        anyhow::bail!("Scene file not found: {}", args.scene.display());
    }

    if args.scene.extension().and_then(|ext| ext.to_str()) != Some("json") {
        warn!("File doesn't have .json extension: {}", args.scene.display());
    }

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let scene = load_scene(&args.scene)?;

    let width = args.width.unwrap_or(scene.width);
    let mut config = LayoutConfig::from_properties(width, &scene.attributes)
        .context("Invalid flow layout attributes in scene")?;
    if let Some(row_height) = args.row_height {
        config = config.with_row_height(Some(row_height));
    }
    if args.no_center {
        config = config.with_center_vertical_in_row(false);
    }

    info!(
        "Laying out {} boxes: available_width={}, row_height={:?}, center={}",
        scene.boxes.len(),
        config.available_width,
        config.row_height,
        config.center_vertical_in_row
    );

    let engine = FlowLayoutEngine::new().with_debug(args.debug);
    let layout = match engine.compute_layout(&scene.boxes, &config, &mut IntrinsicMeasurer) {
        Ok(layout) => layout,
        Err(never) => match never {},
    };

    let report = build_report(&scene.boxes, &layout);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize placement")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_scene(path: &Path) -> Result<autoline_core::Scene> {
    info!("Loading scene: {}", path.display());
    load_scene_file(path).with_context(|| format!("Failed to load scene {}", path.display()))
}

fn build_report<'a>(boxes: &'a [autoline_core::BoxSpec], layout: &FlowLayout) -> Report<'a> {
    let boxes = boxes
        .iter()
        .zip(&layout.placement.rects)
        .enumerate()
        .map(|(index, (spec, rect))| BoxReport {
            id: &spec.id,
            row: layout.row_of(index).unwrap_or_default(),
            rect: *rect,
        })
        .collect();

    Report {
        size: layout.placement.size,
        boxes,
    }
}

fn print_report(report: &Report<'_>) {
    println!("container {}x{}", report.size.x, report.size.y);
    for (index, entry) in report.boxes.iter().enumerate() {
        let label = if entry.id.is_empty() {
            format!("#{}", index)
        } else {
            entry.id.to_string()
        };
        println!(
            "{:<16} row {:>3}  left={:<5} top={:<5} right={:<5} bottom={}",
            label, entry.row, entry.rect.left, entry.rect.top, entry.rect.right, entry.rect.bottom
        );
    }
}
