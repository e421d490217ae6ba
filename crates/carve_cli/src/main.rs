//! carve3d: reconstruct an approximate 3D solid from three orthographic
//! silhouette images via shape-from-silhouette voxel carving.
//!
//! Pipeline: load and binarize the front/side/top masks, carve the
//! visual hull over a configurable bounding box, extract the boundary
//! surface, and write a world-unit OBJ mesh.

mod masks;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use carver::{carve_with, BoundingBox, CarveConfig, CarveOpts, ViewMasks};
use clap::Parser;
use glam::Vec3;
use hull_mesher::{extract_surface, write_obj, AxisOrder};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::masks::load_mask;

/// Exit status for unreadable or undecodable input images.
const EXIT_MASK_LOAD: u8 = 2;

#[derive(Parser)]
#[command(name = "carve3d")]
#[command(version)]
#[command(about = "Reconstruct a 3D mesh from front, side and top silhouette images")]
struct Cli {
    /// Front silhouette image (world X across, Z up)
    front: PathBuf,

    /// Side silhouette image (world Y across, Z up)
    side: PathBuf,

    /// Top silhouette image (world X across, +Y toward the top edge)
    top: PathBuf,

    /// Voxel grid resolution per axis
    #[arg(short, long, default_value_t = 200)]
    resolution: usize,

    /// Binarization threshold; intensity strictly above it is foreground
    #[arg(short, long, default_value_t = 127)]
    threshold: u8,

    /// World bounding box: xmin ymin zmin xmax ymax zmax
    #[arg(
        long,
        num_args = 6,
        allow_negative_numbers = true,
        value_names = ["XMIN", "YMIN", "ZMIN", "XMAX", "YMAX", "ZMAX"],
        default_values_t = [-0.5, -0.5, 0.0, 0.5, 0.5, 1.8]
    )]
    bounds: Vec<f32>,

    /// Samples evaluated per carve batch
    #[arg(long, default_value_t = 2_000_000)]
    batch_size: usize,

    /// Output OBJ path
    #[arg(short, long, default_value = "result.obj")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Fail fast on unreadable inputs, before any carving work.
    let masks = match load_all_masks(&cli) {
        Ok(masks) => masks,
        Err(err) => {
            error!("{:#}", anyhow::Error::new(err));
            return ExitCode::from(EXIT_MASK_LOAD);
        }
    };

    match run(&cli, masks) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_all_masks(cli: &Cli) -> Result<ViewMasks, masks::MaskLoadError> {
    let front = load_mask("front", &cli.front, cli.threshold)?;
    let side = load_mask("side", &cli.side, cli.threshold)?;
    let top = load_mask("top", &cli.top, cli.threshold)?;
    for (view, mask) in [("front", &front), ("side", &side), ("top", &top)] {
        info!(
            "{view} mask: {}x{} px, {} foreground",
            mask.width(),
            mask.height(),
            mask.foreground_count()
        );
    }
    Ok(ViewMasks { front, side, top })
}

fn run(cli: &Cli, masks: ViewMasks) -> anyhow::Result<()> {
    let bounds = BoundingBox::new(
        Vec3::new(cli.bounds[0], cli.bounds[1], cli.bounds[2]),
        Vec3::new(cli.bounds[3], cli.bounds[4], cli.bounds[5]),
    );
    let config =
        CarveConfig::new(bounds, cli.resolution).context("invalid carve configuration")?;

    info!(
        "carving {r}x{r}x{r} grid over [{}, {}] x [{}, {}] x [{}, {}]",
        bounds.min.x,
        bounds.max.x,
        bounds.min.y,
        bounds.max.y,
        bounds.min.z,
        bounds.max.z,
        r = cli.resolution
    );

    let opts = CarveOpts {
        batch_size: cli.batch_size,
    };
    let volume = carve_with(&config, &masks, &opts, None).context("carve failed")?;

    let occupied = volume.occupied_count();
    info!("occupied voxels: {occupied} / {}", volume.voxel_count());
    if volume.is_unoccupied() {
        warn!("carved volume is entirely empty; the mesh will have no geometry");
    } else if volume.is_full() {
        warn!("carved volume is entirely full; check mask binarization and bounds");
    }

    let mesh = extract_surface(&config, &volume, &AxisOrder::REVERSED);
    info!(
        "extracted {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    write_obj(&cli.output, &mesh).context("mesh export failed")?;
    info!("wrote {}", cli.output.display());
    Ok(())
}
