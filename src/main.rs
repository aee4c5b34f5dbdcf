use clap::Parser;
use eyre::WrapErr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use svg2dynmap::{
    collect_group_paths,
    dynmap::{collect_areas, Dynmap, Set},
    MapTransform,
};

/// Generates dynmap marker areas from the paths of an SVG image.
#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// SVG image holding the zone geometry
    #[clap(short, long, env = "IMAGE")]
    image: std::path::PathBuf,
    /// Marker set in the dynmap config to update or create
    #[clap(short = 'l', long, env = "MAP_LAYER")]
    map_layer: String,
    /// Dynmap config file to read from and write to
    #[clap(short, long, env = "DYNMAP_CONFIG")]
    dynmap_config: std::path::PathBuf,
    /// Group in the SVG whose paths become areas
    #[clap(long, env = "GROUP", default_value = "areas")]
    group: String,
    /// Offset in X from the SVG image
    #[clap(long, env = "OFFSET_X", default_value_t = 0.0)]
    offset_x: f64,
    /// Offset in Y from the SVG image
    #[clap(long, env = "OFFSET_Y", default_value_t = 0.0)]
    offset_y: f64,
    /// Scale of the resulting coordinates in X
    #[clap(long, env = "SCALE_X", default_value_t = 0.0)]
    scale_x: f64,
    /// Scale of the resulting coordinates in Y
    #[clap(long, env = "SCALE_Y", default_value_t = 0.0)]
    scale_y: f64,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let transform = MapTransform {
        offset_x: args.offset_x,
        offset_y: args.offset_y,
        scale_x: args.scale_x,
        scale_y: args.scale_y,
    };

    let mut config =
        Dynmap::from_file(&args.dynmap_config).wrap_err("could not read dynmap file")?;

    let paths = collect_group_paths(&args.image, &args.group, &transform)
        .wrap_err("could not get paths from svg")?;
    info!(
        "traced {} paths from group {:?} of {}",
        paths.len(),
        args.group,
        args.image.display()
    );

    let label = args.map_layer.clone();
    let set = config
        .sets
        .entry(args.map_layer)
        .or_insert_with(|| Set::new(label));
    set.areas = collect_areas(paths);

    config
        .write_to_file(&args.dynmap_config)
        .wrap_err("could not write config after editing")?;
    Ok(())
}
