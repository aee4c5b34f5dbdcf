#[macro_use]
extern crate tracing;

pub mod dynmap;
pub mod svg;

use crate::svg::SvgAreaReader;
pub use crate::svg::{trace_path, MapPath, MapTransform};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open svg image")]
    SvgOpen(#[source] std::io::Error),
    #[error("could not access dynmap configuration")]
    Io(#[from] std::io::Error),
    #[error("malformed dynmap configuration")]
    Yaml(#[from] serde_yaml::Error),
}

/// Reads the SVG image at `path` and traces every path of the given
/// group into map space. An absent or empty group is not an error, it
/// yields no paths.
pub fn collect_group_paths(
    path: impl AsRef<std::path::Path>,
    group: &str,
    transform: &MapTransform,
) -> Result<Vec<MapPath>, Error> {
    let mut buff = String::with_capacity(4096);
    let reader = SvgAreaReader::open(path, group, &mut buff).map_err(Error::SvgOpen)?;
    Ok(trace_all(reader, transform))
}

/// Same as [`collect_group_paths`] for an in-memory document.
pub fn collect_group_paths_from_str(
    content: &str,
    group: &str,
    transform: &MapTransform,
) -> Result<Vec<MapPath>, Error> {
    let reader = SvgAreaReader::read(content, group).map_err(Error::SvgOpen)?;
    Ok(trace_all(reader, transform))
}

fn trace_all(reader: SvgAreaReader<'_>, transform: &MapTransform) -> Vec<MapPath> {
    let paths: Vec<MapPath> = reader
        .map(|(name, data)| MapPath {
            name,
            points: trace_path(&data, transform),
        })
        .collect();
    debug!("traced {} paths", paths.len());
    paths
}
