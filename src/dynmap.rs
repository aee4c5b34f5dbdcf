//! Serde models for the dynmap marker configuration and the collector
//! that turns traced paths into marker areas.
//!
//! Field names follow the YAML keys dynmap persists, including the odd
//! `fillOPacity` capitalisation. Subtrees this tool never touches
//! (icons, circles, lines, playersets) are carried as loose values so a
//! rewrite does not disturb them.

use std::{collections::HashMap, fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{svg::MapPath, Error};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dynmap {
    pub icons: HashMap<String, serde_yaml::Value>,
    pub sets: HashMap<String, Set>,
    pub playersets: HashMap<String, serde_yaml::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Set {
    pub hide: bool,
    pub circles: HashMap<String, serde_yaml::Value>,
    pub deficon: String,
    pub areas: HashMap<String, Area>,
    pub label: String,
    pub markers: HashMap<String, Marker>,
    pub lines: HashMap<String, serde_yaml::Value>,
    pub layerprio: i64,
}

impl Set {
    /// Fresh marker set for a layer this tool creates: hidden by
    /// default, nothing in it yet.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            hide: true,
            deficon: "default".to_string(),
            label: label.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Marker {
    pub world: String,
    pub markup: bool,
    pub icon: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    #[serde(rename = "fillColor")]
    pub fill_color: i64,
    pub world: String,
    pub markup: bool,
    pub ytop: f64,
    pub ybottom: f64,
    #[serde(rename = "fillOPacity")]
    pub fill_opacity: f64,
    #[serde(rename = "strokeWeight")]
    pub stroke_weight: i64,
    pub label: String,
    #[serde(rename = "strokeColor")]
    pub stroke_color: i64,
    #[serde(rename = "strokeOpacity")]
    pub stroke_opacity: f64,
    pub x: Vec<f64>,
    pub z: Vec<f64>,
}

impl Area {
    /// Builds an area from a traced path. Presentation attributes are
    /// fixed defaults, not derived from the drawing; the drawing's y
    /// axis becomes the map's z axis.
    pub fn from_path(path: MapPath) -> Self {
        let (x, z) = path.points.into_iter().map(|c| (c.x, c.y)).unzip();
        Self {
            fill_color: 0xFFFFFF,
            world: "world".to_string(),
            markup: false,
            ytop: 64.0,
            ybottom: 64.0,
            fill_opacity: 0.35,
            stroke_weight: 3,
            label: path.name,
            stroke_color: 0xFFFFFF,
            stroke_opacity: 0.8,
            x,
            z,
        }
    }
}

/// Keys every traced path `area_{i}` by document order. The caller
/// assigns the result over a set's areas wholesale: a run replaces the
/// generated areas entirely instead of merging with the previous run.
pub fn collect_areas(paths: Vec<MapPath>) -> HashMap<String, Area> {
    paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| (format!("area_{i}"), Area::from_path(path)))
        .collect()
}

impl Dynmap {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Writes the whole configuration next to the target and renames it
    /// into place, so a failed run never leaves a half-written file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let file = fs::File::create(&tmp)?;
        serde_yaml::to_writer(file, self)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}
