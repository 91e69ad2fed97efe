//! 3D diagram scene: deck mesh, force ribbons and girder outlines
//!
//! Plot axes are x = longitudinal, y = scaled force (vertical), z = transverse.
//! The deck sits at y = 0.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::colormap::{ramp, Rgb, ValueRange};
use crate::error::{GirderError, GirderResult};
use crate::extract::GirderProfile;
use crate::results::DiagramKind;

/// Flat reference surface spanning all girder stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckMesh {
    /// Sorted unique longitudinal coordinates
    pub x: Vec<f64>,
    /// Sorted unique transverse coordinates
    pub z: Vec<f64>,
}

impl DeckMesh {
    /// Build the mesh from every station of every girder
    pub fn from_profiles(profiles: &[GirderProfile]) -> Self {
        let stations = profiles.iter().flat_map(|p| p.stations.iter());
        let x = sorted_unique(stations.clone().map(|s| s.x));
        let z = sorted_unique(stations.map(|s| s.z));
        Self { x, z }
    }

    /// Meshgrid rows (one per z) of x coordinates
    pub fn grid_x(&self) -> Vec<Vec<f64>> {
        self.z.iter().map(|_| self.x.clone()).collect()
    }

    /// Meshgrid rows (one per z) of z coordinates
    pub fn grid_z(&self) -> Vec<Vec<f64>> {
        self.z.iter().map(|&z| vec![z; self.x.len()]).collect()
    }

    /// Meshgrid rows of deck heights (all zero)
    pub fn grid_y(&self) -> Vec<Vec<f64>> {
        self.z.iter().map(|_| vec![0.0; self.x.len()]).collect()
    }

    /// Grid lines: one per z row, then one per x column
    pub fn grid_lines(&self) -> Vec<Vec<Point3<f64>>> {
        let rows = self
            .z
            .iter()
            .map(|&z| self.x.iter().map(|&x| Point3::new(x, 0.0, z)).collect());
        let cols = self
            .x
            .iter()
            .map(|&x| self.z.iter().map(|&z| Point3::new(x, 0.0, z)).collect());
        rows.chain(cols).collect()
    }
}

fn sorted_unique<I: Iterator<Item = f64>>(values: I) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.total_cmp(b));
    v.dedup();
    v
}

/// Colored quad between two consecutive stations of a girder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ribbon {
    /// Girder id
    pub girder: u32,
    /// Segment index along the girder
    pub segment: usize,
    /// Deck start, deck end, force end, force start
    pub vertices: [Point3<f64>; 4],
    /// Fill color, from the value at the segment start
    pub color: Rgb,
    /// Force value at the segment start
    pub value: f64,
}

impl Ribbon {
    /// Triangle fan splitting the quad
    pub const TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];
}

/// Force outline and deck line of one girder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirderOutline {
    /// Girder id
    pub girder: u32,
    /// Scaled force polyline
    pub force: Vec<Point3<f64>>,
    /// Girder line on the deck
    pub deck: Vec<Point3<f64>>,
}

/// Everything the 3D renderer draws for one diagram kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene3d {
    /// Component shown
    pub kind: DiagramKind,
    /// Value range shared by all girders
    pub range: ValueRange,
    /// Reference deck
    pub deck: DeckMesh,
    /// Ribbons of all girders
    pub ribbons: Vec<Ribbon>,
    /// One outline per girder
    pub outlines: Vec<GirderOutline>,
}

/// Build the 3D scene for one diagram kind.
///
/// Colors are normalized against the range of all girders together.
pub fn build_scene(profiles: &[GirderProfile], kind: DiagramKind, scale: f64) -> GirderResult<Scene3d> {
    let range = ValueRange::from_values(profiles.iter().flat_map(|p| p.values(kind)))
        .ok_or_else(|| GirderError::InvalidInput("no finite girder values to draw".to_string()))?;

    let mut ribbons = Vec::new();
    let mut outlines = Vec::with_capacity(profiles.len());

    for profile in profiles {
        let st = &profile.stations;
        for (segment, pair) in st.windows(2).enumerate() {
            let (a, b) = (pair[0], pair[1]);
            let (va, vb) = (a.value(kind), b.value(kind));
            ribbons.push(Ribbon {
                girder: profile.girder,
                segment,
                vertices: [
                    Point3::new(a.x, 0.0, a.z),
                    Point3::new(b.x, 0.0, b.z),
                    Point3::new(b.x, vb * scale, b.z),
                    Point3::new(a.x, va * scale, a.z),
                ],
                color: ramp(range.normalize(va)),
                value: va,
            });
        }

        outlines.push(GirderOutline {
            girder: profile.girder,
            force: st
                .iter()
                .map(|s| Point3::new(s.x, s.value(kind) * scale, s.z))
                .collect(),
            deck: st.iter().map(|s| Point3::new(s.x, 0.0, s.z)).collect(),
        });
    }

    Ok(Scene3d {
        kind,
        range,
        deck: DeckMesh::from_profiles(profiles),
        ribbons,
        outlines,
    })
}
