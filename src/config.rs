//! Girder layout and diagram options

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{GirderError, GirderResult};

/// Elements and nodes along one longitudinal girder, in bridge order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GirderPath {
    /// Element ids, first span to last
    pub elements: Vec<u32>,
    /// Node ids along the girder (one more than elements). May be empty.
    #[serde(default)]
    pub nodes: Vec<u32>,
}

impl GirderPath {
    /// Create a girder path from its element and node sequences
    pub fn new(elements: Vec<u32>, nodes: Vec<u32>) -> Self {
        Self { elements, nodes }
    }

    /// Create a girder path with no configured node sequence
    pub fn from_elements(elements: Vec<u32>) -> Self {
        Self::new(elements, Vec::new())
    }
}

/// Table of girders making up the bridge deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirderLayout {
    /// Girders by id
    pub girders: BTreeMap<u32, GirderPath>,
    /// Girder shown in the 2D diagram
    pub central: u32,
}

impl GirderLayout {
    /// Get a girder by id
    pub fn girder(&self, id: u32) -> GirderResult<&GirderPath> {
        self.girders.get(&id).ok_or(GirderError::GirderNotFound(id))
    }

    /// The girder shown in the 2D diagram
    pub fn central_girder(&self) -> GirderResult<&GirderPath> {
        self.girder(self.central)
    }

    /// Check the layout is usable
    pub fn validate(&self) -> GirderResult<()> {
        if self.girders.is_empty() {
            return Err(GirderError::InvalidInput("layout has no girders".to_string()));
        }
        for (id, path) in &self.girders {
            if path.elements.is_empty() {
                return Err(GirderError::InvalidInput(format!("girder {} has no elements", id)));
            }
            if !path.nodes.is_empty() && path.nodes.len() != path.elements.len() + 1 {
                return Err(GirderError::InvalidInput(format!(
                    "girder {} lists {} nodes for {} elements",
                    id,
                    path.nodes.len(),
                    path.elements.len()
                )));
            }
        }
        self.central_girder().map(|_| ())
    }
}

impl Default for GirderLayout {
    /// Five-girder, nine-span deck of the reference bridge model
    fn default() -> Self {
        let mut girders = BTreeMap::new();
        girders.insert(
            1,
            GirderPath::new(
                vec![13, 22, 31, 40, 49, 58, 67, 76, 81],
                vec![1, 11, 16, 21, 26, 31, 36, 41, 46, 6],
            ),
        );
        girders.insert(
            2,
            GirderPath::new(
                vec![14, 23, 32, 41, 50, 59, 68, 77, 82],
                vec![2, 12, 17, 22, 27, 32, 37, 42, 47, 7],
            ),
        );
        girders.insert(
            3,
            GirderPath::new(
                vec![15, 24, 33, 42, 51, 60, 69, 78, 83],
                vec![3, 13, 18, 23, 28, 33, 38, 43, 48, 8],
            ),
        );
        girders.insert(
            4,
            GirderPath::new(
                vec![16, 25, 34, 43, 52, 61, 70, 79, 84],
                vec![4, 14, 19, 24, 29, 34, 39, 44, 49, 9],
            ),
        );
        girders.insert(
            5,
            GirderPath::new(
                vec![17, 26, 35, 44, 53, 62, 71, 80, 85],
                vec![5, 15, 20, 25, 30, 35, 40, 45, 50, 10],
            ),
        );
        Self { girders, central: 3 }
    }
}

/// Options for diagram generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    /// Vertical scale applied to force values in the 3D ribbons
    pub ribbon_scale: f64,
    /// Fail on non-contiguous girder paths instead of warning
    pub strict_contiguity: bool,
    /// Directory the HTML files are written to
    pub output_dir: PathBuf,
    /// File name of the 2D diagram
    pub file_2d: String,
    /// File name of the 3D bending moment diagram
    pub file_3d_moment: String,
    /// File name of the 3D shear force diagram
    pub file_3d_shear: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            ribbon_scale: 0.05,
            strict_contiguity: false,
            output_dir: PathBuf::from("."),
            file_2d: "girder_2d.html".to_string(),
            file_3d_moment: "girder_3d_bmd.html".to_string(),
            file_3d_shear: "girder_3d_sfd.html".to_string(),
        }
    }
}
