//! Girder Diagrams - bending moment and shear force diagrams for bridge girders
//!
//! This library reads the results of a structural analysis of a girder
//! bridge and draws them:
//! - 2D stacked Mz / Vy diagrams along the central girder
//! - 3D ribbon diagrams of every girder over the bridge deck
//!
//! Results are read from a labelled `forces(Element, Component)` dataset
//! holding `Mz_i`, `Mz_j`, `Vy_i` and `Vy_j` for every element.
//!
//! ## Example
//! ```rust
//! use girder_diagrams::prelude::*;
//!
//! let mut model = BridgeModel::new();
//! model.add_node(1, Node::new(0.0, 0.0, 0.0)).unwrap();
//! model.add_node(2, Node::new(5.0, 0.0, 0.0)).unwrap();
//! model.add_node(3, Node::new(10.0, 0.0, 0.0)).unwrap();
//! model.add_member(100, Member::new(1, 2)).unwrap();
//! model.add_member(101, Member::new(2, 3)).unwrap();
//!
//! let components = ["Mz_i", "Mz_j", "Vy_i", "Vy_j"].map(String::from).to_vec();
//! let forces = ForceDataset::new(
//!     vec![100, 101],
//!     components,
//!     vec![vec![10.0, 20.0, 2.0, 2.0], vec![20.0, 30.0, 2.0, 2.0]],
//! )
//! .unwrap();
//!
//! let diagrams = extract_girder(&[100, 101], &model, &model, &forces).unwrap();
//! assert_eq!(diagrams.moment.values(), vec![10.0, 20.0, 30.0]);
//! assert_eq!(diagrams.moment.positions(), vec![0.0, 5.0, 10.0]);
//! ```

pub mod colormap;
pub mod config;
pub mod elements;
pub mod error;
pub mod extract;
pub mod io;
pub mod lookup;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod results;
pub mod scene;

// Re-export common types
pub mod prelude {
    pub use crate::colormap::{ramp, Rgb, ValueRange};
    pub use crate::config::{DiagramOptions, GirderLayout, GirderPath};
    pub use crate::elements::{Member, Node};
    pub use crate::error::{GirderError, GirderResult};
    pub use crate::extract::{
        check_contiguity, extract_girder, extract_profile, DiagramSeries, GirderDiagrams,
        GirderProfile, Sample, Station,
    };
    pub use crate::lookup::{ConnectivityLookup, CoordinateLookup, ForceLookup};
    pub use crate::model::BridgeModel;
    pub use crate::results::{DiagramKind, ElementEndForces, ForceComponent, ForceDataset};
    pub use crate::scene::{build_scene, DeckMesh, GirderOutline, Ribbon, Scene3d};
}
