//! Read-only lookups consumed by the extractor
//!
//! The extractor is generic over these traits so that the bridge tables and
//! the results dataset can be swapped for fixtures in tests.

use crate::error::GirderResult;

/// Node coordinate table
pub trait CoordinateLookup {
    /// Coordinates `[x, y, z]` of a node
    fn coordinate(&self, node_id: u32) -> GirderResult<[f64; 3]>;
}

/// Element connectivity table
pub trait ConnectivityLookup {
    /// Start and end node ids of an element
    fn endpoints(&self, element_id: u32) -> GirderResult<(u32, u32)>;
}

/// Force results keyed by element and component name
pub trait ForceLookup {
    /// Scalar result for one element and one named component
    fn forces(&self, element_id: u32, component: &str) -> GirderResult<f64>;
}
