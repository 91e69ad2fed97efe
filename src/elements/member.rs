//! Member - a line element joining two nodes

use serde::{Deserialize, Serialize};

/// A line element of the bridge model.
///
/// A member carries topology only: its geometry comes from the coordinates
/// of its i-node (start) and j-node (end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Id of the i-node (start)
    pub i_node: u32,
    /// Id of the j-node (end)
    pub j_node: u32,
}

impl Member {
    /// Create a new member
    pub fn new(i_node: u32, j_node: u32) -> Self {
        Self { i_node, j_node }
    }

    /// Start and end node ids
    pub fn endpoints(&self) -> (u32, u32) {
        (self.i_node, self.j_node)
    }
}

impl From<[u32; 2]> for Member {
    fn from(arr: [u32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}
