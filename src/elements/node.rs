//! Node - a point of the bridge model in 3D space

use serde::{Deserialize, Serialize};

/// A node of the bridge model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate (longitudinal)
    pub x: f64,
    /// Y coordinate (vertical)
    pub y: f64,
    /// Z coordinate (transverse)
    pub z: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Node {
    fn from(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.0, 2.0, 3.0);
        assert_eq!(node.x, 1.0);
        assert_eq!(node.y, 2.0);
        assert_eq!(node.z, 3.0);
    }

    #[test]
    fn test_node_from_array() {
        let node = Node::from([5.0, 0.0, -2.5]);
        assert_eq!(node.coords(), [5.0, 0.0, -2.5]);
    }
}
