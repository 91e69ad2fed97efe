//! Bridge model - node coordinates and element connectivity

use std::collections::HashMap;

use crate::elements::{Member, Node};
use crate::error::{GirderError, GirderResult};
use crate::lookup::{ConnectivityLookup, CoordinateLookup};

/// Static geometry and topology of the bridge.
///
/// Both tables are filled once and then only read. Members are not checked
/// against the node table when added; a dangling node id surfaces as
/// [`GirderError::NodeNotFound`] when a girder path is walked.
#[derive(Debug, Clone, Default)]
pub struct BridgeModel {
    /// Nodes by id
    pub nodes: HashMap<u32, Node>,
    /// Members by id
    pub members: HashMap<u32, Member>,
}

impl BridgeModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the model
    pub fn add_node(&mut self, id: u32, node: Node) -> GirderResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GirderError::DuplicateId(format!("node {}", id)));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Add a member to the model
    pub fn add_member(&mut self, id: u32, member: Member) -> GirderResult<()> {
        if self.members.contains_key(&id) {
            return Err(GirderError::DuplicateId(format!("member {}", id)));
        }
        self.members.insert(id, member);
        Ok(())
    }

    /// Get a node by id
    pub fn node(&self, id: u32) -> GirderResult<&Node> {
        self.nodes.get(&id).ok_or(GirderError::NodeNotFound(id))
    }

    /// Get a member by id
    pub fn member(&self, id: u32) -> GirderResult<&Member> {
        self.members.get(&id).ok_or(GirderError::ElementNotFound(id))
    }
}

impl CoordinateLookup for BridgeModel {
    fn coordinate(&self, node_id: u32) -> GirderResult<[f64; 3]> {
        self.node(node_id).map(Node::coords)
    }
}

impl ConnectivityLookup for BridgeModel {
    fn endpoints(&self, element_id: u32) -> GirderResult<(u32, u32)> {
        self.member(element_id).map(Member::endpoints)
    }
}
