//! Loading bridge tables, results and layouts from JSON files
//!
//! File formats:
//! - nodes: `{ "1": [x, y, z], ... }`
//! - members: `{ "13": [i_node, j_node], ... }`
//! - forces: `{ "elements": [...], "components": [...], "forces": [[...], ...] }`
//! - layout: see [`GirderLayout`]

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::config::GirderLayout;
use crate::elements::{Member, Node};
use crate::error::{GirderError, GirderResult};
use crate::model::BridgeModel;
use crate::results::{ForceDataset, ForceDatasetData};

/// Entries of a JSON object keyed by integer id, in file order.
///
/// Deserializing straight into a `HashMap` keeps only the last of two equal
/// keys, so repeated ids are collected here and rejected afterwards.
struct IdTable<T>(Vec<(u32, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IdTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for TableVisitor<T> {
            type Value = IdTable<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by integer id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<u32, T>()? {
                    entries.push(entry);
                }
                Ok(IdTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

impl<T> IdTable<T> {
    /// Convert into a map, failing on the first repeated id
    fn into_unique<U: From<T>>(self, kind: &str) -> GirderResult<HashMap<u32, U>> {
        let mut table = HashMap::with_capacity(self.0.len());
        for (id, raw) in self.0 {
            if table.insert(id, U::from(raw)).is_some() {
                return Err(GirderError::DuplicateId(format!("{} {}", kind, id)));
            }
        }
        Ok(table)
    }
}

/// Parse a node coordinate table
pub fn parse_nodes(json: &str) -> GirderResult<HashMap<u32, Node>> {
    let raw: IdTable<[f64; 3]> = serde_json::from_str(json)?;
    raw.into_unique("node")
}

/// Parse an element connectivity table
pub fn parse_members(json: &str) -> GirderResult<HashMap<u32, Member>> {
    let raw: IdTable<[u32; 2]> = serde_json::from_str(json)?;
    raw.into_unique("member")
}

/// Parse a results dataset
pub fn parse_forces(json: &str) -> GirderResult<ForceDataset> {
    let data: ForceDatasetData = serde_json::from_str(json)?;
    ForceDataset::from_data(data)
}

/// Parse and validate a girder layout
pub fn parse_layout(json: &str) -> GirderResult<GirderLayout> {
    let layout: GirderLayout = serde_json::from_str(json)?;
    layout.validate()?;
    Ok(layout)
}

/// Load the bridge model from a node file and a member file
pub fn load_model(nodes: &Path, members: &Path) -> GirderResult<BridgeModel> {
    let nodes = parse_nodes(&fs::read_to_string(nodes)?)?;
    let members = parse_members(&fs::read_to_string(members)?)?;
    log::info!("Loaded {} nodes and {} members", nodes.len(), members.len());
    let mut model = BridgeModel::new();
    for (id, node) in nodes {
        model.add_node(id, node)?;
    }
    for (id, member) in members {
        model.add_member(id, member)?;
    }
    Ok(model)
}

/// Load the results dataset
pub fn load_forces(path: &Path) -> GirderResult<ForceDataset> {
    let ds = parse_forces(&fs::read_to_string(path)?)?;
    let (rows, cols) = ds.shape();
    log::info!("Loaded results dataset: {} elements x {} components", rows, cols);
    Ok(ds)
}

/// Load a girder layout
pub fn load_layout(path: &Path) -> GirderResult<GirderLayout> {
    parse_layout(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GirderError;
    use crate::lookup::ForceLookup;

    #[test]
    fn test_parse_nodes() {
        let nodes = parse_nodes(r#"{ "1": [0.0, 0.0, 0.0], "11": [4.5, 0.0, -1.25] }"#).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[&11].coords(), [4.5, 0.0, -1.25]);
    }

    #[test]
    fn test_parse_members() {
        let members = parse_members(r#"{ "13": [1, 11] }"#).unwrap();
        assert_eq!(members[&13].endpoints(), (1, 11));
    }

    #[test]
    fn test_non_numeric_key_rejected() {
        assert!(matches!(
            parse_nodes(r#"{ "N1": [0.0, 0.0, 0.0] }"#),
            Err(GirderError::SerializationError(_))
        ));
    }

    #[test]
    fn test_repeated_node_id_rejected() {
        let json = r#"{ "1": [0.0, 0.0, 0.0], "2": [5.0, 0.0, 0.0], "1": [5.0, 0.0, 0.0] }"#;
        match parse_nodes(json) {
            Err(GirderError::DuplicateId(what)) => assert_eq!(what, "node 1"),
            other => panic!("expected a duplicate node id, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_member_id_rejected() {
        let json = r#"{ "13": [1, 11], "13": [11, 1] }"#;
        match parse_members(json) {
            Err(GirderError::DuplicateId(what)) => assert_eq!(what, "member 13"),
            other => panic!("expected a duplicate member id, got {:?}", other),
        }
    }

    #[test]
    fn test_load_model_rejects_repeated_ids() {
        let dir = tempfile::tempdir().unwrap();
        let nodes = dir.path().join("nodes.json");
        let members = dir.path().join("members.json");
        fs::write(&nodes, r#"{ "1": [0.0, 0.0, 0.0], "2": [5.0, 0.0, 0.0] }"#).unwrap();
        fs::write(&members, r#"{ "13": [1, 2], "13": [2, 1] }"#).unwrap();
        assert!(matches!(
            load_model(&nodes, &members),
            Err(GirderError::DuplicateId(_))
        ));

        fs::write(&members, r#"{ "13": [1, 2] }"#).unwrap();
        let model = load_model(&nodes, &members).unwrap();
        assert_eq!(model.member(13).unwrap().endpoints(), (1, 2));
    }

    #[test]
    fn test_parse_forces() {
        let json = r#"{
            "elements": [15, 24],
            "components": ["Mz_i", "Mz_j"],
            "forces": [[1.0, 2.0], [3.0, 4.0]]
        }"#;
        let ds = parse_forces(json).unwrap();
        assert_eq!(ds.forces(24, "Mz_i").unwrap(), 3.0);
    }

    #[test]
    fn test_parse_forces_bad_shape() {
        let json = r#"{ "elements": [15], "components": ["Mz_i"], "forces": [[1.0, 2.0]] }"#;
        assert!(matches!(parse_forces(json), Err(GirderError::ShapeMismatch(_))));
    }

    #[test]
    fn test_parse_layout_validates() {
        let json = r#"{ "girders": { "1": { "elements": [13] } }, "central": 2 }"#;
        assert!(matches!(parse_layout(json), Err(GirderError::GirderNotFound(2))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_forces(Path::new("/nonexistent/forces.json")).unwrap_err();
        assert!(matches!(err, GirderError::IoError(_)));
    }
}
