//! Girder force extraction
//!
//! Walks a girder path element by element and turns the end forces of each
//! element into diagram samples. A path of N elements yields N+1 stations:
//! the i-end of the first element, then the j-end of every element. The
//! i-end values of the later elements are not read into the diagram.

use serde::{Deserialize, Serialize};

use crate::error::{GirderError, GirderResult};
use crate::lookup::{ConnectivityLookup, CoordinateLookup, ForceLookup};
use crate::results::{DiagramKind, ElementEndForces};

/// One point of a 2D diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Longitudinal position (X)
    pub position: f64,
    /// Force value at that position
    pub value: f64,
}

/// A node along a girder with both force values attached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Longitudinal coordinate
    pub x: f64,
    /// Transverse coordinate
    pub z: f64,
    /// Bending moment Mz
    pub mz: f64,
    /// Shear force Vy
    pub vy: f64,
}

impl Station {
    /// Value for a diagram kind
    pub fn value(&self, kind: DiagramKind) -> f64 {
        match kind {
            DiagramKind::Moment => self.mz,
            DiagramKind::Shear => self.vy,
        }
    }
}

/// Ordered (position, value) samples of one force component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSeries {
    /// Component shown
    pub kind: DiagramKind,
    /// Samples in bridge order
    pub samples: Vec<Sample>,
}

impl DiagramSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Positions, in order
    pub fn positions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// Values, in order
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Sample with the largest absolute value
    pub fn peak(&self) -> Option<Sample> {
        self.samples
            .iter()
            .copied()
            .fold(None, |best: Option<Sample>, s| match best {
                Some(b) if b.value.abs() >= s.value.abs() => Some(b),
                _ => Some(s),
            })
    }
}

/// Moment and shear series of one girder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirderDiagrams {
    /// Bending moment series
    pub moment: DiagramSeries,
    /// Shear force series
    pub shear: DiagramSeries,
}

impl GirderDiagrams {
    /// Series for a diagram kind
    pub fn series(&self, kind: DiagramKind) -> &DiagramSeries {
        match kind {
            DiagramKind::Moment => &self.moment,
            DiagramKind::Shear => &self.shear,
        }
    }
}

/// Stations of one girder, used by the 3D scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GirderProfile {
    /// Girder id
    pub girder: u32,
    /// N+1 stations in bridge order
    pub stations: Vec<Station>,
}

impl GirderProfile {
    /// Values of one component along the girder
    pub fn values(&self, kind: DiagramKind) -> Vec<f64> {
        self.stations.iter().map(|s| s.value(kind)).collect()
    }
}

/// Walk a girder path and collect its N+1 stations.
///
/// Every lookup failure aborts the walk; nothing partial is returned.
pub fn walk_path<C, N, F>(
    elements: &[u32],
    connectivity: &C,
    coordinates: &N,
    forces: &F,
) -> GirderResult<Vec<Station>>
where
    C: ConnectivityLookup + ?Sized,
    N: CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    if elements.is_empty() {
        return Err(GirderError::EmptyPath);
    }

    let mut stations = Vec::with_capacity(elements.len() + 1);
    for (i, &element) in elements.iter().enumerate() {
        let (start, end) = connectivity.endpoints(element)?;
        let [x_start, _, z_start] = coordinates.coordinate(start)?;
        let [x_end, _, z_end] = coordinates.coordinate(end)?;
        let f = ElementEndForces::read(forces, element)?;

        log::debug!(
            "element {}: nodes {} -> {}, Mz {:.3}/{:.3}, Vy {:.3}/{:.3}",
            element,
            start,
            end,
            f.mz_i,
            f.mz_j,
            f.vy_i,
            f.vy_j
        );

        if i == 0 {
            stations.push(Station {
                x: x_start,
                z: z_start,
                mz: f.at_i(DiagramKind::Moment),
                vy: f.at_i(DiagramKind::Shear),
            });
        }
        stations.push(Station {
            x: x_end,
            z: z_end,
            mz: f.at_j(DiagramKind::Moment),
            vy: f.at_j(DiagramKind::Shear),
        });
    }

    Ok(stations)
}

/// Extract the moment and shear series along a girder path
pub fn extract_girder<C, N, F>(
    elements: &[u32],
    connectivity: &C,
    coordinates: &N,
    forces: &F,
) -> GirderResult<GirderDiagrams>
where
    C: ConnectivityLookup + ?Sized,
    N: CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    let stations = walk_path(elements, connectivity, coordinates, forces)?;
    let series = |kind: DiagramKind| DiagramSeries {
        kind,
        samples: stations
            .iter()
            .map(|s| Sample {
                position: s.x,
                value: s.value(kind),
            })
            .collect(),
    };

    Ok(GirderDiagrams {
        moment: series(DiagramKind::Moment),
        shear: series(DiagramKind::Shear),
    })
}

/// Extract the stations of one girder for the 3D scene
pub fn extract_profile<C, N, F>(
    girder: u32,
    elements: &[u32],
    connectivity: &C,
    coordinates: &N,
    forces: &F,
) -> GirderResult<GirderProfile>
where
    C: ConnectivityLookup + ?Sized,
    N: CoordinateLookup + ?Sized,
    F: ForceLookup + ?Sized,
{
    let stations = walk_path(elements, connectivity, coordinates, forces)?;
    Ok(GirderProfile { girder, stations })
}

/// Check that a girder path is an unbroken chain.
///
/// Element k's end node must be element k+1's start node. When a node
/// sequence is given it must list the chain's nodes in order.
pub fn check_contiguity<C>(elements: &[u32], nodes: &[u32], connectivity: &C) -> GirderResult<()>
where
    C: ConnectivityLookup + ?Sized,
{
    if elements.is_empty() {
        return Err(GirderError::EmptyPath);
    }

    let ends = elements
        .iter()
        .map(|&e| connectivity.endpoints(e))
        .collect::<GirderResult<Vec<_>>>()?;

    for (k, pair) in ends.windows(2).enumerate() {
        let (_, prev_end) = pair[0];
        let (next_start, _) = pair[1];
        if prev_end != next_start {
            return Err(GirderError::NonContiguous {
                element: elements[k + 1],
                expected: prev_end,
                found: next_start,
            });
        }
    }

    if nodes.is_empty() {
        return Ok(());
    }

    let chain: Vec<u32> = std::iter::once(ends[0].0)
        .chain(ends.iter().map(|&(_, end)| end))
        .collect();
    if nodes.len() != chain.len() {
        return Err(GirderError::InvalidInput(format!(
            "node sequence has {} entries, chain has {}",
            nodes.len(),
            chain.len()
        )));
    }
    for (index, (&listed, &actual)) in nodes.iter().zip(&chain).enumerate() {
        if listed != actual {
            return Err(GirderError::NodeSequenceMismatch {
                index,
                expected: actual,
                found: listed,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Member, Node};
    use crate::model::BridgeModel;
    use crate::results::ForceDataset;

    fn components() -> Vec<String> {
        ["Mz_i", "Mz_j", "Vy_i", "Vy_j"].iter().map(|s| s.to_string()).collect()
    }

    /// Path [A=1, B=2]: nodes 1, 2, 3 at x = 0, 5, 10
    fn fixture() -> (BridgeModel, ForceDataset) {
        let mut model = BridgeModel::new();
        model.add_node(1, Node::new(0.0, 0.0, 2.0)).unwrap();
        model.add_node(2, Node::new(5.0, 0.0, 2.0)).unwrap();
        model.add_node(3, Node::new(10.0, 0.0, 2.0)).unwrap();
        model.add_member(1, Member::new(1, 2)).unwrap();
        model.add_member(2, Member::new(2, 3)).unwrap();

        let ds = ForceDataset::new(
            vec![1, 2],
            components(),
            vec![vec![10.0, 20.0, 4.0, 3.0], vec![20.0, 30.0, 2.0, 1.0]],
        )
        .unwrap();
        (model, ds)
    }

    #[test]
    fn test_two_element_moment_series() {
        let (model, ds) = fixture();
        let diagrams = extract_girder(&[1, 2], &model, &model, &ds).unwrap();

        let expected = [(0.0, 10.0), (5.0, 20.0), (10.0, 30.0)];
        assert_eq!(diagrams.moment.len(), 3);
        for (sample, (x, v)) in diagrams.moment.samples.iter().zip(expected) {
            assert_eq!(sample.position, x);
            assert_eq!(sample.value, v);
        }
    }

    #[test]
    fn test_i_values_of_later_elements_are_dropped() {
        let (model, ds) = fixture();
        let diagrams = extract_girder(&[1, 2], &model, &model, &ds).unwrap();
        // Vy_i of element 2 (2.0) never appears
        assert_eq!(diagrams.shear.values(), vec![4.0, 3.0, 1.0]);
    }

    #[test]
    fn test_missing_element_fails() {
        let (model, ds) = fixture();
        let err = extract_girder(&[1, 7], &model, &model, &ds).unwrap_err();
        assert!(matches!(err, GirderError::ElementNotFound(7)));
    }

    #[test]
    fn test_missing_node_fails() {
        let (mut model, ds) = fixture();
        model.nodes.remove(&3);
        let err = extract_girder(&[1, 2], &model, &model, &ds).unwrap_err();
        assert!(matches!(err, GirderError::NodeNotFound(3)));
    }

    #[test]
    fn test_missing_results_fail() {
        let (model, _) = fixture();
        let ds = ForceDataset::new(vec![1], components(), vec![vec![0.0; 4]]).unwrap();
        let err = extract_girder(&[1, 2], &model, &model, &ds).unwrap_err();
        assert!(matches!(err, GirderError::ResultsElementNotFound(2)));

        let ds = ForceDataset::new(
            vec![1, 2],
            vec!["Mz_i".to_string(), "Mz_j".to_string()],
            vec![vec![0.0; 2], vec![0.0; 2]],
        )
        .unwrap();
        let err = extract_girder(&[1], &model, &model, &ds).unwrap_err();
        assert!(matches!(err, GirderError::ComponentNotFound { element: 1, .. }));
    }

    #[test]
    fn test_empty_path() {
        let (model, ds) = fixture();
        assert!(matches!(
            extract_girder(&[], &model, &model, &ds),
            Err(GirderError::EmptyPath)
        ));
    }

    #[test]
    fn test_profile_keeps_transverse_coordinate() {
        let (model, ds) = fixture();
        let profile = extract_profile(3, &[1, 2], &model, &model, &ds).unwrap();
        assert_eq!(profile.girder, 3);
        assert!(profile.stations.iter().all(|s| s.z == 2.0));
        assert_eq!(profile.values(DiagramKind::Moment), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_peak() {
        let (model, ds) = fixture();
        let diagrams = extract_girder(&[1, 2], &model, &model, &ds).unwrap();
        let peak = diagrams.series(DiagramKind::Moment).peak().unwrap();
        assert_eq!(peak.position, 10.0);
        assert_eq!(peak.value, 30.0);
    }

    #[test]
    fn test_contiguity() {
        let (mut model, _) = fixture();
        check_contiguity(&[1, 2], &[1, 2, 3], &model).unwrap();
        check_contiguity(&[1, 2], &[], &model).unwrap();

        assert!(matches!(
            check_contiguity(&[1, 2], &[1, 3, 2], &model),
            Err(GirderError::NodeSequenceMismatch { index: 1, expected: 2, found: 3 })
        ));

        model.members.insert(2, Member::new(1, 3));
        assert!(matches!(
            check_contiguity(&[1, 2], &[], &model),
            Err(GirderError::NonContiguous { element: 2, expected: 2, found: 1 })
        ));
    }
}
