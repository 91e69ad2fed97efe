//! Force results: component names, per-element end forces and the results dataset

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{GirderError, GirderResult};
use crate::lookup::ForceLookup;

/// Force components read by the diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceComponent {
    /// Bending moment about local z at the i-end
    #[serde(rename = "Mz_i")]
    MzI,
    /// Bending moment about local z at the j-end
    #[serde(rename = "Mz_j")]
    MzJ,
    /// Shear force along local y at the i-end
    #[serde(rename = "Vy_i")]
    VyI,
    /// Shear force along local y at the j-end
    #[serde(rename = "Vy_j")]
    VyJ,
}

impl ForceComponent {
    /// Name of the component in the results dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            ForceComponent::MzI => "Mz_i",
            ForceComponent::MzJ => "Mz_j",
            ForceComponent::VyI => "Vy_i",
            ForceComponent::VyJ => "Vy_j",
        }
    }
}

impl fmt::Display for ForceComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which internal force a diagram shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramKind {
    /// Bending moment Mz
    Moment,
    /// Shear force Vy
    Shear,
}

impl DiagramKind {
    /// Component read at the start of an element
    pub fn i_component(&self) -> ForceComponent {
        match self {
            DiagramKind::Moment => ForceComponent::MzI,
            DiagramKind::Shear => ForceComponent::VyI,
        }
    }

    /// Component read at the end of an element
    pub fn j_component(&self) -> ForceComponent {
        match self {
            DiagramKind::Moment => ForceComponent::MzJ,
            DiagramKind::Shear => ForceComponent::VyJ,
        }
    }

    /// Short symbol, e.g. `Mz`
    pub fn symbol(&self) -> &'static str {
        match self {
            DiagramKind::Moment => "Mz",
            DiagramKind::Shear => "Vy",
        }
    }

    /// Display unit
    pub fn unit(&self) -> &'static str {
        match self {
            DiagramKind::Moment => "kN·m",
            DiagramKind::Shear => "kN",
        }
    }

    /// Both kinds, moment first
    pub fn all() -> [DiagramKind; 2] {
        [DiagramKind::Moment, DiagramKind::Shear]
    }
}

/// Moment and shear at both ends of one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementEndForces {
    /// Moment at i-end
    pub mz_i: f64,
    /// Moment at j-end
    pub mz_j: f64,
    /// Shear at i-end
    pub vy_i: f64,
    /// Shear at j-end
    pub vy_j: f64,
}

impl ElementEndForces {
    /// Read all four components of an element; any missing one is an error
    pub fn read<F: ForceLookup + ?Sized>(forces: &F, element_id: u32) -> GirderResult<Self> {
        let read = |component: ForceComponent| forces.forces(element_id, component.as_str());
        Ok(Self {
            mz_i: read(DiagramKind::Moment.i_component())?,
            mz_j: read(DiagramKind::Moment.j_component())?,
            vy_i: read(DiagramKind::Shear.i_component())?,
            vy_j: read(DiagramKind::Shear.j_component())?,
        })
    }

    /// Value at the i-end for a diagram kind
    pub fn at_i(&self, kind: DiagramKind) -> f64 {
        match kind {
            DiagramKind::Moment => self.mz_i,
            DiagramKind::Shear => self.vy_i,
        }
    }

    /// Value at the j-end for a diagram kind
    pub fn at_j(&self, kind: DiagramKind) -> f64 {
        match kind {
            DiagramKind::Moment => self.mz_j,
            DiagramKind::Shear => self.vy_j,
        }
    }
}

/// On-disk layout of the results dataset: a labelled 2-D array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceDatasetData {
    /// Element labels (rows)
    pub elements: Vec<u32>,
    /// Component labels (columns)
    pub components: Vec<String>,
    /// Values, one row per element
    pub forces: Vec<Vec<f64>>,
}

/// Results dataset `forces(Element, Component)`
#[derive(Debug, Clone)]
pub struct ForceDataset {
    elements: Vec<u32>,
    components: Vec<String>,
    values: DMatrix<f64>,
    element_index: HashMap<u32, usize>,
    component_index: HashMap<String, usize>,
}

impl ForceDataset {
    /// Build a dataset from labels and a row-major value table.
    ///
    /// Fails if labels repeat or the table shape disagrees with the labels.
    pub fn new(elements: Vec<u32>, components: Vec<String>, rows: Vec<Vec<f64>>) -> GirderResult<Self> {
        if rows.len() != elements.len() {
            return Err(GirderError::ShapeMismatch(format!(
                "{} element labels but {} rows",
                elements.len(),
                rows.len()
            )));
        }

        let ncols = components.len();
        let mut flat = Vec::with_capacity(rows.len() * ncols);
        for (row, element) in rows.iter().zip(&elements) {
            if row.len() != ncols {
                return Err(GirderError::ShapeMismatch(format!(
                    "element {} has {} values, expected {}",
                    element,
                    row.len(),
                    ncols
                )));
            }
            flat.extend_from_slice(row);
        }

        let mut element_index = HashMap::with_capacity(elements.len());
        for (i, &element) in elements.iter().enumerate() {
            if element_index.insert(element, i).is_some() {
                return Err(GirderError::DuplicateId(format!("element {}", element)));
            }
        }

        let mut component_index = HashMap::with_capacity(ncols);
        for (j, component) in components.iter().enumerate() {
            if component_index.insert(component.clone(), j).is_some() {
                return Err(GirderError::DuplicateId(format!("component {}", component)));
            }
        }

        let values = DMatrix::from_row_slice(elements.len(), ncols, &flat);

        Ok(Self {
            elements,
            components,
            values,
            element_index,
            component_index,
        })
    }

    /// Build a dataset from its serialized form
    pub fn from_data(data: ForceDatasetData) -> GirderResult<Self> {
        Self::new(data.elements, data.components, data.forces)
    }

    /// Element labels in dataset order
    pub fn elements(&self) -> &[u32] {
        &self.elements
    }

    /// Component labels in dataset order
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// (elements, components)
    pub fn shape(&self) -> (usize, usize) {
        self.values.shape()
    }
}

impl ForceLookup for ForceDataset {
    fn forces(&self, element_id: u32, component: &str) -> GirderResult<f64> {
        let row = *self
            .element_index
            .get(&element_id)
            .ok_or(GirderError::ResultsElementNotFound(element_id))?;
        let col = *self
            .component_index
            .get(component)
            .ok_or_else(|| GirderError::ComponentNotFound {
                element: element_id,
                component: component.to_string(),
            })?;
        Ok(self.values[(row, col)])
    }
}
