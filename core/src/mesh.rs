//! Meshes split into geometry subsets.
//!
//! A [`Mesh`] carries ordered [`GeometrySubset`]s; each subset is the unit a
//! material attaches to, addressed by index from parameter operations.
//! Vertex data stays with the host renderer — only the index-range
//! bookkeeping a binding layer needs is modeled here.

use crate::material::Material;

/// One sub-mesh: an index range rendered with its own material.
#[derive(Debug, Clone)]
pub struct GeometrySubset {
    /// The material bound to this subset.
    pub material: Material,
    /// First index of the subset's range.
    pub first_index: u32,
    /// Number of indices in the subset's range.
    pub index_count: u32,
}

impl GeometrySubset {
    /// Creates a subset with an empty index range.
    pub fn new(material: Material) -> Self {
        Self {
            material,
            first_index: 0,
            index_count: 0,
        }
    }

    /// Set the index range.
    #[must_use]
    pub fn with_index_range(mut self, first_index: u32, index_count: u32) -> Self {
        self.first_index = first_index;
        self.index_count = index_count;
        self
    }
}

/// A mesh: named, ordered geometry subsets.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Mesh name, if any.
    pub name: Option<String>,
    /// Geometry subsets in draw order.
    pub subsets: Vec<GeometrySubset>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mesh name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a geometry subset.
    #[must_use]
    pub fn with_subset(mut self, subset: GeometrySubset) -> Self {
        self.subsets.push(subset);
        self
    }

    /// A unit box with a single subset carrying `material`.
    ///
    /// Fixture-grade geometry: 12 triangles' worth of index bookkeeping and
    /// no vertex data.
    pub fn box_mesh(material: Material) -> Self {
        Self::new()
            .with_name("box")
            .with_subset(GeometrySubset::new(material).with_index_range(0, 36))
    }

    /// The subset at `index`, if present.
    pub fn subset(&self, index: usize) -> Option<&GeometrySubset> {
        self.subsets.get(index)
    }
}
