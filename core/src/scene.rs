//! Scene-graph nodes.
//!
//! [`Node`] is a cheaply clonable shared handle over node state: every clone
//! observes the same name, mesh, and children, so a binding that keeps a
//! handle sees external material updates immediately. Material access
//! follows the host-engine shape — read a copy, modify it, write it back —
//! in both an immediate form and a suspending form.
//!
//! All access is expected from a single UI thread. The interior lock guards
//! individual reads and writes only; no cross-call read-modify-write
//! discipline, retry, or timeout is provided.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::material::{Material, MaterialError};
use crate::mesh::Mesh;

struct NodeState {
    name: String,
    mesh: Option<Mesh>,
    children: Vec<Node>,
}

/// A node in the host scene graph.
#[derive(Clone)]
pub struct Node {
    state: Arc<RwLock<NodeState>>,
}

impl Node {
    /// Creates a named node with no mesh and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(NodeState {
                name: name.into(),
                mesh: None,
                children: Vec::new(),
            })),
        }
    }

    /// Set the node's mesh.
    #[must_use]
    pub fn with_mesh(self, mesh: Mesh) -> Self {
        self.state.write().mesh = Some(mesh);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child node to an existing handle.
    pub fn add_child(&self, child: Node) {
        self.state.write().children.push(child);
    }

    /// The node's name.
    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    /// The node's children, in insertion order.
    pub fn children(&self) -> Vec<Node> {
        self.state.read().children.clone()
    }

    /// Whether two handles refer to the same node.
    pub fn same_node(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// This node or its first descendant with the given name.
    ///
    /// Depth-first in child order.
    pub fn find_named(&self, name: &str) -> Option<Node> {
        if self.state.read().name == name {
            return Some(self.clone());
        }
        let children = self.children();
        for child in &children {
            if let Some(found) = child.find_named(name) {
                return Some(found);
            }
        }
        None
    }

    /// A copy of the material at the given geometry subset.
    ///
    /// `None` if the node has no mesh or the index is out of range.
    pub fn material(&self, subset: usize) -> Option<Material> {
        self.state
            .read()
            .mesh
            .as_ref()?
            .subset(subset)
            .map(|s| s.material.clone())
    }

    /// Apply `f` to the material at `subset` and write the result back.
    ///
    /// The host-engine update shape: the closure edits a material in place
    /// and the node stores the edited copy. A missing mesh or subset is a
    /// no-op — materials are optional attachment points.
    pub fn update_material<F>(&self, subset: usize, f: F) -> Result<(), MaterialError>
    where
        F: FnOnce(&mut Material) -> Result<(), MaterialError>,
    {
        let mut state = self.state.write();
        let Some(slot) = state
            .mesh
            .as_mut()
            .and_then(|mesh| mesh.subsets.get_mut(subset))
        else {
            return Ok(());
        };
        f(&mut slot.material)
    }

    /// Suspending form of [`Node::material`].
    ///
    /// The suspension point is the call boundary: a host streaming its
    /// materials would resolve here once the material is resident. This
    /// in-memory host resolves immediately.
    pub async fn material_async(&self, subset: usize) -> Option<Material> {
        self.material(subset)
    }

    /// Suspending form of [`Node::update_material`].
    pub async fn update_material_async<F>(&self, subset: usize, f: F) -> Result<(), MaterialError>
    where
        F: FnOnce(&mut Material) -> Result<(), MaterialError>,
    {
        self.update_material(subset, f)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Node")
            .field("name", &state.name)
            .field("children", &state.children.len())
            .field("has_mesh", &state.mesh.is_some())
            .finish()
    }
}
