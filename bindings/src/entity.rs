//! Entity descriptors: name-addressed binding templates and their
//! resolution against a live scene graph.

use glimmer_core::scene::Node;

use crate::attribute::AnyAttribute;

/// A named entity descriptor carrying attribute bindings.
///
/// Descriptors are immutable templates. [`EntityBinding::with_node`] returns
/// a bound copy and never mutates the receiver, so one template can be
/// resolved against any number of scene graphs.
#[derive(Debug, Clone)]
pub struct EntityBinding {
    name: String,
    node: Option<Node>,
    attributes: Vec<AnyAttribute>,
}

impl EntityBinding {
    /// Creates an unbound descriptor for the entity named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: None,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute binding.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<AnyAttribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// The entity name this descriptor resolves by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound node, if resolution attached one.
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    /// Whether resolution attached a node.
    pub fn is_bound(&self) -> bool {
        self.node.is_some()
    }

    /// The attribute bindings, in declaration order.
    pub fn attributes(&self) -> &[AnyAttribute] {
        &self.attributes
    }

    /// Resolve this descriptor against `root`.
    ///
    /// Looks for `root` itself or a descendant named [`Self::name`]. On a
    /// hit, returns a bound copy with the found node attached and every
    /// attribute rebound to that same node. On a miss, logs one diagnostic
    /// and returns an unchanged clone — callers always receive a valid,
    /// possibly inert, descriptor.
    #[must_use]
    pub fn with_node(&self, root: &Node) -> Self {
        let Some(found) = root.find_named(&self.name) else {
            log::warn!(
                "no entity named {:?} under {:?}",
                self.name,
                root.name()
            );
            return self.clone();
        };
        Self {
            name: self.name.clone(),
            node: Some(found.clone()),
            attributes: self
                .attributes
                .iter()
                .map(|a| a.with_node(found.clone()))
                .collect(),
        }
    }

    /// Render every attribute control in declaration order.
    pub fn show(&self, ui: &mut egui::Ui) {
        for attribute in &self.attributes {
            attribute.show(ui);
        }
    }
}

/// A root node plus the entity bindings resolved against it.
///
/// The flattened, type-erased view a UI panel iterates: every binding of
/// every entity, in declaration order, without generic-type plumbing.
#[derive(Debug, Clone)]
pub struct BindingSet {
    root: Node,
    entities: Vec<EntityBinding>,
}

impl BindingSet {
    /// Creates an empty set over `root`.
    pub fn new(root: Node) -> Self {
        Self {
            root,
            entities: Vec::new(),
        }
    }

    /// Resolve `template` against the root and keep the bound result.
    #[must_use]
    pub fn bind(mut self, template: EntityBinding) -> Self {
        let bound = template.with_node(&self.root);
        self.entities.push(bound);
        self
    }

    /// The root node bindings resolve against.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The resolved entity bindings, in bind order.
    pub fn entities(&self) -> &[EntityBinding] {
        &self.entities
    }

    /// Every attribute of every entity, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AnyAttribute> {
        self.entities.iter().flat_map(|e| e.attributes().iter())
    }

    /// Render each entity's controls under a named header.
    pub fn show(&self, ui: &mut egui::Ui) {
        for entity in &self.entities {
            egui::CollapsingHeader::new(egui::RichText::new(entity.name()).strong())
                .default_open(true)
                .show(ui, |ui| entity.show(ui));
        }
    }
}
