//! # Glimmer Bindings
//!
//! A declarative binding layer that exposes named shader parameters of
//! scene-graph nodes as two-way-bound egui controls.
//!
//! The pieces:
//!
//! - [`EntityAttribute`] — the capability set every binding offers: identity,
//!   display name, a two-way value accessor, a control renderer, and a
//!   bound-copy constructor.
//! - [`AnyAttribute`] / [`AttributeValue`] — type erasure over the shipped
//!   attribute kinds so heterogeneous bindings share one ordered collection.
//! - [`EntityBinding`] — a named descriptor resolved against a scene graph
//!   by name lookup; misses log a diagnostic and leave the descriptor inert.
//! - [`bridge`] — the get/set translation between a node's per-subset
//!   material parameters and a binding's semantic value, in an immediate
//!   and a suspending form.
//! - [`attributes`] — the shipped variants: color picker, float drag value,
//!   boolean toggle.
//!
//! # Example
//!
//! ```
//! use glimmer_core::color::Color;
//! use glimmer_core::material::{Material, ParameterValue};
//! use glimmer_core::mesh::Mesh;
//! use glimmer_core::scene::Node;
//!
//! use glimmer_bindings::{BindingSet, EntityBinding};
//! use glimmer_bindings::attributes::ColorAttribute;
//!
//! let material = Material::new().with_parameter("Color", ParameterValue::Color(Color::WHITE));
//! let body = Node::new("Body").with_mesh(Mesh::box_mesh(material));
//! let root = Node::new("Robot").with_child(body);
//!
//! let bindings = BindingSet::new(root)
//!     .bind(EntityBinding::new("Body").with_attribute(ColorAttribute::new("Tint")));
//!
//! assert!(bindings.entities()[0].is_bound());
//! ```

pub mod attribute;
pub mod attributes;
pub mod bridge;
pub mod entity;

pub use attribute::{AnyAttribute, AttributeValue, EntityAttribute};
pub use attributes::{ColorAttribute, FloatAttribute, ToggleAttribute};
pub use bridge::{FromParameterValue, SkipReason, WriteOutcome};
pub use entity::{BindingSet, EntityBinding};
