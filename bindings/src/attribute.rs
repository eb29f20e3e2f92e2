//! Attribute-binding protocol and type erasure.
//!
//! [`EntityAttribute`] is the capability set every binding offers: a stable
//! identity, a display name, a two-way value accessor, an egui control, and
//! a way to produce a copy bound to a node. Concrete variants keep their
//! semantic value type through [`EntityAttribute::Value`]; [`AnyAttribute`]
//! erases it to [`AttributeValue`] so heterogeneous bindings can live in one
//! ordered collection.
//!
//! Erasure is a closed sum over the shipped attribute kinds. The narrowing
//! boundary sits in [`AnyAttribute::set_value`]: handing it a value of the
//! wrong kind is a programming error in how bindings were composed, and it
//! panics rather than coercing or dropping the write.

use std::fmt;

use glimmer_core::scene::Node;

use crate::attributes::{ColorAttribute, FloatAttribute, ToggleAttribute};

/// A two-way binding between one material parameter and a UI control.
///
/// Implementations are value types: [`EntityAttribute::with_node`] returns a
/// bound copy and never mutates the receiver, so descriptors stay reusable
/// templates. Writes go through `&self` — the mutation flows into the shared
/// node handle, not the binding.
pub trait EntityAttribute {
    /// Semantic value type edited by this binding's control.
    type Value: Clone + PartialEq + fmt::Debug;

    /// The bound scene node, if resolution attached one.
    fn node(&self) -> Option<&Node>;

    /// Display name shown next to the control.
    fn name(&self) -> &str;

    /// The current value.
    ///
    /// Degrades to the variant's documented fallback when the node,
    /// material, or parameter is missing or holds a different kind.
    fn value(&self) -> Self::Value;

    /// Write a new value through the bound node's material.
    ///
    /// Best-effort: a missing parameter is an optional customization point
    /// and the write is skipped silently. A rejected (wrong-kind) write is
    /// logged — see [`crate::bridge::set_parameter`].
    fn set_value(&self, value: Self::Value);

    /// Render the control: read, edit, write on change.
    fn show(&self, ui: &mut egui::Ui);

    /// A copy of this binding attached to `node`.
    #[must_use]
    fn with_node(&self, node: Node) -> Self
    where
        Self: Sized;

    /// Stable identity for UI bookkeeping.
    fn id(&self) -> String {
        format!("{}::{}", std::any::type_name::<Self>(), self.name())
    }
}

/// A binding value with its concrete type erased.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A color-picker value.
    Color(egui::Color32),
    /// A float-control value.
    Float(f32),
    /// A toggle value.
    Bool(bool),
}

impl AttributeValue {
    /// Kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

/// A type-erased attribute binding.
///
/// Offers the same capability set as [`EntityAttribute`] with the value type
/// erased to [`AttributeValue`], so bindings of different kinds can be
/// stored and iterated together.
#[derive(Debug, Clone)]
pub enum AnyAttribute {
    /// A color-picker binding.
    Color(ColorAttribute),
    /// A float-control binding.
    Float(FloatAttribute),
    /// A toggle binding.
    Toggle(ToggleAttribute),
}

impl AnyAttribute {
    /// Display name of the wrapped binding.
    pub fn name(&self) -> &str {
        match self {
            Self::Color(a) => a.name(),
            Self::Float(a) => a.name(),
            Self::Toggle(a) => a.name(),
        }
    }

    /// Stable identity of the wrapped binding.
    pub fn id(&self) -> String {
        match self {
            Self::Color(a) => a.id(),
            Self::Float(a) => a.id(),
            Self::Toggle(a) => a.id(),
        }
    }

    /// The wrapped binding's node, if bound.
    pub fn node(&self) -> Option<&Node> {
        match self {
            Self::Color(a) => a.node(),
            Self::Float(a) => a.node(),
            Self::Toggle(a) => a.node(),
        }
    }

    /// The current value, erased.
    pub fn value(&self) -> AttributeValue {
        match self {
            Self::Color(a) => AttributeValue::Color(a.value()),
            Self::Float(a) => AttributeValue::Float(a.value()),
            Self::Toggle(a) => AttributeValue::Bool(a.value()),
        }
    }

    /// Write an erased value to the wrapped binding.
    ///
    /// # Panics
    ///
    /// Panics if `value`'s kind does not match the wrapped binding's value
    /// kind. This is the narrowing-cast boundary of the erasure: a mismatch
    /// means the bindings were composed wrongly, not that runtime data is
    /// missing.
    pub fn set_value(&self, value: AttributeValue) {
        match (self, value) {
            (Self::Color(a), AttributeValue::Color(v)) => a.set_value(v),
            (Self::Float(a), AttributeValue::Float(v)) => a.set_value(v),
            (Self::Toggle(a), AttributeValue::Bool(v)) => a.set_value(v),
            (attr, value) => panic!(
                "attribute {:?} expects a {} value, got {}",
                attr.name(),
                attr.expected_kind(),
                value.kind()
            ),
        }
    }

    /// Render the wrapped binding's control.
    pub fn show(&self, ui: &mut egui::Ui) {
        match self {
            Self::Color(a) => a.show(ui),
            Self::Float(a) => a.show(ui),
            Self::Toggle(a) => a.show(ui),
        }
    }

    /// A copy of the wrapped binding attached to `node`.
    #[must_use]
    pub fn with_node(&self, node: Node) -> Self {
        match self {
            Self::Color(a) => Self::Color(a.with_node(node)),
            Self::Float(a) => Self::Float(a.with_node(node)),
            Self::Toggle(a) => Self::Toggle(a.with_node(node)),
        }
    }

    /// Kind name the wrapped binding accepts, for diagnostics.
    fn expected_kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Float(_) => "float",
            Self::Toggle(_) => "bool",
        }
    }
}

impl From<ColorAttribute> for AnyAttribute {
    fn from(attribute: ColorAttribute) -> Self {
        Self::Color(attribute)
    }
}

impl From<FloatAttribute> for AnyAttribute {
    fn from(attribute: FloatAttribute) -> Self {
        Self::Float(attribute)
    }
}

impl From<ToggleAttribute> for AnyAttribute {
    fn from(attribute: ToggleAttribute) -> Self {
        Self::Toggle(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glimmer_core::color::Color;
    use glimmer_core::material::{Material, ParameterValue};
    use glimmer_core::mesh::Mesh;

    fn bound_color_attribute() -> (Node, ColorAttribute) {
        let material = Material::new()
            .with_parameter("Color", ParameterValue::Color(Color::BLACK))
            .with_parameter("Roughness", ParameterValue::Float(0.5));
        let node = Node::new("Body").with_mesh(Mesh::box_mesh(material));
        let attribute = ColorAttribute::new("Tint").with_node(node.clone());
        (node, attribute)
    }

    #[test]
    fn erased_read_agrees_with_concrete_read() {
        let (_node, concrete) = bound_color_attribute();
        let erased = AnyAttribute::from(concrete.clone());

        assert_eq!(erased.value(), AttributeValue::Color(concrete.value()));
        assert_eq!(erased.name(), concrete.name());
        assert_eq!(erased.id(), concrete.id());
    }

    #[test]
    fn erased_write_updates_the_concrete_binding() {
        let (_node, concrete) = bound_color_attribute();
        let erased = AnyAttribute::from(concrete.clone());

        let red = egui::Color32::from_rgb(255, 0, 0);
        erased.set_value(AttributeValue::Color(red));

        assert_eq!(concrete.value(), red);
        assert_eq!(erased.value(), AttributeValue::Color(red));
    }

    #[test]
    #[should_panic(expected = "expects a color value, got float")]
    fn erased_write_with_wrong_kind_panics() {
        let (_node, concrete) = bound_color_attribute();
        let erased = AnyAttribute::from(concrete);
        erased.set_value(AttributeValue::Float(0.5));
    }

    #[test]
    fn erased_rebind_preserves_the_kind() {
        let (node, _) = bound_color_attribute();
        let erased = AnyAttribute::from(ColorAttribute::new("Tint"));
        assert!(erased.node().is_none());

        let bound = erased.with_node(node.clone());
        assert!(bound.node().is_some_and(|n| n.same_node(&node)));
        assert!(matches!(bound, AnyAttribute::Color(_)));
        // The unbound template is untouched.
        assert!(erased.node().is_none());
    }

    #[test]
    fn erased_float_and_toggle_round_trip() {
        let material = Material::new()
            .with_parameter("Roughness", ParameterValue::Float(0.5))
            .with_parameter("Unlit", ParameterValue::Bool(false));
        let node = Node::new("Body").with_mesh(Mesh::box_mesh(material));

        let float = AnyAttribute::from(
            FloatAttribute::new("Roughness", "Roughness").with_node(node.clone()),
        );
        float.set_value(AttributeValue::Float(0.9));
        assert_eq!(float.value(), AttributeValue::Float(0.9));

        let toggle =
            AnyAttribute::from(ToggleAttribute::new("Unlit", "Unlit").with_node(node.clone()));
        toggle.set_value(AttributeValue::Bool(true));
        assert_eq!(toggle.value(), AttributeValue::Bool(true));
    }
}
