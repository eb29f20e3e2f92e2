//! Float parameter binding rendered as a drag value.

use glimmer_core::material::ParameterValue;
use glimmer_core::scene::Node;

use crate::attribute::EntityAttribute;
use crate::bridge;

/// Two-way binding between a float material parameter and an egui drag
/// value.
///
/// Unlike [`ColorAttribute`](crate::attributes::ColorAttribute), the
/// parameter name is configurable — float parameters come in many flavors
/// (roughness, metallic, emissive strength).
#[derive(Debug, Clone)]
pub struct FloatAttribute {
    name: String,
    parameter: String,
    subset: usize,
    speed: f64,
    node: Option<Node>,
}

impl FloatAttribute {
    /// Value reported when the parameter cannot be read.
    pub const FALLBACK: f32 = 0.0;

    /// Creates an unbound binding for `parameter`, targeting subset 0.
    pub fn new(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: parameter.into(),
            subset: 0,
            speed: 0.01,
            node: None,
        }
    }

    /// Target a different geometry subset.
    #[must_use]
    pub fn with_subset(mut self, subset: usize) -> Self {
        self.subset = subset;
        self
    }

    /// Set the drag speed of the control.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// The shader parameter this binding reads and writes.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

impl EntityAttribute for FloatAttribute {
    type Value = f32;

    fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f32 {
        bridge::parameter(self.node.as_ref(), &self.parameter, self.subset)
            .unwrap_or(Self::FALLBACK)
    }

    fn set_value(&self, value: f32) {
        if let Err(err) = bridge::set_parameter(
            self.node.as_ref(),
            &self.parameter,
            self.subset,
            ParameterValue::Float(value),
        ) {
            log::error!("float write through {:?} rejected: {err}", self.name);
        }
    }

    fn show(&self, ui: &mut egui::Ui) {
        let mut value = self.value();
        ui.horizontal(|ui| {
            ui.label(&self.name);
            if ui
                .add(egui::DragValue::new(&mut value).speed(self.speed))
                .changed()
            {
                self.set_value(value);
            }
        });
    }

    fn with_node(&self, node: Node) -> Self {
        let mut copy = self.clone();
        copy.node = Some(node);
        copy
    }
}
