//! Boolean parameter binding rendered as a checkbox.

use glimmer_core::material::ParameterValue;
use glimmer_core::scene::Node;

use crate::attribute::EntityAttribute;
use crate::bridge;

/// Two-way binding between a boolean material parameter and an egui
/// checkbox.
#[derive(Debug, Clone)]
pub struct ToggleAttribute {
    name: String,
    parameter: String,
    subset: usize,
    node: Option<Node>,
}

impl ToggleAttribute {
    /// Value reported when the parameter cannot be read.
    pub const FALLBACK: bool = false;

    /// Creates an unbound binding for `parameter`, targeting subset 0.
    pub fn new(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: parameter.into(),
            subset: 0,
            node: None,
        }
    }

    /// Target a different geometry subset.
    #[must_use]
    pub fn with_subset(mut self, subset: usize) -> Self {
        self.subset = subset;
        self
    }

    /// The shader parameter this binding reads and writes.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

impl EntityAttribute for ToggleAttribute {
    type Value = bool;

    fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> bool {
        bridge::parameter(self.node.as_ref(), &self.parameter, self.subset)
            .unwrap_or(Self::FALLBACK)
    }

    fn set_value(&self, value: bool) {
        if let Err(err) = bridge::set_parameter(
            self.node.as_ref(),
            &self.parameter,
            self.subset,
            ParameterValue::Bool(value),
        ) {
            log::error!("toggle write through {:?} rejected: {err}", self.name);
        }
    }

    fn show(&self, ui: &mut egui::Ui) {
        let mut value = self.value();
        ui.horizontal(|ui| {
            ui.label(&self.name);
            if ui.checkbox(&mut value, "").changed() {
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
