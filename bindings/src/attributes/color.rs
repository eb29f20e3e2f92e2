//! Color parameter binding rendered as a color picker.

use glimmer_core::color::Color;
use glimmer_core::material::ParameterValue;
use glimmer_core::scene::Node;

use crate::attribute::EntityAttribute;
use crate::bridge;

/// Two-way binding between a material's `"Color"` parameter and an egui
/// color picker.
///
/// The engine stores colors in linear space; the control edits sRGB bytes.
/// Reads convert linear → sRGB, writes convert back. The byte quantization
/// loses sub-byte precision but preserves hue and alpha.
#[derive(Debug, Clone)]
pub struct ColorAttribute {
    name: String,
    subset: usize,
    node: Option<Node>,
}

impl ColorAttribute {
    /// The shader parameter this binding reads and writes.
    pub const PARAMETER: &'static str = "Color";

    /// Value reported when the parameter cannot be read.
    pub const FALLBACK: egui::Color32 = egui::Color32::WHITE;

    /// Creates an unbound binding targeting geometry subset 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
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
}

impl EntityAttribute for ColorAttribute {
    type Value = egui::Color32;

    fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> egui::Color32 {
        match bridge::parameter::<Color>(self.node.as_ref(), Self::PARAMETER, self.subset) {
            Some(color) => {
                let [r, g, b, a] = color.to_srgb8();
                egui::Color32::from_rgba_unmultiplied(r, g, b, a)
            }
            None => Self::FALLBACK,
        }
    }

    fn set_value(&self, value: egui::Color32) {
        let [r, g, b, a] = value.to_srgba_unmultiplied();
        let color = Color::from_srgb8(r, g, b, a);
        if let Err(err) = bridge::set_parameter(
            self.node.as_ref(),
            Self::PARAMETER,
            self.subset,
            ParameterValue::Color(color),
        ) {
            log::error!("color write through {:?} rejected: {err}", self.name);
        }
    }

    fn show(&self, ui: &mut egui::Ui) {
        let mut value = self.value();
        ui.horizontal(|ui| {
            ui.label(&self.name);
            if ui.color_edit_button_srgba(&mut value).changed() {
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

#[cfg(test)]
mod tests {
    use super::*;

    use glimmer_core::material::Material;
    use glimmer_core::mesh::Mesh;

    fn node_with_color(color: Color) -> Node {
        let material = Material::new().with_parameter("Color", ParameterValue::Color(color));
        Node::new("Body").with_mesh(Mesh::box_mesh(material))
    }

    #[test]
    fn unbound_read_yields_fallback() {
        let attribute = ColorAttribute::new("Tint");
        assert_eq!(attribute.value(), ColorAttribute::FALLBACK);
    }

    #[test]
    fn missing_parameter_reads_fallback_and_ignores_writes() {
        let bare = Node::new("Body").with_mesh(Mesh::box_mesh(Material::new()));
        let attribute = ColorAttribute::new("Tint").with_node(bare.clone());

        assert_eq!(attribute.value(), ColorAttribute::FALLBACK);

        // A write to the missing parameter is absorbed without declaring it.
        attribute.set_value(egui::Color32::from_rgb(10, 20, 30));
        assert!(!bare.material(0).unwrap().has_parameter("Color"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let node = node_with_color(Color::WHITE);
        let attribute = ColorAttribute::new("Tint").with_node(node);

        let teal = egui::Color32::from_rgb(0, 128, 128);
        attribute.set_value(teal);
        assert_eq!(attribute.value(), teal);
    }

    #[test]
    fn transparency_survives_the_round_trip() {
        let node = node_with_color(Color::WHITE);
        let attribute = ColorAttribute::new("Tint").with_node(node);

        let translucent = egui::Color32::from_rgba_unmultiplied(0, 128, 128, 200);
        attribute.set_value(translucent);

        // Alpha premultiplication rounding may wobble the channels by a
        // step, but the value must stay translucent teal.
        let [r, g, b, a] = attribute.value().to_srgba_unmultiplied();
        assert!(r <= 4);
        assert!((120..=136).contains(&g));
        assert!((120..=136).contains(&b));
        assert!((196..=204).contains(&a));
    }

    #[test]
    fn read_converts_linear_to_srgb_bytes() {
        let node = node_with_color(Color::from_srgb8(200, 100, 50, 255));
        let attribute = ColorAttribute::new("Tint").with_node(node);
        assert_eq!(
            attribute.value(),
            egui::Color32::from_rgba_unmultiplied(200, 100, 50, 255)
        );
    }

    #[test]
    fn subset_selection_targets_the_right_material() {
        use glimmer_core::mesh::GeometrySubset;

        let plain = Material::new();
        let colored = Material::new().with_parameter("Color", ParameterValue::Color(Color::BLACK));
        let mesh = Mesh::new()
            .with_subset(GeometrySubset::new(plain))
            .with_subset(GeometrySubset::new(colored));
        let node = Node::new("Body").with_mesh(mesh);

        let front = ColorAttribute::new("Tint").with_node(node.clone());
        let back = ColorAttribute::new("Tint").with_subset(1).with_node(node);

        assert_eq!(front.value(), ColorAttribute::FALLBACK);
        assert_eq!(back.value(), egui::Color32::from_rgba_unmultiplied(0, 0, 0, 255));
    }
}
