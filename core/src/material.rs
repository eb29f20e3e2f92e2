//! Materials with named, typed shader parameters.
//!
//! A [`Material`] is an ordered list of named parameter slots. Each slot's
//! kind is fixed when the slot is declared: [`Material::set_parameter`]
//! accepts a new value only if its [`ParameterKind`] matches, so a slot
//! never changes type over its lifetime. Reads hand back the tagged-union
//! [`ParameterValue`]; decoding into a concrete type is the caller's
//! narrowing step.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::color::Color;
use crate::math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::texture::{Texture, TextureRef};

/// Discriminant of a [`ParameterValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Linear RGBA color.
    Color,
    /// Boolean flag.
    Bool,
    /// Single float.
    Float,
    /// Signed integer.
    Int,
    /// 2x2 matrix.
    Mat2,
    /// 3x3 matrix.
    Mat3,
    /// 4x4 matrix.
    Mat4,
    /// Texture reference (resource + sampler + UV set).
    Texture,
    /// Bare texture resource.
    TextureResource,
    /// 2-component float vector.
    Vec2,
    /// 3-component float vector.
    Vec3,
    /// 4-component float vector.
    Vec4,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Color => "color",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Mat2 => "mat2",
            Self::Mat3 => "mat3",
            Self::Mat4 => "mat4",
            Self::Texture => "texture",
            Self::TextureResource => "texture resource",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
        };
        f.write_str(name)
    }
}

/// A shader parameter value.
///
/// The tagged union a material stores per slot. [`ParameterValue::kind`]
/// gives the discriminant used for declared-kind enforcement.
#[derive(Debug, Clone)]
pub enum ParameterValue {
    /// Linear RGBA color.
    Color(Color),
    /// Boolean flag.
    Bool(bool),
    /// Single float.
    Float(f32),
    /// Signed integer.
    Int(i32),
    /// 2x2 matrix.
    Mat2(Mat2),
    /// 3x3 matrix.
    Mat3(Mat3),
    /// 4x4 matrix.
    Mat4(Mat4),
    /// Texture reference.
    Texture(TextureRef),
    /// Bare texture resource.
    TextureResource(Arc<Texture>),
    /// 2-component float vector.
    Vec2(Vec2),
    /// 3-component float vector.
    Vec3(Vec3),
    /// 4-component float vector.
    Vec4(Vec4),
}

impl ParameterValue {
    /// The discriminant of this value.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Color(_) => ParameterKind::Color,
            Self::Bool(_) => ParameterKind::Bool,
            Self::Float(_) => ParameterKind::Float,
            Self::Int(_) => ParameterKind::Int,
            Self::Mat2(_) => ParameterKind::Mat2,
            Self::Mat3(_) => ParameterKind::Mat3,
            Self::Mat4(_) => ParameterKind::Mat4,
            Self::Texture(_) => ParameterKind::Texture,
            Self::TextureResource(_) => ParameterKind::TextureResource,
            Self::Vec2(_) => ParameterKind::Vec2,
            Self::Vec3(_) => ParameterKind::Vec3,
            Self::Vec4(_) => ParameterKind::Vec4,
        }
    }
}

impl PartialEq for ParameterValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Mat2(a), Self::Mat2(b)) => a == b,
            (Self::Mat3(a), Self::Mat3(b)) => a == b,
            (Self::Mat4(a), Self::Mat4(b)) => a == b,
            (Self::Texture(a), Self::Texture(b)) => a == b,
            (Self::TextureResource(a), Self::TextureResource(b)) => Arc::ptr_eq(a, b),
            (Self::Vec2(a), Self::Vec2(b)) => a == b,
            (Self::Vec3(a), Self::Vec3(b)) => a == b,
            (Self::Vec4(a), Self::Vec4(b)) => a == b,
            _ => false,
        }
    }
}

/// Errors from material parameter operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    /// The material declares no parameter with this name.
    #[error("material has no parameter named {name:?}")]
    NoSuchParameter {
        /// The requested parameter name.
        name: String,
    },
    /// The supplied value's kind differs from the slot's declared kind.
    #[error("parameter {name:?} is declared {expected}, got {actual}")]
    KindMismatch {
        /// The parameter name.
        name: String,
        /// The slot's declared kind.
        expected: ParameterKind,
        /// The kind of the rejected value.
        actual: ParameterKind,
    },
}

/// One named parameter slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialParameter {
    /// Parameter name as the shader declares it.
    pub name: String,
    /// Current value; its kind is the slot's declared kind.
    pub value: ParameterValue,
}

/// A material: named shader parameters in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name, if any.
    pub name: Option<String>,
    parameters: Vec<MaterialParameter>,
}

impl Material {
    /// Creates an empty material.
    pub fn new() -> Self {
        Self {
            name: None,
            parameters: Vec::new(),
        }
    }

    /// Set the material name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a parameter slot with an initial value.
    ///
    /// The value's kind becomes the slot's declared kind. Re-declaring an
    /// existing name replaces the slot (declaration time is the only point
    /// a slot's kind may change).
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        let name = name.into();
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(slot) => slot.value = value,
            None => self.parameters.push(MaterialParameter { name, value }),
        }
        self
    }

    /// Whether a parameter with this name is declared.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }

    /// The current value of a parameter, if declared.
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// Replace a declared parameter's value.
    ///
    /// Fails with [`MaterialError::NoSuchParameter`] if the name is not
    /// declared and [`MaterialError::KindMismatch`] if the value's kind
    /// differs from the declared kind.
    pub fn set_parameter(&mut self, name: &str, value: ParameterValue) -> Result<(), MaterialError> {
        let Some(slot) = self.parameters.iter_mut().find(|p| p.name == name) else {
            return Err(MaterialError::NoSuchParameter {
                name: name.to_owned(),
            });
        };
        if slot.value.kind() != value.kind() {
            return Err(MaterialError::KindMismatch {
                name: name.to_owned(),
                expected: slot.value.kind(),
                actual: value.kind(),
            });
        }
        slot.value = value;
        Ok(())
    }

    /// Parameter slots in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &MaterialParameter> {
        self.parameters.iter()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureFormat;

    fn test_material() -> Material {
        Material::new()
            .with_name("test")
            .with_parameter("Color", ParameterValue::Color(Color::WHITE))
            .with_parameter("Roughness", ParameterValue::Float(0.5))
            .with_parameter("Unlit", ParameterValue::Bool(false))
    }

    #[test]
    fn declared_parameters_are_found_in_order() {
        let material = test_material();
        assert!(material.has_parameter("Color"));
        assert!(material.has_parameter("Roughness"));
        assert!(!material.has_parameter("roughness")); // names are case-sensitive

        let names: Vec<&str> = material.parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Color", "Roughness", "Unlit"]);
    }

    #[test]
    fn parameter_returns_stored_value() {
        let material = test_material();
        assert_eq!(
            material.parameter("Roughness"),
            Some(&ParameterValue::Float(0.5))
        );
        assert_eq!(material.parameter("Missing"), None);
    }

    #[test]
    fn set_parameter_replaces_matching_kind() {
        let mut material = test_material();
        material
            .set_parameter("Roughness", ParameterValue::Float(0.9))
            .unwrap();
        assert_eq!(
            material.parameter("Roughness"),
            Some(&ParameterValue::Float(0.9))
        );
    }

    #[test]
    fn set_parameter_rejects_unknown_name() {
        let mut material = test_material();
        let err = material
            .set_parameter("Metallic", ParameterValue::Float(1.0))
            .unwrap_err();
        assert_eq!(
            err,
            MaterialError::NoSuchParameter {
                name: "Metallic".into()
            }
        );
    }

    #[test]
    fn set_parameter_rejects_kind_change() {
        let mut material = test_material();
        let err = material
            .set_parameter("Roughness", ParameterValue::Bool(true))
            .unwrap_err();
        assert_eq!(
            err,
            MaterialError::KindMismatch {
                name: "Roughness".into(),
                expected: ParameterKind::Float,
                actual: ParameterKind::Bool,
            }
        );
        // The slot is unchanged after a rejected write.
        assert_eq!(
            material.parameter("Roughness"),
            Some(&ParameterValue::Float(0.5))
        );
    }

    #[test]
    fn redeclaring_a_slot_may_change_its_kind() {
        let material = test_material().with_parameter("Roughness", ParameterValue::Int(2));
        assert_eq!(
            material.parameter("Roughness").map(ParameterValue::kind),
            Some(ParameterKind::Int)
        );
    }

    #[test]
    fn texture_resource_equality_is_pointer_identity() {
        let texture = Arc::new(Texture::new(4, 4, TextureFormat::Rgba8Unorm));
        let a = ParameterValue::TextureResource(Arc::clone(&texture));
        let b = ParameterValue::TextureResource(Arc::clone(&texture));
        let c = ParameterValue::TextureResource(Arc::new(Texture::new(
            4,
            4,
            TextureFormat::Rgba8Unorm,
        )));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn kinds_display_for_diagnostics() {
        assert_eq!(ParameterKind::Color.to_string(), "color");
        assert_eq!(ParameterKind::TextureResource.to_string(), "texture resource");
        let err = MaterialError::KindMismatch {
            name: "Color".into(),
            expected: ParameterKind::Color,
            actual: ParameterKind::Float,
        };
        assert_eq!(
            err.to_string(),
            "parameter \"Color\" is declared color, got float"
        );
    }

    #[test]
    fn values_of_different_kinds_never_compare_equal() {
        assert_ne!(ParameterValue::Float(1.0), ParameterValue::Int(1));
        assert_ne!(
            ParameterValue::Bool(false),
            ParameterValue::Float(0.0)
        );
    }
}
