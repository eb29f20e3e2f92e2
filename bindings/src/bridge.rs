//! Get/set bridge between node materials and binding values.
//!
//! Reads decode the material's tagged-union parameter value into the
//! caller's semantic type and degrade to `None` on any failure — missing
//! node, missing material, missing parameter, or kind mismatch. Writes
//! report an explicit [`WriteOutcome`] so each call site decides whether a
//! skipped write matters; only a kind mismatch against a present slot is an
//! error.
//!
//! Every operation exists in an immediate form and a suspending form that
//! defers to the host's async accessors. The two behave identically modulo
//! the suspension point.

use std::sync::Arc;

use glimmer_core::color::Color;
use glimmer_core::material::{MaterialError, ParameterValue};
use glimmer_core::math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use glimmer_core::scene::Node;
use glimmer_core::texture::{Texture, TextureRef};

/// Decodes one tagged-union case into its payload type.
///
/// Implementations return `Some` only for the matching case — decoding
/// never coerces between kinds.
pub trait FromParameterValue: Sized {
    /// The payload, when `value` holds the matching case.
    fn from_value(value: &ParameterValue) -> Option<Self>;
}

impl FromParameterValue for Color {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for bool {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for f32 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for i32 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for Mat2 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Mat2(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for Mat3 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Mat3(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for Mat4 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Mat4(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for TextureRef {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Texture(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromParameterValue for Arc<Texture> {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::TextureResource(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }
}

impl FromParameterValue for Vec2 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for Vec3 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromParameterValue for Vec4 {
    fn from_value(value: &ParameterValue) -> Option<Self> {
        match value {
            ParameterValue::Vec4(v) => Some(*v),
            _ => None,
        }
    }
}

/// Outcome of a parameter write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The value was applied and written back to the node.
    Applied,
    /// The write did not happen; the reason says why.
    Skipped(SkipReason),
}

/// Why a parameter write was skipped.
///
/// Skips are not errors: a parameter is an optional customization point,
/// and an unbound descriptor is a valid inert value. Call sites that treat
/// a particular reason as a bug can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The binding has no node attached.
    Unbound,
    /// The node has no material at the requested geometry subset.
    NoMaterial,
    /// The material declares no parameter with the requested name.
    NoSuchParameter,
}

/// Reads the parameter `name` from the material at `subset` of `node`.
///
/// `None` when the node is absent, the subset has no material, the
/// parameter is not declared, or the stored kind does not match `T`.
pub fn parameter<T: FromParameterValue>(
    node: Option<&Node>,
    name: &str,
    subset: usize,
) -> Option<T> {
    let material = node?.material(subset)?;
    T::from_value(material.parameter(name)?)
}

/// Writes `value` to the parameter `name` at `subset` of `node`.
///
/// Missing node, material, or parameter skip the write and report why. A
/// kind mismatch against a declared slot is the rejected write and surfaces
/// as [`MaterialError::KindMismatch`].
pub fn set_parameter(
    node: Option<&Node>,
    name: &str,
    subset: usize,
    value: ParameterValue,
) -> Result<WriteOutcome, MaterialError> {
    let Some(node) = node else {
        return Ok(WriteOutcome::Skipped(SkipReason::Unbound));
    };
    let Some(material) = node.material(subset) else {
        return Ok(WriteOutcome::Skipped(SkipReason::NoMaterial));
    };
    if !material.has_parameter(name) {
        return Ok(WriteOutcome::Skipped(SkipReason::NoSuchParameter));
    }
    node.update_material(subset, |material| material.set_parameter(name, value))?;
    Ok(WriteOutcome::Applied)
}

/// Suspending form of [`parameter`].
///
/// Defers to the host's async material accessor; otherwise identical.
pub async fn parameter_async<T: FromParameterValue>(
    node: Option<&Node>,
    name: &str,
    subset: usize,
) -> Option<T> {
    let material = node?.material_async(subset).await?;
    T::from_value(material.parameter(name)?)
}

/// Suspending form of [`set_parameter`].
pub async fn set_parameter_async(
    node: Option<&Node>,
    name: &str,
    subset: usize,
    value: ParameterValue,
) -> Result<WriteOutcome, MaterialError> {
    let Some(node) = node else {
        return Ok(WriteOutcome::Skipped(SkipReason::Unbound));
    };
    let Some(material) = node.material_async(subset).await else {
        return Ok(WriteOutcome::Skipped(SkipReason::NoMaterial));
    };
    if !material.has_parameter(name) {
        return Ok(WriteOutcome::Skipped(SkipReason::NoSuchParameter));
    }
    node.update_material_async(subset, |material| material.set_parameter(name, value))
        .await?;
    Ok(WriteOutcome::Applied)
}
