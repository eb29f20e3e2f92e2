//! Math type aliases.
//!
//! f32 rendering types over `nalgebra`, matching what shader parameters
//! store. Re-exports the crate for callers that need more than the aliases.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 2x2 matrix (f32).
pub type Mat2 = nalgebra::Matrix2<f32>;

/// 3x3 matrix (f32).
pub type Mat3 = nalgebra::Matrix3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;
