//! # Glimmer Core
//!
//! Host-engine surface consumed by the Glimmer binding layer: scene-graph
//! nodes, meshes split into geometry subsets, and materials carrying named,
//! typed shader parameters.
//!
//! This crate owns no rendering. It models the part of an engine a
//! parameter-editing UI needs to talk to: looking up nodes by name, reading
//! a material from a geometry subset, and writing an updated material back.

pub mod color;
pub mod material;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod texture;

pub use color::Color;
pub use material::{Material, MaterialError, ParameterKind, ParameterValue};
pub use mesh::{GeometrySubset, Mesh};
pub use scene::Node;
pub use texture::{SamplerDesc, Texture, TextureRef};
