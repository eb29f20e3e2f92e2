//! Shipped attribute variants.
//!
//! Each variant fixes a parameter name, a semantic value type, an
//! encode/decode pair against the material's tagged union, and a control
//! renderer. Adding a new kind means supplying those four pieces and a
//! matching [`AnyAttribute`](crate::attribute::AnyAttribute) case.

mod color;
mod float;
mod toggle;

pub use color::ColorAttribute;
pub use float::FloatAttribute;
pub use toggle::ToggleAttribute;
