//! Texture resources and references.
//!
//! [`Texture`] is the raw resource, shared via [`Arc`] and compared by
//! pointer identity. [`TextureRef`] pairs a resource with sampling state and
//! a UV set index, which is the shape material parameters store.

use std::sync::Arc;

/// Texture pixel format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    /// 8-bit RGBA, linear.
    #[default]
    Rgba8Unorm,
    /// 8-bit RGBA, sRGB-encoded.
    Rgba8UnormSrgb,
    /// 16-bit float RGBA.
    Rgba16Float,
    /// 32-bit float RGBA.
    Rgba32Float,
}

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest neighbor filtering.
    #[default]
    Nearest,
    /// Linear filtering.
    Linear,
}

/// Texture address mode (wrapping behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Clamp to edge.
    #[default]
    ClampToEdge,
    /// Repeat.
    Repeat,
    /// Mirrored repeat.
    MirrorRepeat,
}

/// Sampler configuration for a texture reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SamplerDesc {
    /// Minification filter.
    pub min_filter: FilterMode,
    /// Magnification filter.
    pub mag_filter: FilterMode,
    /// Address mode for the U coordinate.
    pub address_mode_u: AddressMode,
    /// Address mode for the V coordinate.
    pub address_mode_v: AddressMode,
}

impl SamplerDesc {
    /// Linear filtering on both axes, clamped addressing.
    pub fn linear() -> Self {
        Self {
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            ..Self::default()
        }
    }
}

/// A named texture resource.
///
/// Holds descriptor data only; pixel contents live with the host renderer.
/// Share via [`Arc`] — two references are the same texture exactly when
/// their `Arc`s point at the same allocation.
#[derive(Debug)]
pub struct Texture {
    /// Texture name, if any.
    pub name: Option<String>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Pixel format.
    pub format: TextureFormat,
}

impl Texture {
    /// Creates a texture descriptor.
    pub fn new(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            name: None,
            width,
            height,
            format,
        }
    }

    /// Set the texture name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Reference to a texture with sampler and UV set.
#[derive(Debug, Clone)]
pub struct TextureRef {
    /// The shared texture resource.
    pub texture: Arc<Texture>,
    /// Sampler configuration, if the parameter overrides the material default.
    pub sampler: Option<SamplerDesc>,
    /// Texture coordinate set index (0, 1, …).
    pub tex_coord: u32,
}

impl TextureRef {
    /// Creates a reference with no sampler override and UV set 0.
    pub fn new(texture: Arc<Texture>) -> Self {
        Self {
            texture,
            sampler: None,
            tex_coord: 0,
        }
    }

    /// Set the sampler override.
    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerDesc) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Set the texture coordinate set index.
    #[must_use]
    pub fn with_tex_coord(mut self, tex_coord: u32) -> Self {
        self.tex_coord = tex_coord;
        self
    }
}

impl PartialEq for TextureRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.texture, &other.texture)
            && self.sampler == other.sampler
            && self.tex_coord == other.tex_coord
    }
}
