/// Geometry values carried through the conversion.
///
/// All coordinates are in model pixels, exactly as written in the legacy source.
/// No transformation beyond copying is ever applied to them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A texture-space offset (u, v)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position2 {
    pub x: f64,
    pub y: f64,
}

/// A legacy `addBox` call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid {
    /// Lower corner relative to the part pivot.
    pub offset: Vector3,
    /// Dimensions (w, h, d). Expected to be non-negative integers, not enforced.
    pub size: Vector3,
    /// Inflate amount (the trailing `addBox(..., modelSize)` argument).
    pub inflate: f64,
}

/// Texture sheet dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True only when all three components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Position2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Cuboid {
    pub fn new(offset: Vector3, size: Vector3) -> Self {
        Self {
            offset,
            size,
            inflate: 0.0,
        }
    }

    pub fn with_inflate(mut self, inflate: f64) -> Self {
        self.inflate = inflate;
        self
    }
}

impl TextureSize {
    /// Legacy models default to a 64x64 sheet when no size is assigned.
    pub const DEFAULT_EDGE: u32 = 64;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TextureSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EDGE, Self::DEFAULT_EDGE)
    }
}
