//! Shared plain-data types: sprite handles, rectangles, facing and input.
//!
//! Nothing in here advances the simulation; the per-frame logic lives under
//! `compute`.

use glam::Vec2;

use crate::error::ArenaError;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Opaque image identifier.  The core never loads or decodes images, it only
/// hands these back to the render sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u16);

impl SpriteId {
    pub const AVATAR_IDLE: SpriteId = SpriteId(0);
    pub const AVATAR_WALK_UP: SpriteId = SpriteId(1);
    pub const AVATAR_WALK_DOWN: SpriteId = SpriteId(2);
    pub const AVATAR_WALK_LEFT: SpriteId = SpriteId(3);
    pub const AVATAR_WALK_RIGHT: SpriteId = SpriteId(4);
    pub const PROJECTILE: SpriteId = SpriteId(5);
    pub const PURSUER: SpriteId = SpriteId(6);
}

/// An image resource with its pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteHandle {
    pub id: SpriteId,
    pub width: u32,
    pub height: u32,
}

impl SpriteHandle {
    /// Rejects zero-sized images up front.
    pub fn new(id: SpriteId, width: u32, height: u32) -> Result<Self, ArenaError> {
        if width == 0 || height == 0 {
            return Err(ArenaError::EmptySprite { id: id.0, width, height });
        }
        Ok(Self { id, width, height })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Sub-rectangle of a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

// ── Bounding boxes ────────────────────────────────────────────────────────────

/// Axis-aligned bounding box anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Edges that merely touch do not count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Which sprite strip an animated entity shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    Stationary,
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// The four walking facings, in the order the avatar stores its strips.
    pub const WALKING: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Four digital direction buttons (keyboard keys or a d-pad).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// ±1 per pressed axis in world convention (y grows downward).
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// Analog controller state.  Stick vectors use the device convention where
/// pushing up gives a positive y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PadState {
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    pub dpad: DirectionKeys,
}

/// Everything the simulation reads from the outside world for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: DirectionKeys,
    /// `None` when no controller is connected.
    pub pad: Option<PadState>,
    pub fire: bool,
}
