//! Tunables, loaded from an optional TOML file.
//!
//! Every section has defaults, so an empty file (or no file at all) gives the
//! stock game.  Values are checked by [`GameConfig::validate`] before a
//! session is built.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::compute::avatar::{AVATAR_SPEED, SHOOT_COOLDOWN, STICK_DEADZONE};
use crate::compute::camera::DEADZONE_HALF_EXTENTS;
use crate::compute::projectile::PROJECTILE_SPEED;
use crate::compute::pursuer::PURSUER_SPEED;
use crate::entities::{SpriteHandle, SpriteId};
use crate::error::ArenaError;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub avatar: AvatarConfig,
    pub projectile: ProjectileConfig,
    pub pursuers: PursuerConfig,
    pub camera: CameraConfig,
    pub sprites: SpriteConfig,
    pub display: DisplayConfig,
}

/// Size of the playable world (the background image) in pixels.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { width: 2496, height: 2496 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AvatarConfig {
    pub start: Vec2,
    pub speed: f32,
    pub shoot_cooldown: f32,
    pub stick_deadzone: f32,
    pub walk_frames: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(100.0, 100.0),
            speed: AVATAR_SPEED,
            shoot_cooldown: SHOOT_COOLDOWN,
            stick_deadzone: STICK_DEADZONE,
            walk_frames: 4,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    /// Cull extent; falls back to the world size.
    pub bounds_width: Option<u32>,
    pub bounds_height: Option<u32>,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            bounds_width: None,
            bounds_height: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PursuerConfig {
    pub count: usize,
    pub speed: f32,
    pub frames: u32,
    /// Spawn area; falls back to the world size.
    pub spawn_width: Option<u32>,
    pub spawn_height: Option<u32>,
}

impl Default for PursuerConfig {
    fn default() -> Self {
        Self {
            count: 10,
            speed: PURSUER_SPEED,
            frames: 10,
            spawn_width: None,
            spawn_height: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub deadzone_half_width: f32,
    pub deadzone_half_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            deadzone_half_width: DEADZONE_HALF_EXTENTS.x,
            deadzone_half_height: DEADZONE_HALF_EXTENTS.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn handle(&self, id: SpriteId) -> Result<SpriteHandle, ArenaError> {
        SpriteHandle::new(id, self.width, self.height)
    }
}

/// Pixel sizes of the images the renderer will use.  Walk strips and the
/// pursuer sheet hold their frames side by side.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpriteConfig {
    pub avatar_idle: SpriteSize,
    pub walk_up: SpriteSize,
    pub walk_down: SpriteSize,
    pub walk_left: SpriteSize,
    pub walk_right: SpriteSize,
    pub projectile: SpriteSize,
    pub pursuer: SpriteSize,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            avatar_idle: SpriteSize::new(48, 64),
            walk_up: SpriteSize::new(192, 64),
            walk_down: SpriteSize::new(192, 64),
            walk_left: SpriteSize::new(192, 64),
            walk_right: SpriteSize::new(192, 64),
            projectile: SpriteSize::new(16, 16),
            pursuer: SpriteSize::new(320, 32),
        }
    }
}

/// Terminal front end settings.  World pixels map onto character cells.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub frame_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 16.0,
            cell_height: 32.0,
            frame_ms: 33, // ≈30 FPS
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ArenaError {
    ArenaError::InvalidConfig { field, reason: reason.into() }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ArenaError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a finite value >= 0, got {value}")))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ArenaError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a finite value > 0, got {value}")))
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ArenaError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate `path`.
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let text = fs::read_to_string(path).map_err(|source| ArenaError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(invalid("world", "width and height must be non-zero"));
        }

        let a = &self.avatar;
        if !a.start.is_finite() {
            return Err(invalid("avatar.start", "must be finite"));
        }
        non_negative("avatar.speed", a.speed)?;
        non_negative("avatar.shoot_cooldown", a.shoot_cooldown)?;
        non_negative("avatar.stick_deadzone", a.stick_deadzone)?;
        if a.stick_deadzone >= 1.0 {
            return Err(invalid("avatar.stick_deadzone", "must be below 1.0"));
        }
        if a.walk_frames == 0 {
            return Err(invalid("avatar.walk_frames", "must be at least 1"));
        }

        positive("projectile.speed", self.projectile.speed)?;
        if self.projectile_bounds().contains(&0) {
            return Err(invalid("projectile.bounds", "cull extent must be non-zero"));
        }

        let p = &self.pursuers;
        non_negative("pursuers.speed", p.speed)?;
        if p.frames == 0 {
            return Err(invalid("pursuers.frames", "must be at least 1"));
        }
        if self.spawn_area().contains(&0) {
            return Err(invalid("pursuers.spawn", "spawn area must be non-empty"));
        }

        non_negative("camera.deadzone_half_width", self.camera.deadzone_half_width)?;
        non_negative("camera.deadzone_half_height", self.camera.deadzone_half_height)?;

        positive("display.cell_width", self.display.cell_width)?;
        positive("display.cell_height", self.display.cell_height)?;
        if self.display.frame_ms == 0 {
            return Err(invalid("display.frame_ms", "must be at least 1"));
        }
        Ok(())
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world.width as f32, self.world.height as f32)
    }

    pub fn projectile_bounds(&self) -> [u32; 2] {
        [
            self.projectile.bounds_width.unwrap_or(self.world.width),
            self.projectile.bounds_height.unwrap_or(self.world.height),
        ]
    }

    pub fn spawn_area(&self) -> [u32; 2] {
        [
            self.pursuers.spawn_width.unwrap_or(self.world.width),
            self.pursuers.spawn_height.unwrap_or(self.world.height),
        ]
    }

    pub fn deadzone_half(&self) -> Vec2 {
        Vec2::new(self.camera.deadzone_half_width, self.camera.deadzone_half_height)
    }
}
