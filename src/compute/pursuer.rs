use glam::Vec2;
use log::info;
use rand::Rng;

use crate::compute::animation::AnimationState;
use crate::entities::{Aabb, SourceRect, SpriteHandle};
use crate::error::ArenaError;

/// Default pursuer speed in pixels per second.
pub const PURSUER_SPEED: f32 = 100.0;

/// An enemy that walks straight at the avatar.
#[derive(Clone, Debug)]
pub struct Pursuer {
    /// Top-left corner.
    pub position: Vec2,
    pub speed: f32,
    size: Vec2,
    animation: AnimationState,
}

impl Pursuer {
    pub fn new(sheet: &SpriteHandle, frame_count: u32, position: Vec2) -> Result<Self, ArenaError> {
        let animation = AnimationState::for_sheet(sheet, frame_count)?;
        Ok(Self {
            position,
            speed: PURSUER_SPEED,
            size: animation.frame_size(sheet),
            animation,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    /// Steer toward `target` so that this pursuer's center lands on it.
    pub fn advance(&mut self, delta_time: f32, target: Vec2) {
        let direction = target - self.position - self.size / 2.0;
        if direction == Vec2::ZERO {
            self.animation.reset();
            return;
        }

        let direction = direction.normalize_or_zero();
        self.animation.advance(delta_time);
        self.position += direction * self.speed * delta_time;
    }
}

/// The wave of pursuers.  All of them share one sprite sheet.
#[derive(Clone, Debug)]
pub struct PursuerSet {
    pursuers: Vec<Pursuer>,
    sheet: SpriteHandle,
    /// Validated starting animation, cloned into every new pursuer.
    template: AnimationState,
    speed: f32,
}

impl PursuerSet {
    pub fn new(sheet: SpriteHandle, frame_count: u32) -> Result<Self, ArenaError> {
        let template = AnimationState::for_sheet(&sheet, frame_count)?;
        Ok(Self {
            pursuers: Vec::new(),
            sheet,
            template,
            speed: PURSUER_SPEED,
        })
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn sheet(&self) -> SpriteHandle {
        self.sheet
    }

    pub fn len(&self) -> usize {
        self.pursuers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pursuers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pursuer> + '_ {
        self.pursuers.iter()
    }

    /// Replace the current wave with `count` pursuers placed uniformly in
    /// `[0, area_width) × [0, area_height)`.
    pub fn spawn(&mut self, count: usize, area_width: u32, area_height: u32, rng: &mut impl Rng) {
        self.pursuers.clear();
        self.pursuers.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                rng.gen_range(0..area_width.max(1)) as f32,
                rng.gen_range(0..area_height.max(1)) as f32,
            );
            self.pursuers.push(Pursuer {
                position,
                speed: self.speed,
                size: self.template.frame_size(&self.sheet),
                animation: self.template.clone(),
            });
        }
        info!("spawned {} pursuers in a {}x{} area", count, area_width, area_height);
    }

    pub fn advance(&mut self, delta_time: f32, target: Vec2) {
        for pursuer in &mut self.pursuers {
            pursuer.advance(delta_time, target);
        }
    }

    pub fn source_rect(&self, pursuer: &Pursuer) -> SourceRect {
        pursuer.animation.source_rect(&self.sheet)
    }
}
