use glam::Vec2;

use crate::compute::animation::{facing_for, DirectionalAnimator};
use crate::compute::projectile::ProjectilePool;
use crate::entities::{Aabb, Facing, InputSnapshot};

/// Seconds between shots.
pub const SHOOT_COOLDOWN: f32 = 0.2;

/// Analog stick readings at or below this magnitude are ignored.
pub const STICK_DEADZONE: f32 = 0.2;

/// Default walking speed in pixels per second.
pub const AVATAR_SPEED: f32 = 200.0;

/// Flip a device-convention stick (y up) into world convention (y down).
fn stick_to_world(stick: Vec2) -> Vec2 {
    Vec2::new(stick.x, -stick.y)
}

/// The player-controlled character.
#[derive(Clone, Debug)]
pub struct Avatar {
    pub position: Vec2,
    pub speed: f32,
    animator: DirectionalAnimator,
    projectiles: ProjectilePool,
    shoot_cooldown_remaining: f32,
    shoot_cooldown: f32,
    stick_deadzone: f32,
    last_aim: Option<Vec2>,
}

impl Avatar {
    pub fn new(position: Vec2, animator: DirectionalAnimator, projectiles: ProjectilePool) -> Self {
        Self {
            position,
            speed: AVATAR_SPEED,
            animator,
            projectiles,
            shoot_cooldown_remaining: 0.0,
            shoot_cooldown: SHOOT_COOLDOWN,
            stick_deadzone: STICK_DEADZONE,
            last_aim: None,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_shoot_cooldown(mut self, seconds: f32) -> Self {
        self.shoot_cooldown = seconds;
        self
    }

    pub fn with_stick_deadzone(mut self, deadzone: f32) -> Self {
        self.stick_deadzone = deadzone;
        self
    }

    pub fn animator(&self) -> &DirectionalAnimator {
        &self.animator
    }

    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    pub fn facing(&self) -> Facing {
        self.animator.facing()
    }

    pub fn shoot_cooldown_remaining(&self) -> f32 {
        self.shoot_cooldown_remaining
    }

    pub fn last_aim(&self) -> Option<Vec2> {
        self.last_aim
    }

    /// Visual center; shots leave from here.
    pub fn center(&self) -> Vec2 {
        self.position + self.animator.display_size() / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.animator.display_size())
    }

    /// A stick vector in world convention, or `None` inside the deadzone.
    fn clear_of_deadzone(&self, stick: Vec2) -> Option<Vec2> {
        let world = stick_to_world(stick);
        (world.length() > self.stick_deadzone).then_some(world)
    }

    /// Sum every directional source into one raw (unnormalized) vector.
    pub fn movement_input(&self, input: &InputSnapshot) -> Vec2 {
        let mut raw = input.keys.axis();
        if let Some(pad) = &input.pad {
            raw += pad.dpad.axis();
            if let Some(stick) = self.clear_of_deadzone(pad.left_stick) {
                raw += stick;
            }
        }
        raw
    }

    /// Run one tick of movement, animation, aiming and shooting.
    pub fn update(&mut self, input: &InputSnapshot, delta_time: f32) {
        // ── 1. Movement & animation ──────────────────────────────────────────
        let direction = self.movement_input(input).normalize_or_zero();
        if direction != Vec2::ZERO {
            self.position += direction * self.speed * delta_time;
            self.animator.walk(facing_for(direction), delta_time);
        } else {
            self.animator.stop();
        }

        // ── 2. Cooldown ──────────────────────────────────────────────────────
        // Allowed to go negative; readiness is `<= 0`.
        self.shoot_cooldown_remaining -= delta_time;

        // ── 3. Aim & fire ────────────────────────────────────────────────────
        let aim = input
            .pad
            .and_then(|pad| self.clear_of_deadzone(pad.right_stick))
            .map(Vec2::normalize);
        if aim.is_some() {
            self.last_aim = aim;
        }

        if input.fire && self.shoot_cooldown_remaining <= 0.0 {
            if let Some(direction) = aim.or(self.last_aim) {
                let origin = self.center();
                self.projectiles.fire(origin, direction);
                self.shoot_cooldown_remaining = self.shoot_cooldown;
            }
        }

        // ── 4. Projectiles ───────────────────────────────────────────────────
        self.projectiles.advance(delta_time);
    }
}
