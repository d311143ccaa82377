use glam::Vec2;
use log::debug;

use crate::entities::{Aabb, SpriteHandle};

/// Default projectile speed in pixels per second.
pub const PROJECTILE_SPEED: f32 = 500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub active: bool,
}

/// Grow-only set of reusable projectile slots.
///
/// Firing takes the first inactive slot (a linear scan, fine for the handful
/// of shots alive at 5 shots per second) and only appends when every slot is
/// in flight.  Slots are never removed, only deactivated in place.
#[derive(Clone, Debug)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    sprite: SpriteHandle,
    speed: f32,
    /// Extent beyond which projectiles are culled (not the visible screen).
    bounds: Vec2,
    /// Half the sprite size, kept separate per axis.
    margin: Vec2,
}

impl ProjectilePool {
    pub fn new(sprite: SpriteHandle, bounds_width: u32, bounds_height: u32, speed: f32) -> Self {
        Self {
            slots: Vec::new(),
            sprite,
            speed,
            bounds: Vec2::new(bounds_width as f32, bounds_height as f32),
            margin: sprite.size() / 2.0,
        }
    }

    pub fn sprite(&self) -> SpriteHandle {
        self.sprite
    }

    /// Total slots ever allocated.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Launch a projectile from `origin` along `direction` (already
    /// normalized).  Returns the slot index used.
    pub fn fire(&mut self, origin: Vec2, direction: Vec2) -> usize {
        let velocity = direction * self.speed;
        let index = match self.slots.iter().position(|p| !p.active) {
            Some(index) => index,
            None => {
                self.slots.push(Projectile {
                    position: origin,
                    velocity,
                    active: false,
                });
                debug!("projectile pool grew to {} slots", self.slots.len());
                self.slots.len() - 1
            }
        };

        let slot = &mut self.slots[index];
        slot.position = origin;
        slot.velocity = velocity;
        slot.active = true;
        index
    }

    /// Move every active projectile and retire the ones that left the cull
    /// bounds.
    pub fn advance(&mut self, delta_time: f32) {
        let (bounds, margin) = (self.bounds, self.margin);
        for p in self.slots.iter_mut().filter(|p| p.active) {
            p.position += p.velocity * delta_time;
            if p.position.x < -margin.x
                || p.position.x > bounds.x - margin.x
                || p.position.y < -margin.y
                || p.position.y > bounds.y - margin.y
            {
                p.active = false;
            }
        }
    }

    /// Active projectiles in slot order.
    pub fn active(&self) -> impl Iterator<Item = &Projectile> + '_ {
        self.slots.iter().filter(|p| p.active)
    }

    pub fn bounds_of(&self, projectile: &Projectile) -> Aabb {
        Aabb::new(projectile.position, self.sprite.size())
    }
}
