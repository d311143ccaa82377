//! Bridge between the simulation and whatever draws it.
//!
//! The core only describes what to draw; a [`RenderSink`] decides how.

use glam::Vec2;

use crate::compute::GameState;
use crate::entities::{SourceRect, SpriteHandle};

/// One sprite blit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteHandle,
    /// World position of the sprite's top-left corner.
    pub position: Vec2,
    /// Frame within a sheet; `None` draws the whole image.
    pub source: Option<SourceRect>,
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: f32,
    pub flip: bool,
}

impl DrawCommand {
    pub fn new(sprite: SpriteHandle, position: Vec2, source: Option<SourceRect>) -> Self {
        Self {
            sprite,
            position,
            source,
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: 1.0,
            flip: false,
        }
    }
}

pub trait RenderSink {
    fn draw(&mut self, command: DrawCommand);
}

/// Collects commands in order; handy for tests and replay.
impl RenderSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Emit one command per visible entity: avatar, live projectiles, pursuers.
pub fn draw_world<S: RenderSink + ?Sized>(state: &GameState, sink: &mut S) {
    let avatar = &state.avatar;
    let (sprite, source) = avatar.animator().current_frame();
    sink.draw(DrawCommand::new(sprite, avatar.position, source));

    let pool = avatar.projectiles();
    for projectile in pool.active() {
        sink.draw(DrawCommand::new(pool.sprite(), projectile.position, None));
    }

    let pursuers = &state.pursuers;
    for pursuer in pursuers.iter() {
        sink.draw(DrawCommand::new(
            pursuers.sheet(),
            pursuer.position,
            Some(pursuers.source_rect(pursuer)),
        ));
    }
}
