//! Per-frame game logic.
//!
//! [`init_state`] builds a session from a validated [`GameConfig`] and
//! [`tick`] advances it by one frame.  The only outside inputs are the input
//! snapshot, the elapsed time, and (for spawning) an injected RNG, so callers
//! control determinism.

pub mod animation;
pub mod avatar;
pub mod camera;
pub mod projectile;
pub mod pursuer;

use glam::Vec2;
use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{InputSnapshot, SpriteId};
use crate::error::ArenaError;

use self::animation::DirectionalAnimator;
use self::avatar::Avatar;
use self::camera::Camera;
use self::projectile::ProjectilePool;
use self::pursuer::PursuerSet;

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct GameState {
    pub avatar: Avatar,
    pub pursuers: PursuerSet,
    pub camera: Camera,
    pub world_size: Vec2,
    pub deadzone_half: Vec2,
    pub wave_size: usize,
    pub spawn_area: [u32; 2],
    pub frame: u64,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a session and spawn the first wave.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> Result<GameState, ArenaError> {
    config.validate()?;
    let sprites = &config.sprites;

    let animator = DirectionalAnimator::new(
        sprites.avatar_idle.handle(SpriteId::AVATAR_IDLE)?,
        [
            sprites.walk_up.handle(SpriteId::AVATAR_WALK_UP)?,
            sprites.walk_down.handle(SpriteId::AVATAR_WALK_DOWN)?,
            sprites.walk_left.handle(SpriteId::AVATAR_WALK_LEFT)?,
            sprites.walk_right.handle(SpriteId::AVATAR_WALK_RIGHT)?,
        ],
        config.avatar.walk_frames,
    )?;

    let [bounds_width, bounds_height] = config.projectile_bounds();
    let pool = ProjectilePool::new(
        sprites.projectile.handle(SpriteId::PROJECTILE)?,
        bounds_width,
        bounds_height,
        config.projectile.speed,
    );

    let avatar = Avatar::new(config.avatar.start, animator, pool)
        .with_speed(config.avatar.speed)
        .with_shoot_cooldown(config.avatar.shoot_cooldown)
        .with_stick_deadzone(config.avatar.stick_deadzone);

    let pursuers = PursuerSet::new(sprites.pursuer.handle(SpriteId::PURSUER)?, config.pursuers.frames)?
        .with_speed(config.pursuers.speed);

    let mut state = GameState {
        avatar,
        pursuers,
        camera: Camera::default(),
        world_size: config.world_size(),
        deadzone_half: config.deadzone_half(),
        wave_size: config.pursuers.count,
        spawn_area: config.spawn_area(),
        frame: 0,
    };
    respawn_wave(&mut state, rng);

    info!(
        "session started: world {}x{}, avatar at {}",
        config.world.width, config.world.height, config.avatar.start
    );
    Ok(state)
}

/// Throw away the current pursuers and spawn a fresh wave.
pub fn respawn_wave(state: &mut GameState, rng: &mut impl Rng) {
    let [width, height] = state.spawn_area;
    state.pursuers.spawn(state.wave_size, width, height, rng);
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame: avatar, then pursuers (chasing the
/// avatar's new position), then the camera.
pub fn tick(state: &mut GameState, input: &InputSnapshot, delta_time: f32) {
    let delta_time = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };

    state.avatar.update(input, delta_time);
    state.pursuers.advance(delta_time, state.avatar.position);
    state
        .camera
        .follow(state.avatar.position, state.deadzone_half, state.world_size);

    state.frame += 1;
}
