use glam::Vec2;
use pursuit_arena::compute::animation::FRAME_DELAY;
use pursuit_arena::compute::pursuer::*;
use pursuit_arena::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// 10 frames of 32×48.
fn pursuer_sheet() -> SpriteHandle {
    SpriteHandle::new(SpriteId::PURSUER, 320, 48).unwrap()
}

fn make_pursuer(position: Vec2) -> Pursuer {
    Pursuer::new(&pursuer_sheet(), 10, position).unwrap()
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Pursuer ───────────────────────────────────────────────────────────────────

#[test]
fn size_comes_from_one_frame() {
    let p = make_pursuer(Vec2::ZERO);
    assert_eq!(p.size(), Vec2::new(32.0, 48.0));
    assert_eq!(p.speed, PURSUER_SPEED);
    assert_eq!(p.bounds().max(), Vec2::new(32.0, 48.0));
}

#[test]
fn zero_frames_rejected() {
    assert!(Pursuer::new(&pursuer_sheet(), 0, Vec2::ZERO).is_err());
}

#[test]
fn steers_so_centre_meets_target() {
    // Centre starts at (16,24); target (116,24) is straight right.
    let mut p = make_pursuer(Vec2::ZERO);
    p.advance(0.5, Vec2::new(116.0, 24.0));
    assert_eq!(p.position, Vec2::new(50.0, 0.0));
}

#[test]
fn movement_is_unit_direction_times_speed() {
    let mut p = make_pursuer(Vec2::new(500.0, 500.0));
    let start = p.position;
    p.advance(0.25, Vec2::new(0.0, 0.0));
    let moved = p.position - start;
    assert!((moved.length() - 25.0).abs() < 1e-3);
    assert!(moved.x < 0.0 && moved.y < 0.0);
}

#[test]
fn moving_advances_animation() {
    let mut p = make_pursuer(Vec2::ZERO);
    p.advance(FRAME_DELAY, Vec2::new(1000.0, 1000.0));
    assert_eq!(p.animation().current_frame(), 1);
}

#[test]
fn exactly_centred_pursuer_stays_and_resets() {
    let mut p = make_pursuer(Vec2::ZERO);
    p.advance(FRAME_DELAY, Vec2::new(1000.0, 1000.0));
    p.advance(FRAME_DELAY, Vec2::new(1000.0, 1000.0));
    assert_eq!(p.animation().current_frame(), 2);

    // Put the centre exactly on the target.
    p.position = Vec2::new(84.0, 76.0);
    p.advance(FRAME_DELAY, Vec2::new(100.0, 100.0));
    assert_eq!(p.position, Vec2::new(84.0, 76.0));
    assert_eq!(p.animation().current_frame(), 0);
    assert_eq!(p.animation().elapsed(), 0.0);
}

// ── PursuerSet ────────────────────────────────────────────────────────────────

#[test]
fn new_set_is_empty() {
    let set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    assert!(set.is_empty());
}

#[test]
fn spawn_creates_count_pursuers() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    set.spawn(25, 800, 600, &mut seeded_rng());
    assert_eq!(set.len(), 25);
}

#[test]
fn spawn_positions_stay_in_area() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    let mut rng = seeded_rng();
    for _ in 0..20 {
        set.spawn(50, 64, 32, &mut rng);
        for p in set.iter() {
            assert!(p.position.x >= 0.0 && p.position.x < 64.0);
            assert!(p.position.y >= 0.0 && p.position.y < 32.0);
        }
    }
}

#[test]
fn respawn_replaces_previous_wave() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    let mut rng = seeded_rng();
    set.spawn(10, 800, 600, &mut rng);
    set.spawn(3, 800, 600, &mut rng);
    assert_eq!(set.len(), 3);
}

#[test]
fn spawn_is_deterministic_for_seed() {
    let mut a = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    let mut b = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    a.spawn(8, 800, 600, &mut StdRng::seed_from_u64(7));
    b.spawn(8, 800, 600, &mut StdRng::seed_from_u64(7));
    let pa: Vec<Vec2> = a.iter().map(|p| p.position).collect();
    let pb: Vec<Vec2> = b.iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn spawned_pursuers_use_set_speed() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap().with_speed(40.0);
    set.spawn(4, 800, 600, &mut seeded_rng());
    assert!(set.iter().all(|p| p.speed == 40.0));
}

#[test]
fn advance_moves_every_pursuer_toward_target() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    set.spawn(12, 800, 600, &mut seeded_rng());
    let target = Vec2::new(400.0, 300.0);
    let before: Vec<f32> = set.iter().map(|p| (p.position + p.size() / 2.0).distance(target)).collect();
    set.advance(0.1, target);
    for (p, d) in set.iter().zip(before) {
        let after = (p.position + p.size() / 2.0).distance(target);
        assert!(after < d || d == 0.0);
    }
}

#[test]
fn source_rect_follows_pursuer_frame() {
    let mut set = PursuerSet::new(pursuer_sheet(), 10).unwrap();
    set.spawn(1, 10, 10, &mut seeded_rng());
    set.advance(FRAME_DELAY, Vec2::new(2000.0, 2000.0));
    let p = set.iter().next().unwrap();
    assert_eq!(
        set.source_rect(p),
        SourceRect { x: 32, y: 0, width: 32, height: 48 }
    );
}
