use glam::Vec2;
use pursuit_arena::compute::camera::*;

const WORLD: Vec2 = Vec2::new(2496.0, 2496.0);

fn follow(focus: Vec2, target: Vec2) -> Vec2 {
    let mut cam = Camera::new(focus);
    cam.follow(target, DEADZONE_HALF_EXTENTS, WORLD);
    cam.focus
}

#[test]
fn default_camera_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.focus, Vec2::ZERO);
    assert_eq!(cam.zoom, Vec2::ONE);
    assert_eq!(cam.rotation, 0.0);
}

#[test]
fn target_outside_deadzone_snaps_edge() {
    assert_eq!(follow(Vec2::ZERO, Vec2::new(1000.0, 500.0)), Vec2::new(680.0, 320.0));
}

#[test]
fn target_inside_deadzone_leaves_focus() {
    let focus = Vec2::new(1000.0, 1000.0);
    assert_eq!(follow(focus, Vec2::new(1300.0, 830.0)), focus);
}

#[test]
fn target_exactly_on_edge_leaves_focus() {
    let focus = Vec2::new(1000.0, 1000.0);
    assert_eq!(follow(focus, Vec2::new(1320.0, 1180.0)), focus);
}

#[test]
fn target_left_and_above_pulls_focus_back() {
    let focus = Vec2::new(1500.0, 1500.0);
    assert_eq!(follow(focus, Vec2::new(1000.0, 1000.0)), Vec2::new(1320.0, 1180.0));
}

#[test]
fn axes_are_independent() {
    let focus = Vec2::new(1000.0, 1000.0);
    assert_eq!(follow(focus, Vec2::new(1500.0, 1100.0)), Vec2::new(1180.0, 1000.0));
}

#[test]
fn focus_clamped_to_origin() {
    assert_eq!(follow(Vec2::new(100.0, 100.0), Vec2::new(-500.0, -500.0)), Vec2::ZERO);
}

#[test]
fn focus_clamped_to_world_size() {
    assert_eq!(follow(Vec2::new(2400.0, 2400.0), Vec2::new(4000.0, 4000.0)), WORLD);
}

#[test]
fn focus_stays_in_world_for_any_target() {
    let mut cam = Camera::default();
    for i in -20..40 {
        let target = Vec2::new(i as f32 * 97.0, (40 - i) as f32 * 113.0);
        cam.follow(target, DEADZONE_HALF_EXTENTS, WORLD);
        assert!(cam.focus.x >= 0.0 && cam.focus.x <= WORLD.x);
        assert!(cam.focus.y >= 0.0 && cam.focus.y <= WORLD.y);
    }
}

#[test]
fn world_to_view_centres_focus() {
    let cam = Camera::new(Vec2::new(500.0, 400.0));
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(cam.world_to_view(Vec2::new(500.0, 400.0), viewport), Vec2::new(400.0, 300.0));
    assert_eq!(cam.world_to_view(Vec2::new(510.0, 380.0), viewport), Vec2::new(410.0, 280.0));
}
