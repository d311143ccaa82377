use glam::Vec2;
use pursuit_arena::config::*;
use pursuit_arena::ArenaError;

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    config.validate().unwrap();
    assert_eq!(config.world_size(), Vec2::new(2496.0, 2496.0));
    assert_eq!(config.avatar.start, Vec2::new(100.0, 100.0));
    assert_eq!(config.avatar.speed, 200.0);
    assert_eq!(config.pursuers.frames, 10);
    assert_eq!(config.deadzone_half(), Vec2::new(320.0, 180.0));
}

#[test]
fn empty_toml_gives_defaults() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = GameConfig::from_toml_str(
        r#"
        [avatar]
        start = [10.0, 20.0]
        speed = 150.0

        [pursuers]
        count = 3
        "#,
    )
    .unwrap();
    assert_eq!(config.avatar.start, Vec2::new(10.0, 20.0));
    assert_eq!(config.avatar.speed, 150.0);
    assert_eq!(config.avatar.shoot_cooldown, 0.2);
    assert_eq!(config.pursuers.count, 3);
    assert_eq!(config.pursuers.speed, 100.0);
}

#[test]
fn optional_areas_fall_back_to_world() {
    let config = GameConfig::from_toml_str(
        r#"
        [world]
        width = 1000
        height = 700

        [projectile]
        bounds_height = 500
        "#,
    )
    .unwrap();
    assert_eq!(config.projectile_bounds(), [1000, 500]);
    assert_eq!(config.spawn_area(), [1000, 700]);
}

#[test]
fn sprite_sizes_parse() {
    let config = GameConfig::from_toml_str(
        r#"
        [sprites.pursuer]
        width = 640
        height = 64
        "#,
    )
    .unwrap();
    assert_eq!(config.sprites.pursuer, SpriteSize { width: 640, height: 64 });
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GameConfig::from_toml_str("[avatar\nspeed = 1").unwrap_err();
    assert!(matches!(err, ArenaError::ConfigParse(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = GameConfig::from_toml_str("[avatar]\nspeed = \"fast\"").unwrap_err();
    assert!(matches!(err, ArenaError::ConfigParse(_)));
}

#[test]
fn zero_frames_rejected() {
    let err = GameConfig::from_toml_str("[pursuers]\nframes = 0").unwrap_err();
    assert!(matches!(err, ArenaError::InvalidConfig { field: "pursuers.frames", .. }));
}

#[test]
fn negative_speed_rejected() {
    let err = GameConfig::from_toml_str("[avatar]\nspeed = -1.0").unwrap_err();
    assert!(matches!(err, ArenaError::InvalidConfig { field: "avatar.speed", .. }));
}

#[test]
fn deadzone_of_one_rejected() {
    let err = GameConfig::from_toml_str("[avatar]\nstick_deadzone = 1.0").unwrap_err();
    assert!(matches!(err, ArenaError::InvalidConfig { field: "avatar.stick_deadzone", .. }));
}

#[test]
fn empty_spawn_area_rejected() {
    let err = GameConfig::from_toml_str("[pursuers]\nspawn_width = 0").unwrap_err();
    assert!(matches!(err, ArenaError::InvalidConfig { field: "pursuers.spawn", .. }));
}

#[test]
fn zero_world_rejected() {
    let mut config = GameConfig::default();
    config.world.height = 0;
    assert!(config.validate().is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ArenaError::ConfigIo { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}
