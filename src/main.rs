mod display;

use std::collections::HashMap;
use std::io::{self, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use glam::Vec2;
use log::{error, info};
use rand::thread_rng;

use pursuit_arena::compute::{init_state, respawn_wave, tick, GameState};
use pursuit_arena::config::GameConfig;
use pursuit_arena::entities::{DirectionKeys, InputSnapshot, PadState};

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

/// Build this frame's input snapshot.  WASD drive the avatar; the arrow keys
/// stand in for a controller's right stick so the keyboard can aim.
fn snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputSnapshot {
    let held = |keys: &[KeyCode]| any_held(key_frame, keys, frame);

    let keys = DirectionKeys {
        up: held(&[KeyCode::Char('w'), KeyCode::Char('W')]),
        down: held(&[KeyCode::Char('s'), KeyCode::Char('S')]),
        left: held(&[KeyCode::Char('a'), KeyCode::Char('A')]),
        right: held(&[KeyCode::Char('d'), KeyCode::Char('D')]),
    };
    let aim = DirectionKeys {
        up: held(&[KeyCode::Up]),
        down: held(&[KeyCode::Down]),
        left: held(&[KeyCode::Left]),
        right: held(&[KeyCode::Right]),
    }
    .axis();

    InputSnapshot {
        keys,
        pad: Some(PadState {
            // Sticks report y up.
            right_stick: Vec2::new(aim.x, -aim.y),
            ..PadState::default()
        }),
        fire: held(&[KeyCode::Char(' ')]),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key, and each frame turns the still-fresh keys into one
/// immutable `InputSnapshot` for the simulation.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> io::Result<()> {
    let mut rng = thread_rng();
    let frame_time = Duration::from_millis(config.display.frame_ms);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let delta_time = frame_start.duration_since(last).as_secs_f32();
        last = frame_start;
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => respawn_wave(state, &mut rng),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        tick(state, &snapshot(&key_frame, frame), delta_time);

        let fps = if delta_time > 0.0 { 1.0 / delta_time } else { 0.0 };
        display::render(out, state, &config.display, fps)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn log_path() -> PathBuf {
    std::env::temp_dir().join("pursuit_arena.log")
}

/// `RUST_LOG` controls the level.  Logs go to a file because the terminal is
/// in raw mode while the game runs.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
    if let Ok(file) = std::fs::File::create(log_path()) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

/// First CLI argument names a TOML config; without one the defaults apply.
fn load_config() -> io::Result<GameConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path)),
        None => Ok(GameConfig::default()),
    };
    config.map_err(|err| {
        error!("{err}");
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    init_logging();

    let config = load_config()?;
    let mut state = init_state(&config, &mut thread_rng())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut state, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("session ended after {} frames", state.frame);
    result
}
