mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::compute::{handle_event, init_state, tick};
use alien_invasion::entities::{GameState, Ship};
use alien_invasion::input::{Flow, InputEvent, Key};
use alien_invasion::settings::Settings;

/// Environment variable naming an optional JSON settings file.
const CONFIG_ENV: &str = "ALIEN_INVASION_CONFIG";

/// A direction key is considered "held" if its last press/repeat event
/// arrived within this many frames.  Covers terminals that don't emit
/// key-release events: OS key repeat refreshes it well before expiry.
const HOLD_WINDOW: u64 = 4;

const DIRECTIONS: [Key; 4] = [Key::Left, Key::Right, Key::Up, Key::Down];

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<Key, u64>, key: &Key, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn ship_flag(ship: &Ship, key: Key) -> bool {
    match key {
        Key::Left => ship.moving_left,
        Key::Right => ship.moving_right,
        Key::Up => ship.moving_up,
        Key::Down => ship.moving_down,
        Key::Fire | Key::Start | Key::Quit => false,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Defaults (or the config file), sized to the terminal, validated.
fn load_settings(width: u16, height: u16) -> Result<Settings> {
    let base = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            Settings::load(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?
        }
        None => Settings::default(),
    };

    let rows = height.saturating_sub(display::HUD_ROWS + display::HINT_ROWS);
    let settings = base.with_screen(width as f32, rows as f32);
    settings
        .validate()
        .context("terminal or settings unsuitable for the game")?;
    Ok(settings)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: one-shot keys (fire, start, quit) and clicks become events
/// immediately.  Direction keys go through a `key_frame` map recording the
/// frame of their last press/repeat; each frame the held set is compared
/// with the ship's movement flags and the differences are fed to the game
/// as key-down / key-up events.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events.  Keys expire after
///   `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_len = Duration::from_millis(settings.frame_millis);
    let mut state: GameState = init_state(settings);

    let mut key_frame: HashMap<Key, u64> = HashMap::new();
    let mut mouse_captured = true;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut events: Vec<InputEvent> = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        events.push(InputEvent::Quit);
                        continue;
                    }
                    let Some(key) = map_key(code) else { continue };
                    let is_direction = DIRECTIONS.contains(&key);
                    match kind {
                        KeyEventKind::Press if is_direction => {
                            key_frame.insert(key, frame);
                        }
                        KeyEventKind::Press => events.push(InputEvent::KeyDown(key)),
                        KeyEventKind::Repeat if is_direction => {
                            key_frame.insert(key, frame);
                        }
                        KeyEventKind::Repeat => {}
                        KeyEventKind::Release => {
                            key_frame.remove(&key);
                        }
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if row >= display::HUD_ROWS {
                        events.push(InputEvent::PointerDown {
                            x: column as f32,
                            y: (row - display::HUD_ROWS) as f32,
                        });
                    }
                }
                _ => {}
            }
        }

        // ── Held directions → movement flag transitions ──────────────────────
        for key in DIRECTIONS {
            let held = is_held(&key_frame, &key, frame);
            if held != ship_flag(&state.ship, key) {
                events.push(if held {
                    InputEvent::KeyDown(key)
                } else {
                    InputEvent::KeyUp(key)
                });
            }
        }

        for ev in events {
            let (next, flow) = handle_event(&state, settings, ev);
            state = next;
            if flow == Flow::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }

        state = tick(&state, settings);

        // The pointer is only needed to click the play button.
        if state.pointer_visible != mouse_captured {
            if state.pointer_visible {
                out.execute(EnableMouseCapture)?;
            } else {
                out.execute(DisableMouseCapture)?;
            }
            mouse_captured = state.pointer_visible;
        }

        display::render(out, &state, settings)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (width, height) = terminal::size().context("failed to query terminal size")?;
    let settings = load_settings(width, height)?;
    log::info!(
        "Playfield {}x{}, fleet speed {}",
        settings.screen_width,
        settings.screen_height,
        settings.alien_speed
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &settings, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
