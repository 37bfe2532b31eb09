/// Pure game-logic functions.
///
/// Every public transition takes an immutable reference to the current
/// `GameState` plus the read-only `Settings` and returns a brand-new
/// `GameState`. The private helpers below work on the fresh copy in place.

use crate::button::Button;
use crate::entities::{Bullet, GameState, GameStatus, Ship};
use crate::fleet::{check_fleet_edges, create_fleet, move_fleet};
use crate::geometry::Rect;
use crate::input::{Flow, InputEvent, Key};
use crate::settings::{DynamicSettings, Settings};
use crate::stats::{GameStats, Scoreboard};

const PLAY_BUTTON_LABEL: &str = "PLAY THE GAME";

// ── Constructors ─────────────────────────────────────────────────────────────

/// A ship parked at the bottom centre of the screen, not moving.
pub fn new_ship(settings: &Settings) -> Ship {
    let mut ship = Ship {
        rect: Rect::new(0.0, 0.0, settings.ship_width, settings.ship_height),
        moving_right: false,
        moving_left: false,
        moving_up: false,
        moving_down: false,
    };
    center_ship(&mut ship, settings);
    ship
}

pub fn center_ship(ship: &mut Ship, settings: &Settings) {
    ship.rect
        .set_midbottom(settings.screen_width / 2.0, settings.screen_height);
}

/// The state shown when the program starts: a fleet on screen, the play
/// button up, no game running.
pub fn init_state(settings: &Settings) -> GameState {
    let stats = GameStats::new(settings);
    let scoreboard = Scoreboard::new(&stats);
    GameState {
        ship: new_ship(settings),
        bullets: Vec::new(),
        aliens: create_fleet(settings),
        dynamic: DynamicSettings::new(settings),
        stats,
        scoreboard,
        play_button: Button::new(settings, PLAY_BUTTON_LABEL),
        respawn_frames: 0,
        pointer_visible: true,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Begin a fresh game. Does nothing while a game is already running.
pub fn start_new_game(state: &GameState, settings: &Settings) -> GameState {
    let mut next = state.clone();
    if next.stats.game_active {
        return next;
    }

    next.dynamic = DynamicSettings::new(settings);

    next.stats.reset_stats(settings);
    next.stats.game_active = true;
    next.scoreboard.prep_score(&next.stats);
    next.scoreboard.prep_level(&next.stats);
    next.scoreboard.prep_ships(&next.stats);

    next.aliens = create_fleet(settings);
    next.bullets.clear();
    next.ship.stop();
    center_ship(&mut next.ship, settings);

    next.respawn_frames = 0;
    next.pointer_visible = false;

    log::info!(
        "New game started: {} ships, {} aliens",
        next.stats.ships_left,
        next.aliens.len()
    );
    next
}

/// Pointer press at playfield coordinates: starts a game when it lands on
/// the play button while no game is running.
pub fn handle_click(state: &GameState, settings: &Settings, x: f32, y: f32) -> GameState {
    if state.play_button.is_clicked(x, y) && !state.stats.game_active {
        start_new_game(state, settings)
    } else {
        state.clone()
    }
}

/// Set or clear the ship's movement flag for a direction key.
/// Non-direction keys leave the state untouched.
pub fn set_moving(state: &GameState, key: Key, moving: bool) -> GameState {
    let mut next = state.clone();
    match key {
        Key::Left => next.ship.moving_left = moving,
        Key::Right => next.ship.moving_right = moving,
        Key::Up => next.ship.moving_up = moving,
        Key::Down => next.ship.moving_down = moving,
        Key::Fire | Key::Start | Key::Quit => {}
    }
    next
}

/// Fire a bullet from the ship's nose, capped at `bullets_allowed` live
/// bullets and only while playing.
pub fn fire_bullet(state: &GameState, settings: &Settings) -> GameState {
    if state.status() != GameStatus::Playing || state.bullets.len() >= settings.bullets_allowed {
        return state.clone();
    }
    let mut rect = Rect::new(0.0, 0.0, settings.bullet_width, settings.bullet_height);
    rect.set_midtop(state.ship.rect.center_x(), state.ship.rect.top());

    let mut next = state.clone();
    next.bullets.push(Bullet { rect });
    next
}

/// Apply one input event. Returns the new state and whether to keep running.
pub fn handle_event(
    state: &GameState,
    settings: &Settings,
    event: InputEvent,
) -> (GameState, Flow) {
    match event {
        InputEvent::Quit => (state.clone(), Flow::Quit),
        InputEvent::PointerDown { x, y } => (handle_click(state, settings, x, y), Flow::Continue),
        InputEvent::KeyDown(key) => match key {
            Key::Quit => (state.clone(), Flow::Quit),
            Key::Fire => (fire_bullet(state, settings), Flow::Continue),
            Key::Start => (start_new_game(state, settings), Flow::Continue),
            Key::Left | Key::Right | Key::Up | Key::Down => {
                (set_moving(state, key, true), Flow::Continue)
            }
        },
        InputEvent::KeyUp(key) => (set_moving(state, key, false), Flow::Continue),
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order: ship, bullets, bullet/alien collisions (and level-up), fleet,
/// ship/alien and bottom-edge checks. Nothing but the frame counter moves
/// while the game is over; the respawn pause only counts down.
pub fn tick(state: &GameState, settings: &Settings) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    match state.status() {
        GameStatus::GameOver => return next,
        GameStatus::Respawning => {
            next.respawn_frames -= 1;
            if next.respawn_frames == 0 {
                log::debug!("Respawn pause over");
            }
            return next;
        }
        GameStatus::Playing => {}
    }

    update_ship(&mut next.ship, &next.dynamic, settings);
    update_bullets(&mut next);
    check_bullet_alien_collisions(&mut next, settings);
    update_aliens(&mut next, settings);
    next
}

/// Lose a ship: either respawn with a new fleet after a short pause, or end
/// the game when this was the last one.
pub fn ship_hit(state: &GameState, settings: &Settings) -> GameState {
    let mut next = state.clone();
    apply_ship_hit(&mut next, settings);
    next
}

// ── Frame steps ──────────────────────────────────────────────────────────────

/// Move by the held directions, then keep the ship on screen.
pub fn update_ship(ship: &mut Ship, dynamic: &DynamicSettings, settings: &Settings) {
    let speed = dynamic.ship_speed;
    if ship.moving_right {
        ship.rect.x += speed;
    }
    if ship.moving_left {
        ship.rect.x -= speed;
    }
    if ship.moving_up {
        ship.rect.y -= speed;
    }
    if ship.moving_down {
        ship.rect.y += speed;
    }
    ship.rect
        .clamp_within(settings.screen_width, settings.screen_height);
}

fn update_bullets(state: &mut GameState) {
    let speed = state.dynamic.bullet_speed;
    for bullet in state.bullets.iter_mut() {
        bullet.rect.y -= speed;
    }
    state.bullets.retain(|b| b.rect.bottom() > 0.0);
}

/// Each bullet removes every alien it overlaps and disappears if it hit
/// anything. Points are paid per alien removed.
fn check_bullet_alien_collisions(state: &mut GameState, settings: &Settings) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut hit_any = false;

    for bullet in bullets {
        let before = state.aliens.len();
        state.aliens.retain(|a| !a.rect.overlaps(&bullet.rect));
        let removed = (before - state.aliens.len()) as u32;

        if removed == 0 {
            state.bullets.push(bullet);
            continue;
        }
        hit_any = true;
        let gain = state.dynamic.alien_points.saturating_mul(removed);
        state.stats.score = state.stats.score.saturating_add(gain);
    }

    if hit_any {
        state.scoreboard.prep_score(&state.stats);
        state.scoreboard.check_high_score(&mut state.stats);
    }

    if state.aliens.is_empty() {
        start_next_level(state, settings);
    }
}

fn start_next_level(state: &mut GameState, settings: &Settings) {
    state.bullets.clear();
    state.aliens = create_fleet(settings);
    center_ship(&mut state.ship, settings);
    state.dynamic.increase_speed(settings);

    state.stats.level += 1;
    state.scoreboard.prep_level(&state.stats);
    log::info!(
        "Level {} reached, alien speed {:.3}",
        state.stats.level,
        state.dynamic.alien_speed
    );
}

fn update_aliens(state: &mut GameState, settings: &Settings) {
    check_fleet_edges(&mut state.aliens, &mut state.dynamic, settings);
    move_fleet(&mut state.aliens, &state.dynamic);

    let ship_rect = state.ship.rect;
    if state.aliens.iter().any(|a| a.rect.overlaps(&ship_rect)) {
        log::info!("Ship hit by alien");
        apply_ship_hit(state, settings);
        return;
    }

    if state
        .aliens
        .iter()
        .any(|a| a.rect.bottom() >= settings.screen_height)
    {
        log::info!("Alien reached the bottom");
        apply_ship_hit(state, settings);
    }
}

fn apply_ship_hit(state: &mut GameState, settings: &Settings) {
    if state.stats.ships_left > 1 {
        state.stats.ships_left -= 1;
        state.scoreboard.prep_ships(&state.stats);

        state.aliens = create_fleet(settings);
        state.bullets.clear();
        center_ship(&mut state.ship, settings);

        state.respawn_frames = settings.respawn_frames();
        log::info!("Ship lost, {} left", state.stats.ships_left);
    } else {
        state.stats.ships_left = 0;
        state.scoreboard.prep_ships(&state.stats);

        center_ship(&mut state.ship, settings);
        state.stats.game_active = false;
        state.respawn_frames = 0;
        state.pointer_visible = true;
        log::info!(
            "Game over: score {}, high score {}",
            state.stats.score,
            state.stats.high_score
        );
    }
}
