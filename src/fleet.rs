/// Fleet layout and fleet-wide movement.
///
/// Aliens are spaced one alien width apart horizontally and one alien height
/// apart vertically, starting one alien size in from the top-left corner.
/// Room is left at the bottom for the ship plus two empty rows.

use crate::entities::Alien;
use crate::geometry::Rect;
use crate::settings::{DynamicSettings, Settings};

/// `(columns, rows)` that fit on the screen. Never negative.
pub fn fleet_capacity(settings: &Settings) -> (usize, usize) {
    let aw = settings.alien_width;
    let ah = settings.alien_height;

    let available_x = settings.screen_width - 2.0 * aw;
    let columns = (available_x / (2.0 * aw)).floor().max(0.0) as usize;

    let available_y = settings.screen_height - 3.0 * ah - settings.ship_height;
    let rows = (available_y / (2.0 * ah)).floor().max(0.0) as usize;

    (columns, rows)
}

/// The alien in grid slot `(column, row)`.
pub fn alien_at(settings: &Settings, column: usize, row: usize) -> Alien {
    let aw = settings.alien_width;
    let ah = settings.alien_height;
    Alien {
        rect: Rect::new(
            aw + 2.0 * aw * column as f32,
            ah + 2.0 * ah * row as f32,
            aw,
            ah,
        ),
    }
}

/// Build a full fleet, row by row.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let (columns, rows) = fleet_capacity(settings);
    let mut aliens = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        for column in 0..columns {
            aliens.push(alien_at(settings, column, row));
        }
    }
    log::debug!("Created fleet of {} aliens ({}x{})", aliens.len(), columns, rows);
    aliens
}

/// True when the alien touches the left or right screen edge.
pub fn check_edges(alien: &Alien, settings: &Settings) -> bool {
    alien.rect.right() >= settings.screen_width || alien.rect.left() <= 0.0
}

/// Drop the whole fleet and reverse its direction.
pub fn change_fleet_direction(
    aliens: &mut [Alien],
    dynamic: &mut DynamicSettings,
    settings: &Settings,
) {
    for alien in aliens.iter_mut() {
        alien.rect.y += settings.fleet_drop_speed;
    }
    dynamic.fleet_direction *= -1.0;
}

/// Flip the fleet at most once if any alien touches an edge.
/// Returns whether a flip happened.
pub fn check_fleet_edges(
    aliens: &mut [Alien],
    dynamic: &mut DynamicSettings,
    settings: &Settings,
) -> bool {
    if aliens.iter().any(|a| check_edges(a, settings)) {
        change_fleet_direction(aliens, dynamic, settings);
        true
    } else {
        false
    }
}

/// Shift every alien horizontally by one frame of fleet movement.
pub fn move_fleet(aliens: &mut [Alien], dynamic: &DynamicSettings) {
    let dx = dynamic.alien_speed * dynamic.fleet_direction;
    for alien in aliens.iter_mut() {
        alien.rect.x += dx;
    }
}
