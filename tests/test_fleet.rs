use alien_invasion::entities::Alien;
use alien_invasion::fleet::*;
use alien_invasion::geometry::Rect;
use alien_invasion::settings::{DynamicSettings, Settings};

fn big_screen() -> Settings {
    Settings {
        screen_width: 1200.0,
        screen_height: 800.0,
        alien_width: 40.0,
        alien_height: 40.0,
        ship_height: 60.0,
        ..Settings::default()
    }
}

// ── capacity & layout ────────────────────────────────────────────────────────

#[test]
fn capacity_for_large_screen() {
    assert_eq!(fleet_capacity(&big_screen()), (14, 7));
}

#[test]
fn fleet_for_large_screen_has_98_aliens_on_screen() {
    let s = big_screen();
    let aliens = create_fleet(&s);
    assert_eq!(aliens.len(), 98);
    for a in &aliens {
        assert!(a.rect.left() >= 0.0 && a.rect.right() <= s.screen_width);
        assert!(a.rect.top() >= 0.0 && a.rect.bottom() <= s.screen_height);
    }
}

#[test]
fn capacity_for_default_terminal() {
    let s = Settings::default();
    assert_eq!(fleet_capacity(&s), (12, 8));
    assert_eq!(create_fleet(&s).len(), 96);
}

#[test]
fn grid_spacing_is_one_alien() {
    let s = big_screen();
    assert_eq!(alien_at(&s, 0, 0).rect, Rect::new(40.0, 40.0, 40.0, 40.0));
    assert_eq!(alien_at(&s, 1, 0).rect.x, 120.0);
    assert_eq!(alien_at(&s, 0, 2).rect.y, 200.0);
    assert_eq!(alien_at(&s, 13, 6).rect, Rect::new(1080.0, 520.0, 40.0, 40.0));
}

#[test]
fn fleet_rows_are_filled_in_order() {
    let s = big_screen();
    let aliens = create_fleet(&s);
    assert_eq!(aliens[0].rect, alien_at(&s, 0, 0).rect);
    assert_eq!(aliens[14].rect, alien_at(&s, 0, 1).rect);
}

#[test]
fn negative_capacity_clamps_to_empty_fleet() {
    let s = Settings {
        screen_width: 4.0,
        screen_height: 3.0,
        ..Settings::default()
    };
    assert_eq!(fleet_capacity(&s), (0, 0));
    assert!(create_fleet(&s).is_empty());
}

#[test]
fn one_column_screen() {
    let s = Settings {
        screen_width: 12.0,
        ..Settings::default()
    };
    // (12 - 6) / 6 = 1
    assert_eq!(fleet_capacity(&s).0, 1);
    assert_eq!(create_fleet(&s).len(), 8);
}

// ── edges & movement ─────────────────────────────────────────────────────────

fn alien(x: f32, y: f32) -> Alien {
    Alien { rect: Rect::new(x, y, 3.0, 1.0) }
}

#[test]
fn check_edges_left_and_right() {
    let s = Settings::default();
    assert!(check_edges(&alien(0.0, 5.0), &s));
    assert!(check_edges(&alien(-0.5, 5.0), &s));
    assert!(check_edges(&alien(77.0, 5.0), &s));
    assert!(!check_edges(&alien(0.1, 5.0), &s));
    assert!(!check_edges(&alien(76.9, 5.0), &s));
}

#[test]
fn fleet_flips_once_for_many_edge_aliens() {
    let s = Settings::default();
    let mut dynamic = DynamicSettings::new(&s);
    let mut aliens = vec![alien(0.0, 1.0), alien(77.0, 1.0), alien(30.0, 3.0)];

    assert!(check_fleet_edges(&mut aliens, &mut dynamic, &s));
    assert_eq!(dynamic.fleet_direction, -1.0);
    assert_eq!(aliens[0].rect.y, 2.0);
    assert_eq!(aliens[1].rect.y, 2.0);
    assert_eq!(aliens[2].rect.y, 4.0);
}

#[test]
fn fleet_away_from_edges_does_not_flip() {
    let s = Settings::default();
    let mut dynamic = DynamicSettings::new(&s);
    let mut aliens = vec![alien(10.0, 1.0)];
    assert!(!check_fleet_edges(&mut aliens, &mut dynamic, &s));
    assert_eq!(dynamic.fleet_direction, 1.0);
    assert_eq!(aliens[0].rect.y, 1.0);
}

#[test]
fn change_direction_twice_restores_direction() {
    let s = Settings::default();
    let mut dynamic = DynamicSettings::new(&s);
    let mut aliens = vec![alien(10.0, 1.0)];
    change_fleet_direction(&mut aliens, &mut dynamic, &s);
    change_fleet_direction(&mut aliens, &mut dynamic, &s);
    assert_eq!(dynamic.fleet_direction, 1.0);
    assert_eq!(aliens[0].rect.y, 3.0);
}

#[test]
fn move_fleet_uses_direction_and_speed() {
    let s = Settings::default();
    let mut dynamic = DynamicSettings::new(&s);
    dynamic.alien_speed = 2.0;
    dynamic.fleet_direction = -1.0;
    let mut aliens = vec![alien(10.0, 1.0), alien(20.0, 3.0)];
    move_fleet(&mut aliens, &dynamic);
    assert_eq!(aliens[0].rect.x, 8.0);
    assert_eq!(aliens[1].rect.x, 18.0);
    assert_eq!(aliens[1].rect.y, 3.0);
}
