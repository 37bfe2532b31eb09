use alien_invasion::button::Button;
use alien_invasion::settings::Settings;
use alien_invasion::stats::*;

// ── format_score ──────────────────────────────────────────────────────────────

#[test]
fn format_score_rounds_to_tens() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(4), "0");
    assert_eq!(format_score(6), "10");
    assert_eq!(format_score(50), "50");
    assert_eq!(format_score(112), "110");
    assert_eq!(format_score(168), "170");
}

#[test]
fn format_score_ties_go_to_even() {
    assert_eq!(format_score(15), "20");
    assert_eq!(format_score(25), "20");
    assert_eq!(format_score(1235), "1,240");
    assert_eq!(format_score(1245), "1,240");
}

#[test]
fn format_score_groups_thousands() {
    assert_eq!(format_score(1000), "1,000");
    assert_eq!(format_score(999_990), "999,990");
    assert_eq!(format_score(1_000_000), "1,000,000");
    assert_eq!(format_score(u32::MAX), "4,294,967,300");
}

// ── GameStats ─────────────────────────────────────────────────────────────────

#[test]
fn new_stats_are_inactive_baseline() {
    let s = Settings::default();
    let stats = GameStats::new(&s);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.high_score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, s.ship_limit);
    assert!(!stats.game_active);
}

#[test]
fn reset_stats_keeps_high_score() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.score = 900;
    stats.high_score = 1200;
    stats.level = 5;
    stats.ships_left = 0;
    stats.reset_stats(&s);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, 3);
    assert_eq!(stats.high_score, 1200);
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[test]
fn scoreboard_prepares_all_texts() {
    let mut stats = GameStats::new(&Settings::default());
    stats.score = 1234;
    stats.high_score = 5000;
    stats.level = 3;
    stats.ships_left = 2;
    let sb = Scoreboard::new(&stats);
    assert_eq!(sb.score_text, "1,230");
    assert_eq!(sb.high_score_text, "5,000");
    assert_eq!(sb.level_text, "3");
    assert_eq!(sb.ships_text, "▲▲");
}

#[test]
fn check_high_score_raises_only_when_beaten() {
    let mut stats = GameStats::new(&Settings::default());
    let mut sb = Scoreboard::new(&stats);

    stats.score = 300;
    sb.check_high_score(&mut stats);
    assert_eq!(stats.high_score, 300);
    assert_eq!(sb.high_score_text, "300");

    stats.score = 100;
    sb.check_high_score(&mut stats);
    assert_eq!(stats.high_score, 300);
    assert_eq!(sb.high_score_text, "300");
}

#[test]
fn prep_calls_refresh_single_fields() {
    let mut stats = GameStats::new(&Settings::default());
    let mut sb = Scoreboard::new(&stats);
    stats.level = 7;
    stats.score = 70;
    sb.prep_level(&stats);
    assert_eq!(sb.level_text, "7");
    assert_eq!(sb.score_text, "0");
    sb.prep_score(&stats);
    assert_eq!(sb.score_text, "70");
}

// ── Button ────────────────────────────────────────────────────────────────────

#[test]
fn button_is_centered() {
    let s = Settings::default();
    let b = Button::new(&s, "PLAY");
    assert_eq!(b.rect.x, 30.0);
    assert_eq!(b.rect.y, 9.0);
    assert_eq!(b.rect.width, 20.0);
    assert_eq!(b.rect.height, 3.0);
    assert_eq!(b.msg, "PLAY");
}

#[test]
fn button_click_bounds() {
    let b = Button::new(&Settings::default(), "PLAY");
    assert!(b.is_clicked(30.0, 9.0));
    assert!(b.is_clicked(49.0, 11.0));
    assert!(!b.is_clicked(50.0, 10.0));
    assert!(!b.is_clicked(40.0, 12.0));
    assert!(!b.is_clicked(29.0, 10.0));
}

#[test]
fn button_shrinks_on_narrow_screen() {
    let s = Settings {
        screen_width: 12.0,
        screen_height: 2.0,
        ..Settings::default()
    };
    let b = Button::new(&s, "PLAY");
    assert_eq!(b.rect.width, 12.0);
    assert_eq!(b.rect.height, 2.0);
    assert_eq!((b.rect.x, b.rect.y), (0.0, 0.0));
}
