/// Score, level and lives tracking plus the text the HUD shows for them.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    /// Best score this session. Never reset by `reset_stats`.
    pub high_score: u32,
    pub level: u32,
    /// Ships remaining, counting the one in play.
    pub ships_left: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Fresh stats for a new process: inactive, high score zero.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: 0,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reinitialise the per-game counters.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

/// Pre-rendered HUD strings. Each `prep_*` call refreshes one of them from
/// the current stats; the display layer only reads them.
#[derive(Clone, Debug, PartialEq)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    pub ships_text: String,
}

const SHIP_GLYPH: char = '▲';

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Scoreboard {
            score_text: String::new(),
            high_score_text: String::new(),
            level_text: String::new(),
            ships_text: String::new(),
        };
        sb.prep_score(stats);
        sb.prep_high_score(stats);
        sb.prep_level(stats);
        sb.prep_ships(stats);
        sb
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_text = std::iter::repeat(SHIP_GLYPH)
            .take(stats.ships_left as usize)
            .collect();
    }

    /// Raise the high score if the current score beats it.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.score > stats.high_score {
            stats.high_score = stats.score;
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten (ties to even) and group thousands with commas.
pub fn format_score(score: u32) -> String {
    let tens = score / 10;
    let rem = score % 10;
    let rounded = if rem > 5 || (rem == 5 && tens % 2 == 1) {
        (tens as u64 + 1) * 10
    } else {
        tens as u64 * 10
    };

    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
