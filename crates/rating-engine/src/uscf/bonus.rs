//! US Chess bonus points.

use rating_core::GameOutcome;
use std::collections::HashMap;

/// Bonus threshold per square root of games.
pub const BONUS_THRESHOLD: f64 = 12.0;

/// Fewest games in a session that can earn a bonus.
pub const BONUS_MIN_GAMES: usize = 3;

/// Most games against one opponent allowed in a bonus-eligible session.
pub const MAX_GAMES_PER_OPPONENT: usize = 2;

/// Games counted below this are raised to it when computing the threshold.
const BONUS_MIN_DIVISOR_GAMES: usize = 4;

/// Returns true if no opponent appears more than twice in `games`.
pub fn no_repeat_opponents(games: &[GameOutcome]) -> bool {
    let mut pairings = HashMap::new();
    for game in games {
        let count = pairings.entry(game.opponent_key()).or_insert(0_usize);
        *count += 1;
        if *count > MAX_GAMES_PER_OPPONENT {
            return false;
        }
    }
    true
}

/// Returns true if the session qualifies for bonus points.
pub fn is_eligible(games: &[GameOutcome]) -> bool {
    games.len() >= BONUS_MIN_GAMES && no_repeat_opponents(games)
}

/// Bonus points earned on top of `base_change` over `game_count` games.
pub fn bonus_points(base_change: f64, game_count: usize) -> f64 {
    let m = game_count.max(BONUS_MIN_DIVISOR_GAMES) as f64;
    (base_change - BONUS_THRESHOLD * m.sqrt()).max(0.0)
}
