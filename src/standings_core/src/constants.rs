/// Points credited to the winner of a game decided by a selection
pub const SELECTED_WIN_SCORE: u32 = 24;

/// Points credited to the loser of a game decided by a selection
pub const SELECTED_LOSS_SCORE: u32 = 17;

/// Points credited to both sides of a selected tie
pub const SELECTED_TIE_SCORE: u32 = 20;

/// Playoff berths per conference
pub const PLAYOFF_SEEDS: usize = 7;

/// Seeds reserved for division winners
pub const DIVISION_WINNER_SEEDS: usize = 4;

/// Tiebreaker scores are compared after rounding to 4 decimals
pub const TIEBREAK_PRECISION: f64 = 10_000.0;

/// Minimum qualifying games (summed across the tied group) for the common-games step
pub const MIN_COMMON_GAMES: u32 = 4;

/// Standard deviation of NFL final score margins
pub const SCORING_STDDEV: f64 = 13.5;

/// Expected point bonus for the home team
pub const HOME_FIELD_ADVANTAGE: f64 = 1.5;

/// Wild card round pairings as (home seed, away seed)
pub const WILD_CARD_PAIRINGS: [(u8, u8); 3] = [(2, 7), (3, 6), (4, 5)];

/// Losers per postseason exit round: wild card, divisional, championship, super bowl
pub const EXIT_ROUND_SIZES: [usize; 4] = [6, 4, 2, 1];

/// Rounds a win percentage or tiebreaker score to the comparison key.
pub fn score_key(score: f64) -> i64 {
    (score * TIEBREAK_PRECISION).round() as i64
}
