use statrs::distribution::{ContinuousCDF, Normal};

use crate::constants::SCORING_STDDEV;
use crate::records::TeamRecord;

fn margin_per_game(record: &TeamRecord) -> f64 {
    let games = record.overall.games();
    if games == 0 {
        0.0
    } else {
        record.point_differential() as f64 / games as f64
    }
}

/// Expected home margin for a matchup.
///
/// Each side's average point differential is a rating relative to the league;
/// the gap between them is split evenly since both margins already include
/// the opponents faced. `home_field` is added on top.
pub fn expected_margin(home: &TeamRecord, away: &TeamRecord, home_field: f64) -> f64 {
    (margin_per_game(home) - margin_per_game(away)) / 2.0 + home_field
}

/// Calculate the probability of the home team winning.
///
/// Uses the expected margin with a normal distribution approximation of
/// final score margins.
///
/// # Arguments
/// * `home` - Home team's record so far
/// * `away` - Away team's record so far
/// * `home_field` - Points credited to the home side
///
/// # Returns
/// Probability of the home team winning (0.0-1.0)
pub fn calculate_win_prob(home: &TeamRecord, away: &TeamRecord, home_field: f64) -> f64 {
    let margin = expected_margin(home, away, home_field);
    Normal::new(0.0, 1.0)
        .map(|normal| normal.cdf(margin / SCORING_STDDEV))
        .unwrap_or(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::WinLossTie;

    fn record(team_id: &str, points_for: u32, points_against: u32, games: u32) -> TeamRecord {
        let mut record = TeamRecord::new(team_id);
        record.overall = WinLossTie::new(games, 0, 0);
        record.points_for = points_for;
        record.points_against = points_against;
        record
    }

    #[test]
    fn test_matching_differentials_are_a_coin_flip() {
        let home = record("A", 200, 200, 10);
        let away = record("B", 200, 200, 10);

        let prob = calculate_win_prob(&home, &away, 0.0);
        assert!((prob - 0.5).abs() < 0.001, "no margin without a differential gap, got {prob}");
    }

    #[test]
    fn test_larger_differential_wins_more_often() {
        // +15 a game against -15 a game
        let plus = record("BUF", 300, 150, 10);
        let minus = record("HOU", 150, 300, 10);

        let prob = calculate_win_prob(&plus, &minus, 0.0);
        assert!(prob > 0.8, "a 30-point differential gap gave {prob}");
        assert!(prob < 1.0);
    }

    #[test]
    fn test_swapping_sides_complements() {
        let buf = record("BUF", 280, 210, 12);
        let mia = record("MIA", 250, 240, 12);

        let home_buf = calculate_win_prob(&buf, &mia, 0.0);
        let home_mia = calculate_win_prob(&mia, &buf, 0.0);
        assert!((home_buf + home_mia - 1.0).abs() < 1e-10, "{home_buf} + {home_mia}");
    }

    #[test]
    fn test_home_field_tilts_toward_home() {
        let team1 = record("A", 200, 200, 10);
        let team2 = record("B", 200, 200, 10);

        assert!(calculate_win_prob(&team1, &team2, 3.0) > 0.5);
    }

    #[test]
    fn test_no_games_played() {
        let team1 = TeamRecord::new("A");
        let team2 = TeamRecord::new("B");

        assert_eq!(expected_margin(&team1, &team2, 0.0), 0.0);
        assert!((calculate_win_prob(&team1, &team2, 0.0) - 0.5).abs() < 1e-10);
    }
}
