#![allow(dead_code)]

use standings_core::game::{Game, PlayoffGame, PlayoffRound};
use standings_core::season::Season;
use standings_core::team::{nfl_teams, Conference, Team};

/// Fill out AFC records against NFC opponents, AFC team at home.
/// Each entry is (team, wins, losses, ties).
pub fn filler_games(plan: &[(&str, u32, u32, u32)], first_id: usize) -> Vec<Game> {
    let nfc: Vec<Team> = nfl_teams()
        .into_iter()
        .filter(|t| t.conference == Conference::Nfc)
        .collect();
    let mut games = Vec::new();
    let mut n = first_id;
    for &(team, wins, losses, ties) in plan {
        for i in 0..wins + losses + ties {
            let opponent = &nfc[n % nfc.len()].id;
            let (home_score, away_score) = if i < wins {
                (27, 13)
            } else if i < wins + losses {
                (13, 27)
            } else {
                (17, 17)
            };
            games.push(Game::final_score(&format!("f{n}"), 1 + i % 18, team, opponent, home_score, away_score));
            n += 1;
        }
    }
    games
}

/// Every 2022 regular season game with an AFC team:
/// (week, away, home, away score, home score). BUF at CIN in week 17 was
/// never completed and is left out.
pub const AFC_2022_GAMES: &[(u32, &str, &str, u32, u32)] = &[
    (1, "KC", "ARI", 44, 21),
    (1, "CLE", "CAR", 26, 24),
    (1, "PIT", "CIN", 23, 20),
    (1, "IND", "HOU", 20, 20),
    (1, "LV", "LAC", 19, 24),
    (1, "BUF", "LAR", 31, 10),
    (1, "NE", "MIA", 7, 20),
    (1, "BAL", "NYJ", 24, 9),
    (1, "DEN", "SEA", 16, 17),
    (1, "NYG", "TEN", 21, 20),
    (1, "JAX", "WAS", 22, 28),
    (2, "MIA", "BAL", 42, 38),
    (2, "TEN", "BUF", 7, 41),
    (2, "NYJ", "CLE", 31, 30),
    (2, "CIN", "DAL", 17, 20),
    (2, "HOU", "DEN", 9, 16),
    (2, "IND", "JAX", 0, 24),
    (2, "LAC", "KC", 24, 27),
    (2, "ARI", "LV", 29, 23),
    (2, "NE", "PIT", 17, 14),
    (3, "HOU", "CHI", 20, 23),
    (3, "PIT", "CLE", 17, 29),
    (3, "SF", "DEN", 10, 11),
    (3, "KC", "IND", 17, 20),
    (3, "JAX", "LAC", 38, 10),
    (3, "BUF", "MIA", 19, 21),
    (3, "BAL", "NE", 37, 26),
    (3, "CIN", "NYJ", 27, 12),
    (3, "LV", "TEN", 22, 24),
    (4, "CLE", "ATL", 20, 23),
    (4, "BUF", "BAL", 23, 20),
    (4, "MIA", "CIN", 15, 27),
    (4, "NE", "GB", 24, 27),
    (4, "LAC", "HOU", 34, 24),
    (4, "TEN", "IND", 24, 17),
    (4, "DEN", "LV", 23, 32),
    (4, "JAX", "PHI", 21, 29),
    (4, "NYJ", "PIT", 24, 20),
    (4, "KC", "TB", 41, 31),
    (5, "CIN", "BAL", 17, 19),
    (5, "PIT", "BUF", 3, 38),
    (5, "LAC", "CLE", 30, 28),
    (5, "IND", "DEN", 12, 9),
    (5, "HOU", "JAX", 13, 6),
    (5, "LV", "KC", 29, 30),
    (5, "DET", "NE", 0, 29),
    (5, "MIA", "NYJ", 17, 40),
    (5, "TEN", "WAS", 21, 17),
    (6, "NE", "CLE", 38, 15),
    (6, "NYJ", "GB", 27, 10),
    (6, "JAX", "IND", 27, 34),
    (6, "BUF", "KC", 24, 20),
    (6, "DEN", "LAC", 16, 19),
    (6, "MIN", "MIA", 24, 16),
    (6, "CIN", "NO", 30, 26),
    (6, "BAL", "NYG", 20, 24),
    (6, "TB", "PIT", 18, 20),
    (7, "CLE", "BAL", 20, 23),
    (7, "ATL", "CIN", 17, 35),
    (7, "NYJ", "DEN", 16, 9),
    (7, "NYG", "JAX", 23, 17),
    (7, "SEA", "LAC", 37, 23),
    (7, "HOU", "LV", 20, 38),
    (7, "PIT", "MIA", 10, 16),
    (7, "CHI", "NE", 33, 14),
    (7, "KC", "SF", 44, 23),
    (7, "IND", "TEN", 10, 19),
    (8, "GB", "BUF", 17, 27),
    (8, "CIN", "CLE", 13, 32),
    (8, "MIA", "DET", 31, 27),
    (8, "TEN", "HOU", 17, 10),
    (8, "WAS", "IND", 17, 16),
    (8, "DEN", "JAX", 21, 17),
    (8, "LV", "NO", 0, 24),
    (8, "NE", "NYJ", 22, 17),
    (8, "PIT", "PHI", 13, 35),
    (8, "BAL", "TB", 27, 22),
    (9, "LAC", "ATL", 20, 17),
    (9, "MIA", "CHI", 35, 32),
    (9, "CAR", "CIN", 21, 42),
    (9, "PHI", "HOU", 29, 17),
    (9, "LV", "JAX", 20, 27),
    (9, "TEN", "KC", 17, 20),
    (9, "IND", "NE", 3, 26),
    (9, "BAL", "NO", 27, 13),
    (9, "BUF", "NYJ", 17, 20),
    (10, "MIN", "BUF", 33, 30),
    (10, "JAX", "KC", 17, 27),
    (10, "IND", "LV", 25, 20),
    (10, "CLE", "MIA", 17, 39),
    (10, "HOU", "NYG", 16, 24),
    (10, "NO", "PIT", 10, 20),
    (10, "LAC", "SF", 16, 22),
    (10, "DEN", "TEN", 10, 17),
    (11, "CAR", "BAL", 3, 13),
    (11, "CLE", "BUF", 23, 31),
    (11, "LV", "DEN", 22, 16),
    (11, "TEN", "GB", 27, 17),
    (11, "WAS", "HOU", 23, 10),
    (11, "PHI", "IND", 17, 16),
    (11, "KC", "LAC", 30, 27),
    (11, "NYJ", "NE", 3, 10),
    (11, "CIN", "PIT", 37, 30),
    (12, "LAC", "ARI", 25, 24),
    (12, "DEN", "CAR", 10, 23),
    (12, "TB", "CLE", 17, 23),
    (12, "BUF", "DET", 28, 25),
    (12, "PIT", "IND", 24, 17),
    (12, "BAL", "JAX", 27, 28),
    (12, "LAR", "KC", 10, 26),
    (12, "HOU", "MIA", 15, 30),
    (12, "NE", "MIN", 26, 33),
    (12, "CHI", "NYJ", 10, 31),
    (12, "LV", "SEA", 40, 34),
    (12, "CIN", "TEN", 20, 16),
    (13, "PIT", "ATL", 19, 16),
    (13, "DEN", "BAL", 9, 10),
    (13, "KC", "CIN", 24, 27),
    (13, "IND", "DAL", 19, 54),
    (13, "JAX", "DET", 14, 40),
    (13, "CLE", "HOU", 27, 14),
    (13, "LAC", "LV", 20, 27),
    (13, "NYJ", "MIN", 22, 27),
    (13, "BUF", "NE", 24, 10),
    (13, "TEN", "PHI", 10, 35),
    (13, "MIA", "SF", 17, 33),
    (14, "NE", "ARI", 27, 13),
    (14, "NYJ", "BUF", 12, 20),
    (14, "CLE", "CIN", 10, 23),
    (14, "HOU", "DAL", 23, 27),
    (14, "KC", "DEN", 34, 28),
    (14, "MIA", "LAC", 17, 23),
    (14, "LV", "LAR", 16, 17),
    (14, "BAL", "PIT", 16, 14),
    (14, "JAX", "TEN", 36, 22),
    (15, "MIA", "BUF", 29, 32),
    (15, "PIT", "CAR", 24, 16),
    (15, "BAL", "CLE", 3, 13),
    (15, "ARI", "DEN", 15, 24),
    (15, "KC", "HOU", 30, 24),
    (15, "DAL", "JAX", 34, 40),
    (15, "TEN", "LAC", 14, 17),
    (15, "NE", "LV", 24, 30),
    (15, "IND", "MIN", 36, 39),
    (15, "DET", "NYJ", 20, 17),
    (15, "CIN", "TB", 34, 23),
    (16, "ATL", "BAL", 9, 17),
    (16, "BUF", "CHI", 35, 13),
    (16, "NO", "CLE", 17, 10),
    (16, "LAC", "IND", 20, 3),
    (16, "SEA", "KC", 10, 24),
    (16, "DEN", "LAR", 14, 51),
    (16, "GB", "MIA", 26, 20),
    (16, "CIN", "NE", 22, 18),
    (16, "JAX", "NYJ", 19, 3),
    (16, "LV", "PIT", 10, 13),
    (16, "HOU", "TEN", 19, 14),
    (17, "PIT", "BAL", 16, 13),
    (17, "JAX", "HOU", 31, 3),
    (17, "DEN", "KC", 24, 27),
    (17, "LAR", "LAC", 10, 31),
    (17, "SF", "LV", 37, 34),
    (17, "MIA", "NE", 21, 23),
    (17, "IND", "NYG", 10, 38),
    (17, "NYJ", "SEA", 6, 23),
    (17, "DAL", "TEN", 27, 13),
    (17, "CLE", "WAS", 24, 10),
    (18, "NE", "BUF", 23, 35),
    (18, "BAL", "CIN", 16, 27),
    (18, "LAC", "DEN", 28, 31),
    (18, "HOU", "IND", 32, 31),
    (18, "TEN", "JAX", 16, 20),
    (18, "KC", "LV", 31, 13),
    (18, "NYJ", "MIA", 6, 11),
    (18, "CLE", "PIT", 14, 28),
];

pub const AFC_2022_SEEDS: [&str; 7] = ["KC", "BUF", "CIN", "JAX", "LAC", "BAL", "MIA"];

/// Ids read like `17-DEN@KC`.
pub fn afc_2022_games() -> Vec<Game> {
    AFC_2022_GAMES
        .iter()
        .map(|&(week, away, home, away_score, home_score)| {
            Game::final_score(&format!("{week}-{away}@{home}"), week, home, away, home_score, away_score)
        })
        .collect()
}

pub fn afc_2022() -> Season {
    Season::new(nfl_teams(), afc_2022_games())
}

pub fn afc_feed_game(id: &str, round: PlayoffRound, home: &str, away: &str) -> PlayoffGame {
    PlayoffGame::new(Game::scheduled(id, 19, home, away), round, Some(Conference::Afc))
}

/// The real AFC postseason of 2022 as a feed with recorded winners.
pub fn afc_2022_postseason() -> Vec<PlayoffGame> {
    vec![
        afc_feed_game("wc-1", PlayoffRound::WildCard, "BUF", "MIA").with_winner("BUF"),
        afc_feed_game("wc-2", PlayoffRound::WildCard, "CIN", "BAL").with_winner("CIN"),
        afc_feed_game("wc-3", PlayoffRound::WildCard, "JAX", "LAC").with_winner("JAX"),
        afc_feed_game("div-1", PlayoffRound::Divisional, "KC", "JAX").with_winner("KC"),
        afc_feed_game("div-2", PlayoffRound::Divisional, "BUF", "CIN").with_winner("CIN"),
        afc_feed_game("champ", PlayoffRound::Championship, "KC", "CIN").with_winner("KC"),
    ]
}
