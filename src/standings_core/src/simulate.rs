use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::SimulationConfig;
use crate::constants::{DIVISION_WINNER_SEEDS, HOME_FIELD_ADVANTAGE};
use crate::game::{Game, Outcome};
use crate::records::RecordBook;
use crate::season::Season;
use crate::seeding::seed_conference;
use crate::team::{Conference, TeamId};
use crate::win_prob::calculate_win_prob;

/// Share of simulated seasons in which a team reached each goal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffOdds {
    pub team_id: TeamId,
    pub playoff: f64,
    pub division: f64,
    pub bye: f64,
    /// Average seed over the simulations where the team was seeded
    pub mean_seed: Option<f64>,
}

#[derive(Default)]
struct Tally {
    playoff: u32,
    division: u32,
    bye: u32,
    seed_sum: u32,
}

/// Seeds of both conferences after one simulated finish.
fn simulate_once(season: &Season, open: &[(&Game, f64)], seed: u64) -> Vec<(TeamId, u8)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut picks = season.selections.clone();
    for (game, home_prob) in open {
        let outcome = if rng.gen::<f64>() < *home_prob {
            Outcome::Home
        } else {
            Outcome::Away
        };
        picks.set(&game.id, outcome);
    }

    let book = RecordBook::build(&season.teams, &season.games, &picks);
    Conference::ALL
        .iter()
        .flat_map(|&conference| {
            seed_conference(&book, conference)
                .seeds
                .into_iter()
                .enumerate()
                .map(|(index, team_id)| (team_id, (index + 1) as u8))
        })
        .collect()
}

/// Monte Carlo playoff odds over every game that is neither final nor
/// selected.
///
/// Per-game probabilities come from the current records. Each simulation is
/// seeded from a master RNG, so a fixed `config.seed` reproduces the result
/// regardless of how rayon schedules the work.
pub fn simulate_playoff_odds(season: &Season, config: &SimulationConfig) -> Vec<PlayoffOdds> {
    let book = season.records();
    let open: Vec<(&Game, f64)> = season
        .games
        .iter()
        .filter(|g| g.decided_outcome(&season.selections).is_none())
        .filter(|g| book.team(&g.home_team).is_some() && book.team(&g.away_team).is_some())
        .map(|g| {
            let home = book.record_or_empty(&g.home_team);
            let away = book.record_or_empty(&g.away_team);
            (g, calculate_win_prob(home, away, HOME_FIELD_ADVANTAGE))
        })
        .collect();

    let mut rng = match config.seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    let sim_seeds: Vec<u64> = (0..config.simulations).map(|_| rng.gen::<u64>()).collect();

    tracing::debug!(simulations = config.simulations, open_games = open.len(), "simulating playoff odds");

    let results: Vec<Vec<(TeamId, u8)>> = sim_seeds
        .par_iter()
        .map(|&seed| simulate_once(season, &open, seed))
        .collect();

    let mut tallies: HashMap<TeamId, Tally> = HashMap::new();
    for seeds in results {
        for (team_id, seed) in seeds {
            let tally = tallies.entry(team_id).or_default();
            tally.playoff += 1;
            tally.seed_sum += seed as u32;
            if (seed as usize) <= DIVISION_WINNER_SEEDS {
                tally.division += 1;
            }
            if seed == 1 {
                tally.bye += 1;
            }
        }
    }

    let n = config.simulations.max(1) as f64;
    season
        .teams
        .iter()
        .map(|team| {
            let tally = tallies.remove(&team.id).unwrap_or_default();
            PlayoffOdds {
                team_id: team.id.clone(),
                playoff: tally.playoff as f64 / n,
                division: tally.division as f64 / n,
                bye: tally.bye as f64 / n,
                mean_seed: (tally.playoff > 0).then(|| tally.seed_sum as f64 / tally.playoff as f64),
            }
        })
        .collect()
}
