use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::bracket::{build_league_bracket, LeagueBracket};
use crate::config::{SearchLimits, SimulationConfig};
use crate::draft::{draft_order, DraftPick};
use crate::error::{Error, Result};
use crate::game::{Game, Outcome, PlayoffGame};
use crate::records::RecordBook;
use crate::scenario::{magic_number, team_outlook, Goal, TeamOutlook};
use crate::seeding::{seed_conference, ConferenceSeeding, TeamStanding};
use crate::selections::Selections;
use crate::simulate::{simulate_playoff_odds, PlayoffOdds};
use crate::team::{Conference, Team};

/// Immutable snapshot of a season: catalog, schedule, postseason feed and
/// the user's picks. Every engine result is recomputed from it on demand.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub playoff_games: Vec<PlayoffGame>,
    #[serde(default)]
    pub selections: Selections,
}

impl Season {
    pub fn new(teams: Vec<Team>, games: Vec<Game>) -> Self {
        Season {
            teams,
            games,
            playoff_games: Vec::new(),
            selections: Selections::new(),
        }
    }

    pub fn with_playoff_games(mut self, playoff_games: Vec<PlayoffGame>) -> Self {
        self.playoff_games = playoff_games;
        self
    }

    pub fn with_selections(mut self, selections: Selections) -> Self {
        self.selections = selections;
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        let path = filepath.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check catalog and feed consistency. Engine calls do not require it;
    /// they skip whatever does not resolve.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for team in &self.teams {
            if !ids.insert(team.id.as_str()) {
                return Err(Error::DuplicateTeam(team.id.clone()));
            }
        }

        let feeds = self
            .games
            .iter()
            .chain(self.playoff_games.iter().map(|g| &g.game));
        for game in feeds {
            for team_id in [&game.home_team, &game.away_team] {
                if !ids.contains(team_id.as_str()) {
                    return Err(Error::UnknownTeam {
                        game_id: game.id.clone(),
                        team_id: team_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Create a modified copy with one more pick; the original is untouched.
    pub fn with_selection(&self, game_id: &str, outcome: Outcome) -> Self {
        let mut new_season = self.clone();
        new_season.selections.set(game_id, outcome);
        new_season
    }

    pub fn records(&self) -> RecordBook<'_> {
        RecordBook::build(&self.teams, &self.games, &self.selections)
    }

    pub fn seeding(&self, conference: Conference) -> ConferenceSeeding {
        seed_conference(&self.records(), conference)
    }

    /// Standings in seed order with each team's playoff magic number.
    pub fn standings(&self, conference: Conference, limits: &SearchLimits) -> Vec<TeamStanding> {
        let book = self.records();
        let mut standings = seed_conference(&book, conference).standings(&book);
        for standing in &mut standings {
            standing.magic_number = magic_number(
                &self.teams,
                &self.games,
                &self.selections,
                &standing.team_id,
                Goal::Playoff,
                limits,
            )
            .number;
        }
        standings
    }

    pub fn bracket(&self) -> LeagueBracket {
        let book = self.records();
        let afc = seed_conference(&book, Conference::Afc);
        let nfc = seed_conference(&book, Conference::Nfc);
        build_league_bracket(&afc, &nfc, &self.playoff_games, &self.selections)
    }

    pub fn draft_order(&self) -> Vec<DraftPick> {
        let book = self.records();
        let afc = seed_conference(&book, Conference::Afc);
        let nfc = seed_conference(&book, Conference::Nfc);
        let bracket = build_league_bracket(&afc, &nfc, &self.playoff_games, &self.selections);
        draft_order(&book, &afc, &nfc, &bracket)
    }

    pub fn outlook(&self, team_id: &str, limits: &SearchLimits) -> TeamOutlook {
        team_outlook(&self.teams, &self.games, &self.selections, team_id, limits)
    }

    pub fn playoff_odds(&self, config: &SimulationConfig) -> Vec<PlayoffOdds> {
        simulate_playoff_odds(self, config)
    }
}
