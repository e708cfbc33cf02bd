use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::game::{Game, GameResult, ResolvedGame};
use crate::selections::Selections;
use crate::team::{Conference, Division, Team, TeamId};

/// Win/loss/tie tally. Ties count as half a win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WinLossTie {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl WinLossTie {
    pub fn new(wins: u32, losses: u32, ties: u32) -> Self {
        WinLossTie { wins, losses, ties }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Win percentage; 0.0 when no games have been counted.
    pub fn win_pct(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / games as f64
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Tie => self.ties += 1,
        }
    }

    pub fn add(&mut self, other: &WinLossTie) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }
}

impl fmt::Display for WinLossTie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ties > 0 {
            write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            write!(f, "{}-{}", self.wins, self.losses)
        }
    }
}

/// Derived record of one team, recomputed from scratch on every call.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub overall: WinLossTie,
    pub division: WinLossTie,
    pub conference: WinLossTie,
    pub points_for: u32,
    pub points_against: u32,
    /// Every game counted toward this record, final or selected
    pub games: Vec<ResolvedGame>,
}

impl TeamRecord {
    pub fn new(team_id: &str) -> Self {
        TeamRecord {
            team_id: team_id.to_string(),
            ..Default::default()
        }
    }

    pub fn win_pct(&self) -> f64 {
        self.overall.win_pct()
    }

    pub fn point_differential(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// Opponent of every counted game, once per game.
    pub fn opponents(&self) -> impl Iterator<Item = &str> + '_ {
        self.games
            .iter()
            .filter_map(move |game| game.opponent_of(&self.team_id))
    }

    /// Tally over the games whose opponent matches `filter`.
    pub fn record_against<F>(&self, filter: F) -> WinLossTie
    where
        F: Fn(&str) -> bool,
    {
        let mut tally = WinLossTie::default();
        for game in &self.games {
            let Some(opponent) = game.opponent_of(&self.team_id) else {
                continue;
            };
            if !filter(opponent) {
                continue;
            }
            if let Some(result) = game.result_for(&self.team_id) {
                tally.record(result);
            }
        }
        tally
    }

    fn apply(&mut self, game: &ResolvedGame, division_game: bool, conference_game: bool) {
        let Some(result) = game.result_for(&self.team_id) else {
            return;
        };
        self.overall.record(result);
        if division_game {
            self.division.record(result);
        }
        if conference_game {
            self.conference.record(result);
        }
        let (scored, allowed) = game.points_for(&self.team_id);
        self.points_for += scored;
        self.points_against += allowed;
        self.games.push(game.clone());
    }
}

/// Aggregate games and selections into one record per catalog team.
///
/// Games that are neither final nor selected, and games naming a team outside
/// the catalog, are left out of every record.
pub fn aggregate_records(teams: &[Team], games: &[Game], selections: &Selections) -> HashMap<TeamId, TeamRecord> {
    let index: HashMap<&str, &Team> = teams.iter().map(|t| (t.id.as_str(), t)).collect();
    let mut records: HashMap<TeamId, TeamRecord> = teams
        .iter()
        .map(|t| (t.id.clone(), TeamRecord::new(&t.id)))
        .collect();

    for game in games {
        let (Some(home), Some(away)) = (index.get(game.home_team.as_str()), index.get(game.away_team.as_str())) else {
            tracing::trace!(game = %game.id, "skipping game with unknown team");
            continue;
        };
        let Some(resolved) = game.resolve(selections) else {
            continue;
        };

        let division_game = home.shares_division(away);
        let conference_game = home.shares_conference(away);

        for team_id in [&home.id, &away.id] {
            if let Some(record) = records.get_mut(team_id) {
                record.apply(&resolved, division_game, conference_game);
            }
        }
    }

    records
}

/// Records for a catalog snapshot, with the lookups the later steps need.
pub struct RecordBook<'a> {
    teams: Vec<&'a Team>,
    index: HashMap<&'a str, &'a Team>,
    records: HashMap<TeamId, TeamRecord>,
    empty: TeamRecord,
}

impl<'a> RecordBook<'a> {
    pub fn build(teams: &'a [Team], games: &[Game], selections: &Selections) -> Self {
        RecordBook {
            teams: teams.iter().collect(),
            index: teams.iter().map(|t| (t.id.as_str(), t)).collect(),
            records: aggregate_records(teams, games, selections),
            empty: TeamRecord::default(),
        }
    }

    pub fn team(&self, team_id: &str) -> Option<&'a Team> {
        self.index.get(team_id).copied()
    }

    pub fn record(&self, team_id: &str) -> Option<&TeamRecord> {
        self.records.get(team_id)
    }

    /// Record for `team_id`, or an empty record for an unknown id.
    pub fn record_or_empty(&self, team_id: &str) -> &TeamRecord {
        self.records.get(team_id).unwrap_or(&self.empty)
    }

    pub fn records(&self) -> &HashMap<TeamId, TeamRecord> {
        &self.records
    }

    pub fn teams(&self) -> &[&'a Team] {
        &self.teams
    }

    /// Conference members in catalog order.
    pub fn conference_teams(&self, conference: Conference) -> Vec<&'a Team> {
        self.teams
            .iter()
            .copied()
            .filter(|t| t.conference == conference)
            .collect()
    }

    /// Division members in catalog order.
    pub fn division_teams(&self, division: Division) -> Vec<&'a Team> {
        self.teams
            .iter()
            .copied()
            .filter(|t| t.division == division)
            .collect()
    }

    pub fn win_pct(&self, team_id: &str) -> f64 {
        self.record_or_empty(team_id).win_pct()
    }

    /// Combined record of opponents, added once per counted game.
    /// With `beaten_only` only games the team won are included.
    fn opponents_record(&self, team_id: &str, beaten_only: bool) -> WinLossTie {
        let record = self.record_or_empty(team_id);
        let mut combined = WinLossTie::default();
        for game in &record.games {
            if beaten_only && game.result_for(team_id) != Some(GameResult::Win) {
                continue;
            }
            if let Some(opponent) = game.opponent_of(team_id) {
                combined.add(&self.record_or_empty(opponent).overall);
            }
        }
        combined
    }

    /// Win percentage of every team beaten; a team beaten twice counts twice.
    pub fn strength_of_victory(&self, team_id: &str) -> f64 {
        self.opponents_record(team_id, true).win_pct()
    }

    /// Win percentage of every opponent played; a team played twice counts twice.
    pub fn strength_of_schedule(&self, team_id: &str) -> f64 {
        self.opponents_record(team_id, false).win_pct()
    }
}
