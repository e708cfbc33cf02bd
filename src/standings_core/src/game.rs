use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{SELECTED_LOSS_SCORE, SELECTED_TIE_SCORE, SELECTED_WIN_SCORE};
use crate::selections::Selections;
use crate::team::{Conference, TeamId};

pub type GameId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

/// Which side of a game came out ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Away,
    Tie,
}

impl Outcome {
    pub fn flipped(self) -> Outcome {
        match self {
            Outcome::Home => Outcome::Away,
            Outcome::Away => Outcome::Home,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Outcome::Home),
            "away" => Ok(Outcome::Away),
            "tie" => Ok(Outcome::Tie),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Home => "home",
            Outcome::Away => "away",
            Outcome::Tie => "tie",
        })
    }
}

/// Result of a game from one team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

/// A league game from the game feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub week: u32,
    pub home_team: TeamId,
    pub away_team: TeamId,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: GameStatus,
}

impl Game {
    pub fn scheduled(id: &str, week: u32, home: &str, away: &str) -> Self {
        Game {
            id: id.to_string(),
            week,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: None,
            away_score: None,
            status: GameStatus::Scheduled,
        }
    }

    pub fn final_score(id: &str, week: u32, home: &str, away: &str, home_score: u32, away_score: u32) -> Self {
        Game {
            id: id.to_string(),
            week,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: Some(home_score),
            away_score: Some(away_score),
            status: GameStatus::Final,
        }
    }

    /// A game is final only when its status says so and both scores are present.
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final && self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn final_outcome(&self) -> Option<Outcome> {
        if !self.is_final() {
            return None;
        }
        let (home, away) = (self.home_score?, self.away_score?);
        Some(if home > away {
            Outcome::Home
        } else if away > home {
            Outcome::Away
        } else {
            Outcome::Tie
        })
    }

    /// Final result if there is one, otherwise the user's pick.
    pub fn decided_outcome(&self, selections: &Selections) -> Option<Outcome> {
        self.final_outcome().or_else(|| selections.get(&self.id))
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team == team_id || self.away_team == team_id
    }

    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.home_team == team_id {
            Some(&self.away_team)
        } else if self.away_team == team_id {
            Some(&self.home_team)
        } else {
            None
        }
    }

    /// Team id on the winning side of an outcome, `None` for a tie.
    pub fn winner_for(&self, outcome: Outcome) -> Option<&str> {
        match outcome {
            Outcome::Home => Some(&self.home_team),
            Outcome::Away => Some(&self.away_team),
            Outcome::Tie => None,
        }
    }

    /// Outcome in which `team_id` wins this game.
    pub fn outcome_won_by(&self, team_id: &str) -> Option<Outcome> {
        if self.home_team == team_id {
            Some(Outcome::Home)
        } else if self.away_team == team_id {
            Some(Outcome::Away)
        } else {
            None
        }
    }

    /// Resolve the game into a counted result, or `None` when it is excluded
    /// from both teams' records.
    pub fn resolve(&self, selections: &Selections) -> Option<ResolvedGame> {
        if let Some(outcome) = self.final_outcome() {
            return Some(ResolvedGame {
                game_id: self.id.clone(),
                week: self.week,
                home_team: self.home_team.clone(),
                away_team: self.away_team.clone(),
                home_score: self.home_score.unwrap_or_default(),
                away_score: self.away_score.unwrap_or_default(),
                outcome,
                from_selection: false,
            });
        }

        let outcome = selections.get(&self.id)?;
        let (home_score, away_score) = match outcome {
            Outcome::Home => (SELECTED_WIN_SCORE, SELECTED_LOSS_SCORE),
            Outcome::Away => (SELECTED_LOSS_SCORE, SELECTED_WIN_SCORE),
            Outcome::Tie => (SELECTED_TIE_SCORE, SELECTED_TIE_SCORE),
        };
        Some(ResolvedGame {
            game_id: self.id.clone(),
            week: self.week,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score,
            away_score,
            outcome,
            from_selection: true,
        })
    }
}

/// A game that counts toward records, with the scores used for point tiebreakers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGame {
    pub game_id: GameId,
    pub week: u32,
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub outcome: Outcome,
    /// Scores are placeholders when the outcome came from a selection
    pub from_selection: bool,
}

impl ResolvedGame {
    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.home_team == team_id {
            Some(&self.away_team)
        } else if self.away_team == team_id {
            Some(&self.home_team)
        } else {
            None
        }
    }

    pub fn result_for(&self, team_id: &str) -> Option<GameResult> {
        let is_home = if self.home_team == team_id {
            true
        } else if self.away_team == team_id {
            false
        } else {
            return None;
        };
        Some(match (self.outcome, is_home) {
            (Outcome::Tie, _) => GameResult::Tie,
            (Outcome::Home, true) | (Outcome::Away, false) => GameResult::Win,
            _ => GameResult::Loss,
        })
    }

    /// (points scored, points allowed) for `team_id`.
    pub fn points_for(&self, team_id: &str) -> (u32, u32) {
        if self.home_team == team_id {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayoffRound {
    WildCard,
    Divisional,
    Championship,
    SuperBowl,
}

impl PlayoffRound {
    pub const ALL: [PlayoffRound; 4] = [
        PlayoffRound::WildCard,
        PlayoffRound::Divisional,
        PlayoffRound::Championship,
        PlayoffRound::SuperBowl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayoffRound::WildCard => "wildCard",
            PlayoffRound::Divisional => "divisional",
            PlayoffRound::Championship => "championship",
            PlayoffRound::SuperBowl => "superBowl",
        }
    }
}

impl fmt::Display for PlayoffRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A postseason game from the external playoff feed.
///
/// The listed teams may lag behind actual advancement; `winner_id` is the
/// authoritative recorded result when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffGame {
    #[serde(flatten)]
    pub game: Game,
    pub round: PlayoffRound,
    #[serde(default)]
    pub conference: Option<Conference>,
    #[serde(default)]
    pub winner_id: Option<TeamId>,
}

impl PlayoffGame {
    pub fn new(game: Game, round: PlayoffRound, conference: Option<Conference>) -> Self {
        PlayoffGame {
            game,
            round,
            conference,
            winner_id: None,
        }
    }

    pub fn with_winner(mut self, winner_id: &str) -> Self {
        self.winner_id = Some(winner_id.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.game.id
    }

    /// The feed's winner id. Unlike the listed sides it stays valid when the
    /// listing is stale.
    pub fn recorded_winner(&self) -> Option<&str> {
        self.winner_id.as_deref()
    }

    /// Side ahead on a final score, as the feed lists the sides.
    pub fn scored_winner(&self) -> Option<&str> {
        self.game
            .final_outcome()
            .and_then(|outcome| self.game.winner_for(outcome))
    }
}
