//! Standings Core - NFL standings, tiebreaker and playoff scenario engine.
//!
//! Turns a team catalog, a game feed and hypothetical picks into records,
//! tiebreaker-ordered standings, playoff seeding, bracket progress,
//! clinch/elimination status with magic numbers, and the reverse draft order.
//! Every computation is a pure function of its inputs. Python bindings are
//! available behind the `python` feature.

pub mod bracket;
pub mod config;
pub mod constants;
pub mod draft;
pub mod error;
pub mod game;
#[cfg(feature = "python")]
mod python;
pub mod records;
pub mod scenario;
pub mod season;
pub mod seeding;
pub mod selections;
pub mod simulate;
pub mod team;
pub mod tiebreak;
pub mod win_prob;

pub use bracket::{build_conference_bracket, build_league_bracket, BracketState, LeagueBracket, Matchup};
pub use config::{EngineConfig, SearchLimits, SimulationConfig};
pub use constants::{PLAYOFF_SEEDS, SCORING_STDDEV};
pub use draft::{draft_order, DraftPick, DraftReason};
pub use error::{Error, Result};
pub use game::{Game, GameId, GameStatus, Outcome, PlayoffGame, PlayoffRound};
pub use records::{aggregate_records, RecordBook, TeamRecord, WinLossTie};
pub use scenario::{
    magic_number, scenario_paths, team_outlook, Goal, GoalOutlook, MagicNumber, Requirement,
    RequirementKind, ScenarioPath, ScenarioSearch, TeamOutlook,
};
pub use season::Season;
pub use seeding::{order_division, seed_conference, Clinch, ConferenceSeeding, TeamStanding};
pub use selections::Selections;
pub use simulate::{simulate_playoff_odds, PlayoffOdds};
pub use team::{nfl_teams, Conference, Division, Team, TeamId};
pub use tiebreak::{break_tie, TieKind, TiebreakStep};
pub use win_prob::calculate_win_prob;
