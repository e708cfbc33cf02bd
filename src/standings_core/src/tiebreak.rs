//! Cascading tiebreaker for teams level on win percentage.
//!
//! Each step scores every team in the group. When the scores split the group,
//! every resulting subgroup is broken again from the first step; when they do
//! not, the whole group moves on to the next step.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{score_key, MIN_COMMON_GAMES};
use crate::records::{RecordBook, WinLossTie};
use crate::team::TeamId;

/// Which cascade applies to a tied group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TieKind {
    /// Teams from one division competing for the division title
    Division,
    /// Teams from different divisions: seeding division winners or wild cards
    WildCard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiebreakStep {
    HeadToHead,
    DivisionRecord,
    ConferenceRecord,
    CommonGames,
    StrengthOfVictory,
    StrengthOfSchedule,
    ConferencePointRank,
    PointDifferential,
}

const DIVISION_CASCADE: [TiebreakStep; 8] = [
    TiebreakStep::HeadToHead,
    TiebreakStep::DivisionRecord,
    TiebreakStep::CommonGames,
    TiebreakStep::ConferenceRecord,
    TiebreakStep::StrengthOfVictory,
    TiebreakStep::StrengthOfSchedule,
    TiebreakStep::ConferencePointRank,
    TiebreakStep::PointDifferential,
];

// Conference record runs before common games for wild card ties
const WILD_CARD_CASCADE: [TiebreakStep; 7] = [
    TiebreakStep::HeadToHead,
    TiebreakStep::ConferenceRecord,
    TiebreakStep::CommonGames,
    TiebreakStep::StrengthOfVictory,
    TiebreakStep::StrengthOfSchedule,
    TiebreakStep::ConferencePointRank,
    TiebreakStep::PointDifferential,
];

impl TieKind {
    pub fn cascade(&self) -> &'static [TiebreakStep] {
        match self {
            TieKind::Division => &DIVISION_CASCADE,
            TieKind::WildCard => &WILD_CARD_CASCADE,
        }
    }
}

/// Order a group tied on win percentage from best to worst.
///
/// The result is the same for every permutation of `group`. Teams still level
/// after the last step are ordered by id.
pub fn break_tie(book: &RecordBook, group: &[TeamId], kind: TieKind) -> Vec<TeamId> {
    let mut members: Vec<TeamId> = Vec::with_capacity(group.len());
    for id in group {
        if !members.contains(id) {
            members.push(id.clone());
        }
    }
    resolve(book, members, kind.cascade(), 0)
}

fn resolve(book: &RecordBook, group: Vec<TeamId>, cascade: &[TiebreakStep], step: usize) -> Vec<TeamId> {
    if group.len() <= 1 {
        return group;
    }
    let Some(&current) = cascade.get(step) else {
        tracing::debug!(?group, "tiebreakers exhausted, ordering by team id");
        let mut group = group;
        group.sort();
        return group;
    };

    let Some(scores) = step_scores(book, &group, current) else {
        return resolve(book, group, cascade, step + 1);
    };

    let subgroups = partition(&group, &scores);
    if subgroups.len() == 1 {
        return resolve(book, group, cascade, step + 1);
    }

    tracing::trace!(step = ?current, ?subgroups, "tiebreak step separated group");
    subgroups
        .into_iter()
        .flat_map(|subgroup| resolve(book, subgroup, cascade, 0))
        .collect()
}

/// Split the group into equal-score subgroups, best first.
fn partition(group: &[TeamId], scores: &[f64]) -> Vec<Vec<TeamId>> {
    let mut buckets: Vec<(i64, Vec<TeamId>)> = Vec::new();
    for (id, &score) in group.iter().zip(scores) {
        let key = score_key(score);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(id.clone()),
            None => buckets.push((key, vec![id.clone()])),
        }
    }
    buckets.sort_by(|a, b| b.0.cmp(&a.0));
    buckets.into_iter().map(|(_, bucket)| bucket).collect()
}

/// Higher is better for every step. `None` means the step does not apply.
fn step_scores(book: &RecordBook, group: &[TeamId], step: TiebreakStep) -> Option<Vec<f64>> {
    match step {
        TiebreakStep::HeadToHead => head_to_head(book, group),
        TiebreakStep::DivisionRecord => Some(
            group
                .iter()
                .map(|id| book.record_or_empty(id).division.win_pct())
                .collect(),
        ),
        TiebreakStep::ConferenceRecord => Some(
            group
                .iter()
                .map(|id| book.record_or_empty(id).conference.win_pct())
                .collect(),
        ),
        TiebreakStep::CommonGames => common_games(book, group),
        TiebreakStep::StrengthOfVictory => {
            Some(group.iter().map(|id| book.strength_of_victory(id)).collect())
        }
        TiebreakStep::StrengthOfSchedule => {
            Some(group.iter().map(|id| book.strength_of_schedule(id)).collect())
        }
        TiebreakStep::ConferencePointRank => Some(conference_point_rank(book, group)),
        TiebreakStep::PointDifferential => Some(
            group
                .iter()
                .map(|id| book.record_or_empty(id).point_differential() as f64)
                .collect(),
        ),
    }
}

/// Head-to-head win percentage within the group.
///
/// Applies only when every team has played at least as many games against the
/// rest of the group as there are other members.
fn head_to_head(book: &RecordBook, group: &[TeamId]) -> Option<Vec<f64>> {
    let needed = (group.len() - 1) as u32;
    let mut scores = Vec::with_capacity(group.len());
    for id in group {
        let tally = book
            .record_or_empty(id)
            .record_against(|opponent| opponent != id && group.iter().any(|m| m == opponent));
        if tally.games() < needed {
            return None;
        }
        scores.push(tally.win_pct());
    }
    Some(scores)
}

/// Win percentage against opponents every tied team has played.
///
/// Skipped when fewer than [`MIN_COMMON_GAMES`] qualifying games exist across
/// the whole group.
fn common_games(book: &RecordBook, group: &[TeamId]) -> Option<Vec<f64>> {
    let members: HashSet<&str> = group.iter().map(String::as_str).collect();
    let mut common: Option<HashSet<&str>> = None;
    for id in group {
        let opponents: HashSet<&str> = book
            .record_or_empty(id)
            .opponents()
            .filter(|o| !members.contains(o))
            .collect();
        common = Some(match common {
            Some(current) => current.intersection(&opponents).copied().collect(),
            None => opponents,
        });
    }
    let common = common.unwrap_or_default();
    if common.is_empty() {
        return None;
    }

    let tallies: Vec<WinLossTie> = group
        .iter()
        .map(|id| book.record_or_empty(id).record_against(|o| common.contains(o)))
        .collect();
    let total: u32 = tallies.iter().map(WinLossTie::games).sum();
    if total < MIN_COMMON_GAMES {
        return None;
    }
    Some(tallies.iter().map(WinLossTie::win_pct).collect())
}

/// Negated sum of the points-scored rank and points-allowed rank among all
/// conference teams, so that the lower combined rank scores higher.
fn conference_point_rank(book: &RecordBook, group: &[TeamId]) -> Vec<f64> {
    group
        .iter()
        .map(|id| {
            let Some(team) = book.team(id) else {
                return f64::MIN;
            };
            let record = book.record_or_empty(id);
            let peers = book.conference_teams(team.conference);
            let scored_rank = 1 + peers
                .iter()
                .filter(|p| book.record_or_empty(&p.id).points_for > record.points_for)
                .count();
            let allowed_rank = 1 + peers
                .iter()
                .filter(|p| book.record_or_empty(&p.id).points_against < record.points_against)
                .count();
            -((scored_rank + allowed_rank) as f64)
        })
        .collect()
}
