use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{score_key, DIVISION_WINNER_SEEDS, PLAYOFF_SEEDS};
use crate::records::{RecordBook, WinLossTie};
use crate::team::{Conference, Division, TeamId};
use crate::tiebreak::{break_tie, TieKind};

/// Strongest position a team holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clinch {
    Bye,
    Division,
    Playoff,
    None,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub conference: Conference,
    pub division: Division,
    pub record: WinLossTie,
    pub seed: Option<u8>,
    /// Strongest goal held by the current seed, not a guarantee
    pub clinched: Clinch,
    /// Unseeded as things stand. A team still alive can be eliminated here
    /// while carrying a magic number.
    pub is_eliminated: bool,
    /// Playoff magic number from the scenario search, filled in by
    /// `Season::standings`
    pub magic_number: Option<u32>,
}

/// Playoff seeding of one conference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceSeeding {
    pub conference: Conference,
    /// Seeded teams, index 0 holds seed 1
    pub seeds: Vec<TeamId>,
    /// Division winners ranked against each other
    pub division_winners: Vec<TeamId>,
    /// Every non-winner, ranked for wild card purposes
    pub wildcard_pool: Vec<TeamId>,
    /// Full division tables, winner first
    pub division_order: BTreeMap<Division, Vec<TeamId>>,
}

impl ConferenceSeeding {
    pub fn seed_of(&self, team_id: &str) -> Option<u8> {
        self.seeds
            .iter()
            .position(|id| id == team_id)
            .map(|index| (index + 1) as u8)
    }

    pub fn team_at(&self, seed: u8) -> Option<&str> {
        let index = (seed as usize).checked_sub(1)?;
        self.seeds.get(index).map(String::as_str)
    }

    /// Whole conference ranked: division winners, then the wild card pool.
    pub fn ranked(&self) -> impl Iterator<Item = &TeamId> + '_ {
        self.division_winners.iter().chain(self.wildcard_pool.iter())
    }

    /// Standings as if the season ended now. Unseeded teams are marked
    /// eliminated; magic numbers are left for the scenario search.
    pub fn standings(&self, book: &RecordBook) -> Vec<TeamStanding> {
        self.ranked()
            .filter_map(|id| {
                let team = book.team(id)?;
                let seed = self.seed_of(id);
                let clinched = match seed {
                    Some(1) => Clinch::Bye,
                    Some(s) if (s as usize) <= DIVISION_WINNER_SEEDS => Clinch::Division,
                    Some(_) => Clinch::Playoff,
                    None => Clinch::None,
                };
                Some(TeamStanding {
                    team_id: id.clone(),
                    conference: team.conference,
                    division: team.division,
                    record: book.record_or_empty(id).overall,
                    seed,
                    clinched,
                    is_eliminated: seed.is_none(),
                    magic_number: None,
                })
            })
            .collect()
    }
}

/// Sort by win percentage, breaking every equal-percentage run with `breaker`.
fn order_by_win_pct<F>(book: &RecordBook, ids: &[TeamId], mut breaker: F) -> Vec<TeamId>
where
    F: FnMut(&[TeamId]) -> Vec<TeamId>,
{
    let mut sorted: Vec<TeamId> = ids.to_vec();
    sorted.sort_by_key(|id| std::cmp::Reverse(score_key(book.win_pct(id))));

    let mut ordered = Vec::with_capacity(sorted.len());
    let mut start = 0;
    while start < sorted.len() {
        let key = score_key(book.win_pct(&sorted[start]));
        let end = sorted[start..]
            .iter()
            .position(|id| score_key(book.win_pct(id)) != key)
            .map_or(sorted.len(), |offset| start + offset);
        let run = &sorted[start..end];
        if run.len() == 1 {
            ordered.push(run[0].clone());
        } else {
            ordered.extend(breaker(run));
        }
        start = end;
    }
    ordered
}

/// Order a division table, winner first.
pub fn order_division(book: &RecordBook, division: Division) -> Vec<TeamId> {
    let members: Vec<TeamId> = book
        .division_teams(division)
        .iter()
        .map(|t| t.id.clone())
        .collect();
    order_by_win_pct(book, &members, |run| break_tie(book, run, TieKind::Division))
}

/// Rank wild card candidates. Same-division teams inside a tied run are first
/// ordered among themselves; only each division's top team is ranked against
/// the others, and its division follows it in place.
pub fn rank_wildcard_pool(book: &RecordBook, pool: &[TeamId]) -> Vec<TeamId> {
    order_by_win_pct(book, pool, |run| rank_tied_run(book, run))
}

fn rank_tied_run(book: &RecordBook, run: &[TeamId]) -> Vec<TeamId> {
    let mut by_division: BTreeMap<Option<Division>, Vec<TeamId>> = BTreeMap::new();
    for id in run {
        let division = book.team(id).map(|t| t.division);
        by_division.entry(division).or_default().push(id.clone());
    }
    if by_division.values().all(|members| members.len() == 1) {
        return break_tie(book, run, TieKind::WildCard);
    }

    let sublists: Vec<Vec<TeamId>> = by_division
        .into_values()
        .map(|members| break_tie(book, &members, TieKind::Division))
        .collect();
    let representatives: Vec<TeamId> = sublists.iter().map(|list| list[0].clone()).collect();
    let ranked = break_tie(book, &representatives, TieKind::WildCard);

    ranked
        .iter()
        .filter_map(|rep| sublists.iter().find(|list| &list[0] == rep))
        .flatten()
        .cloned()
        .collect()
}

/// Assign seeds 1-7 for a conference.
pub fn seed_conference(book: &RecordBook, conference: Conference) -> ConferenceSeeding {
    let mut division_order = BTreeMap::new();
    let mut winners = Vec::new();
    let mut pool = Vec::new();

    for division in conference.divisions() {
        let table = order_division(book, division);
        if let Some((winner, rest)) = table.split_first() {
            winners.push(winner.clone());
            pool.extend(rest.iter().cloned());
        }
        division_order.insert(division, table);
    }

    let division_winners = order_by_win_pct(book, &winners, |run| break_tie(book, run, TieKind::WildCard));
    let wildcard_pool = rank_wildcard_pool(book, &pool);

    let wildcard_berths = PLAYOFF_SEEDS - division_winners.len().min(DIVISION_WINNER_SEEDS);
    let seeds: Vec<TeamId> = division_winners
        .iter()
        .chain(wildcard_pool.iter().take(wildcard_berths))
        .cloned()
        .collect();

    tracing::debug!(%conference, ?seeds, "conference seeded");

    ConferenceSeeding {
        conference,
        seeds,
        division_winners,
        wildcard_pool,
        division_order,
    }
}
