use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use crate::bracket::LeagueBracket;
use crate::constants::{score_key, EXIT_ROUND_SIZES};
use crate::game::PlayoffRound;
use crate::records::RecordBook;
use crate::seeding::ConferenceSeeding;
use crate::team::TeamId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DraftReason {
    #[serde(rename = "Did not make playoffs")]
    MissedPlayoffs,
    #[serde(rename = "Lost in Wild Card")]
    LostWildCard,
    #[serde(rename = "Lost in Divisional")]
    LostDivisional,
    #[serde(rename = "Lost in Conference Championship")]
    LostChampionship,
    #[serde(rename = "Lost Super Bowl")]
    LostSuperBowl,
    #[serde(rename = "Won Super Bowl")]
    WonSuperBowl,
}

impl DraftReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftReason::MissedPlayoffs => "Did not make playoffs",
            DraftReason::LostWildCard => "Lost in Wild Card",
            DraftReason::LostDivisional => "Lost in Divisional",
            DraftReason::LostChampionship => "Lost in Conference Championship",
            DraftReason::LostSuperBowl => "Lost Super Bowl",
            DraftReason::WonSuperBowl => "Won Super Bowl",
        }
    }
}

impl fmt::Display for DraftReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    pub team_id: TeamId,
    pub pick: u8,
    /// Last pick of the group's slot range while the group is still filling
    pub pick_max: Option<u8>,
    pub reason: DraftReason,
}

/// Worst record first, then weaker schedule, then id.
fn worst_first(book: &RecordBook, a: &str, b: &str) -> Ordering {
    score_key(book.win_pct(a))
        .cmp(&score_key(book.win_pct(b)))
        .then(score_key(book.strength_of_schedule(a)).cmp(&score_key(book.strength_of_schedule(b))))
        .then_with(|| a.cmp(b))
}

/// Reverse draft order. Non-playoff teams pick first, then postseason exits
/// round by round. Each exit group owns a fixed slot range; teams whose
/// postseason game is undecided are left out.
pub fn draft_order(
    book: &RecordBook,
    afc: &ConferenceSeeding,
    nfc: &ConferenceSeeding,
    bracket: &LeagueBracket,
) -> Vec<DraftPick> {
    let seeded: HashSet<&str> = afc
        .seeds
        .iter()
        .chain(nfc.seeds.iter())
        .map(String::as_str)
        .collect();

    let mut missed: Vec<&str> = book
        .teams()
        .iter()
        .map(|t| t.id.as_str())
        .filter(|id| !seeded.contains(id))
        .collect();
    missed.sort_by(|a, b| worst_first(book, a, b));

    let mut picks: Vec<DraftPick> = missed
        .iter()
        .enumerate()
        .map(|(i, id)| DraftPick {
            team_id: id.to_string(),
            pick: (i + 1) as u8,
            pick_max: None,
            reason: DraftReason::MissedPlayoffs,
        })
        .collect();

    let losers = |round: PlayoffRound| {
        bracket
            .round(round)
            .into_iter()
            .filter_map(|m| m.loser())
            .collect::<Vec<&str>>()
    };
    let groups = [
        (DraftReason::LostWildCard, losers(PlayoffRound::WildCard), EXIT_ROUND_SIZES[0]),
        (DraftReason::LostDivisional, losers(PlayoffRound::Divisional), EXIT_ROUND_SIZES[1]),
        (DraftReason::LostChampionship, losers(PlayoffRound::Championship), EXIT_ROUND_SIZES[2]),
        (DraftReason::LostSuperBowl, losers(PlayoffRound::SuperBowl), EXIT_ROUND_SIZES[3]),
        (DraftReason::WonSuperBowl, bracket.champion.as_deref().into_iter().collect(), 1),
    ];

    let mut start = missed.len() + 1;
    for (reason, mut teams, size) in groups {
        teams.sort_by(|a, b| worst_first(book, a, b));
        let pick_max = (teams.len() < size).then(|| (start + size - 1) as u8);
        for (i, id) in teams.iter().enumerate() {
            picks.push(DraftPick {
                team_id: id.to_string(),
                pick: (start + i) as u8,
                pick_max,
                reason,
            });
        }
        start += size;
    }

    tracing::debug!(picks = picks.len(), "draft order assigned");
    picks
}
