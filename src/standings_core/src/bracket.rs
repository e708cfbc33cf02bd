//! Postseason bracket derivation.
//!
//! Each round is built from the previous round's computed winners whenever
//! that round is fully decided, because the external playoff feed can lag
//! behind advancement. Feed games are only trusted for their recorded winner
//! id, which is matched against the computed matchups by team.

use serde::Serialize;

use crate::constants::{PLAYOFF_SEEDS, WILD_CARD_PAIRINGS};
use crate::game::{GameId, Outcome, PlayoffGame, PlayoffRound};
use crate::seeding::ConferenceSeeding;
use crate::selections::Selections;
use crate::team::{Conference, TeamId};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    /// Feed game id when one correlates, otherwise `<CONF>-<round>-<index>`
    pub game_id: GameId,
    pub round: PlayoffRound,
    pub conference: Option<Conference>,
    pub home: TeamId,
    pub away: TeamId,
    pub home_seed: Option<u8>,
    pub away_seed: Option<u8>,
    pub winner: Option<TeamId>,
}

impl Matchup {
    pub fn contains(&self, team_id: &str) -> bool {
        self.home == team_id || self.away == team_id
    }

    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.home == team_id {
            Some(&self.away)
        } else if self.away == team_id {
            Some(&self.home)
        } else {
            None
        }
    }

    pub fn loser(&self) -> Option<&str> {
        self.winner.as_deref().and_then(|w| self.opponent_of(w))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketState {
    pub conference: Conference,
    pub seeds: Vec<TeamId>,
    pub wild_card: Vec<Matchup>,
    pub divisional: Vec<Matchup>,
    pub championship: Vec<Matchup>,
    pub champion: Option<TeamId>,
}

impl BracketState {
    pub fn round(&self, round: PlayoffRound) -> &[Matchup] {
        match round {
            PlayoffRound::WildCard => &self.wild_card,
            PlayoffRound::Divisional => &self.divisional,
            PlayoffRound::Championship => &self.championship,
            PlayoffRound::SuperBowl => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueBracket {
    pub afc: BracketState,
    pub nfc: BracketState,
    pub super_bowl: Option<Matchup>,
    pub champion: Option<TeamId>,
}

impl LeagueBracket {
    pub fn conference(&self, conference: Conference) -> &BracketState {
        match conference {
            Conference::Afc => &self.afc,
            Conference::Nfc => &self.nfc,
        }
    }

    /// Every matchup of a round across both conferences.
    pub fn round(&self, round: PlayoffRound) -> Vec<&Matchup> {
        match round {
            PlayoffRound::SuperBowl => self.super_bowl.iter().collect(),
            _ => self
                .afc
                .round(round)
                .iter()
                .chain(self.nfc.round(round))
                .collect(),
        }
    }
}

/// Build one conference's bracket from its seeding, the playoff feed and the
/// user's picks.
pub fn build_conference_bracket(
    seeding: &ConferenceSeeding,
    playoff_games: &[PlayoffGame],
    selections: &Selections,
) -> BracketState {
    let conference = seeding.conference;
    let feed_for = |round: PlayoffRound| {
        playoff_games
            .iter()
            .filter(|g| g.round == round && g.conference == Some(conference))
            .collect::<Vec<&PlayoffGame>>()
    };
    let seed_of = |id: &str| seeding.seed_of(id);

    let wild_card_pairs = if seeding.seeds.len() == PLAYOFF_SEEDS {
        WILD_CARD_PAIRINGS
            .iter()
            .map(|&(home, away)| Some((seeding.team_at(home)?.to_string(), seeding.team_at(away)?.to_string())))
            .collect::<Option<Vec<_>>>()
    } else {
        None
    };
    let wild_card = build_round(
        Some(conference),
        PlayoffRound::WildCard,
        wild_card_pairs,
        &feed_for(PlayoffRound::WildCard),
        &seed_of,
        selections,
    );

    // The top seed sits out the wild card round
    let divisional_pairs = round_winners(&wild_card, WILD_CARD_PAIRINGS.len()).and_then(|mut teams| {
        teams.push(seeding.team_at(1)?.to_string());
        Some(pair_by_seed(teams, &seed_of))
    });
    let divisional = build_round(
        Some(conference),
        PlayoffRound::Divisional,
        divisional_pairs,
        &feed_for(PlayoffRound::Divisional),
        &seed_of,
        selections,
    );

    let championship_pairs = round_winners(&divisional, 2).map(|teams| pair_by_seed(teams, &seed_of));
    let championship = build_round(
        Some(conference),
        PlayoffRound::Championship,
        championship_pairs,
        &feed_for(PlayoffRound::Championship),
        &seed_of,
        selections,
    );

    let champion = round_winners(&championship, 1).and_then(|winners| winners.into_iter().next());

    BracketState {
        conference,
        seeds: seeding.seeds.clone(),
        wild_card,
        divisional,
        championship,
        champion,
    }
}

/// Build both conference brackets and the Super Bowl.
pub fn build_league_bracket(
    afc: &ConferenceSeeding,
    nfc: &ConferenceSeeding,
    playoff_games: &[PlayoffGame],
    selections: &Selections,
) -> LeagueBracket {
    let afc_bracket = build_conference_bracket(afc, playoff_games, selections);
    let nfc_bracket = build_conference_bracket(nfc, playoff_games, selections);

    let feed: Vec<&PlayoffGame> = playoff_games
        .iter()
        .filter(|g| g.round == PlayoffRound::SuperBowl)
        .collect();
    let derived = match (&afc_bracket.champion, &nfc_bracket.champion) {
        (Some(afc_champ), Some(nfc_champ)) => {
            // Keep the feed's home designation when it lists the NFC champion at home
            let nfc_home = feed.first().is_some_and(|g| &g.game.home_team == nfc_champ);
            let pair = if nfc_home {
                (nfc_champ.clone(), afc_champ.clone())
            } else {
                (afc_champ.clone(), nfc_champ.clone())
            };
            Some(vec![pair])
        }
        _ => None,
    };
    let seed_of = |id: &str| afc.seed_of(id).or_else(|| nfc.seed_of(id));
    let super_bowl = build_round(None, PlayoffRound::SuperBowl, derived, &feed, &seed_of, selections)
        .into_iter()
        .next();
    let champion = super_bowl.as_ref().and_then(|m| m.winner.clone());

    LeagueBracket {
        afc: afc_bracket,
        nfc: nfc_bracket,
        super_bowl,
        champion,
    }
}

fn synthetic_id(conference: Option<Conference>, round: PlayoffRound, index: usize) -> GameId {
    match conference {
        Some(conference) => format!("{}-{}-{}", conference, round, index),
        None => format!("{}-{}", round, index),
    }
}

/// Winners of a round, only when it has the expected size and every game is decided.
fn round_winners(matchups: &[Matchup], expected: usize) -> Option<Vec<TeamId>> {
    if matchups.len() != expected {
        return None;
    }
    matchups.iter().map(|m| m.winner.clone()).collect()
}

/// Best remaining seed hosts the worst, second best hosts the next worst.
fn pair_by_seed(mut teams: Vec<TeamId>, seed_of: &dyn Fn(&str) -> Option<u8>) -> Vec<(TeamId, TeamId)> {
    teams.sort_by_key(|id| seed_of(id).unwrap_or(u8::MAX));
    let n = teams.len();
    (0..n / 2)
        .map(|i| (teams[i].clone(), teams[n - 1 - i].clone()))
        .collect()
}

struct FeedLink<'g> {
    game: &'g PlayoffGame,
    /// Linked through a shared team rather than by position
    by_team: bool,
}

fn build_round(
    conference: Option<Conference>,
    round: PlayoffRound,
    derived: Option<Vec<(TeamId, TeamId)>>,
    feed: &[&PlayoffGame],
    seed_of: &dyn Fn(&str) -> Option<u8>,
    selections: &Selections,
) -> Vec<Matchup> {
    let pairs = match derived {
        Some(pairs) => pairs,
        None => {
            if !feed.is_empty() {
                tracing::debug!(?conference, %round, "previous round undecided, using feed listing");
            }
            feed.iter()
                .map(|g| (g.game.home_team.clone(), g.game.away_team.clone()))
                .collect()
        }
    };

    let mut matchups: Vec<Matchup> = pairs
        .into_iter()
        .enumerate()
        .map(|(index, (home, away))| Matchup {
            game_id: synthetic_id(conference, round, index),
            round,
            conference,
            home_seed: seed_of(&home),
            away_seed: seed_of(&away),
            home,
            away,
            winner: None,
        })
        .collect();

    let links = correlate(&matchups, feed);
    for (matchup, link) in matchups.iter_mut().zip(&links) {
        if let Some(link) = link {
            matchup.game_id = link.game.id().to_string();
        }
    }

    // Recorded winner ids hold wherever the feed happened to list them
    for game in feed {
        let Some(winner) = game.recorded_winner() else {
            continue;
        };
        match matchups.iter_mut().find(|m| m.contains(winner)) {
            Some(matchup) if matchup.winner.is_none() => matchup.winner = Some(winner.to_string()),
            Some(_) => {}
            None => tracing::debug!(game = game.id(), winner, "recorded winner not in any computed matchup"),
        }
    }

    // A score only names a winner through the listed sides, so it counts
    // only when the listing matches a computed matchup
    for game in feed {
        let Some(winner) = game.scored_winner() else {
            continue;
        };
        match matchups.iter_mut().find(|m| shared_teams(m, game) == 2) {
            Some(matchup) if matchup.winner.is_none() => matchup.winner = Some(winner.to_string()),
            Some(_) => {}
            None => tracing::debug!(game = game.id(), winner, "scored feed game lists a stale matchup"),
        }
    }

    for (matchup, link) in matchups.iter_mut().zip(&links) {
        if matchup.winner.is_none() {
            matchup.winner = selected_winner(matchup, link.as_ref(), selections);
        }
    }

    matchups
}

/// Pair feed games with computed matchups: both teams shared, then one team
/// shared, then by position within the round. Each feed game links once.
fn correlate<'g>(matchups: &[Matchup], feed: &[&'g PlayoffGame]) -> Vec<Option<FeedLink<'g>>> {
    let mut used = vec![false; feed.len()];
    let mut links: Vec<Option<FeedLink<'g>>> = matchups.iter().map(|_| None).collect();

    for required in [2, 1] {
        for (i, matchup) in matchups.iter().enumerate() {
            if links[i].is_some() {
                continue;
            }
            let found = feed
                .iter()
                .enumerate()
                .find(|(j, g)| !used[*j] && shared_teams(matchup, g) >= required);
            if let Some((j, &game)) = found {
                used[j] = true;
                links[i] = Some(FeedLink { game, by_team: true });
            }
        }
    }

    for (i, link) in links.iter_mut().enumerate() {
        if link.is_none() && i < feed.len() && !used[i] {
            used[i] = true;
            *link = Some(FeedLink {
                game: feed[i],
                by_team: false,
            });
        }
    }

    links
}

fn shared_teams(matchup: &Matchup, game: &PlayoffGame) -> usize {
    [&game.game.home_team, &game.game.away_team]
        .iter()
        .filter(|id| matchup.contains(id))
        .count()
}

fn selected_winner(matchup: &Matchup, link: Option<&FeedLink>, selections: &Selections) -> Option<TeamId> {
    let outcome = selections.get(&matchup.game_id)?;
    match link {
        Some(link) if link.by_team => {
            // The pick names a side of the feed game; translate it by team id
            let listed = &link.game.game;
            let picked = listed.winner_for(outcome)?;
            if matchup.contains(picked) {
                return Some(picked.to_string());
            }
            let passed_over = listed.winner_for(outcome.flipped())?;
            matchup.opponent_of(passed_over).map(str::to_string)
        }
        _ => match outcome {
            Outcome::Home => Some(matchup.home.clone()),
            Outcome::Away => Some(matchup.away.clone()),
            Outcome::Tie => None,
        },
    }
}
