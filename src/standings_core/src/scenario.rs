//! Clinch, elimination, magic number and path search over undecided games.
//!
//! A goal is clinched when it survives the team's worst realistic finish and
//! eliminated when it fails even in the best one. Magic numbers and paths come
//! from a bounded enumeration of requirement sets, smallest first. The caps in
//! [`SearchLimits`] bound both the sets per level and the seedings one
//! enumeration may spend, at the price of completeness.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::cmp::Reverse;
use std::collections::HashSet;

use crate::config::SearchLimits;
use crate::constants::{score_key, DIVISION_WINNER_SEEDS, PLAYOFF_SEEDS};
use crate::game::{Game, Outcome};
use crate::records::RecordBook;
use crate::seeding::{seed_conference, Clinch};
use crate::selections::Selections;
use crate::team::{Team, TeamId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Any of the seven berths
    Playoff,
    /// A division title, seeds 1-4
    Division,
    /// The first seed
    Bye,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Playoff, Goal::Division, Goal::Bye];

    pub fn achieved(self, seed: Option<u8>) -> bool {
        let Some(seed) = seed else {
            return false;
        };
        match self {
            Goal::Playoff => (seed as usize) <= PLAYOFF_SEEDS,
            Goal::Division => (seed as usize) <= DIVISION_WINNER_SEEDS,
            Goal::Bye => seed == 1,
        }
    }

    pub fn clinch(self) -> Clinch {
        match self {
            Goal::Playoff => Clinch::Playoff,
            Goal::Division => Clinch::Division,
            Goal::Bye => Clinch::Bye,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementKind {
    TeamWin,
    CompetitorLoss,
}

/// One game result a scenario depends on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub kind: RequirementKind,
    pub game_id: String,
    pub winner: TeamId,
    pub loser: TeamId,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicNumber {
    pub goal: Goal,
    /// 0 when clinched; `None` when eliminated or nothing was found within the caps
    pub number: Option<u32>,
    pub requirements: Vec<Requirement>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPath {
    pub goal: Goal,
    pub requirements: Vec<Requirement>,
    /// Seed the team holds in the worst finish consistent with the requirements
    pub resulting_seed: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOutlook {
    pub goal: Goal,
    pub clinched: bool,
    pub eliminated: bool,
    pub magic_number: Option<u32>,
    pub requirements: Vec<Requirement>,
    pub paths: Vec<ScenarioPath>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOutlook {
    pub team_id: TeamId,
    pub goals: Vec<GoalOutlook>,
}

impl TeamOutlook {
    pub fn goal(&self, goal: Goal) -> Option<&GoalOutlook> {
        self.goals.iter().find(|g| g.goal == goal)
    }

    /// Strongest goal already clinched.
    pub fn clinched(&self) -> Clinch {
        [Goal::Bye, Goal::Division, Goal::Playoff]
            .into_iter()
            .find(|&goal| self.goal(goal).is_some_and(|g| g.clinched))
            .map_or(Clinch::None, Goal::clinch)
    }
}

fn seed_rank(seed: Option<u8>) -> u8 {
    seed.unwrap_or(u8::MAX)
}

/// Every undecided game resolved, with the seed the team ends up holding.
#[derive(Clone, Debug, Default)]
struct Finish {
    picks: Selections,
    seed: Option<u8>,
}

fn forced_outcome(game: &Game, forced: &[&Requirement]) -> Option<Outcome> {
    forced
        .iter()
        .find(|r| r.game_id == game.id)
        .and_then(|r| game.outcome_won_by(&r.winner))
}

/// Search state for one team and one goal over a fixed snapshot.
///
/// The worst and best finishes are resolved once up front. Candidate
/// requirement sets are first checked against the worst finish with the
/// requirements applied, which costs one seeding; only sets that survive
/// are confirmed with a full resolution of the contested games.
pub struct ScenarioSearch<'a> {
    teams: &'a [Team],
    games: &'a [Game],
    base: &'a Selections,
    team: &'a Team,
    goal: Goal,
    limits: &'a SearchLimits,
    book: RecordBook<'a>,
    remaining: Vec<&'a Game>,
    /// Rivals that can still reach the team's lowest finishing percentage
    competitors: HashSet<TeamId>,
    worst: Finish,
    best: Finish,
    evaluations: Cell<usize>,
}

impl<'a> ScenarioSearch<'a> {
    /// `None` when `team_id` is not in the catalog.
    pub fn new(
        teams: &'a [Team],
        games: &'a [Game],
        selections: &'a Selections,
        team_id: &str,
        goal: Goal,
        limits: &'a SearchLimits,
    ) -> Option<Self> {
        let team = teams.iter().find(|t| t.id == team_id)?;
        let book = RecordBook::build(teams, games, selections);
        let remaining: Vec<&Game> = games
            .iter()
            .filter(|g| g.decided_outcome(selections).is_none())
            .filter(|g| book.team(&g.home_team).is_some() && book.team(&g.away_team).is_some())
            .collect();

        let mut search = ScenarioSearch {
            teams,
            games,
            base: selections,
            team,
            goal,
            limits,
            book,
            remaining,
            competitors: HashSet::new(),
            worst: Finish::default(),
            best: Finish::default(),
            evaluations: Cell::new(0),
        };
        // The worst case measures rivals against the team's floor, the best
        // case against its ceiling
        let best_competitors = search.find_competitors(false);
        search.competitors = search.find_competitors(true);
        search.worst = search.resolve(&search.competitors, &[], true);
        search.best = search.resolve(&best_competitors, &[], false);
        Some(search)
    }

    /// Seedings computed so far, including the up-front worst and best finishes.
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }

    fn remaining_for(&self, team_id: &str) -> u32 {
        self.remaining.iter().filter(|g| g.involves(team_id)).count() as u32
    }

    /// Lowest and highest win percentage a team can still finish with.
    fn pct_range(&self, team_id: &str) -> (f64, f64) {
        let record = self.book.record_or_empty(team_id).overall;
        let left = self.remaining_for(team_id);
        let games = (record.games() + left) as f64;
        if games == 0.0 {
            return (0.0, 0.0);
        }
        let earned = record.wins as f64 + 0.5 * record.ties as f64;
        (earned / games, (earned + left as f64) / games)
    }

    /// Conference rivals in the goal's pool that can still finish level with
    /// the team: against its floor for the worst case, its ceiling for the best.
    fn find_competitors(&self, worst: bool) -> HashSet<TeamId> {
        let (floor, ceiling) = self.pct_range(&self.team.id);
        let threshold = score_key(if worst { floor } else { ceiling });

        self.book
            .conference_teams(self.team.conference)
            .into_iter()
            .filter(|t| t.id != self.team.id)
            .filter(|t| self.goal != Goal::Division || t.division == self.team.division)
            .filter(|t| score_key(self.pct_range(&t.id).1) >= threshold)
            .map(|t| t.id.clone())
            .collect()
    }

    fn seed_under(&self, picks: &Selections) -> Option<u8> {
        self.evaluations.set(self.evaluations.get() + 1);
        let book = RecordBook::build(self.teams, self.games, picks);
        seed_conference(&book, self.team.conference).seed_of(&self.team.id)
    }

    /// Resolve every undecided game for the team's worst (or best) realistic
    /// finish, honoring `forced`.
    fn resolve(&self, competitors: &HashSet<TeamId>, forced: &[&Requirement], worst: bool) -> Finish {
        let team_id = self.team.id.as_str();
        let mut picks = self.base.clone();
        let mut contested = Vec::new();

        for game in &self.remaining {
            if let Some(outcome) = forced_outcome(game, forced) {
                picks.set(&game.id, outcome);
                continue;
            }

            let winner: &str = if let Some(opponent) = game.opponent_of(team_id) {
                if worst {
                    opponent
                } else {
                    team_id
                }
            } else {
                let home = competitors.contains(&game.home_team);
                let away = competitors.contains(&game.away_team);
                match (home, away) {
                    (true, true) => {
                        contested.push(*game);
                        // Start with the stronger competitor winning in the worst case
                        let home_stronger = score_key(self.book.win_pct(&game.home_team))
                            >= score_key(self.book.win_pct(&game.away_team));
                        if worst == home_stronger {
                            game.home_team.as_str()
                        } else {
                            game.away_team.as_str()
                        }
                    }
                    (true, false) => {
                        if worst {
                            game.home_team.as_str()
                        } else {
                            game.away_team.as_str()
                        }
                    }
                    (false, true) => {
                        if worst {
                            game.away_team.as_str()
                        } else {
                            game.home_team.as_str()
                        }
                    }
                    (false, false) => game.home_team.as_str(),
                }
            };
            if let Some(outcome) = game.outcome_won_by(winner) {
                picks.set(&game.id, outcome);
            }
        }

        // Only one side of a competitor-vs-competitor game can win; keep
        // whichever hurts (or helps) the team more
        let mut seed = self.seed_under(&picks);
        for game in contested {
            let Some(current) = picks.get(&game.id) else {
                continue;
            };
            let flipped = picks.with_pick(&game.id, current.flipped());
            let flipped_seed = self.seed_under(&flipped);
            let improves = if worst {
                seed_rank(flipped_seed) > seed_rank(seed)
            } else {
                seed_rank(flipped_seed) < seed_rank(seed)
            };
            if improves {
                picks = flipped;
                seed = flipped_seed;
            }
        }

        Finish { picks, seed }
    }

    /// Whether the goal holds in the up-front worst finish with `forced`
    /// applied. A miss here already disproves the set.
    fn holds_in_worst(&self, forced: &[&Requirement]) -> bool {
        let mut picks = self.worst.picks.clone();
        for requirement in forced {
            let game = self.remaining.iter().find(|g| g.id == requirement.game_id);
            if let Some(outcome) = game.and_then(|g| g.outcome_won_by(&requirement.winner)) {
                picks.set(&requirement.game_id, outcome);
            }
        }
        self.goal.achieved(self.seed_under(&picks))
    }

    /// Worst finish consistent with `forced`, when it still reaches the goal.
    fn guarantees(&self, forced: &[&Requirement]) -> Option<Finish> {
        if !self.holds_in_worst(forced) {
            return None;
        }
        let finish = self.resolve(&self.competitors, forced, true);
        self.goal.achieved(finish.seed).then_some(finish)
    }

    pub fn is_clinched(&self) -> bool {
        self.goal.achieved(self.worst.seed)
    }

    pub fn is_eliminated(&self) -> bool {
        !self.goal.achieved(self.best.seed)
    }

    fn team_wins(&self) -> Vec<Requirement> {
        self.remaining
            .iter()
            .filter_map(|game| {
                let opponent = game.opponent_of(&self.team.id)?;
                Some(Requirement {
                    kind: RequirementKind::TeamWin,
                    game_id: game.id.clone(),
                    winner: self.team.id.clone(),
                    loser: opponent.to_string(),
                })
            })
            .collect()
    }

    /// Every loss a competitor could take, most threatening competitor first.
    fn competitor_losses(&self) -> Vec<Requirement> {
        let mut losses = Vec::new();
        for game in &self.remaining {
            if game.involves(&self.team.id) {
                continue;
            }
            for (loser, winner) in [(&game.home_team, &game.away_team), (&game.away_team, &game.home_team)] {
                if self.competitors.contains(loser) {
                    losses.push(Requirement {
                        kind: RequirementKind::CompetitorLoss,
                        game_id: game.id.clone(),
                        winner: winner.clone(),
                        loser: loser.clone(),
                    });
                }
            }
        }
        losses.sort_by_cached_key(|r| Reverse(score_key(self.pct_range(&r.loser).1)));
        losses
    }

    /// Requirement sets that guarantee the goal, by increasing size. Within a
    /// size, sets leaning on the team's own wins are tried first. Stops after
    /// `wanted` sets, `extra_levels` sizes past the first success, or once
    /// `max_evaluations` seedings are spent. Falls back to a thinned-out best
    /// finish when nothing turns up.
    fn guaranteed_sets(&self, wanted: usize, extra_levels: usize) -> Vec<(Vec<Requirement>, Option<u8>)> {
        let wins = self.team_wins();
        let losses = self.competitor_losses();
        let max_total = wins.len() + self.limits.max_loss_depth.min(losses.len());
        let budget = self.evaluations() + self.limits.max_evaluations;

        let mut found: Vec<(Vec<Requirement>, Option<u8>)> = Vec::new();
        let mut first_success: Option<usize> = None;

        'levels: for total in 1..=max_total {
            if first_success.is_some_and(|level| total > level + extra_levels) {
                break;
            }
            for win_count in (0..=total.min(wins.len())).rev() {
                let loss_count = total - win_count;
                if loss_count > self.limits.max_loss_depth || loss_count > losses.len() {
                    continue;
                }
                if exceeds(wins.len(), win_count, self.limits.max_win_combinations)
                    || exceeds(losses.len(), loss_count, self.limits.max_loss_combinations)
                {
                    tracing::debug!(team = %self.team.id, goal = ?self.goal, win_count, loss_count, "scenario search truncated");
                }

                for win_idx in Combinations::new(wins.len(), win_count).take(self.limits.max_win_combinations) {
                    for loss_idx in Combinations::new(losses.len(), loss_count).take(self.limits.max_loss_combinations) {
                        if self.evaluations() >= budget {
                            tracing::debug!(team = %self.team.id, goal = ?self.goal, total, "scenario search budget spent");
                            break 'levels;
                        }

                        let mut set: Vec<&Requirement> = win_idx.iter().map(|&i| &wins[i]).collect();
                        set.extend(loss_idx.iter().map(|&i| &losses[i]));

                        let mut game_ids = HashSet::new();
                        if !set.iter().all(|r| game_ids.insert(r.game_id.as_str())) {
                            continue;
                        }
                        if found.iter().any(|(prior, _)| prior.iter().all(|p| set.contains(&p))) {
                            continue;
                        }

                        if let Some(finish) = self.guarantees(&set) {
                            let mut requirements: Vec<Requirement> = set.into_iter().cloned().collect();
                            requirements.sort();
                            found.push((requirements, finish.seed));
                            first_success.get_or_insert(total);
                            if found.len() >= wanted {
                                return found;
                            }
                        }
                    }
                }
            }
        }

        if found.is_empty() {
            found.extend(self.thinned_best_finish());
        }
        found
    }

    /// The best finish written out as requirements, then thinned one
    /// requirement at a time while the worst finish still reaches the goal.
    /// Competitor losses go first, least threatening first; team wins last.
    fn thinned_best_finish(&self) -> Option<(Vec<Requirement>, Option<u8>)> {
        let mut requirements = self.team_wins();
        for game in &self.remaining {
            if game.involves(&self.team.id) {
                continue;
            }
            let Some(outcome) = self.best.picks.get(&game.id) else {
                continue;
            };
            let (Some(winner), Some(loser)) = (game.winner_for(outcome), game.winner_for(outcome.flipped())) else {
                continue;
            };
            if self.competitors.contains(loser) {
                requirements.push(Requirement {
                    kind: RequirementKind::CompetitorLoss,
                    game_id: game.id.clone(),
                    winner: winner.to_string(),
                    loser: loser.to_string(),
                });
            }
        }

        let full: Vec<&Requirement> = requirements.iter().collect();
        let full_finish = self.guarantees(&full)?;

        let mut order: Vec<usize> = (0..requirements.len()).collect();
        order.sort_by_cached_key(|&i| {
            let requirement = &requirements[i];
            match requirement.kind {
                RequirementKind::CompetitorLoss => (0, score_key(self.pct_range(&requirement.loser).1)),
                RequirementKind::TeamWin => (1, 0),
            }
        });
        let mut kept = vec![true; requirements.len()];
        for i in order {
            kept[i] = false;
            let set: Vec<&Requirement> = requirements
                .iter()
                .zip(&kept)
                .filter_map(|(r, &keep)| keep.then_some(r))
                .collect();
            if !self.holds_in_worst(&set) {
                kept[i] = true;
            }
        }

        let thinned: Vec<&Requirement> = requirements
            .iter()
            .zip(&kept)
            .filter_map(|(r, &keep)| keep.then_some(r))
            .collect();
        let (mut chosen, seed) = match self.guarantees(&thinned) {
            Some(finish) => (thinned.into_iter().cloned().collect::<Vec<_>>(), finish.seed),
            None => (requirements.clone(), full_finish.seed),
        };
        chosen.sort();
        tracing::debug!(team = %self.team.id, goal = ?self.goal, requirements = chosen.len(), "fell back to thinned best finish");
        Some((chosen, seed))
    }

    pub fn magic_number(&self) -> MagicNumber {
        let mut magic = MagicNumber {
            goal: self.goal,
            number: None,
            requirements: Vec::new(),
        };
        if self.is_clinched() {
            magic.number = Some(0);
            return magic;
        }
        if self.is_eliminated() {
            return magic;
        }
        match self.guaranteed_sets(1, 0).into_iter().next() {
            Some((requirements, _)) => {
                magic.number = Some(requirements.len() as u32);
                magic.requirements = requirements;
            }
            None => tracing::debug!(team = %self.team.id, goal = ?self.goal, "no magic number within search caps"),
        }
        magic
    }

    fn clinched_path(&self) -> ScenarioPath {
        ScenarioPath {
            goal: self.goal,
            requirements: Vec::new(),
            resulting_seed: self.worst.seed,
        }
    }

    /// Fewest requirements first, then best seed.
    fn rank_paths(&self, sets: Vec<(Vec<Requirement>, Option<u8>)>) -> Vec<ScenarioPath> {
        let mut paths: Vec<ScenarioPath> = sets
            .into_iter()
            .map(|(requirements, seed)| ScenarioPath {
                goal: self.goal,
                requirements,
                resulting_seed: seed,
            })
            .collect();
        paths.sort_by(|a, b| {
            a.requirements
                .len()
                .cmp(&b.requirements.len())
                .then(seed_rank(a.resulting_seed).cmp(&seed_rank(b.resulting_seed)))
                .then_with(|| a.requirements.cmp(&b.requirements))
        });
        paths.dedup_by(|a, b| a.requirements == b.requirements);
        paths.truncate(self.limits.max_paths);
        paths
    }

    /// Simplest requirement sets reaching the goal.
    pub fn paths(&self) -> Vec<ScenarioPath> {
        if self.is_clinched() {
            return vec![self.clinched_path()];
        }
        if self.is_eliminated() {
            return Vec::new();
        }
        self.rank_paths(self.guaranteed_sets(self.limits.max_paths, 1))
    }

    /// Clinch state, magic number and paths from a single enumeration.
    pub fn outlook(&self) -> GoalOutlook {
        let clinched = self.is_clinched();
        let eliminated = !clinched && self.is_eliminated();
        let mut outlook = GoalOutlook {
            goal: self.goal,
            clinched,
            eliminated,
            magic_number: None,
            requirements: Vec::new(),
            paths: Vec::new(),
        };
        if clinched {
            outlook.magic_number = Some(0);
            outlook.paths = vec![self.clinched_path()];
            return outlook;
        }
        if eliminated {
            return outlook;
        }

        // Discovery order puts the magic number's set first
        let sets = self.guaranteed_sets(self.limits.max_paths, 1);
        if let Some((requirements, _)) = sets.first() {
            outlook.magic_number = Some(requirements.len() as u32);
            outlook.requirements = requirements.clone();
        }
        outlook.paths = self.rank_paths(sets);
        outlook
    }
}

/// Magic number for one goal; neutral (`None`) for an unknown team.
pub fn magic_number(
    teams: &[Team],
    games: &[Game],
    selections: &Selections,
    team_id: &str,
    goal: Goal,
    limits: &SearchLimits,
) -> MagicNumber {
    match ScenarioSearch::new(teams, games, selections, team_id, goal, limits) {
        Some(search) => search.magic_number(),
        None => MagicNumber {
            goal,
            number: None,
            requirements: Vec::new(),
        },
    }
}

/// Paths for one goal; empty for an unknown team.
pub fn scenario_paths(
    teams: &[Team],
    games: &[Game],
    selections: &Selections,
    team_id: &str,
    goal: Goal,
    limits: &SearchLimits,
) -> Vec<ScenarioPath> {
    ScenarioSearch::new(teams, games, selections, team_id, goal, limits)
        .map(|search| search.paths())
        .unwrap_or_default()
}

/// Every goal for one team; no goals for an unknown team.
pub fn team_outlook(
    teams: &[Team],
    games: &[Game],
    selections: &Selections,
    team_id: &str,
    limits: &SearchLimits,
) -> TeamOutlook {
    let goals = Goal::ALL
        .iter()
        .filter_map(|&goal| ScenarioSearch::new(teams, games, selections, team_id, goal, limits))
        .map(|search| search.outlook())
        .collect();
    TeamOutlook {
        team_id: team_id.to_string(),
        goals,
    }
}

/// Whether choosing `k` of `n` has more combinations than `cap`.
fn exceeds(n: usize, k: usize, cap: usize) -> bool {
    let mut count: u128 = 1;
    for i in 0..k.min(n) {
        count = count * (n - i) as u128 / (i + 1) as u128;
        if count > cap as u128 {
            return true;
        }
    }
    false
}

/// Index combinations of `k` out of `n` in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{nfl_teams, Conference};

    /// AFC teams play NFC opponents: wins, losses, then scheduled games.
    fn plan_games(plan: &[(&str, u32, u32, u32)]) -> Vec<Game> {
        let nfc: Vec<Team> = nfl_teams()
            .into_iter()
            .filter(|t| t.conference == Conference::Nfc)
            .collect();
        let mut games = Vec::new();
        let mut n = 0;
        for &(team, wins, losses, open) in plan {
            for i in 0..wins + losses + open {
                let opponent = &nfc[n % nfc.len()].id;
                let id = format!("g{n}");
                let game = if i < wins {
                    Game::final_score(&id, 1, team, opponent, 24, 10)
                } else if i < wins + losses {
                    Game::final_score(&id, 1, team, opponent, 10, 24)
                } else {
                    Game::scheduled(&id, 18, team, opponent)
                };
                games.push(game);
                n += 1;
            }
        }
        games
    }

    fn late_season() -> Vec<Game> {
        plan_games(&[
            ("BUF", 13, 3, 0),
            ("MIA", 10, 7, 0),
            ("NE", 8, 9, 0),
            ("NYJ", 7, 10, 0),
            ("BAL", 10, 7, 0),
            ("CIN", 12, 4, 0),
            ("CLE", 7, 10, 0),
            ("PIT", 9, 8, 0),
            ("HOU", 3, 14, 0),
            ("IND", 4, 13, 0),
            ("JAX", 9, 8, 0),
            ("TEN", 7, 10, 0),
            ("KC", 12, 3, 2),
            ("LAC", 10, 7, 0),
            ("LV", 6, 11, 0),
            ("DEN", 5, 12, 0),
        ])
    }

    #[test]
    fn test_clinched_goal_has_zero_magic_number() {
        let teams = nfl_teams();
        let games = late_season();
        let selections = Selections::new();
        let limits = SearchLimits::default();

        let magic = magic_number(&teams, &games, &selections, "KC", Goal::Playoff, &limits);
        assert_eq!(magic.number, Some(0));
        assert!(magic.requirements.is_empty());

        let division = magic_number(&teams, &games, &selections, "KC", Goal::Division, &limits);
        assert_eq!(division.number, Some(0));
    }

    #[test]
    fn test_bye_needs_both_remaining_wins() {
        let teams = nfl_teams();
        let games = late_season();
        let selections = Selections::new();
        let limits = SearchLimits::default();

        let search = ScenarioSearch::new(&teams, &games, &selections, "KC", Goal::Bye, &limits).unwrap();
        assert!(!search.is_clinched());
        assert!(!search.is_eliminated());

        let magic = search.magic_number();
        assert_eq!(magic.number, Some(2));
        assert!(magic
            .requirements
            .iter()
            .all(|r| r.kind == RequirementKind::TeamWin && r.winner == "KC"));

        let paths = search.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].resulting_seed, Some(1));
    }

    #[test]
    fn test_eliminated_team_has_no_magic_number() {
        let teams = nfl_teams();
        let games = late_season();
        let selections = Selections::new();
        let limits = SearchLimits::default();

        let magic = magic_number(&teams, &games, &selections, "HOU", Goal::Playoff, &limits);
        assert_eq!(magic.number, None);
        assert!(scenario_paths(&teams, &games, &selections, "HOU", Goal::Playoff, &limits).is_empty());

        let outlook = team_outlook(&teams, &games, &selections, "HOU", &limits);
        assert!(outlook.goals.iter().all(|g| g.eliminated && !g.clinched));
        assert_eq!(outlook.clinched(), Clinch::None);
    }

    #[test]
    fn test_competitor_loss_completes_magic_number() {
        let teams = nfl_teams();
        let mut games = plan_games(&[
            ("BUF", 13, 4, 0),
            ("MIA", 11, 6, 0),
            ("NE", 8, 7, 1),
            ("NYJ", 5, 12, 0),
            ("BAL", 11, 6, 0),
            ("CIN", 12, 5, 0),
            ("CLE", 6, 11, 0),
            ("PIT", 9, 6, 1),
            ("HOU", 3, 14, 0),
            ("IND", 4, 13, 0),
            ("JAX", 11, 6, 0),
            ("TEN", 7, 10, 0),
            ("KC", 14, 3, 0),
            ("LAC", 7, 10, 0),
            ("LV", 6, 11, 0),
            ("DEN", 5, 12, 0),
        ]);
        // NE owns the head-to-head, so PIT needs to finish strictly ahead
        games.push(Game::final_score("h2h", 9, "NE", "PIT", 20, 13));
        let selections = Selections::new();
        let limits = SearchLimits::default();

        let search = ScenarioSearch::new(&teams, &games, &selections, "PIT", Goal::Playoff, &limits).unwrap();
        let magic = search.magic_number();

        assert_eq!(magic.number, Some(2));
        let kinds: Vec<RequirementKind> = magic.requirements.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RequirementKind::TeamWin, RequirementKind::CompetitorLoss]);
        assert_eq!(magic.requirements[1].loser, "NE");
    }

    /// LAC holds the 7th seed at 10-5 but NE, two games back, owns the
    /// head-to-head.
    fn wild_card_race() -> Vec<Game> {
        let mut games = plan_games(&[
            ("BUF", 13, 4, 0),
            ("MIA", 12, 5, 0),
            ("NE", 7, 7, 2),
            ("NYJ", 7, 10, 0),
            ("BAL", 12, 5, 0),
            ("CIN", 13, 4, 0),
            ("CLE", 7, 10, 0),
            ("PIT", 9, 8, 0),
            ("HOU", 3, 14, 0),
            ("IND", 4, 13, 0),
            ("JAX", 11, 6, 0),
            ("TEN", 7, 10, 0),
            ("KC", 14, 3, 0),
            ("LAC", 10, 4, 2),
            ("LV", 6, 11, 0),
            ("DEN", 5, 12, 0),
        ]);
        games.push(Game::final_score("h2h", 9, "NE", "LAC", 24, 20));
        games
    }

    #[test]
    fn test_trailing_rival_with_head_to_head_blocks_clinch() {
        let teams = nfl_teams();
        let games = wild_card_race();
        let selections = Selections::new();
        let limits = SearchLimits::default();

        let search = ScenarioSearch::new(&teams, &games, &selections, "LAC", Goal::Playoff, &limits).unwrap();
        assert!(!search.is_clinched(), "NE can still pass LAC at 10-7");
        assert!(!search.is_eliminated());

        let magic = search.magic_number();
        assert_eq!(magic.number, Some(1));
        assert_eq!(magic.requirements[0].kind, RequirementKind::TeamWin);
    }

    #[test]
    fn test_spent_budget_falls_back_to_thinned_best_finish() {
        let teams = nfl_teams();
        let games = wild_card_race();
        let selections = Selections::new();
        let limits = SearchLimits {
            max_evaluations: 0,
            ..SearchLimits::default()
        };

        let search = ScenarioSearch::new(&teams, &games, &selections, "LAC", Goal::Playoff, &limits).unwrap();
        let magic = search.magic_number();

        assert_eq!(magic.number, Some(1));
        assert_eq!(magic.requirements[0].kind, RequirementKind::TeamWin);
        assert_eq!(magic.requirements[0].winner, "LAC");
    }

    /// Every AFC pair meets once; the first `decided` meetings are final.
    fn conference_round_robin(decided: usize) -> Vec<Game> {
        let afc: Vec<Team> = nfl_teams()
            .into_iter()
            .filter(|t| t.conference == Conference::Afc)
            .collect();
        let mut games = Vec::new();
        for i in 0..afc.len() {
            for j in i + 1..afc.len() {
                let id = format!("rr{}", games.len());
                let (home, away) = (&afc[i].id, &afc[j].id);
                let game = if games.len() >= decided {
                    Game::scheduled(&id, 18, home, away)
                } else if (i + j) % 3 == 0 {
                    Game::final_score(&id, 1, home, away, 13, 27)
                } else {
                    Game::final_score(&id, 1, home, away, 27, 13)
                };
                games.push(game);
            }
        }
        games
    }

    #[test]
    fn test_search_stays_within_evaluation_budget() {
        let teams = nfl_teams();
        let games = conference_round_robin(80);
        let open = games.len() - 80;
        let selections = Selections::new();
        let limits = SearchLimits {
            max_evaluations: 100,
            ..SearchLimits::default()
        };

        for goal in Goal::ALL {
            let search = ScenarioSearch::new(&teams, &games, &selections, "BUF", goal, &limits).unwrap();
            let outlook = search.outlook();

            // Up-front finishes, one overshooting candidate and the fallback
            assert!(
                search.evaluations() <= limits.max_evaluations + 6 * (open + 2),
                "{goal:?} spent {} seedings",
                search.evaluations()
            );
            if !outlook.eliminated {
                assert!(outlook.magic_number.is_some(), "{goal:?} reachable but no magic number");
            }
        }
    }

    #[test]
    fn test_unknown_team_degrades() {
        let teams = nfl_teams();
        let games = late_season();
        let limits = SearchLimits::default();

        let magic = magic_number(&teams, &games, &Selections::new(), "XXX", Goal::Bye, &limits);
        assert_eq!(magic.number, None);
        assert!(team_outlook(&teams, &games, &Selections::new(), "XXX", &limits).goals.is_empty());
    }

    #[test]
    fn test_combinations() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 1]);
        assert_eq!(all[5], vec![2, 3]);
        assert_eq!(Combinations::new(3, 0).count(), 1);
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert!(exceeds(10, 3, 100));
        assert!(!exceeds(10, 2, 100));
    }
}
