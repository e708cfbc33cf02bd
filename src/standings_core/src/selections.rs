use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::game::{GameId, Outcome};

/// Hypothetical outcomes picked by the user, keyed by game id.
///
/// A pick is only consulted while its game is not final.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections {
    picks: HashMap<GameId, Outcome>,
}

impl Selections {
    pub fn new() -> Self {
        Selections {
            picks: HashMap::new(),
        }
    }

    /// Read picks from a CSV file.
    /// Format: game_id,outcome (outcome is home, away or tie)
    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        let path = filepath.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut selections = Selections::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            selections.parse_line(index + 1, &line)?;
        }
        Ok(selections)
    }

    /// Parse picks from CSV text in the same format as [`Selections::read_from_file`].
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut selections = Selections::new();
        for (index, line) in text.lines().enumerate() {
            selections.parse_line(index + 1, line)?;
        }
        Ok(selections)
    }

    fn parse_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidSelection {
                line: line_number,
                value: line.to_string(),
            });
        }

        let outcome = parts[1].parse::<Outcome>().map_err(|value| Error::InvalidSelection {
            line: line_number,
            value,
        })?;
        self.set(parts[0].trim(), outcome);
        Ok(())
    }

    /// Add or replace the pick for a game.
    pub fn set(&mut self, game_id: &str, outcome: Outcome) {
        self.picks.insert(game_id.to_string(), outcome);
    }

    pub fn remove(&mut self, game_id: &str) -> Option<Outcome> {
        self.picks.remove(game_id)
    }

    pub fn get(&self, game_id: &str) -> Option<Outcome> {
        self.picks.get(game_id).copied()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.picks.contains_key(game_id)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.picks.iter().map(|(id, &outcome)| (id.as_str(), outcome))
    }

    /// Copy of these picks with one more applied.
    pub fn with_pick(&self, game_id: &str, outcome: Outcome) -> Self {
        let mut next = self.clone();
        next.set(game_id, outcome);
        next
    }
}

impl FromIterator<(GameId, Outcome)> for Selections {
    fn from_iter<I: IntoIterator<Item = (GameId, Outcome)>>(iter: I) -> Self {
        Selections {
            picks: iter.into_iter().collect(),
        }
    }
}

impl Extend<(GameId, Outcome)> for Selections {
    fn extend<I: IntoIterator<Item = (GameId, Outcome)>>(&mut self, iter: I) {
        self.picks.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_pick_leaves_original() {
        let base = Selections::new();
        let next = base.with_pick("g1", Outcome::Away);

        assert!(base.is_empty());
        assert_eq!(next.get("g1"), Some(Outcome::Away));
    }

    #[test]
    fn test_csv_parsing() {
        let text = "# week 18\n2022_18_BUF_NE,home\n\n2022_18_KC_LV, Tie\n";
        let selections = Selections::from_csv(text).unwrap();

        assert_eq!(selections.len(), 2);
        assert_eq!(selections.get("2022_18_BUF_NE"), Some(Outcome::Home));
        assert_eq!(selections.get("2022_18_KC_LV"), Some(Outcome::Tie));
    }

    #[test]
    fn test_csv_rejects_unknown_outcome() {
        let err = Selections::from_csv("g1,home\ng2,draw\n").unwrap_err();
        match err {
            Error::InvalidSelection { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "draw");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_is_a_plain_map() {
        let selections: Selections = serde_json::from_str(r#"{"g1":"home","g2":"tie"}"#).unwrap();
        assert_eq!(selections.get("g1"), Some(Outcome::Home));
        assert_eq!(selections.get("g2"), Some(Outcome::Tie));
    }
}
