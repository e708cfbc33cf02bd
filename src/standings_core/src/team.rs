use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TeamId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Afc, Conference::Nfc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::Afc => "AFC",
            Conference::Nfc => "NFC",
        }
    }

    pub fn divisions(&self) -> [Division; 4] {
        match self {
            Conference::Afc => [
                Division::AfcEast,
                Division::AfcNorth,
                Division::AfcSouth,
                Division::AfcWest,
            ],
            Conference::Nfc => [
                Division::NfcEast,
                Division::NfcNorth,
                Division::NfcSouth,
                Division::NfcWest,
            ],
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AFC" => Ok(Conference::Afc),
            "NFC" => Ok(Conference::Nfc),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "AFC East")]
    AfcEast,
    #[serde(rename = "AFC North")]
    AfcNorth,
    #[serde(rename = "AFC South")]
    AfcSouth,
    #[serde(rename = "AFC West")]
    AfcWest,
    #[serde(rename = "NFC East")]
    NfcEast,
    #[serde(rename = "NFC North")]
    NfcNorth,
    #[serde(rename = "NFC South")]
    NfcSouth,
    #[serde(rename = "NFC West")]
    NfcWest,
}

impl Division {
    pub const ALL: [Division; 8] = [
        Division::AfcEast,
        Division::AfcNorth,
        Division::AfcSouth,
        Division::AfcWest,
        Division::NfcEast,
        Division::NfcNorth,
        Division::NfcSouth,
        Division::NfcWest,
    ];

    pub fn conference(&self) -> Conference {
        match self {
            Division::AfcEast | Division::AfcNorth | Division::AfcSouth | Division::AfcWest => {
                Conference::Afc
            }
            _ => Conference::Nfc,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Division::AfcEast => "AFC East",
            Division::AfcNorth => "AFC North",
            Division::AfcSouth => "AFC South",
            Division::AfcWest => "AFC West",
            Division::NfcEast => "NFC East",
            Division::NfcNorth => "NFC North",
            Division::NfcSouth => "NFC South",
            Division::NfcWest => "NFC West",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A franchise in the team catalog.
///
/// Only `id`, `conference` and `division` matter to the engine; the rest is
/// carried through for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub conference: Conference,
    pub division: Division,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

impl Team {
    /// Create a team whose conference follows from its division.
    pub fn new(id: &str, name: &str, division: Division) -> Self {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            abbreviation: id.to_string(),
            conference: division.conference(),
            division,
            primary_color: None,
        }
    }

    pub fn shares_division(&self, other: &Team) -> bool {
        self.division == other.division
    }

    /// Division rivals always count as conference opponents.
    pub fn shares_conference(&self, other: &Team) -> bool {
        self.conference == other.conference || self.shares_division(other)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.division)
    }
}

/// The 32-team league catalog keyed by common abbreviations.
pub fn nfl_teams() -> Vec<Team> {
    const CATALOG: [(&str, &str, Division); 32] = [
        ("BUF", "Buffalo Bills", Division::AfcEast),
        ("MIA", "Miami Dolphins", Division::AfcEast),
        ("NE", "New England Patriots", Division::AfcEast),
        ("NYJ", "New York Jets", Division::AfcEast),
        ("BAL", "Baltimore Ravens", Division::AfcNorth),
        ("CIN", "Cincinnati Bengals", Division::AfcNorth),
        ("CLE", "Cleveland Browns", Division::AfcNorth),
        ("PIT", "Pittsburgh Steelers", Division::AfcNorth),
        ("HOU", "Houston Texans", Division::AfcSouth),
        ("IND", "Indianapolis Colts", Division::AfcSouth),
        ("JAX", "Jacksonville Jaguars", Division::AfcSouth),
        ("TEN", "Tennessee Titans", Division::AfcSouth),
        ("DEN", "Denver Broncos", Division::AfcWest),
        ("KC", "Kansas City Chiefs", Division::AfcWest),
        ("LV", "Las Vegas Raiders", Division::AfcWest),
        ("LAC", "Los Angeles Chargers", Division::AfcWest),
        ("DAL", "Dallas Cowboys", Division::NfcEast),
        ("NYG", "New York Giants", Division::NfcEast),
        ("PHI", "Philadelphia Eagles", Division::NfcEast),
        ("WAS", "Washington Commanders", Division::NfcEast),
        ("CHI", "Chicago Bears", Division::NfcNorth),
        ("DET", "Detroit Lions", Division::NfcNorth),
        ("GB", "Green Bay Packers", Division::NfcNorth),
        ("MIN", "Minnesota Vikings", Division::NfcNorth),
        ("ATL", "Atlanta Falcons", Division::NfcSouth),
        ("CAR", "Carolina Panthers", Division::NfcSouth),
        ("NO", "New Orleans Saints", Division::NfcSouth),
        ("TB", "Tampa Bay Buccaneers", Division::NfcSouth),
        ("ARI", "Arizona Cardinals", Division::NfcWest),
        ("LAR", "Los Angeles Rams", Division::NfcWest),
        ("SF", "San Francisco 49ers", Division::NfcWest),
        ("SEA", "Seattle Seahawks", Division::NfcWest),
    ];

    CATALOG
        .iter()
        .map(|&(id, name, division)| Team::new(id, name, division))
        .collect()
}
