use serde::{Deserialize, Serialize};

/// A named score on the leaderboard.
///
/// Entries carry no identity beyond their contents. Two submissions with the
/// same name and score are distinct entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}
