use serde::Deserialize;
use topboard_core::ScoreEntry;

use crate::error::{ServerError, ServerResult};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Body of `POST /v1/scores`.
#[derive(Clone, Debug, Deserialize)]
pub struct SubmitScore {
    pub name: String,
    pub score: f64,
}

impl SubmitScore {
    /// Check the submission and turn it into a board entry.
    pub fn validate(self) -> ServerResult<ScoreEntry> {
        if self.name.is_empty() {
            return Err(ServerError::invalid("name must be a non-empty string"));
        }
        if !self.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(ServerError::invalid(format!(
                "score must be a number between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }
        Ok(ScoreEntry::new(self.name, self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(name: &str, score: f64) -> SubmitScore {
        SubmitScore {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn accepts_bounds() {
        assert!(submit("a", 0.0).validate().is_ok());
        assert!(submit("a", 100.0).validate().is_ok());
        assert!(submit("a", 42.5).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(submit("a", -0.1).validate().is_err());
        assert!(submit("a", 100.5).validate().is_err());
        assert!(submit("a", f64::NAN).validate().is_err());
        assert!(submit("a", f64::INFINITY).validate().is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let err = submit("", 10.0).validate().unwrap_err();
        assert!(matches!(err, ServerError::InvalidRequest(_)));
    }

    #[test]
    fn keeps_name_verbatim() {
        let entry = submit(" padded ", 1.0).validate().unwrap();
        assert_eq!(entry.name, " padded ");
    }
}
