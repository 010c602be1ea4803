//! Sentiment labels and the score threshold mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores above this are positive, below its negation negative.
pub const SCORE_THRESHOLD: f64 = 0.25;

/// Sentiment assigned to a comment.
///
/// The labels render in Spanish because that is what the downstream
/// report and annotated spreadsheet carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positivo,
    Neutral,
    Negativo,
}

impl SentimentLabel {
    /// Map a continuous sentiment score to a label: > 0.25 is positive,
    /// < -0.25 negative, anything between neutral.
    pub fn from_score(score: f64) -> Self {
        if score > SCORE_THRESHOLD {
            SentimentLabel::Positivo
        } else if score < -SCORE_THRESHOLD {
            SentimentLabel::Negativo
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positivo => "Positivo",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negativo => "Negativo",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
