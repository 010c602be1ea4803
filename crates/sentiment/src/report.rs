//! Aggregation of classified comments into report counts

use crate::label::SentimentLabel;
use serde::{Deserialize, Serialize};

/// A retained comment together with its assigned sentiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedComment {
    pub comment: String,
    pub label: SentimentLabel,
}

/// Counts per sentiment label over a batch of classified comments
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SentimentReport {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentReport {
    pub fn add(&mut self, label: SentimentLabel) {
        self.total += 1;
        match label {
            SentimentLabel::Positivo => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negativo => self.negative += 1,
        }
    }

    pub fn from_annotated(annotated: &[AnnotatedComment]) -> Self {
        let mut report = Self::default();
        for item in annotated {
            report.add(item.label);
        }
        report
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positivo => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negativo => self.negative,
        }
    }

    /// Share of a label in percent, rounded to one decimal.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.count(label) as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

impl FromIterator<SentimentLabel> for SentimentReport {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut report = Self::default();
        for label in iter {
            report.add(label);
        }
        report
    }
}
