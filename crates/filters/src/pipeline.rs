//! Comment filtering pipeline
//!
//! Chains normalization and the junk classifiers into a single
//! keep/drop decision per comment. Every check is expressed as a drop
//! reason so the mixed-polarity predicates compose uniformly; the one
//! "passes" predicate is inverted exactly once, here.

use crate::junk::{is_repetitive, is_symbols_only, JunkFilter, JunkFilterConfig};
use crate::normalize::normalize;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Why a comment was dropped by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Empty or whitespace-only after normalization
    Empty,
    /// Exact match against the configured generic-phrase set
    GenericPhrase,
    /// No letters of the target alphabet at all
    SymbolsOnly,
    /// Repeated-character or low-character-diversity text
    Repetitive,
    /// Fewer real words than the configured minimum
    TooFewValidWords,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Empty => "empty",
            DropReason::GenericPhrase => "generic phrase",
            DropReason::SymbolsOnly => "symbols only",
            DropReason::Repetitive => "repetitive",
            DropReason::TooFewValidWords => "too few valid words",
        }
    }
}

/// Decision for a single comment: its normalized form plus the first
/// check it failed, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub normalized: String,
    pub dropped: Option<DropReason>,
}

impl Evaluation {
    pub fn is_kept(&self) -> bool {
        self.dropped.is_none()
    }
}

/// Counts per pipeline outcome
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FilterStats {
    pub total: usize,
    pub kept: usize,
    pub empty: usize,
    pub generic: usize,
    pub symbols_only: usize,
    pub repetitive: usize,
    pub too_few_words: usize,
}

impl FilterStats {
    fn record(&mut self, eval: &Evaluation) {
        self.total += 1;
        match eval.dropped {
            None => self.kept += 1,
            Some(DropReason::Empty) => self.empty += 1,
            Some(DropReason::GenericPhrase) => self.generic += 1,
            Some(DropReason::SymbolsOnly) => self.symbols_only += 1,
            Some(DropReason::Repetitive) => self.repetitive += 1,
            Some(DropReason::TooFewValidWords) => self.too_few_words += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.total - self.kept
    }

    pub fn retention_rate(&self) -> f64 {
        if self.total > 0 {
            (self.kept as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn drop_rate(&self) -> f64 {
        if self.total > 0 {
            (self.dropped() as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Filtered comments plus the per-reason breakdown
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub kept: Vec<String>,
    pub stats: FilterStats,
}

/// Normalization plus junk screening for a batch of raw comments
///
/// Pure and stateless between calls; the same input always produces
/// the same output, and independent batches can run concurrently.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    junk: JunkFilter,
}

impl FilterPipeline {
    pub fn new(config: JunkFilterConfig) -> Self {
        Self {
            junk: JunkFilter::new(config),
        }
    }

    /// Evaluate one raw comment. Checks run in a fixed order and the
    /// first failing check becomes the drop reason.
    pub fn evaluate(&self, raw: &str) -> Evaluation {
        let normalized = normalize(raw);

        let dropped = if normalized.is_empty() {
            Some(DropReason::Empty)
        } else if self.junk.is_generic(&normalized) {
            Some(DropReason::GenericPhrase)
        } else if is_symbols_only(&normalized) {
            Some(DropReason::SymbolsOnly)
        } else if is_repetitive(&normalized) {
            Some(DropReason::Repetitive)
        } else if !self.junk.has_enough_valid_words(&normalized) {
            Some(DropReason::TooFewValidWords)
        } else {
            None
        };

        if let Some(reason) = dropped {
            debug!("Dropping comment ({}): {:?}", reason.as_str(), raw);
        }

        Evaluation { normalized, dropped }
    }

    /// Filter a sequence of raw comments, preserving the relative order
    /// of survivors.
    pub fn filter_comments<I, S>(&self, raws: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter()
            .map(|raw| self.evaluate(raw.as_ref()))
            .filter(Evaluation::is_kept)
            .map(|eval| eval.normalized)
            .collect()
    }

    /// Filter a batch and report per-reason drop counts.
    pub fn run(&self, raws: &[String]) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for raw in raws {
            let eval = self.evaluate(raw);
            outcome.stats.record(&eval);
            if eval.is_kept() {
                outcome.kept.push(eval.normalized);
            }
        }
        outcome
    }

    /// Parallel variant of [`run`](Self::run) for large batches.
    ///
    /// Evaluations are independent per comment; the indexed collect
    /// keeps survivors in input order.
    pub fn run_parallel(&self, raws: &[String]) -> FilterOutcome {
        let evaluations: Vec<Evaluation> =
            raws.par_iter().map(|raw| self.evaluate(raw)).collect();

        let mut outcome = FilterOutcome::default();
        for eval in evaluations {
            outcome.stats.record(&eval);
            if eval.is_kept() {
                outcome.kept.push(eval.normalized);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> FilterPipeline {
        FilterPipeline::default()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let input = vec![
            "NA".to_string(),
            "the food was excellent and fresh".to_string(),
            "....".to_string(),
            "xx".to_string(),
            "muy buena atención".to_string(),
        ];

        let kept = pipeline().filter_comments(&input);
        assert_eq!(
            kept,
            vec![
                "the food was excellent and fresh".to_string(),
                "muy buena atencion".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let kept = pipeline().filter_comments(Vec::<String>::new());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_drop_reasons() {
        let p = pipeline();

        assert_eq!(p.evaluate("   ").dropped, Some(DropReason::Empty));
        assert_eq!(p.evaluate("N/A").dropped, Some(DropReason::GenericPhrase));
        assert_eq!(p.evaluate("12345").dropped, Some(DropReason::SymbolsOnly));
        assert_eq!(p.evaluate("jajajaja").dropped, Some(DropReason::Repetitive));
        assert_eq!(
            p.evaluate("si es").dropped,
            Some(DropReason::TooFewValidWords)
        );
        assert_eq!(p.evaluate("la comida estuvo muy buena").dropped, None);
    }

    #[test]
    fn test_generic_checked_before_symbols() {
        // "." is both generic and symbols-only; the generic check runs first.
        assert_eq!(
            pipeline().evaluate(".").dropped,
            Some(DropReason::GenericPhrase)
        );
    }

    #[test]
    fn test_order_preserved() {
        let input: Vec<String> = vec![
            "primer comentario sobre el servicio".into(),
            "...".into(),
            "segundo comentario sobre la comida".into(),
            "xx".into(),
            "tercer comentario sobre el lugar".into(),
        ];

        let kept = pipeline().filter_comments(&input);
        assert_eq!(
            kept,
            vec![
                "primer comentario sobre el servicio".to_string(),
                "segundo comentario sobre la comida".to_string(),
                "tercer comentario sobre el lugar".to_string(),
            ]
        );
    }

    #[test]
    fn test_run_stats() {
        let input: Vec<String> = vec![
            "NA".into(),
            "the food was excellent and fresh".into(),
            "....".into(),
            "xx".into(),
            "muy buena atención".into(),
            "".into(),
        ];

        let outcome = pipeline().run(&input);
        assert_eq!(outcome.stats.total, 6);
        assert_eq!(outcome.stats.kept, 2);
        assert_eq!(outcome.stats.empty, 1);
        assert_eq!(outcome.stats.generic, 2); // "na" and "xx"
        assert_eq!(outcome.stats.symbols_only, 1); // "...." is not in the phrase set
        assert_eq!(outcome.stats.dropped(), 4);
    }

    #[test]
    fn test_run_parallel_matches_sequential() {
        let input: Vec<String> = (0..200)
            .map(|i| match i % 4 {
                0 => format!("comentario numero {} sobre el servicio", i),
                1 => "NA".to_string(),
                2 => "!!!".to_string(),
                _ => format!("otra opinion valida numero {} del cliente", i),
            })
            .collect();

        let p = pipeline();
        let seq = p.run(&input);
        let par = p.run_parallel(&input);

        assert_eq!(seq.kept, par.kept);
        assert_eq!(seq.stats.kept, par.stats.kept);
        assert_eq!(seq.stats.total, par.stats.total);
    }

    #[test]
    fn test_retention_rate() {
        let input: Vec<String> = vec![
            "muy buena comida casera".into(),
            "NA".into(),
            "xx".into(),
            "...".into(),
        ];

        let outcome = pipeline().run(&input);
        assert_eq!(outcome.stats.retention_rate(), 25.0);
        assert_eq!(outcome.stats.drop_rate(), 75.0);
    }

    #[test]
    fn test_whitespace_only_dropped_before_classifiers() {
        let kept = pipeline().filter_comments(["\t \n", ""]);
        assert!(kept.is_empty());
    }
}
