//! Sentiment classification boundary for filtered comments
//!
//! The filtering pipeline hands retained comments to an external
//! sentiment service one call at a time; this crate owns that boundary:
//! the label type with its score thresholds, the classifier trait and
//! the Google Cloud Natural Language client behind it, and the
//! aggregation of (comment, label) pairs into report counts.

pub mod classifier;
pub mod error;
pub mod label;
pub mod report;

pub use classifier::{classify_all, GoogleNlClassifier, SentimentClassifier};
pub use error::{Error, Result};
pub use label::SentimentLabel;
pub use report::{AnnotatedComment, SentimentReport};

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
