//! Junk filtering for free-text feedback comments
//!
//! This crate decides which comments from a feedback column are worth
//! sending to sentiment analysis at all: it canonicalizes the raw text
//! and rejects generic phrases, symbol noise, and other low-information
//! entries before any external call is made.

pub mod junk;
pub mod normalize;
pub mod pipeline;

pub use junk::{is_repetitive, is_symbols_only, JunkFilter, JunkFilterConfig};
pub use normalize::normalize;
pub use pipeline::{DropReason, Evaluation, FilterOutcome, FilterPipeline, FilterStats};
