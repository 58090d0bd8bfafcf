//! Sentiment source adapters
//!
//! Implementations of the [`SentimentSource`](sentiment_application::SentimentSource)
//! port backed by files.

mod jsonl;

pub use jsonl::{JsonlSentimentSource, parse_lines};
