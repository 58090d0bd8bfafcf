//! Use cases (application services)

pub mod analyze_sentiments;
