//! Output formatting for sentiment results

pub mod console;
pub mod formatter;
pub mod json;
