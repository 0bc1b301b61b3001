//! Topic line parser.
//!
//! One topic per line, with optional comma-separated tokens after the name:
//!
//! ```text
//! Calculus, hard, priority
//! Biology, medium
//! History
//! ```
//!
//! Recognized tokens (case-insensitive):
//! - difficulty: `easy`/`e`, `medium`/`m`, `hard`/`h` (last one wins)
//! - priority: `priority`/`p`/`important`
//!
//! Unknown tokens are ignored. Defaults: medium, not priority.

use crate::models::{Difficulty, Topic};

/// Parses a block of topic lines. Blank lines are skipped.
pub fn parse_topics(text: &str) -> Vec<Topic> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_topic_line)
        .collect()
}

/// Parses one non-blank topic line.
pub fn parse_topic_line(line: &str) -> Topic {
    let mut parts = line.split(',').map(|p| p.trim().to_lowercase());
    let name = parts.next().unwrap_or_default();

    let mut difficulty = Difficulty::Medium;
    let mut priority = false;
    for token in parts {
        if let Some(d) = Difficulty::from_token(&token) {
            difficulty = d;
        } else if matches!(token.as_str(), "priority" | "p" | "important") {
            priority = true;
        }
    }

    Topic::new(name)
        .with_difficulty(difficulty)
        .with_priority(priority)
}
