//! Topic model.
//!
//! A topic is a unit of study demand. Its weight (difficulty × priority
//! multiplier) decides what share of the study window it receives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight multiplier applied to priority topics.
pub const PRIORITY_MULTIPLIER: f64 = 2.0;

/// Topic difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Numeric difficulty value (easy=1, medium=2, hard=3).
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parses a single lowercase difficulty token (`easy`/`e`, `medium`/`m`, `hard`/`h`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "easy" | "e" => Some(Difficulty::Easy),
            "medium" | "m" => Some(Difficulty::Medium),
            "hard" | "h" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::from_token(&s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown difficulty '{s}'"))
    }
}

/// A topic to be studied.
///
/// The name is normalized to title case on construction. Names are not
/// required to be unique; duplicate entries are allocated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Display name (title case).
    pub name: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Priority topics get double weight.
    pub priority: bool,
}

impl Topic {
    /// Creates a medium-difficulty, non-priority topic.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: title_case(name.as_ref().trim()),
            difficulty: Difficulty::Medium,
            priority: false,
        }
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Marks the topic as priority (or not).
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    /// Proportional-split weight: difficulty value × priority multiplier.
    pub fn weight(&self) -> f64 {
        let base = f64::from(self.difficulty.value());
        if self.priority {
            base * PRIORITY_MULTIPLIER
        } else {
            base
        }
    }
}

/// Title-cases a string: a letter is uppercased when it follows a
/// non-letter (or starts the string) and lowercased otherwise.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
