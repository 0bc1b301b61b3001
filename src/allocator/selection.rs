//! Topic selection for the greedy allocator.
//!
//! The allocator always serves the topic with the largest remaining demand.
//! When several topics share that maximum, a deterministic tie-breaker
//! decides.

use serde::{Deserialize, Serialize};

use crate::demand::DemandEntry;

/// How ties on maximum remaining demand are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// First entry in topic insertion order (default).
    #[default]
    InsertionOrder,
    /// Lexicographically smallest topic name, then insertion order.
    ByName,
}

/// Returns the index of the entry with maximum remaining demand.
///
/// Returns `None` for an empty slice.
pub fn select_max_remaining(entries: &[DemandEntry], tie_break: TieBreak) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (idx, entry) in entries.iter().enumerate() {
        let Some(b) = best else {
            best = Some(idx);
            continue;
        };
        let current = &entries[b];
        let better = match entry.remaining.cmp(&current.remaining) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => match tie_break {
                TieBreak::InsertionOrder => false,
                TieBreak::ByName => entry.topic < current.topic,
            },
        };
        if better {
            best = Some(idx);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hours;

    fn entry(topic: &str, quarters: u32) -> DemandEntry {
        DemandEntry {
            topic: topic.to_string(),
            weight: 1.0,
            share: 0.0,
            entitled: Hours::from_quarters(quarters),
            remaining: Hours::from_quarters(quarters),
        }
    }

    #[test]
    fn test_picks_maximum() {
        let entries = vec![entry("A", 4), entry("B", 9), entry("C", 2)];
        assert_eq!(
            select_max_remaining(&entries, TieBreak::InsertionOrder),
            Some(1)
        );
    }

    #[test]
    fn test_tie_insertion_order_keeps_first() {
        let entries = vec![entry("Zoology", 8), entry("Art", 8)];
        assert_eq!(
            select_max_remaining(&entries, TieBreak::InsertionOrder),
            Some(0)
        );
    }

    #[test]
    fn test_tie_by_name() {
        let entries = vec![entry("Zoology", 8), entry("Art", 8), entry("Music", 3)];
        assert_eq!(select_max_remaining(&entries, TieBreak::ByName), Some(1));
    }

    #[test]
    fn test_empty() {
        assert_eq!(select_max_remaining(&[], TieBreak::InsertionOrder), None);
    }
}
