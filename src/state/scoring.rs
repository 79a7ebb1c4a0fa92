//! Pair scoring.
//!
//! Every scored pair earns points for each face and for the pair's sum.
//! Both grow with repetition: the Nth time a face (or sum) is scored in a
//! game it is worth N times its base value. Counts survive level advances
//! and are only cleared when a new game starts.

use std::collections::BTreeMap;

/// Base points for each face, multiplied by how often the face was played.
pub const BASE_NUMBER_POINTS: u64 = 10;

/// Smallest and largest sums on a pair of six-sided dice.
pub const MIN_SUM: u32 = 2;
pub const MAX_SUM: u32 = 12;

/// Base points for a pair's sum. Rare sums pay more.
pub fn combination_base_points(sum: u32) -> u64 {
    match sum {
        2 | 12 => 100,
        3 | 11 => 80,
        4 | 10 => 60,
        5 | 9 => 40,
        6 | 8 => 20,
        7 => 10,
        _ => 0,
    }
}

/// Points awarded for one scored pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub sum: u32,
    pub number_points: u64,
    pub combination_points: u64,
    pub total: u64,
}

impl ScoreBreakdown {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sum": self.sum,
            "number_points": self.number_points,
            "combination_points": self.combination_points,
            "total": self.total
        })
    }
}

/// One row of the scoreboard preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewRow {
    /// Face value or sum
    pub key: u32,
    pub base_points: u64,
    /// Multiplier applied if played next
    pub multiplier: u64,
}

impl PreviewRow {
    pub fn points(&self) -> u64 {
        self.base_points * self.multiplier
    }
}

/// Tracks how often each face and each sum has been scored.
#[derive(Debug, Clone, Default)]
pub struct ScoringTracker {
    played_numbers: BTreeMap<u32, u64>,
    played_combinations: BTreeMap<u32, u64>,
}

impl ScoringTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a pair, recording the play. Order of the two faces is irrelevant.
    pub fn score_pair(&mut self, value1: u32, value2: u32) -> ScoreBreakdown {
        let mut number_points = 0;
        for value in [value1, value2] {
            let count = self.played_numbers.entry(value).or_insert(0);
            *count += 1;
            number_points += BASE_NUMBER_POINTS * *count;
        }

        let sum = value1.saturating_add(value2);
        let count = self.played_combinations.entry(sum).or_insert(0);
        *count += 1;
        let combination_points = combination_base_points(sum) * *count;

        ScoreBreakdown {
            sum,
            number_points,
            combination_points,
            total: number_points + combination_points,
        }
    }

    pub fn times_number_played(&self, value: u32) -> u64 {
        self.played_numbers.get(&value).copied().unwrap_or(0)
    }

    pub fn times_combination_played(&self, sum: u32) -> u64 {
        self.played_combinations.get(&sum).copied().unwrap_or(0)
    }

    /// What face `value` would be worth if scored once more.
    pub fn peek_number_value(&self, value: u32) -> u64 {
        BASE_NUMBER_POINTS * (self.times_number_played(value) + 1)
    }

    /// What sum `sum` would be worth if scored once more.
    pub fn peek_combination_value(&self, sum: u32) -> u64 {
        combination_base_points(sum) * (self.times_combination_played(sum) + 1)
    }

    /// Preview rows for faces `1..=sides`.
    pub fn number_preview(&self, sides: u32) -> Vec<PreviewRow> {
        (1..=sides)
            .map(|value| PreviewRow {
                key: value,
                base_points: BASE_NUMBER_POINTS,
                multiplier: self.times_number_played(value) + 1,
            })
            .collect()
    }

    /// Preview rows for every sum in the combination table.
    pub fn combination_preview(&self) -> Vec<PreviewRow> {
        (MIN_SUM..=MAX_SUM)
            .map(|sum| PreviewRow {
                key: sum,
                base_points: combination_base_points(sum),
                multiplier: self.times_combination_played(sum) + 1,
            })
            .collect()
    }

    /// True if nothing has been scored since the last reset.
    pub fn is_empty(&self) -> bool {
        self.played_numbers.values().all(|c| *c == 0)
            && self.played_combinations.values().all(|c| *c == 0)
    }

    /// Forget all plays. Only used when a new game starts.
    pub fn reset(&mut self) {
        self.played_numbers.clear();
        self.played_combinations.clear();
    }
}
