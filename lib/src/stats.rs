//! Aggregate statistics over a round history.
//!
//! Only rounds with `completed = true` count. Category filtering (mode,
//! hole count) is the caller's pre-filter — this module sees the final
//! slice.

use serde::{Deserialize, Serialize};

use crate::Round;

fn default_trend_window() -> usize {
    5
}

fn default_handicap_window() -> usize {
    20
}

fn default_handicap_best() -> usize {
    8
}

/// Tunable windows for the trend and handicap calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Most-recent rounds in the trend window (K).
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    /// Most-recent rounds considered for the handicap (M).
    #[serde(default = "default_handicap_window")]
    pub handicap_window: usize,
    /// Best rounds, by differential, averaged into the handicap (B).
    #[serde(default = "default_handicap_best")]
    pub handicap_best: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trend_window: default_trend_window(),
            handicap_window: default_handicap_window(),
            handicap_best: default_handicap_best(),
        }
    }
}

/// Aggregate metrics over a round history. All fields zero (and
/// `best_round` `None`) when the input holds no completed rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Mean differential over completed rounds.
    pub average_score: f64,
    /// Mean total score over completed rounds.
    pub average_total: f64,
    /// Completed round with the lowest differential; ties go to the first
    /// encountered in input order.
    pub best_round: Option<Round>,
    /// Endpoint delta over the trend window: `(most_recent - oldest_of_k) / K`.
    /// Zero with fewer than two rounds in the window. This is deliberately
    /// not a regression slope.
    pub recent_trend: f64,
    /// Mean differential of the best B of the most recent M rounds, rounded
    /// to one decimal place.
    pub handicap: f64,
}

impl RoundStats {
    fn empty() -> RoundStats {
        RoundStats {
            average_score: 0.0,
            average_total: 0.0,
            best_round: None,
            recent_trend: 0.0,
            handicap: 0.0,
        }
    }
}

/// Compute aggregate metrics over `rounds`, counting completed rounds only.
pub fn calculate_stats(rounds: &[Round], cfg: &StatsConfig) -> RoundStats {
    let completed: Vec<&Round> = rounds.iter().filter(|r| r.completed).collect();
    if completed.is_empty() {
        return RoundStats::empty();
    }

    let n = completed.len() as f64;
    let average_score = completed.iter().map(|r| f64::from(r.differential)).sum::<f64>() / n;
    let average_total = completed.iter().map(|r| f64::from(r.total_score)).sum::<f64>() / n;

    let mut best: &Round = completed[0];
    for &round in &completed[1..] {
        if round.differential < best.differential {
            best = round;
        }
    }

    // Most recent first; stable sort keeps input order across date ties.
    let mut by_recency: Vec<&Round> = completed.clone();
    by_recency.sort_by(|a, b| b.date.cmp(&a.date));

    let window = &by_recency[..by_recency.len().min(cfg.trend_window)];
    let recent_trend = if window.len() < 2 {
        0.0
    } else {
        let newest = window[0].differential;
        let oldest = window[window.len() - 1].differential;
        f64::from(newest - oldest) / cfg.trend_window as f64
    };

    let mut pool = by_recency[..by_recency.len().min(cfg.handicap_window)].to_vec();
    pool.sort_by_key(|r| r.differential);
    pool.truncate(cfg.handicap_best);
    let handicap = if pool.is_empty() {
        0.0
    } else {
        let mean = pool.iter().map(|r| f64::from(r.differential)).sum::<f64>() / pool.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    RoundStats {
        average_score,
        average_total,
        best_round: Some(best.clone()),
        recent_trend,
        handicap,
    }
}
