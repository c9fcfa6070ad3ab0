//! Per-issue drift series and the cross-issue summary.

use agora_consensus::stats::round_to;
use agora_core::models::{DriftDirection, DriftSummary, IssueDrift, StanceDriftReport, StancePoint};
use agora_core::StanceEvent;

/// Derives drift from stance histories.
#[derive(Debug, Clone, Copy, Default)]
pub struct StanceDriftTracker;

impl StanceDriftTracker {
    pub fn new() -> Self {
        Self
    }

    /// Drift for a single issue. `None` when the history is empty.
    ///
    /// Events are ordered by `created_at` (stable, so same-instant events keep
    /// their append order) before first and last are taken.
    pub fn issue_drift(&self, issue_id: &str, events: &[StanceEvent]) -> Option<IssueDrift> {
        let mut ordered: Vec<&StanceEvent> = events.iter().collect();
        ordered.sort_by_key(|e| e.created_at);

        let first = ordered.first()?;
        let last = ordered.last()?;
        let drift = i32::from(last.score) - i32::from(first.score);

        Some(IssueDrift {
            issue_id: issue_id.to_string(),
            first_score: first.score,
            last_score: last.score,
            drift,
            direction: DriftDirection::from_drift(drift),
            samples: ordered.len(),
            series: ordered
                .iter()
                .map(|e| StancePoint {
                    score: e.score,
                    confidence: e.confidence,
                    source_type: e.source_type,
                    created_at: e.created_at,
                })
                .collect(),
        })
    }

    /// Cross-issue summary: issue count, total samples, mean |drift| (1 decimal).
    pub fn summarize(&self, per_issue: &[IssueDrift]) -> DriftSummary {
        let issue_count = per_issue.len();
        let average_absolute_drift = if issue_count == 0 {
            0.0
        } else {
            let total: u32 = per_issue.iter().map(|d| d.drift.unsigned_abs()).sum();
            round_to(f64::from(total) / issue_count as f64, 1)
        };
        DriftSummary {
            issue_count,
            total_samples: per_issue.iter().map(|d| d.samples).sum(),
            average_absolute_drift,
        }
    }

    /// Full report over `(issue_id, history)` pairs. Issues with empty
    /// histories are left out.
    pub fn report<'a, I>(&self, histories: I) -> StanceDriftReport
    where
        I: IntoIterator<Item = (&'a str, &'a [StanceEvent])>,
    {
        let per_issue: Vec<IssueDrift> = histories
            .into_iter()
            .filter_map(|(issue_id, events)| self.issue_drift(issue_id, events))
            .collect();
        StanceDriftReport {
            summary: self.summarize(&per_issue),
            per_issue,
        }
    }
}
