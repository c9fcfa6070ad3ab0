//! k-anonymized two-way tables of one attribute against another.

use std::collections::BTreeMap;

use agora_core::models::{CrossTabCell, CrossTabulation};
use agora_core::{AttributeKey, Scored};

use crate::distribution::{value_order, ScoreTally};
use crate::gate::PrivacyGate;

/// Cross-tabulate each `(row, column)` pair. Only reactions disclosing both
/// attributes contribute. Cells under the cell floor are removed, and a table
/// left with no cells is omitted.
pub fn cross_tabulate<T: Scored>(
    gate: &PrivacyGate,
    opinions: &[T],
    pairs: &[(AttributeKey, AttributeKey)],
) -> Vec<CrossTabulation> {
    pairs
        .iter()
        .filter(|(row, column)| row != column)
        .filter_map(|&(row_key, column_key)| {
            let mut cells: BTreeMap<((usize, String), (usize, String)), ScoreTally> =
                BTreeMap::new();
            for opinion in opinions {
                let attrs = opinion.attributes();
                if let (Some(row), Some(column)) = (attrs.get(row_key), attrs.get(column_key)) {
                    cells
                        .entry((value_order(row_key, row), value_order(column_key, column)))
                        .or_default()
                        .add(opinion.score());
                }
            }
            let kept = gate.retain_cells(cells, |t| t.count);
            if kept.is_empty() {
                return None;
            }
            Some(CrossTabulation {
                row_key,
                column_key,
                cells: kept
                    .into_iter()
                    .map(|(((_, row_value), (_, column_value)), tally)| CrossTabCell {
                        row_value,
                        column_value,
                        count: tally.count,
                        average_score: tally.average(),
                    })
                    .collect(),
            })
        })
        .collect()
}
