//! Per-item filter and transform step.

use crate::pipeline::{Item, ProcessedItem};
use chrono::{DateTime, Utc};

/// Value an item must exceed, after doubling, to be kept
pub const VALUE_THRESHOLD: f64 = 10.0;

/// Filter and transform one user's items
///
/// Keeps only active items, doubles each value, attaches the run timestamp,
/// and drops items whose doubled value does not exceed [`VALUE_THRESHOLD`].
/// Inactive items are dropped regardless of value.
pub fn process_items(items: &[Item], processed_at: DateTime<Utc>) -> Vec<ProcessedItem> {
    items
        .iter()
        .filter(|item| item.active)
        .map(|item| ProcessedItem {
            id: item.id,
            active: item.active,
            value: item.value * 2.0,
            processed_at,
        })
        .filter(|item| item.value > VALUE_THRESHOLD)
        .collect()
}
