//! Record id assignment.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::recipes::Recipe;

/// Next id for a collection: the current time in milliseconds, or one past
/// the largest stored id if that is higher.
///
/// Callers must hold the service's writer lock, otherwise two creations can
/// observe the same collection and pick the same id.
pub fn next_id(existing: &[Recipe]) -> u64 {
    next_id_at(existing, now_millis())
}

fn next_id_at(existing: &[Recipe], now_ms: u64) -> u64 {
    let floor = existing
        .iter()
        .map(|r| r.id)
        .max()
        .map_or(0, |max| max.saturating_add(1));
    now_ms.max(floor)
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
