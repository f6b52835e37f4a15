use crate::models::candidate::{AvailableSlot, Candidate};
use std::collections::HashMap;

/// Maximum alternatives offered when a candidate has no assigned slots.
const FALLBACK_SLOT_LIMIT: usize = 3;

/// Computes the reschedule alternatives quoted to a candidate during a call.
///
/// When the candidate has assigned `reschedulingSlots`, each id is resolved
/// against the slot list (first occurrence wins), unknown ids are dropped, and
/// any slot matching the currently scheduled datetime is excluded so a
/// candidate is never offered the time they already hold. The candidate's
/// listed order is preserved, duplicates included.
///
/// Without assigned slots, the fallback is the slot list in store order minus
/// the current datetime, capped at three entries.
pub fn alternative_slots(candidate: &Candidate, slots: &[AvailableSlot]) -> Vec<String> {
    let current = candidate.scheduled_interview.datetime.as_str();

    match candidate.rescheduling_slots.as_deref() {
        Some(assigned) if !assigned.is_empty() => {
            let mut by_id: HashMap<i64, &AvailableSlot> = HashMap::new();
            for slot in slots {
                by_id.entry(slot.id).or_insert(slot);
            }

            assigned
                .iter()
                .filter_map(|id| by_id.get(id))
                .filter(|slot| slot.datetime != current)
                .map(|slot| slot.datetime.clone())
                .collect()
        }
        _ => slots
            .iter()
            .filter(|slot| slot.datetime != current)
            .take(FALLBACK_SLOT_LIMIT)
            .map(|slot| slot.datetime.clone())
            .collect(),
    }
}
