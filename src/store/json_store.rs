use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, ScheduleData};
use std::path::PathBuf;
use tokio::fs;

/// Repository over the single JSON document holding candidates and slots.
///
/// Every operation is a whole-document read-modify-write with last-writer-wins
/// semantics. There is deliberately no lock and no version check: the store is
/// also written by the external call-outcome processor, and the documented
/// behavior is that concurrent writers overwrite each other wholesale.
/// Call sites only see this type, so the file-backed strategy can be swapped
/// out without touching handlers.
#[derive(Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub async fn load(&self) -> Result<ScheduleData> {
        let raw = fs::read_to_string(&self.path).await?;
        let data = serde_json::from_str(&raw)?;
        Ok(data)
    }

    /// Rewrites the whole document, pretty-printed to match what the other
    /// writers of this file produce.
    pub async fn save(&self, data: &ScheduleData) -> Result<()> {
        let raw = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    pub async fn get_candidate(&self, id: i64) -> Result<Candidate> {
        let data = self.load().await?;
        data.candidates
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    /// Replaces the candidate with the same id, or appends when new.
    pub async fn upsert_candidate(&self, candidate: Candidate) -> Result<()> {
        let mut data = self.load().await?;
        match data.candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate,
            None => data.candidates.push(candidate),
        }
        self.save(&data).await
    }

    pub async fn delete_candidate(&self, id: i64) -> Result<Candidate> {
        let mut data = self.load().await?;
        let pos = data
            .candidates
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
        let removed = data.candidates.remove(pos);
        self.save(&data).await?;
        Ok(removed)
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        Ok(self.load().await?.candidates)
    }

    /// Next candidate id: max existing id + 1, starting at 1 on an empty store.
    pub fn next_id(data: &ScheduleData) -> i64 {
        data.candidates.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{AvailableSlot, InterviewSlot};

    fn slot(date: &str, time: &str) -> InterviewSlot {
        InterviewSlot {
            date: date.to_string(),
            time: time.to_string(),
            day: "Monday".to_string(),
            datetime: format!("{} at {}", date, time),
        }
    }

    fn candidate(id: i64, name: &str) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            phone: "+15550100".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            position: "Engineer".to_string(),
            status: "pending".to_string(),
            scheduled_interview: slot("2024-01-10", "10:00"),
            original_interview: None,
            rescheduling_slots: None,
            application_date: "2024-01-01".to_string(),
        }
    }

    fn temp_store() -> ScheduleStore {
        let path = std::env::temp_dir().join(format!("schedule-{}.json", uuid::Uuid::new_v4()));
        ScheduleStore::new(path)
    }

    async fn seeded_store() -> ScheduleStore {
        let store = temp_store();
        let data = ScheduleData {
            candidates: vec![candidate(1, "Alice"), candidate(2, "Bob")],
            available_slots: vec![AvailableSlot {
                id: 1,
                date: "2024-01-12".to_string(),
                time: "14:00".to_string(),
                day: "Friday".to_string(),
                datetime: "2024-01-12 at 14:00".to_string(),
            }],
        };
        store.save(&data).await.unwrap();
        store
    }

    #[tokio::test]
    async fn round_trips_document_and_finds_candidates() {
        let store = seeded_store().await;
        let data = store.load().await.unwrap();
        assert_eq!(data.candidates.len(), 2);
        assert_eq!(data.available_slots.len(), 1);

        let alice = store.get_candidate(1).await.unwrap();
        assert_eq!(alice.name, "Alice");
        assert!(store.get_candidate(99).await.is_err());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_and_appends_new() {
        let store = seeded_store().await;

        let mut alice = store.get_candidate(1).await.unwrap();
        alice.status = "calling".to_string();
        store.upsert_candidate(alice).await.unwrap();
        assert_eq!(store.get_candidate(1).await.unwrap().status, "calling");

        store.upsert_candidate(candidate(3, "Cara")).await.unwrap();
        assert_eq!(store.list_candidates().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = seeded_store().await;
        let removed = store.delete_candidate(1).await.unwrap();
        assert_eq!(removed.name, "Alice");

        let data = store.load().await.unwrap();
        assert_eq!(data.candidates.len(), 1);
        assert_eq!(data.candidates[0].id, 2);
        // Slots are untouched by candidate deletion.
        assert_eq!(data.available_slots.len(), 1);

        assert!(store.delete_candidate(1).await.is_err());
    }

    #[tokio::test]
    async fn absent_optional_fields_stay_absent_on_rewrite() {
        let store = seeded_store().await;
        let data = store.load().await.unwrap();
        store.save(&data).await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(!raw.contains("originalInterview"));
        assert!(!raw.contains("reschedulingSlots"));
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let data = ScheduleData {
            candidates: vec![candidate(7, "Alice"), candidate(3, "Bob")],
            available_slots: vec![],
        };
        assert_eq!(ScheduleStore::next_id(&data), 8);

        let empty = ScheduleData {
            candidates: vec![],
            available_slots: vec![],
        };
        assert_eq!(ScheduleStore::next_id(&empty), 1);
    }
}
