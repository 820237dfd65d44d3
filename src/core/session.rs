use crate::core::store::{audit, save};
use crate::core::storage::KeyValueStore;
use crate::core::summary::RosterSummary;
use crate::models::{AttendanceArchive, DateKey, Roster};
use crate::ui::messages::{error, warning};

/// Today's working state: the full archive, today's editable roster and the
/// id counter.
///
/// Every mutation is persisted right away. A failed write is reported and
/// otherwise ignored: the in-memory roster stays authoritative for the rest
/// of the session.
#[derive(Debug, Clone)]
pub struct AttendanceSession {
    pub archive: AttendanceArchive,
    pub today: DateKey,
    pub roster: Roster,
    pub next_id: u64,
    storage_key: String,
    read_only: bool,
}

impl AttendanceSession {
    pub(crate) fn open(archive: AttendanceArchive, today: DateKey, storage_key: &str) -> Self {
        let roster = archive.get(&today).cloned().unwrap_or_default();
        let next_id = roster.next_free_id();

        Self {
            archive,
            today,
            roster,
            next_id,
            storage_key: storage_key.to_string(),
            read_only: false,
        }
    }

    /// Keep edits in memory only; the stored archive was never read.
    pub(crate) fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Add a student to today's roster. Returns the new id, or `None` when
    /// the name is blank (nothing changes, nothing is saved).
    pub fn add_student<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, name: &str) -> Option<u64> {
        let id = self.next_id;
        let next = self.roster.add_student(id, name);
        if next == id {
            return None;
        }
        self.next_id = next;

        if let Some(student) = self.roster.get(id) {
            let msg = format!("Added student #{} '{}'", id, student.name);
            self.persist(store, "add", &msg);
        }
        Some(id)
    }

    /// Returns `false` if `id` is not in today's roster.
    pub fn set_present<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: u64,
        present: bool,
    ) -> bool {
        if !self.roster.set_present(id, present) {
            return false;
        }

        let msg = format!(
            "Student #{} marked {}",
            id,
            if present { "present" } else { "absent" }
        );
        self.persist(store, "mark", &msg);
        true
    }

    pub fn set_all_present<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, present: bool) {
        self.roster.set_all_present(present);

        let msg = format!(
            "All {} students marked {}",
            self.roster.len(),
            if present { "present" } else { "absent" }
        );
        self.persist(store, "mark_all", &msg);
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(&self.roster)
    }

    /// Write the archive back. `false` if nothing was written (already reported).
    pub fn persist<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, operation: &str, message: &str) -> bool {
        if self.read_only {
            warning("Stored attendance data could not be read; this change is not saved.");
            return false;
        }

        match save(
            store,
            &self.storage_key,
            &mut self.archive,
            self.today,
            &self.roster,
        ) {
            Ok(()) => {
                audit(&*store, operation, &self.today.to_string(), message);
                true
            }
            Err(e) => {
                error(e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::storage::{KeyValueStore, MemoryStore};
    use crate::core::store::load;
    use crate::models::DateKey;

    const KEY: &str = "attendance_data_v1";

    fn day(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = MemoryStore::new();
        let mut session = load(&store, KEY, day("2024-05-01"));

        assert_eq!(session.add_student(&mut store, "Kim"), Some(1));
        assert_eq!(session.add_student(&mut store, "Lee"), Some(2));
        assert!(session.set_present(&mut store, 2, true));

        let reloaded = load(&store, KEY, day("2024-05-01"));
        assert_eq!(reloaded.roster, session.roster);
        assert_eq!(reloaded.next_id, 3);

        session.set_all_present(&mut store, true);
        let reloaded = load(&store, KEY, day("2024-05-01"));
        assert_eq!(reloaded.roster.present_count(), 2);
    }

    #[test]
    fn blank_name_does_not_touch_storage() {
        let mut store = MemoryStore::new();
        let mut session = load(&store, KEY, day("2024-05-01"));

        assert_eq!(session.add_student(&mut store, "   "), None);
        assert_eq!(store.get(KEY).unwrap(), None);
        assert_eq!(session.next_id, 1);
    }

    #[test]
    fn unknown_id_is_reported_not_saved() {
        let mut store = MemoryStore::new();
        let mut session = load(&store, KEY, day("2024-05-01"));
        assert!(!session.set_present(&mut store, 7, true));
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn write_failure_keeps_memory_state_usable() {
        let mut store = MemoryStore::new().failing_writes();
        let mut session = load(&store, KEY, day("2024-05-01"));

        assert_eq!(session.add_student(&mut store, "Kim"), Some(1));
        assert_eq!(session.add_student(&mut store, "Lee"), Some(2));
        session.set_all_present(&mut store, true);

        assert_eq!(session.roster.len(), 2);
        assert_eq!(session.summary().present, 2);
        assert!(!session.persist(&mut store, "noop", ""));
    }

    #[test]
    fn ids_survive_reload_without_reuse() {
        let mut store = MemoryStore::new();
        let mut session = load(&store, KEY, day("2024-05-01"));
        session.add_student(&mut store, "A");
        session.add_student(&mut store, "B");

        let mut session = load(&store, KEY, day("2024-05-01"));
        assert_eq!(session.add_student(&mut store, "C"), Some(3));
    }

    #[test]
    fn other_days_stay_untouched() {
        let raw = r#"{"2024-04-30":[{"id":1,"name":"Old","present":true}]}"#;
        let mut store = MemoryStore::with_value(KEY, raw);
        let mut session = load(&store, KEY, day("2024-05-01"));
        session.add_student(&mut store, "New");

        let reloaded = load(&store, KEY, day("2024-05-01"));
        let old = reloaded.archive.get(&day("2024-04-30")).unwrap();
        assert_eq!(old.students()[0].name, "Old");
        assert!(old.students()[0].present);
        assert_eq!(reloaded.archive.len(), 2);
    }
}
