//! Load / save of the attendance archive through a [`KeyValueStore`].

use crate::core::session::AttendanceSession;
use crate::core::storage::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceArchive, DateKey, Roster};
use crate::ui::messages::{error, warning};

/// Read the persisted archive and open today's session.
///
/// Never fails. A missing value gives an empty session and an unparsable one
/// is reported and replaced by an empty archive. A backend read failure
/// opens a read-only session.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str, today: DateKey) -> AttendanceSession {
    let raw = match store.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            error(format!("{e}. Changes made now will not be saved."));
            audit(store, "storage_unavailable", key, &e.to_string());
            return AttendanceSession::open(AttendanceArchive::new(), today, key).read_only();
        }
    };

    let archive = match decode_archive(store, key, raw, today) {
        Ok(archive) => archive,
        Err(e) => {
            error(format!("{e}. Starting with an empty attendance archive."));
            audit(store, "storage_reset", key, &e.to_string());
            AttendanceArchive::new()
        }
    };

    AttendanceSession::open(archive, today, key)
}

fn decode_archive<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    raw: Option<String>,
    today: DateKey,
) -> AppResult<AttendanceArchive> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(AttendanceArchive::new()),
    };

    let decoded = AttendanceArchive::decode(&raw, today)?;

    if decoded.legacy {
        warning(format!(
            "Found a single-day roster in the old format; it is now filed under {today}."
        ));
        audit(store, "storage_upgrade", key, &format!("legacy roster filed under {today}"));
    }

    for (day, reason) in &decoded.unreadable {
        warning(format!(
            "Skipping unreadable attendance data for '{day}' (kept as stored): {reason}"
        ));
        audit(store, "storage_recover", day, reason);
    }

    for (day, reason) in &decoded.dropped {
        warning(format!("Skipping unreadable student record on {day}: {reason}"));
        audit(store, "storage_recover", day, reason);
    }

    Ok(decoded.archive)
}

/// Put `roster` under `today` and write the whole archive back.
pub fn save<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    archive: &mut AttendanceArchive,
    today: DateKey,
    roster: &Roster,
) -> AppResult<()> {
    archive.insert(today, roster.clone());

    let json = archive
        .to_json()
        .map_err(|e| AppError::StorageWrite(e.to_string()))?;

    store.set(key, &json).map_err(|e| match e {
        AppError::StorageWrite(_) => e,
        other => AppError::StorageWrite(other.to_string()),
    })
}

/// Best effort: a failing audit trail is only worth a warning.
pub(crate) fn audit<S: KeyValueStore + ?Sized>(store: &S, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::models::StudentRecord;

    const KEY: &str = "attendance_data_v1";

    fn day(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn empty_store_gives_empty_session() {
        let store = MemoryStore::new();
        let session = load(&store, KEY, day("2024-05-01"));

        assert!(session.archive.is_empty());
        assert!(session.roster.is_empty());
        assert_eq!(session.next_id, 1);
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut store = MemoryStore::new();
        let mut archive = AttendanceArchive::new();
        archive.insert(
            day("2024-04-30"),
            Roster::from_records(vec![StudentRecord::new(1, "Lee")]),
        );

        let mut roster = Roster::new();
        let next = roster.add_student(1, "Kim");
        roster.add_student(next, "Park");
        roster.set_present(2, true);

        save(&mut store, KEY, &mut archive, day("2024-05-01"), &roster).unwrap();

        let session = load(&store, KEY, day("2024-05-01"));
        assert_eq!(session.archive, archive);
        assert_eq!(session.roster, roster);
        assert_eq!(session.next_id, 3);
    }

    #[test]
    fn legacy_array_is_upgraded() {
        let store = MemoryStore::with_value(KEY, r#"[{"id":1,"name":"Kim","present":true}]"#);
        let session = load(&store, KEY, day("2024-05-01"));

        assert_eq!(
            session.archive.to_json().unwrap(),
            r#"{"2024-05-01":[{"id":1,"name":"Kim","present":true}]}"#
        );
        assert_eq!(session.roster.len(), 1);
        assert_eq!(session.next_id, 2);
    }

    #[test]
    fn garbage_falls_back_to_empty() {
        let store = MemoryStore::with_value(KEY, "}{");
        let session = load(&store, KEY, day("2024-05-01"));
        assert!(session.archive.is_empty());
        assert_eq!(session.next_id, 1);
    }

    #[test]
    fn read_failure_opens_a_read_only_session() {
        let raw = r#"{"2024-04-30":[{"id":1,"name":"Old","present":true}]}"#;
        let mut store = MemoryStore::with_value(KEY, raw).failing_reads();
        let mut session = load(&store, KEY, day("2024-05-01"));
        assert!(session.archive.is_empty());
        assert!(session.is_read_only());

        // editing still works in memory, the stored history is left alone
        assert_eq!(session.add_student(&mut store, "Kim"), Some(1));
        assert_eq!(session.roster.len(), 1);
        assert_eq!(store.peek(KEY), Some(raw));
    }

    #[test]
    fn loose_records_survive_a_save() {
        let raw = r#"{"2024-05-01":[{"id":1,"name":"Kim","present":true},{"id":2,"name":null}],"2024-05-02":[{"id":1,"name":"Kim","present":1}]}"#;
        let mut store = MemoryStore::with_value(KEY, raw);
        let mut session = load(&store, KEY, day("2024-05-03"));
        assert_eq!(session.archive.len(), 2);

        session.add_student(&mut store, "Lee");

        assert_eq!(
            store.peek(KEY),
            Some(
                r#"{"2024-05-01":[{"id":1,"name":"Kim","present":true},{"id":2,"name":"","present":false}],"2024-05-02":[{"id":1,"name":"Kim","present":true}],"2024-05-03":[{"id":1,"name":"Lee","present":false}]}"#
            )
        );
    }

    #[test]
    fn unreadable_days_are_written_back() {
        let raw = r#"{"2024-05-01":[{"id":1,"name":"Kim","present":true}],"2024-05-02":"oops"}"#;
        let mut store = MemoryStore::with_value(KEY, raw);
        let mut session = load(&store, KEY, day("2024-05-03"));
        session.add_student(&mut store, "Lee");

        let stored = store.peek(KEY).unwrap();
        assert!(stored.contains(r#""2024-05-02":"oops""#));
        assert!(stored.contains(r#""2024-05-03":[{"id":1,"name":"Lee","present":false}]"#));
    }

    #[test]
    fn next_id_continues_after_reload() {
        let raw = r#"{"2024-05-01":[{"id":4,"name":"A","present":false},{"id":9,"name":"B","present":true}]}"#;
        let store = MemoryStore::with_value(KEY, raw);
        let session = load(&store, KEY, day("2024-05-01"));
        assert_eq!(session.next_id, 10);

        // Other days do not influence today's counter.
        let session = load(&store, KEY, day("2024-05-02"));
        assert_eq!(session.next_id, 1);
        assert!(session.roster.is_empty());
    }

    #[test]
    fn write_failure_is_reported_as_storage_write() {
        let mut store = MemoryStore::new().failing_writes();
        let mut archive = AttendanceArchive::new();
        let err = save(&mut store, KEY, &mut archive, day("2024-05-01"), &Roster::new())
            .unwrap_err();
        assert!(matches!(err, AppError::StorageWrite(_)));
    }
}
