use super::student::StudentRecord;
use serde::{Deserialize, Serialize};

/// Ordered list of one day's attendance records.
/// Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(students: Vec<StudentRecord>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Smallest id that is safe to hand out next: `max(id) + 1`, or 1.
    pub fn next_free_id(&self) -> u64 {
        self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Append a new (absent) student with `next_id`.
    ///
    /// Returns the counter to use for the following insert. A name that is
    /// blank after trimming leaves the roster and the counter untouched.
    pub fn add_student(&mut self, next_id: u64, name: &str) -> u64 {
        let name = name.trim();
        if name.is_empty() {
            return next_id;
        }

        self.students.push(StudentRecord::new(next_id, name));
        next_id + 1
    }

    /// Returns `false` when no record has that id.
    pub fn set_present(&mut self, id: u64, present: bool) -> bool {
        match self.students.iter_mut().find(|s| s.id == id) {
            Some(student) => {
                student.present = present;
                true
            }
            None => false,
        }
    }

    pub fn set_all_present(&mut self, present: bool) {
        for student in &mut self.students {
            student.present = present;
        }
    }

    pub fn present_count(&self) -> usize {
        self.students.iter().filter(|s| s.present).count()
    }
}
