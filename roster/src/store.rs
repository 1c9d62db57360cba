use tracing::debug;

use crate::{Details, Error, Result, Student};

/// Students in insertion order. Enrollment numbers are not required to be
/// unique; every lookup resolves to the first match.
#[derive(Default, Debug)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn add(&mut self, student: Student) {
        debug!(enroll_id = student.enroll_id(), "Adding student");
        self.students.push(student);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.enroll_id() == id)
    }

    pub fn update(&mut self, id: &str, details: Details) -> Result<()> {
        let student = self.students.iter_mut()
            .find(|s| s.enroll_id() == id)
            .ok_or_else(|| Error::not_found(id))?;

        debug!(enroll_id = id, "Updating student");
        student.replace_details(details);
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<Student> {
        let pos = self.position(id).ok_or_else(|| Error::not_found(id))?;
        debug!(enroll_id = id, pos, "Removing student");
        Ok(self.students.remove(pos))
    }

    /// `None` when there is nothing to list.
    pub fn list_all(&self) -> Option<&[Student]> {
        if self.students.is_empty() {
            None
        } else {
            Some(&self.students)
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.enroll_id() == id)
    }
}
