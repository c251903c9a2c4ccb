//! Student collection operations.

use log::info;

use super::{documents, ChangeEvent, RepoResult, Repository};
use crate::model::account::Student;

impl Repository {
    /// Appends a student and persists the collection.
    pub fn add_student(&mut self, student: Student) -> RepoResult<()> {
        info!(
            "event=student_add module=repo status=ok id={}",
            student.id
        );
        self.students.push(student);
        let saved = self.save_students();
        self.emit(ChangeEvent::Students);
        saved
    }

    /// First registered student with the given email, if any.
    ///
    /// Email is not a unique index; with duplicates only the earliest
    /// registration is ever found.
    pub fn find_student_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    /// Replaces the student with the same id; a no-op when the id is unknown.
    ///
    /// When the updated student is the logged-in one, the current-student
    /// projection and its shadow document are refreshed as well.
    pub fn update_student(&mut self, student: Student) -> RepoResult<()> {
        let Some(index) = self.students.iter().position(|s| s.id == student.id) else {
            return Ok(());
        };
        self.students[index] = student.clone();
        let mut saved = self.save_students();
        self.emit(ChangeEvent::Students);

        if self
            .current_student
            .as_ref()
            .is_some_and(|current| current.id == student.id)
        {
            self.current_student = Some(student.clone());
            if saved.is_ok() {
                saved = self
                    .store
                    .save(documents::CURRENT_STUDENT, &student)
                    .map_err(Into::into);
            }
            self.emit(ChangeEvent::Session);
        }
        saved
    }

    /// Removes the student with the given id; a no-op when unknown.
    ///
    /// The session is left untouched even when the deleted student is logged
    /// in. There is no cascade anywhere in this layer.
    pub fn delete_student(&mut self, student_id: &str) -> RepoResult<()> {
        let before = self.students.len();
        self.students.retain(|s| s.id != student_id);
        if self.students.len() == before {
            return Ok(());
        }
        let saved = self.save_students();
        self.emit(ChangeEvent::Students);
        saved
    }
}
